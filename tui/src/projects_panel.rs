//! The Projects section: search box, tag chip row, and the filtered
//! card list. All filter semantics live in `folio-core`; this module
//! owns only the interaction state (input buffer, tag cursor, card
//! selection).

use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use folio_core::FilterState;
use folio_core::Project;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::Wrap;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::colors;
use crate::key_hint;
use crate::key_hint::KeyBinding;
use crate::project_card;

const OPEN_REPO_KEY: KeyBinding = key_hint::ctrl(KeyCode::Char('o'));
const OPEN_DEMO_KEY: KeyBinding = key_hint::ctrl(KeyCode::Char('d'));

/// What a key press did, from the app's point of view.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum PanelOutcome {
    Handled,
    /// The user asked to open an outbound link in the browser.
    OpenLink(String),
}

pub(crate) struct ProjectsPanel {
    input: Input,
    filter: FilterState,
    vocabulary: Vec<String>,
    tag_cursor: usize,
    selected_card: usize,
}

impl ProjectsPanel {
    pub(crate) fn new(vocabulary: Vec<String>) -> Self {
        Self {
            input: Input::default(),
            filter: FilterState::new(),
            vocabulary,
            tag_cursor: 0,
            selected_card: 0,
        }
    }

    /// Projects passing the current filter, catalog order preserved.
    pub(crate) fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        self.filter.apply(projects)
    }

    pub(crate) fn is_neutral(&self) -> bool {
        self.filter.is_neutral()
    }

    #[cfg(test)]
    pub(crate) fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Reset the query and the selected tags (the "clear filters" action).
    pub(crate) fn clear_filters(&mut self) {
        self.input.reset();
        self.filter.clear();
        self.selected_card = 0;
    }

    pub(crate) fn handle_key_event(&mut self, key: KeyEvent, projects: &[Project]) -> PanelOutcome {
        if OPEN_REPO_KEY.is_press(key) {
            if let Some(url) = self.selected_link(projects, |p| p.repo.as_ref()) {
                return PanelOutcome::OpenLink(url);
            }
            return PanelOutcome::Handled;
        }
        if OPEN_DEMO_KEY.is_press(key) {
            if let Some(url) = self.selected_link(projects, |p| p.demo.as_ref()) {
                return PanelOutcome::OpenLink(url);
            }
            return PanelOutcome::Handled;
        }

        match key.code {
            KeyCode::Left => {
                self.tag_cursor = self.tag_cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                if !self.vocabulary.is_empty() {
                    self.tag_cursor = (self.tag_cursor + 1).min(self.vocabulary.len() - 1);
                }
            }
            KeyCode::Enter => {
                if let Some(tag) = self.vocabulary.get(self.tag_cursor) {
                    self.filter.toggle_tag(tag);
                    self.clamp_selection(projects);
                }
            }
            KeyCode::Up => {
                self.selected_card = self.selected_card.saturating_sub(1);
            }
            KeyCode::Down => {
                self.selected_card += 1;
                self.clamp_selection(projects);
            }
            _ => {
                self.input.handle_event(&Event::Key(key));
                self.filter.set_query(self.input.value());
                self.clamp_selection(projects);
            }
        }
        PanelOutcome::Handled
    }

    fn selected_link<'a>(
        &self,
        projects: &'a [Project],
        link: impl Fn(&'a Project) -> Option<&'a String>,
    ) -> Option<String> {
        let visible = self.visible(projects);
        let selected = visible.get(self.selected_card.min(visible.len().checked_sub(1)?))?;
        link(*selected).cloned()
    }

    fn clamp_selection(&mut self, projects: &[Project]) {
        let len = self.visible(projects).len();
        self.selected_card = match len {
            0 => 0,
            n => self.selected_card.min(n - 1),
        };
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer, projects: &[Project]) {
        let [search_area, tags_area, list_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_search(search_area, buf);
        self.render_tag_row(tags_area, buf);
        self.render_list(list_area, buf, projects);
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::border()))
            .title(" Search by title or tech ");
        let inner = block.inner(area);
        block.render(area, buf);

        let value = self.input.value();
        let line = if value.is_empty() {
            Line::from(Span::styled(
                "type to filter projects...",
                Style::default().fg(colors::text_dim()),
            ))
        } else {
            Line::from(value.to_string())
        };
        Paragraph::new(line).render(inner, buf);
    }

    fn render_tag_row(&self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (idx, tag) in self.vocabulary.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::from(" "));
            }
            let mut style = if self.filter.is_selected(tag) {
                Style::default()
                    .bg(colors::chip_active_bg())
                    .fg(colors::chip_active_fg())
            } else {
                Style::default().fg(colors::text())
            };
            if idx == self.tag_cursor {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            spans.push(Span::styled(format!(" {tag} "), style));
        }
        if !self.filter.selected_tags().is_empty() {
            spans.push(Span::styled(
                "  (esc clears filters)",
                Style::default().fg(colors::text_dim()),
            ));
        }
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer, projects: &[Project]) {
        let visible = self.visible(projects);
        if visible.is_empty() {
            Paragraph::new(Span::styled(
                "No projects match your search.",
                Style::default().fg(colors::text_dim()),
            ))
            .render(area, buf);
            return;
        }

        let heights: Vec<u16> = visible
            .iter()
            .map(|p| project_card::card_height(p))
            .collect();
        let selected = self.selected_card.min(visible.len() - 1);

        // Scroll so the selected card is fully visible, filling the rows
        // above it with as many earlier cards as fit.
        let mut start = selected;
        let mut used = heights[selected];
        while start > 0 && used + heights[start - 1] <= area.height {
            start -= 1;
            used += heights[start];
        }

        let mut y = area.y;
        for (idx, project) in visible.iter().enumerate().skip(start) {
            let remaining = area.bottom().saturating_sub(y);
            if remaining == 0 {
                break;
            }
            let height = heights[idx].min(remaining);
            let rect = Rect::new(area.x, y, area.width, height);
            project_card::render_card(rect, buf, *project, idx == selected);
            y += height;
        }
    }
}
