use std::sync::mpsc::channel;

use anyhow::Result;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use folio_core::Catalog;
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Tabs;
use ratatui::widgets::Widget;

use crate::app_event;
use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::colors;
use crate::footer;
use crate::footer::FooterProps;
use crate::key_hint;
use crate::key_hint::KeyBinding;
use crate::projects_panel::PanelOutcome;
use crate::projects_panel::ProjectsPanel;
use crate::sections;
use crate::sections::Section;
use crate::tui::Tui;

const QUIT_KEY: KeyBinding = key_hint::ctrl(KeyCode::Char('c'));
const ALT_QUIT_KEY: KeyBinding = key_hint::ctrl(KeyCode::Char('q'));

/// The single-page portfolio app: hero banner, section tabs, and the
/// filterable project gallery. Owns all state; every transition happens
/// synchronously in response to one input event.
pub(crate) struct App {
    catalog: Catalog,
    section: Section,
    panel: ProjectsPanel,
    exit: bool,
}

impl App {
    pub(crate) fn new(catalog: Catalog) -> Self {
        let panel = ProjectsPanel::new(catalog.tag_vocabulary());
        Self {
            catalog,
            section: Section::default(),
            panel,
            exit: false,
        }
    }

    pub(crate) fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let (tx, rx) = channel();
        app_event::spawn_input_thread(AppEventSender::new(tx));

        terminal.draw(|frame| self.draw(frame))?;
        while !self.exit {
            let event = rx.recv()?;
            self.handle_event(event);
            // Drain whatever else queued up before paying for a redraw.
            while let Ok(event) = rx.try_recv() {
                self.handle_event(event);
            }
            terminal.draw(|frame| self.draw(frame))?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::KeyEvent(key) => self.handle_key_event(key),
            AppEvent::Resize => {}
            AppEvent::ExitRequest => self.exit = true,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return;
        }
        if QUIT_KEY.is_press(key) || ALT_QUIT_KEY.is_press(key) {
            self.exit = true;
            return;
        }
        match key.code {
            KeyCode::Tab => self.section = self.section.next(),
            KeyCode::BackTab => self.section = self.section.prev(),
            KeyCode::Esc => {
                // Esc mirrors the page's "Clear Filters" button; it only
                // quits once there is nothing left to clear.
                if self.section == Section::Projects && !self.panel.is_neutral() {
                    self.panel.clear_filters();
                } else {
                    self.exit = true;
                }
            }
            _ => {
                if self.section == Section::Projects {
                    match self.panel.handle_key_event(key, &self.catalog.projects) {
                        PanelOutcome::OpenLink(url) => open_link(&url),
                        PanelOutcome::Handled => {}
                    }
                }
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [hero_area, tabs_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let buf = frame.buffer_mut();

        Paragraph::new(sections::hero_lines(&self.catalog.profile)).render(hero_area, buf);

        Tabs::new(Section::titles())
            .select(self.section.index())
            .style(Style::default().fg(colors::text_dim()))
            .highlight_style(
                Style::default()
                    .fg(colors::primary())
                    .add_modifier(Modifier::BOLD),
            )
            .render(tabs_area, buf);

        match self.section {
            Section::About => sections::render_about(body_area, buf, &self.catalog.profile),
            Section::Projects => self.panel.render(body_area, buf, &self.catalog.projects),
            Section::Contact => sections::render_contact(body_area, buf, &self.catalog.profile),
        }

        footer::render_footer(
            footer_area,
            buf,
            FooterProps {
                section: self.section,
                filters_active: !self.panel.is_neutral(),
            },
        );
    }
}

fn open_link(url: &str) {
    tracing::info!("opening {url}");
    if let Err(err) = open::that(url) {
        tracing::warn!("failed to open {url}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn app() -> App {
        App::new(Catalog::builtin())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        let mut lines = Vec::new();
        for y in 0..height {
            let mut line = String::new();
            for x in 0..width {
                line.push(
                    terminal.backend().buffer()[(x, y)]
                        .symbol()
                        .chars()
                        .next()
                        .unwrap_or(' '),
                );
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    #[test]
    fn ctrl_c_requests_exit() {
        let mut app = app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.exit);
    }

    #[test]
    fn key_release_events_are_ignored() {
        let mut app = app();
        app.handle_key_event(KeyEvent::new_with_kind(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Release,
        ));
        assert!(!app.exit);
    }

    #[test]
    fn tab_cycles_sections() {
        let mut app = app();
        assert_eq!(app.section, Section::Projects);
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.section, Section::Contact);
        app.handle_key_event(key(KeyCode::BackTab));
        assert_eq!(app.section, Section::Projects);
    }

    #[test]
    fn esc_clears_filters_before_quitting() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Char('m')));
        assert!(!app.panel.is_neutral());

        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.panel.is_neutral());
        assert!(!app.exit);

        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.exit);
    }

    #[test]
    fn typing_reaches_the_projects_panel() {
        let mut app = app();
        for c in "mongo".chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
        let titles: Vec<&str> = app
            .panel
            .visible(&app.catalog.projects)
            .into_iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["To-Do App"]);
    }

    #[test]
    fn typing_in_a_static_section_does_not_touch_the_filter() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.section, Section::Contact);
        app.handle_key_event(key(KeyCode::Char('x')));
        assert!(app.panel.is_neutral());
    }

    #[test]
    fn full_frame_shows_hero_tabs_and_footer() {
        let app = app();
        let output = render_to_string(&app, 140, 30);
        assert!(output.contains("Hi, I'm Will"), "{output}");
        assert!(output.contains("About"), "{output}");
        assert!(output.contains("Projects"), "{output}");
        assert!(output.contains("Contact"), "{output}");
        assert!(output.contains("Weather Dashboard"), "{output}");
        assert!(output.contains("quit"), "{output}");
    }

    #[test]
    fn contact_section_shows_the_email() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Tab));
        let output = render_to_string(&app, 100, 30);
        assert!(output.contains("Get in Touch"), "{output}");
        assert!(output.contains("you@example.com"), "{output}");
        assert!(!output.contains("Weather Dashboard"), "{output}");
    }
}
