//! Card rendering for one project: title, description, tag chips, and
//! the repo / demo links when present.

use folio_core::Project;
use ratatui::buffer::Buffer;
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

use crate::colors;

/// Rows a card occupies: borders, two description rows, the tag line,
/// and a link line when the project has any link.
pub(crate) fn card_height(project: &Project) -> u16 {
    let links = if project.repo.is_some() || project.demo.is_some() {
        1
    } else {
        0
    };
    2 + 2 + 1 + links
}

pub(crate) fn render_card(area: Rect, buf: &mut Buffer, project: &Project, selected: bool) {
    let border_style = if selected {
        Style::default().fg(colors::primary())
    } else {
        Style::default().fg(colors::border())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", project.title),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = vec![Line::from(project.description.clone())];
    lines.push(tag_line(project));
    if let Some(links) = link_line(project) {
        lines.push(links);
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(inner, buf);
}

fn tag_line(project: &Project) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (idx, tag) in project.tags.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::from(" "));
        }
        spans.push(Span::styled(
            format!("[{tag}]"),
            Style::default().fg(colors::text_dim()),
        ));
    }
    Line::from(spans)
}

fn link_line(project: &Project) -> Option<Line<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let link_style = Style::default()
        .fg(colors::link())
        .add_modifier(Modifier::UNDERLINED);
    if let Some(repo) = &project.repo {
        spans.push(Span::styled("repo ", Style::default().fg(colors::text_dim())));
        spans.push(Span::styled(repo.clone(), link_style));
    }
    if let Some(demo) = &project.demo {
        if !spans.is_empty() {
            spans.push(Span::from("  "));
        }
        spans.push(Span::styled("demo ", Style::default().fg(colors::text_dim())));
        spans.push(Span::styled(demo.clone(), link_style));
    }
    if spans.is_empty() {
        None
    } else {
        Some(Line::from(spans))
    }
}
