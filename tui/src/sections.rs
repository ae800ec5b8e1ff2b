//! Top-level page sections and the static section views.
//!
//! The hero banner stays visible above whichever section is active;
//! About / Projects / Contact are cycled with tab / shift-tab.

use folio_core::Profile;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::Wrap;
use strum::IntoEnumIterator;
use strum_macros::Display;
use strum_macros::EnumIter;

use crate::colors;

#[derive(Clone, Copy, Debug, Default, Display, EnumIter, Eq, PartialEq)]
pub(crate) enum Section {
    About,
    #[default]
    Projects,
    Contact,
}

impl Section {
    pub(crate) fn next(self) -> Self {
        match self {
            Section::About => Section::Projects,
            Section::Projects => Section::Contact,
            Section::Contact => Section::About,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Section::About => Section::Contact,
            Section::Projects => Section::About,
            Section::Contact => Section::Projects,
        }
    }

    pub(crate) fn index(self) -> usize {
        Section::iter().position(|s| s == self).unwrap_or(0)
    }

    pub(crate) fn titles() -> Vec<String> {
        Section::iter().map(|s| s.to_string()).collect()
    }
}

/// Hero banner: name plus tagline, always at the top of the page.
pub(crate) fn hero_lines(profile: &Profile) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("Hi, I'm {}", profile.name),
            Style::default()
                .fg(colors::primary())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.tagline.clone(),
            Style::default().fg(colors::text_dim()),
        )),
    ]
}

pub(crate) fn render_about(area: Rect, buf: &mut Buffer, profile: &Profile) {
    let lines = vec![
        Line::from(Span::styled(
            "About Me",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(profile.about.clone()),
    ];
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

pub(crate) fn render_contact(area: Rect, buf: &mut Buffer, profile: &Profile) {
    let lines = vec![
        Line::from(Span::styled(
            "Get in Touch",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::from("Email me at "),
            Span::styled(
                profile.email.clone(),
                Style::default()
                    .fg(colors::link())
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ];
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sections_cycle_forward_and_back() {
        let mut section = Section::default();
        assert_eq!(section, Section::Projects);
        section = section.next();
        assert_eq!(section, Section::Contact);
        section = section.next();
        assert_eq!(section, Section::About);
        section = section.prev();
        assert_eq!(section, Section::Contact);
    }

    #[test]
    fn prev_then_next_is_identity() {
        for section in Section::iter() {
            assert_eq!(section.prev().next(), section);
        }
    }

    #[test]
    fn titles_follow_declaration_order() {
        assert_eq!(Section::titles(), vec!["About", "Projects", "Contact"]);
        assert_eq!(Section::Projects.index(), 1);
    }

    #[test]
    fn hero_lines_show_name_and_tagline() {
        let profile = Profile {
            name: "Will".to_string(),
            tagline: "Software Developer".to_string(),
            ..Default::default()
        };
        let lines = hero_lines(&profile);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content.as_ref(), "Hi, I'm Will");
        assert_eq!(lines[1].spans[0].content.as_ref(), "Software Developer");
    }
}
