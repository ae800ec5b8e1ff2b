//! Footer line with the key hints for the active section.

use crossterm::event::KeyCode;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use crate::key_hint;
use crate::sections::Section;

#[derive(Clone, Copy, Debug)]
pub(crate) struct FooterProps {
    pub(crate) section: Section,
    pub(crate) filters_active: bool,
}

pub(crate) fn render_footer(area: Rect, buf: &mut Buffer, props: FooterProps) {
    Paragraph::new(footer_line(props)).render(area, buf);
}

fn footer_line(props: FooterProps) -> Line<'static> {
    let mut line = Line::from(vec![
        key_hint::plain(KeyCode::Tab).into(),
        " section".dim(),
    ]);
    if props.section == Section::Projects {
        line.extend(vec![
            " · ".dim(),
            "type to search".dim(),
            " · ".dim(),
            key_hint::plain(KeyCode::Left).into(),
            "/".dim(),
            key_hint::plain(KeyCode::Right).into(),
            " tags".dim(),
            " · ".dim(),
            key_hint::plain(KeyCode::Enter).into(),
            " toggle".dim(),
            " · ".dim(),
            key_hint::plain(KeyCode::Up).into(),
            "/".dim(),
            key_hint::plain(KeyCode::Down).into(),
            " cards".dim(),
            " · ".dim(),
            key_hint::ctrl(KeyCode::Char('o')).into(),
            " repo".dim(),
            " · ".dim(),
            key_hint::ctrl(KeyCode::Char('d')).into(),
            " demo".dim(),
        ]);
    }
    if props.filters_active {
        line.extend(vec![
            " · ".dim(),
            key_hint::plain(KeyCode::Esc).into(),
            " clear filters".dim(),
        ]);
    }
    line.extend(vec![
        " · ".dim(),
        key_hint::ctrl(KeyCode::Char('c')).into(),
        " quit".dim(),
    ]);
    line
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render_to_string(props: FooterProps, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|f| {
                let area = Rect::new(0, 0, f.area().width, 1);
                render_footer(area, f.buffer_mut(), props);
            })
            .unwrap();

        let mut line = String::new();
        for x in 0..width {
            line.push(
                terminal.backend().buffer()[(x, 0)]
                    .symbol()
                    .chars()
                    .next()
                    .unwrap_or(' '),
            );
        }
        line.trim_end().to_string()
    }

    #[test]
    fn projects_footer_lists_filter_keys() {
        let output = render_to_string(
            FooterProps {
                section: Section::Projects,
                filters_active: false,
            },
            120,
        );
        assert!(output.contains("type to search"), "{output}");
        assert!(output.contains("ctrl + o repo"), "{output}");
        assert!(output.contains("ctrl + c quit"), "{output}");
        assert!(!output.contains("clear filters"), "{output}");
    }

    #[test]
    fn esc_hint_appears_only_with_active_filters() {
        let output = render_to_string(
            FooterProps {
                section: Section::Projects,
                filters_active: true,
            },
            160,
        );
        assert!(output.contains("esc clear filters"), "{output}");
    }

    #[test]
    fn static_sections_keep_the_footer_short() {
        let output = render_to_string(
            FooterProps {
                section: Section::About,
                filters_active: false,
            },
            80,
        );
        assert!(output.contains("tab section"), "{output}");
        assert!(!output.contains("repo"), "{output}");
    }
}
