//! Illustrative panel keyed off the current band.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use skiphire_core::constants::{RESTRICTION_TEXT, RESTRICTION_TITLE};
use skiphire_core::PercentageBand;

use crate::styles::ColorTheme;

/// Render the band illustration, or the size restriction notice while no
/// waste type is selected.
pub fn render_visual(
    frame: &mut Frame,
    area: Rect,
    band: PercentageBand,
    has_waste_types: bool,
    theme: &ColorTheme,
) {
    let mut text = vec![theme.section_title("Visual representation:")];

    if has_waste_types {
        match band.image() {
            Some(image) => {
                let file = image.rsplit('/').next().unwrap_or(image);
                text.push(
                    Line::styled(format!("[{}]", band.label()), theme.accent_style())
                        .alignment(Alignment::Center),
                );
                text.push(
                    Line::styled(file.to_string(), theme.muted_style())
                        .alignment(Alignment::Center),
                );
            }
            None => text.push(Line::raw("")),
        }
        text.push(Line::styled(band.caption(), theme.text_style()).alignment(Alignment::Center));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.muted_style());
        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    } else {
        text.push(Line::styled(
            format!("⚠ {RESTRICTION_TITLE}"),
            theme.error_style().add_modifier(Modifier::BOLD),
        ));
        text.push(Line::styled(RESTRICTION_TEXT, theme.error_style()));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.error_style());
        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn screen(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(band: PercentageBand, has_waste_types: bool) -> String {
        let backend = TestBackend::new(70, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = ColorTheme::default();
        let buf = terminal
            .draw(|frame| render_visual(frame, frame.area(), band, has_waste_types, &theme))
            .unwrap();
        screen(buf.buffer)
    }

    #[test]
    fn restriction_notice_without_waste_types() {
        let text = draw(PercentageBand::None, false);
        assert!(text.contains("Skip Size Restrictions"));
        assert!(text.contains("yards"));
    }

    #[test]
    fn band_illustration() {
        let text = draw(PercentageBand::High, true);
        assert!(text.contains("heavywaste-over20.png"));
        assert!(text.contains("(over 20%)"));
    }

    #[test]
    fn none_band_caption_without_image() {
        let text = draw(PercentageBand::None, true);
        assert!(text.contains("Regular skip without heavy waste"));
        assert!(!text.contains(".png"));
    }
}
