//! Skip size grid.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use skiphire_core::constants::{NO_SKIPS_TEXT, NO_SKIPS_TITLE};
use skiphire_core::SkipOption;

use crate::styles::ColorTheme;

/// Skips per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Width of one grid cell in columns.
const CELL_WIDTH: usize = 16;

/// Everything the grid needs to draw itself.
pub struct SkipGridProps<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub skips: &'a [SkipOption],
    pub selected: Option<&'a SkipOption>,
    /// Index into `skips` while the grid has focus.
    pub cursor: Option<usize>,
}

/// Render the grid in its loading, error, empty or populated state.
pub fn render_skip_grid(
    frame: &mut Frame,
    area: Rect,
    props: &SkipGridProps<'_>,
    theme: &ColorTheme,
) {
    let mut text = vec![theme.section_title("Available skip sizes:")];

    if props.loading {
        text.push(Line::styled("⟳ Loading skip options...", theme.muted_style()));
    } else if let Some(error) = props.error {
        text.push(Line::styled(
            "⚠ Error Loading Skip Options",
            theme.error_style().add_modifier(Modifier::BOLD),
        ));
        text.push(Line::styled(error.to_string(), theme.error_style()));
    } else if props.skips.is_empty() {
        text.push(Line::styled(
            format!("⚠ {NO_SKIPS_TITLE}"),
            theme.error_style().add_modifier(Modifier::BOLD),
        ));
        text.push(Line::styled(NO_SKIPS_TEXT, theme.error_style()));
    } else {
        for (row, chunk) in props.skips.chunks(GRID_COLUMNS).enumerate() {
            let spans: Vec<Span> = chunk
                .iter()
                .enumerate()
                .map(|(col, skip)| {
                    let index = row * GRID_COLUMNS + col;
                    let picked = props.selected.is_some_and(|s| s.id == skip.id);
                    let mut style = if picked {
                        theme.selected_style()
                    } else {
                        theme.choice_style()
                    };
                    if props.cursor == Some(index) {
                        style = theme.cursor(style);
                    }
                    Span::styled(
                        format!("{:<width$}", skip.grid_label(), width = CELL_WIDTH),
                        style,
                    )
                })
                .collect();
            text.push(Line::from(spans));
        }

        if let Some(skip) = props.selected {
            text.push(Line::raw(""));
            text.push(Line::from(vec![
                Span::styled(format!("{} Yard Skip", skip.size), theme.header_style()),
                Span::raw("  "),
                Span::styled(format!("£{}", skip.price_before_vat), theme.accent_style()),
            ]));
            text.push(Line::styled(
                format!(
                    "Hire: {}d  VAT: {}%  {}",
                    skip.hire_period_days,
                    skip.vat,
                    skip.placement()
                ),
                theme.muted_style(),
            ));
        }
    }

    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn skip(id: u64, size: f64, price: f64) -> SkipOption {
        SkipOption {
            id,
            size,
            price_before_vat: price,
            vat: 20.0,
            hire_period_days: 14,
            allowed_on_road: false,
            allows_heavy_waste: true,
        }
    }

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

    fn draw(props: &SkipGridProps<'_>) -> String {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = ColorTheme::default();
        let buf = terminal
            .draw(|frame| render_skip_grid(frame, frame.area(), props, &theme))
            .unwrap();
        screen(buf.buffer)
    }

    #[test]
    fn loading_state() {
        let text = draw(&SkipGridProps {
            loading: true,
            error: None,
            skips: &[],
            selected: None,
            cursor: None,
        });
        assert!(text.contains("Loading skip options..."));
    }

    #[test]
    fn error_state() {
        let text = draw(&SkipGridProps {
            loading: false,
            error: Some("Failed to load skip options."),
            skips: &[],
            selected: None,
            cursor: None,
        });
        assert!(text.contains("Error Loading Skip Options"));
        assert!(text.contains("Failed to load skip options."));
    }

    #[test]
    fn empty_state() {
        let text = draw(&SkipGridProps {
            loading: false,
            error: None,
            skips: &[],
            selected: None,
            cursor: None,
        });
        assert!(text.contains("No Skips Available"));
    }

    #[test]
    fn populated_grid_wraps_rows() {
        let skips = vec![
            skip(1, 4.0, 278.0),
            skip(2, 6.0, 305.0),
            skip(3, 8.0, 375.0),
            skip(4, 10.0, 400.0),
        ];
        let text = draw(&SkipGridProps {
            loading: false,
            error: None,
            skips: &skips,
            selected: Some(&skips[1]),
            cursor: Some(0),
        });
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].contains("4y - £278"));
        assert!(lines[1].contains("8y - £375"));
        assert!(lines[2].contains("10y - £400"));
        assert!(text.contains("6 Yard Skip"));
        assert!(text.contains("Hire: 14d  VAT: 20%  Off-road"));
    }
}
