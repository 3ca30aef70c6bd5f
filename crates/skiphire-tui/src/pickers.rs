//! Waste type tag picker and percentage band picker.

use std::collections::BTreeSet;

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use skiphire_core::{PercentageBand, WasteType};

use crate::styles::ColorTheme;

/// Render the waste type tags. `cursor` is set while the section has focus.
pub fn render_waste_picker(
    frame: &mut Frame,
    area: Rect,
    selected: &BTreeSet<WasteType>,
    cursor: Option<usize>,
    theme: &ColorTheme,
) {
    let mut tags = Vec::with_capacity(WasteType::ALL.len() * 2);
    for (i, waste) in WasteType::ALL.iter().enumerate() {
        let picked = selected.contains(waste);
        let label = if picked {
            format!(" ✓ {waste} ")
        } else {
            format!(" {waste} ")
        };
        let mut style = if picked {
            theme.selected_style()
        } else {
            theme.choice_style()
        };
        if cursor == Some(i) {
            style = theme.cursor(style);
        }
        tags.push(Span::styled(label, style));
        tags.push(Span::raw(" "));
    }

    let text = vec![
        theme.section_title("Select heavy waste types:"),
        Line::from(tags),
    ];
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
}

/// Render the band buttons and the current band's description.
///
/// Bands other than `none` are drawn disabled while no waste type is
/// selected.
pub fn render_band_picker(
    frame: &mut Frame,
    area: Rect,
    current: PercentageBand,
    has_waste_types: bool,
    cursor: Option<usize>,
    theme: &ColorTheme,
) {
    let mut buttons = Vec::with_capacity(PercentageBand::ALL.len() * 2);
    for (i, band) in PercentageBand::ALL.iter().enumerate() {
        let disabled = !band.is_none() && !has_waste_types;
        let label = if *band == current {
            format!(" ● {} ", band.label())
        } else {
            format!(" {} ", band.label())
        };
        let mut style = if *band == current {
            theme.selected_style()
        } else if disabled {
            theme.disabled_style()
        } else {
            theme.choice_style()
        };
        if cursor == Some(i) {
            style = theme.cursor(style);
        }
        buttons.push(Span::styled(label, style));
        buttons.push(Span::raw(" "));
    }

    let text = vec![
        theme.section_title("Approximate percentage of heavy waste:"),
        Line::from(buttons),
        Line::styled(
            current.description(),
            theme.muted_style().add_modifier(Modifier::ITALIC),
        ),
    ];
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
}
