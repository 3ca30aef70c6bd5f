//! Popup footer: total price, Continue action and key hints.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use skiphire_core::{format_total, SkipOption};

use crate::styles::ColorTheme;

/// Render the footer.
///
/// The total is shown and Continue enabled only when a skip is selected and
/// the catalog is neither loading nor failed.
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    selected: Option<&SkipOption>,
    loading: bool,
    failed: bool,
    focused: bool,
    theme: &ColorTheme,
) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.muted_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(14)])
        .split(rows[0]);

    let ready = selected.filter(|_| !loading && !failed);
    if let Some(skip) = ready {
        let total = Paragraph::new(Line::from(vec![
            Span::styled("Total: ", theme.muted_style()),
            Span::styled(format!("£{}", format_total(skip)), theme.header_style()),
        ]));
        frame.render_widget(total, cols[0]);
    }

    let label = if loading { "Loading..." } else { "Continue" };
    let mut style = if ready.is_some() {
        theme.selected_style()
    } else {
        theme.disabled_style()
    };
    if focused {
        style = theme.cursor(style);
    }
    let button = Paragraph::new(Line::styled(format!("[ {label} ]"), style))
        .alignment(Alignment::Right);
    frame.render_widget(button, cols[1]);

    if rows[1].height > 0 {
        frame.render_widget(Paragraph::new(key_hints()), rows[1]);
    }
}

fn key_hints() -> Line<'static> {
    let key = Style::default().fg(Color::Yellow);
    Line::from(vec![
        Span::styled("tab", key),
        Span::raw(": section | "),
        Span::styled("←→↑↓", key),
        Span::raw(": move | "),
        Span::styled("space", key),
        Span::raw(": pick | "),
        Span::styled("c", key),
        Span::raw(": continue | "),
        Span::styled("x", key),
        Span::raw(": close | "),
        Span::styled("q", key),
        Span::raw(": quit"),
    ])
}

/// Render the closed state: a single prompt to reopen the popup.
pub fn render_reopen_prompt(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let text = vec![
        Line::raw(""),
        Line::styled("[ Reopen Popup ]", theme.selected_style()),
        Line::styled("press o or enter to reopen, q to quit", theme.muted_style()),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}
