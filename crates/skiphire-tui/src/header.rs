//! Popup header and warning banner.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use skiphire_core::constants::{WARNING_TEXT, WARNING_TITLE};

use crate::styles::ColorTheme;

/// Render the title row with the close control.
pub fn render_header(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.muted_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(11)])
        .split(inner);

    let title = Paragraph::new(Line::styled("Heavy Waste Types", theme.header_style()));
    frame.render_widget(title, cols[0]);

    let close = Paragraph::new(Line::from(vec![
        Span::styled("[x]", theme.warning_style()),
        Span::styled(" close", theme.muted_style()),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(close, cols[1]);
}

/// Render the heavy waste notice.
pub fn render_banner(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let text = vec![
        Line::styled(
            WARNING_TITLE,
            theme.warning_style().add_modifier(Modifier::BOLD),
        ),
        Line::styled(WARNING_TEXT, theme.text_style()),
    ];
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(theme.warning_style());
    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
