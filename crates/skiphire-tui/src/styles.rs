//! TUI styles and color theme.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Color theme for the popup.
pub struct ColorTheme {
    pub primary: Color,
    pub accent: Color,
    pub error: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Cyan,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Popup and section titles.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// A picked tag, band or skip.
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// An enabled but unpicked choice.
    #[must_use]
    pub fn choice_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// A choice that cannot be picked right now.
    #[must_use]
    pub fn disabled_style(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Extra emphasis for the item under the cursor.
    #[must_use]
    pub fn cursor(&self, style: Style) -> Style {
        style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED)
    }

    /// Section heading with a colored bar, e.g. `▍ Select heavy waste types:`.
    #[must_use]
    pub fn section_title(&self, title: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled("▍ ", Style::default().fg(self.primary)),
            Span::styled(
                title.to_string(),
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }
}
