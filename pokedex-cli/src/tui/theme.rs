use ratatui::style::{Color, Modifier, Style};

use pokedex_core::selection::PreviewMode;

/// Consistent theme for the TUI
pub struct Theme {
    pub selected: Style,
    pub previewed: Style,
    pub error: Style,
    pub muted: Style,
    pub highlight: Style,
    pub card_border: Style,
    pub card_border_tilted: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
            previewed: Style::default().fg(Color::Yellow),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            card_border: Style::default().fg(Color::White),
            card_border_tilted: Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Style for the featured row in the list
    pub fn featured_row(&self, mode: PreviewMode) -> Style {
        match mode {
            PreviewMode::Explicit(_) => self.selected,
            PreviewMode::AutoPreview(_) => self.previewed,
        }
    }

    /// Badge describing why an entry is featured
    pub fn mode_badge(mode: PreviewMode) -> &'static str {
        match mode {
            PreviewMode::Explicit(_) => "● selected",
            PreviewMode::AutoPreview(_) => "⟳ preview",
        }
    }
}
