use ratatui::crossterm::event::{KeyEvent, MouseEvent};

/// All events handled by the browser, in arrival order
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),

    /// Auto-rotation tick for the given controller generation
    Rotate(u64),
}
