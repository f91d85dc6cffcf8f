use anyhow::Result;
use ratatui::{
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent,
            KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
        },
        execute,
    },
    DefaultTerminal, Frame,
};
use std::io::stdout;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, trace, warn};
use tui_input::backend::crossterm::EventHandler;

use pokedex_core::catalog::{Catalog, DetailSet};
use pokedex_core::config::PokedexConfig;
use pokedex_core::selection::{PreviewMode, RotationTimer, TimerDirective};
use pokedex_core::tilt::{self, Bounds, Tilt};

use super::events::AppEvent;
use super::state::{BrowseState, DetailView};
use super::theme::Theme;

/// How often the input thread checks whether the app has gone away
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    /// Catalog screen state, kept while the detail screen is open
    browse: BrowseState,
    /// Detail screen, when open
    detail: Option<DetailView>,
    details: Option<DetailSet>,
    config: PokedexConfig,
    /// Auto-rotation timer; cancelled on drop
    timer: RotationTimer<AppEvent>,
    theme: Theme,
    should_quit: bool,
    /// Last time Ctrl+C was pressed
    last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new app instance with the rotation timer running
    pub fn new(
        catalog: Catalog,
        details: Option<DetailSet>,
        config: PokedexConfig,
        event_tx: UnboundedSender<AppEvent>,
    ) -> Self {
        let timer = RotationTimer::new(
            config.display.rotation_period(),
            event_tx,
            AppEvent::Rotate,
        );

        let mut app = Self {
            browse: BrowseState::new(catalog),
            detail: None,
            details,
            config,
            timer,
            theme: Theme::default(),
            should_quit: false,
            last_ctrl_c: None,
        };
        app.mount();
        app
    }

    /// Run the application
    pub async fn run(
        mut self,
        event_tx: UnboundedSender<AppEvent>,
        mut event_rx: UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;
        execute!(stdout(), EnableMouseCapture)?;

        spawn_input_reader(event_tx);
        info!("Browsing {} entries", self.browse.browser.catalog().len());

        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        self.unmount();
        if let Err(e) = execute!(stdout(), DisableMouseCapture) {
            warn!("Failed to disable mouse capture: {}", e);
        }
        ratatui::restore();
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            match event_rx.recv().await {
                Some(event) => self.handle_event(event),
                None => break, // Channel closed
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        match &self.detail {
            Some(view) => {
                super::screens::detail::render(frame, view, &self.theme, &self.config.display);
            }
            None => {
                let card = super::screens::browse::render(
                    frame,
                    &self.browse,
                    &self.theme,
                    &self.config.display,
                );
                self.browse.card_area = Some(card);
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn browse(&self) -> &BrowseState {
        &self.browse
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    pub fn timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// Handle one event to completion
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Rotate(generation) => {
                if self.detail.is_none() && self.browse.browser.controller_mut().tick(generation) {
                    trace!("Rotated to {:?}", self.browse.browser.controller().mode());
                }
            }
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
            AppEvent::Resize(..) => {
                self.browse.card_area = None;
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            // Exit on double press
            let now = Instant::now();
            if let Some(last) = self.last_ctrl_c {
                if now.duration_since(last).as_millis() < 1000 {
                    self.should_quit = true;
                    return;
                }
            }
            self.last_ctrl_c = Some(now);
            return;
        }

        if self.detail.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) {
                self.close_detail();
            }
            return;
        }

        match key.code {
            KeyCode::Up => {
                let directive = self.browse.browser.controller_mut().select_prev();
                self.apply_timer(directive);
            }
            KeyCode::Down => {
                let directive = self.browse.browser.controller_mut().select_next();
                self.apply_timer(directive);
            }
            KeyCode::Enter => self.open_detail(),
            KeyCode::Esc => self.cancel(),
            _ => {
                let changed = self.browse.search_input.handle_event(&Event::Key(key));
                if changed.is_some_and(|c| c.value) {
                    self.update_query();
                }
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.detail.is_some() {
            return;
        }

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.browse.tilt = self.tilt_at(mouse.column, mouse.row);
            }
            MouseEventKind::ScrollUp => {
                let directive = self.browse.browser.controller_mut().select_prev();
                self.apply_timer(directive);
            }
            MouseEventKind::ScrollDown => {
                let directive = self.browse.browser.controller_mut().select_next();
                self.apply_timer(directive);
            }
            _ => {}
        }
    }

    /// Tilt for a pointer cell; flat when the pointer is off the card
    fn tilt_at(&self, column: u16, row: u16) -> Tilt {
        let Some(area) = self.browse.card_area else {
            return Tilt::default();
        };

        let bounds = Bounds::new(
            area.x as f32,
            area.y as f32,
            area.width as f32,
            area.height as f32,
        );
        let (px, py) = (column as f32 + 0.5, row as f32 + 0.5);

        if bounds.contains(px, py) {
            tilt::tilt(px, py, bounds, self.config.display.max_tilt_deg)
        } else {
            Tilt::default()
        }
    }

    /// Esc: drop the selection, then the query, then leave
    fn cancel(&mut self) {
        match self.browse.browser.controller().mode() {
            PreviewMode::Explicit(_) => {
                let directive = self.browse.browser.controller_mut().clear();
                self.apply_timer(directive);
            }
            PreviewMode::AutoPreview(_) if !self.browse.search_input.value().is_empty() => {
                self.browse.search_input.reset();
                self.update_query();
            }
            PreviewMode::AutoPreview(_) => self.should_quit = true,
        }
    }

    fn update_query(&mut self) {
        let directive = self
            .browse
            .browser
            .set_query(self.browse.search_input.value());
        self.apply_timer(directive);
    }

    fn open_detail(&mut self) {
        let Some(entry) = self.browse.browser.featured() else {
            return;
        };

        // Same path as external navigation: the id travels as a string.
        let raw_id = entry.id.to_string();
        let view = DetailView::resolve(
            self.browse.browser.catalog(),
            self.details.as_ref(),
            &raw_id,
        );
        debug!("Opening detail for #{}", raw_id);

        self.unmount();
        self.browse.tilt = Tilt::default();
        self.detail = Some(view);
    }

    fn close_detail(&mut self) {
        self.detail = None;
        self.mount();
    }

    fn mount(&mut self) {
        let directive = self.browse.browser.controller_mut().mount();
        self.apply_timer(directive);
    }

    fn unmount(&mut self) {
        let directive = self.browse.browser.controller_mut().unmount();
        self.apply_timer(directive);
    }

    fn apply_timer(&mut self, directive: TimerDirective) {
        let generation = self.browse.browser.controller().generation();
        self.timer.apply(directive, generation);
    }
}

/// Forward terminal input into the event channel until the app goes away
fn spawn_input_reader(tx: UnboundedSender<AppEvent>) {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    warn!("Terminal poll failed: {}", e);
                    break;
                }
            }

            let app_event = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(width, height)) => AppEvent::Resize(width, height),
                Ok(_) => continue,
                Err(e) => {
                    warn!("Terminal read failed: {}", e);
                    break;
                }
            };

            if tx.send(app_event).is_err() {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::catalog::Entry;
    use ratatui::layout::Rect;
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> (App, UnboundedReceiver<AppEvent>) {
        let catalog = Catalog::from_entries(vec![
            Entry::new(1, "Bisasam"),
            Entry::new(2, "Bisaknosp"),
            Entry::new(25, "Pikachu"),
        ])
        .unwrap();
        let details = DetailSet::from_json(
            r#"[{ "id": 2, "name": { "de": "Bisaknosp" }, "cards": [] }]"#,
        )
        .unwrap();

        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(catalog, Some(details), PokedexConfig::default(), tx), rx)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
    }

    #[tokio::test]
    async fn test_starts_rotating() {
        let (app, _rx) = app();
        assert!(app.timer_armed());
        assert_eq!(app.browse().browser.featured().unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_typing_filters_and_drops_selection() {
        let (mut app, _rx) = app();

        app.handle_event(key(KeyCode::Up));
        assert_eq!(
            app.browse().browser.controller().mode(),
            PreviewMode::Explicit(25)
        );
        assert!(!app.timer_armed());

        type_text(&mut app, "bisa");
        assert_eq!(app.browse().browser.view().ids(), vec![1, 2]);
        assert_eq!(
            app.browse().browser.controller().mode(),
            PreviewMode::AutoPreview(0)
        );
        assert!(app.timer_armed());
    }

    #[tokio::test]
    async fn test_no_match_stops_timer() {
        let (mut app, _rx) = app();
        type_text(&mut app, "zzz");

        assert!(app.browse().browser.featured().is_none());
        assert!(!app.timer_armed());

        app.handle_event(key(KeyCode::Enter));
        assert!(app.detail().is_none());
    }

    #[tokio::test]
    async fn test_escape_clears_selection_then_query_then_quits() {
        let (mut app, _rx) = app();
        type_text(&mut app, "bisa");
        app.handle_event(key(KeyCode::Down));

        app.handle_event(key(KeyCode::Esc));
        assert!(matches!(
            app.browse().browser.controller().mode(),
            PreviewMode::AutoPreview(_)
        ));
        assert!(!app.should_quit());

        app.handle_event(key(KeyCode::Esc));
        assert_eq!(app.browse().browser.query(), "");
        assert!(!app.should_quit());

        app.handle_event(key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_letter_q_goes_to_search() {
        let (mut app, _rx) = app();

        type_text(&mut app, "q");
        assert_eq!(app.browse().browser.query(), "q");
        assert!(app.browse().browser.controller().is_no_match());
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_detail_prefers_detail_dataset() {
        let (mut app, _rx) = app();

        app.handle_event(key(KeyCode::Down));
        app.handle_event(key(KeyCode::Down));
        app.handle_event(key(KeyCode::Enter));
        assert!(matches!(app.detail(), Some(DetailView::Entry(e)) if e.id == 25));
        assert!(!app.timer_armed());

        app.handle_event(key(KeyCode::Esc));
        app.handle_event(key(KeyCode::Up));
        app.handle_event(key(KeyCode::Enter));
        assert!(matches!(app.detail(), Some(DetailView::Record(r)) if r.id == 2));
    }

    #[tokio::test]
    async fn test_leaving_detail_resumes_rotation() {
        let (mut app, _rx) = app();
        app.handle_event(key(KeyCode::Enter));
        assert!(app.detail().is_some());
        assert!(!app.timer_armed());

        app.handle_event(key(KeyCode::Esc));
        assert!(app.detail().is_none());
        assert!(app.timer_armed());
    }

    #[tokio::test]
    async fn test_stale_rotation_is_ignored() {
        let (mut app, _rx) = app();
        let stale = app.browse().browser.controller().generation();

        type_text(&mut app, "bisa");
        app.handle_event(AppEvent::Rotate(stale));
        assert_eq!(app.browse().browser.featured().unwrap().id, 1);

        let current = app.browse().browser.controller().generation();
        app.handle_event(AppEvent::Rotate(current));
        assert_eq!(app.browse().browser.featured().unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_pointer_over_card_tilts() {
        let (mut app, _rx) = app();
        app.browse.card_area = Some(Rect::new(40, 6, 40, 20));

        let moved = |column, row| {
            AppEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })
        };

        app.handle_event(moved(41, 7));
        assert!(app.browse().tilt.rotate_y < 0.0);
        assert!(app.browse().tilt.rotate_x > 0.0);

        app.handle_event(moved(5, 5));
        assert_eq!(app.browse().tilt, Tilt::default());
    }
}
