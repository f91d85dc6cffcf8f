//! Detail screen for one entry

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use pokedex_core::config::DisplayConfig;

use crate::tui::state::DetailView;
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, view: &DetailView, theme: &Theme, display: &DisplayConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Cards
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    match view {
        DetailView::Record(record) => {
            let name = record.display_name(&display.language, &display.fallback_language);
            render_title(frame, chunks[0], &format!("{} (#{})", name, record.id));

            let items: Vec<ListItem> = record
                .cards
                .iter()
                .map(|card| {
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{:<32}", card.name), theme.highlight),
                        Span::raw(card.image_url.clone()),
                    ]))
                })
                .collect();

            let title = format!(" Cards ({}) ", record.cards.len());
            if items.is_empty() {
                render_message(frame, chunks[1], &title, "No cards for this Pokémon.", theme);
            } else {
                let list =
                    List::new(items).block(Block::default().title(title).borders(Borders::ALL));
                frame.render_widget(list, chunks[1]);
            }
        }
        DetailView::Entry(entry) => {
            render_title(frame, chunks[0], &format!("{} (#{})", entry.name, entry.id));
            let urls = display.artwork.for_id(entry.id);
            let body = Paragraph::new(vec![
                Line::from(vec![Span::styled("Artwork  ", theme.muted), Span::raw(urls.primary)]),
                Line::from(vec![Span::styled("Sprite   ", theme.muted), Span::raw(urls.fallback)]),
            ])
            .block(Block::default().title(" Details ").borders(Borders::ALL));
            frame.render_widget(body, chunks[1]);
        }
        DetailView::NotFound(raw_id) => {
            render_title(frame, chunks[0], "Pokédex");
            render_message(
                frame,
                chunks[1],
                " Not found ",
                &format!("Pokémon '{raw_id}' not found."),
                theme,
            );
        }
    }

    let help = Paragraph::new(Line::from(Span::styled(" Esc back", theme.muted)));
    frame.render_widget(help, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let paragraph = Paragraph::new(Line::from(format!(" {title}")))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_message(frame: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    let paragraph = Paragraph::new(Line::from(Span::styled(message.to_string(), theme.error)))
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
