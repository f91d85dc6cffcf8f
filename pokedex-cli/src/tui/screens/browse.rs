//! Catalog screen: search bar, filtered list and the featured card

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use pokedex_core::config::DisplayConfig;
use pokedex_core::selection::PreviewMode;

use crate::tui::state::BrowseState;
use crate::tui::theme::Theme;

/// Render the screen and return the area of the featured card
pub fn render(
    frame: &mut Frame,
    state: &BrowseState,
    theme: &Theme,
    display: &DisplayConfig,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(8),    // List + card
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);

    render_header(frame, chunks[0], state);
    render_search_bar(frame, chunks[1], state);
    render_list(frame, body[0], state, theme);
    render_card(frame, body[1], state, theme, display);
    render_help(frame, chunks[3], theme);

    body[1]
}

fn render_header(frame: &mut Frame, area: Rect, state: &BrowseState) {
    let view = state.browser.view();
    let total = state.browser.catalog().len();

    let paragraph = Paragraph::new(Line::from(vec![Span::raw(format!(
        " {} of {} Pokémon",
        view.len(),
        total
    ))]))
    .block(Block::default().title(" Pokédex ").borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &BrowseState) {
    let input = &state.search_input;
    let width = area.width.saturating_sub(12) as usize;
    let scroll = input.visual_scroll(width);

    let paragraph = Paragraph::new(Line::from(vec![
        Span::raw("Search: "),
        Span::raw(input.value()),
    ]))
    .scroll((0, scroll as u16))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);

    let cursor_x = area.x + 1 + 8 + (input.visual_cursor().saturating_sub(scroll)) as u16;
    frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
}

fn render_list(frame: &mut Frame, area: Rect, state: &BrowseState, theme: &Theme) {
    let controller = state.browser.controller();
    let view = state.browser.view();

    let items: Vec<ListItem> = view
        .iter()
        .map(|entry| ListItem::new(Line::from(entry.label())))
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" Results ").borders(Borders::ALL))
        .highlight_style(theme.featured_row(controller.mode()))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(controller.featured_index());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    state: &BrowseState,
    theme: &Theme,
    display: &DisplayConfig,
) {
    let controller = state.browser.controller();
    let tilted = state.tilt.rotate_x != 0.0 || state.tilt.rotate_y != 0.0;

    let block = Block::default()
        .title(" Featured ")
        .borders(Borders::ALL)
        .border_style(if tilted {
            theme.card_border_tilted
        } else {
            theme.card_border
        });

    let Some(entry) = controller.featured() else {
        let query = state.browser.query().trim();
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No match", theme.error)),
            Line::from(Span::styled(
                format!("Nothing in the Pokédex matches \"{query}\"."),
                theme.muted,
            )),
        ])
        .block(block)
        .wrap(Wrap { trim: true });
        frame.render_widget(placeholder, area);
        return;
    };

    let urls = display.artwork.for_id(entry.id);
    let position = match controller.mode() {
        PreviewMode::Explicit(_) => String::new(),
        PreviewMode::AutoPreview(index) => format!(
            "  {}/{} · every {:.1}s",
            index + 1,
            controller.view().len(),
            display.rotation_period().as_secs_f32()
        ),
    };

    let lines = vec![
        Line::from(Span::styled(
            entry.name.clone(),
            theme.highlight.add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(format!("#{:03}", entry.id)),
        Line::from(vec![
            Span::styled(Theme::mode_badge(controller.mode()), theme.previewed),
            Span::styled(position, theme.muted),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("Artwork  ", theme.muted), Span::raw(urls.primary)]),
        Line::from(vec![Span::styled("Sprite   ", theme.muted), Span::raw(urls.fallback)]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "tilt x {:+.1}°  y {:+.1}°",
                state.tilt.rotate_x, state.tilt.rotate_y
            ),
            if tilted { Style::default() } else { theme.muted },
        )),
    ];

    let card = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(card, area);
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let help = Paragraph::new(Line::from(Span::styled(
        " type to search • ↑/↓ select • Enter details • Esc clear/quit • Ctrl+C twice quit",
        theme.muted,
    )));
    frame.render_widget(help, area);
}
