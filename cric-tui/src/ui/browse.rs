//! Browse screen: filter summary, match list, and a detail pane for the
//! selected match.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use libcricconnect::types::Match;

use super::{format_date, Palette};
use crate::app::AppState;

/// How a match presents to the current user.
enum JoinDisplay {
    Joined,
    Requested,
    Full,
    Open(u32),
}

fn join_display(state: &AppState, m: &Match) -> JoinDisplay {
    if state.user.has_joined(&m.id) {
        JoinDisplay::Joined
    } else if state.is_join_pending(&m.id) {
        JoinDisplay::Requested
    } else if m.is_full() {
        JoinDisplay::Full
    } else {
        JoinDisplay::Open(m.spots_left)
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter summary
            Constraint::Min(3),    // List + detail
        ])
        .split(area);

    render_filters(frame, chunks[0], state, palette);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_list(frame, body[0], state, palette);
    render_detail(frame, body[1], state, palette);
}

/// One line summarizing the active criteria and the result count.
fn render_filters(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let filters = &state.filters;
    let mut spans: Vec<Span> = Vec::new();

    let mut tag = |label: String| {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(label, Style::default().fg(palette.accent)));
    };

    if let Some(ref location) = filters.location {
        tag(format!("location: {}", location));
    }
    if let Some(ref date) = filters.date {
        tag(format!("date: {}", date));
    }
    if let Some(amenity) = filters.amenity {
        tag(format!("amenity: {}", amenity.label()));
    }
    if !filters.search.is_empty() {
        tag(format!("search: {}", filters.search));
    }
    if filters.min_spots > 0 {
        tag(format!("spots >= {}", filters.min_spots));
    }

    if spans.is_empty() {
        spans.push(Span::styled(
            "no filters active",
            Style::default().fg(palette.muted),
        ));
    }

    let shown = state.filtered().len();
    let total = state.matches.len();
    spans.push(Span::styled(
        format!("   ({} of {} matches)", shown, total),
        Style::default().fg(palette.muted),
    ));

    let block = Block::default().title(" Filters ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_list(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let filtered = state.filtered();

    if filtered.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("No matches found"),
            Line::from(""),
            Line::from(Span::styled(
                "Try adjusting your filters, or press n to create a match.",
                Style::default().fg(palette.muted),
            )),
        ])
        .block(Block::default().title(" Matches ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|m| {
            let (tag, tag_style) = match join_display(state, m) {
                JoinDisplay::Joined => ("joined".to_string(), Style::default().fg(palette.accent)),
                JoinDisplay::Requested => {
                    ("requested".to_string(), Style::default().fg(palette.warn))
                }
                JoinDisplay::Full => ("full".to_string(), Style::default().fg(palette.error)),
                JoinDisplay::Open(n) => (
                    format!("{} spots left", n),
                    Style::default().fg(palette.text),
                ),
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        m.ground_name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(tag, tag_style),
                ]),
                Line::from(Span::styled(
                    format!("{} | {} {}", m.location, m.date, m.time),
                    Style::default().fg(palette.muted),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" Matches ").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(filtered.len() - 1)));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_detail(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let filtered = state.filtered();
    let block = Block::default().title(" Details ").borders(Borders::ALL);

    let Some(m) = filtered.get(state.selected) else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let amenities = if m.amenities.is_empty() {
        "none".to_string()
    } else {
        m.amenities
            .iter()
            .map(|a| a.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let status_line = match join_display(state, m) {
        JoinDisplay::Joined => Line::from(Span::styled(
            "You've joined this match",
            Style::default().fg(palette.accent),
        )),
        JoinDisplay::Requested => Line::from(Span::styled(
            "Request sent... (Esc to cancel)",
            Style::default().fg(palette.warn),
        )),
        JoinDisplay::Full => Line::from(Span::styled(
            "Match full",
            Style::default().fg(palette.error),
        )),
        JoinDisplay::Open(n) => Line::from(vec![
            Span::styled(
                format!("{} of {} spots open", n, m.total_spots),
                Style::default().fg(palette.text),
            ),
            Span::styled("  (Enter to join)", Style::default().fg(palette.muted)),
        ]),
    };

    let lines = vec![
        Line::from(Span::styled(
            m.ground_name.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(m.location.clone()),
        Line::from(""),
        Line::from(format!("{} at {}", format_date(&m.date), m.time)),
        Line::from(""),
        Line::from(m.description.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Amenities: ", Style::default().fg(palette.muted)),
            Span::raw(amenities),
        ]),
        Line::from(vec![
            Span::styled("Organized by ", Style::default().fg(palette.muted)),
            Span::raw(m.organizer_name.clone()),
        ]),
        Line::from(""),
        status_line,
    ];

    let detail = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(detail, area);
}
