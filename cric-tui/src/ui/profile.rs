//! Profile screen: the user's joined and organized matches.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use libcricconnect::types::Match;
use libcricconnect::views;

use super::{format_date, Palette};
use crate::app::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Identity
            Constraint::Min(3),    // Joined
            Constraint::Min(3),    // Organized
        ])
        .split(area);

    render_identity(frame, chunks[0], state, palette);

    let joined = views::joined_matches(&state.user, &state.matches);
    render_section(
        frame,
        chunks[1],
        " Your Joined Matches ",
        &joined,
        "You haven't joined any matches yet.",
        palette,
        false,
    );

    let organized = views::organized_matches(&state.user, &state.matches);
    render_section(
        frame,
        chunks[2],
        " Your Organized Matches ",
        &organized,
        "You haven't organized any matches yet. Press n to create one.",
        palette,
        true,
    );
}

fn render_identity(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            state.user.name.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.user.email.clone(),
            Style::default().fg(palette.muted),
        )),
    ];

    let identity =
        Paragraph::new(lines).block(Block::default().title(" Profile ").borders(Borders::ALL));
    frame.render_widget(identity, area);
}

fn render_section(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    matches: &[&Match],
    empty_text: &str,
    palette: &Palette,
    show_capacity: bool,
) {
    let block = Block::default().title(title).borders(Borders::ALL);

    if matches.is_empty() {
        let empty = Paragraph::new(Span::styled(
            empty_text.to_string(),
            Style::default().fg(palette.muted),
        ))
        .block(block)
        .wrap(Wrap { trim: true });
        frame.render_widget(empty, area);
        return;
    }

    let mut lines = Vec::new();
    for m in matches {
        let mut meta = format!("{} | {} at {}", m.location, format_date(&m.date), m.time);
        if show_capacity {
            meta.push_str(&format!(
                " | {} of {} spots remaining",
                m.spots_left, m.total_spots
            ));
        }
        lines.push(Line::from(vec![
            Span::styled(
                m.ground_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(meta, Style::default().fg(palette.muted)),
        ]));
    }

    let section = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(section, area);
}
