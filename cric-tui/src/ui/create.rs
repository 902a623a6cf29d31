//! Create-match form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use libcricconnect::types::Amenity;

use super::Palette;
use crate::app::{AppState, FormField};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Fields
            Constraint::Length(3), // Submit hint
        ])
        .split(area);

    render_fields(frame, chunks[0], state, palette);
    render_submit_hint(frame, chunks[1], state, palette);
}

fn render_fields(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let draft = &state.form.draft;
    let focus = state.form.focus;

    let mut lines: Vec<Line> = Vec::new();
    let mut field = |f: FormField, value: String| {
        let focused = focus == f;
        let label_style = if focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        let marker = if focused { "> " } else { "  " };
        let mut spans = vec![
            Span::raw(marker),
            Span::styled(format!("{:<12}", f.label()), label_style),
            Span::raw(value),
        ];
        if focused && f != FormField::Amenities {
            spans.push(Span::styled("_", Style::default().fg(palette.accent)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    };

    field(FormField::GroundName, draft.ground_name.clone());
    field(FormField::Location, draft.location.clone());
    field(FormField::Date, placeholder(&draft.date, "YYYY-MM-DD"));
    field(FormField::Time, placeholder(&draft.time, "HH:MM"));
    field(FormField::TotalSpots, draft.total_spots.to_string());
    field(FormField::Description, draft.description.clone());

    // Amenity checkbox row
    let on_amenities = focus == FormField::Amenities;
    let mut spans = vec![
        Span::raw(if on_amenities { "> " } else { "  " }),
        Span::styled(
            format!("{:<12}", FormField::Amenities.label()),
            if on_amenities {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            },
        ),
    ];
    for (i, amenity) in Amenity::ALL.iter().enumerate() {
        let checked = draft.amenities.contains(amenity);
        let box_mark = if checked { "[x] " } else { "[ ] " };
        let style = if on_amenities && i == state.form.amenity_cursor {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::UNDERLINED)
        } else if checked {
            Style::default().fg(palette.text)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(format!("{}{}  ", box_mark, amenity.label()), style));
    }
    lines.push(Line::from(spans));

    let form = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Create a New Match ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(form, area);
}

fn render_submit_hint(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let (text, style) = if state.can_create() {
        (
            "Ready - press Enter to create the match",
            Style::default().fg(palette.accent),
        )
    } else {
        (
            "Ground name, location, date and time are required",
            Style::default().fg(palette.warn),
        )
    };

    let hint = Paragraph::new(Span::styled(text, style))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hint, area);
}

fn placeholder(value: &str, hint: &str) -> String {
    if value.is_empty() {
        format!("({})", hint)
    } else {
        value.to_string()
    }
}
