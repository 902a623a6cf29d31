//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Render functions have no side effects and never mutate state.

pub mod browse;
pub mod create;
pub mod profile;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use libcricconnect::prefs::Theme;

use crate::app::{AppState, Screen};

/// Colors resolved from the current theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub warn: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_state(state: &AppState) -> Palette {
        if !state.config.colors_enabled {
            return Palette {
                accent: Color::Reset,
                text: Color::Reset,
                muted: Color::Reset,
                warn: Color::Reset,
                error: Color::Reset,
            };
        }
        match state.theme {
            Theme::Dark => Palette {
                accent: Color::Green,
                text: Color::White,
                muted: Color::DarkGray,
                warn: Color::Yellow,
                error: Color::Red,
            },
            Theme::Light => Palette {
                accent: Color::Green,
                text: Color::Black,
                muted: Color::Gray,
                warn: Color::Yellow,
                error: Color::Red,
            },
        }
    }
}

/// Render the application UI
///
/// Main rendering entry point: header tabs, the active screen, the
/// status bar, and any overlay on top.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.size();
    let palette = Palette::for_state(state);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header tabs
            Constraint::Min(5),    // Screen body
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_tabs(frame, chunks[0], state, &palette);

    match state.screen {
        Screen::Browse => browse::render(frame, chunks[1], state, &palette),
        Screen::Profile => profile::render(frame, chunks[1], state, &palette),
        Screen::Create => create::render(frame, chunks[1], state, &palette),
    }

    render_status_bar(frame, chunks[2], state, &palette);

    if state.help_visible {
        render_help_overlay(frame, area, &palette);
    }
}

/// Render the header tab bar
fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let titles: Vec<Line> = [Screen::Browse, Screen::Profile, Screen::Create]
        .iter()
        .map(|s| Line::from(s.title()))
        .collect();

    let selected = match state.screen {
        Screen::Browse => 0,
        Screen::Profile => 1,
        Screen::Create => 2,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .title(" CricConnect ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render status bar with the current message or key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let line = if state.search_editing {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(palette.accent)),
            Span::raw(state.filters.search.clone()),
            Span::styled("  (Enter/Esc to finish)", Style::default().fg(palette.muted)),
        ])
    } else if let Some(ref message) = state.status.message {
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(palette.accent),
        ))
    } else {
        let hints = match state.screen {
            Screen::Browse => "Enter: join | l/d/a: filters | /: search | c: clear | n: new | ?: help | q: quit",
            Screen::Profile => "n: new match | b: back | Tab: next screen | q: quit",
            Screen::Create => "Tab: next field | Space: toggle amenity | Enter: create | Esc: cancel",
        };
        Line::from(Span::styled(hints, Style::default().fg(palette.muted)))
    };

    let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, palette: &Palette) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q        - Quit"),
        Line::from("  Tab      - Next screen"),
        Line::from("  t        - Toggle light/dark theme"),
        Line::from("  ? / F1   - Toggle help"),
        Line::from(""),
        Line::from("Browse:"),
        Line::from("  Up/Down  - Select match"),
        Line::from("  Enter    - Join selected match"),
        Line::from("  Esc      - Cancel pending join"),
        Line::from("  l / d / a - Cycle location/date/amenity filter"),
        Line::from("  /        - Search"),
        Line::from("  + / -    - Minimum open spots"),
        Line::from("  c        - Clear all filters"),
        Line::from(""),
        Line::from("Create form:"),
        Line::from("  Tab/Shift+Tab - Move between fields"),
        Line::from("  Space    - Toggle amenity under cursor"),
        Line::from("  Enter    - Create match (when complete)"),
        Line::from(""),
        Line::from("Press Esc or ? to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area); // Clear background
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Long-form date for display. Stored dates stay exact ISO strings;
/// anything unparseable is shown as-is.
pub(crate) fn format_date(date: &str) -> String {
    match chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%A, %-d %B %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_long_form() {
        assert_eq!(format_date("2025-04-18"), "Friday, 18 April 2025");
    }

    #[test]
    fn test_format_date_passthrough_on_garbage() {
        assert_eq!(format_date("someday"), "someday");
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, outer);
        assert!(inner.width <= outer.width);
        assert!(inner.height <= outer.height);
        assert!(inner.x >= outer.x && inner.y >= outer.y);
    }
}
