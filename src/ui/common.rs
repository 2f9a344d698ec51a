//! Common UI components: header bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::client::QUERY_EXPR;

/// Render the header bar.
///
/// Displays: state dot (loading / ok / stale), dashboard title, series count,
/// and the fixed query expression.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (dot_style, state) = if app.data.is_none() {
        (app.theme.placeholder, "loading")
    } else if app.load_error.is_some() {
        (Style::default().fg(app.theme.stale), "stale")
    } else {
        (Style::default().fg(app.theme.ok), "ok")
    };

    let line = Line::from(vec![
        Span::styled(" ● ", dot_style),
        Span::styled("PROMVIEW ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(
            format!("{}", app.card_count()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" series │ "),
        Span::raw(format!("query: {} │ ", QUERY_EXPR)),
        Span::raw(state),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows the data age and source description, the last poll error when one
/// occurred (the displayed cards stay as they were), and key hints.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = match (&app.data, &app.load_error) {
        (Some(data), Some(err)) => format!(
            " Updated {:.1}s ago (stale) | poll failed: {} | ?:help q:quit",
            data.last_updated.elapsed().as_secs_f64(),
            err,
        ),
        (Some(data), None) => format!(
            " Updated {:.1}s ago | {} | ↑↓:scroll ?:help q:quit",
            data.last_updated.elapsed().as_secs_f64(),
            app.source_description(),
        ),
        (None, Some(err)) => format!(" Error: {} | ?:help q:quit", err),
        (None, None) => format!(" Loading... | {} | q:quit", app.source_description()),
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the card list.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ↑/↓ j/k     Scroll cards"),
        Line::from("  PgUp/PgDn   Jump 10 cards"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r         Apply pending data now"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 36u16.min(area.width.saturating_sub(4));
    let help_height = 16u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
