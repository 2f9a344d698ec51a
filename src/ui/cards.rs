//! Card list rendering.
//!
//! One card per metric sample, in snapshot order: series name, instance, and
//! the value text verbatim. When there is nothing to show (before the first
//! successful poll, or after an empty result) a loading placeholder is
//! rendered instead.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::client::QUERY_EXPR;

/// Render the card list, or the loading placeholder when empty.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(ref data) = app.data else {
        render_placeholder(frame, app, area);
        return;
    };
    if data.is_empty() {
        render_placeholder(frame, app, area);
        return;
    }

    let cards = &data.cards;

    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            let name: &str = if card.name.is_empty() { "(unnamed series)" } else { &card.name };
            ListItem::new(vec![
                Line::from(Span::styled(
                    name.to_string(),
                    Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("  instance: {}", card.instance)),
                Line::from(format!("  value:    {}", card.value)),
                Line::from(""),
            ])
        })
        .collect();

    let title = format!(" {} ({}) ", QUERY_EXPR, cards.len());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_card.min(cards.len().saturating_sub(1))));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_placeholder(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", QUERY_EXPR))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let paragraph = Paragraph::new("Loading metrics...")
        .style(app.theme.placeholder)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MetricSample, MetricSnapshot};
    use crate::source::{ChannelSource, PollOutcome};
    use ratatui::{backend::TestBackend, Terminal};
    use std::collections::BTreeMap;
    use tokio::sync::mpsc::UnboundedSender;

    fn test_app() -> (UnboundedSender<PollOutcome>, App) {
        let (tx, source) = ChannelSource::create("test");
        (tx, App::new(Box::new(source)))
    }

    fn cpu_snapshot(instance: &str, value: &str) -> MetricSnapshot {
        let mut metric = BTreeMap::new();
        metric.insert("__name__".to_string(), "bigip_cpu_usage".to_string());
        metric.insert("instance".to_string(), instance.to_string());
        vec![MetricSample {
            metric,
            value: (1700000000.0, value.to_string()),
        }]
    }

    fn render_to_text(app: &mut App) -> String {
        let backend = TestBackend::new(48, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app, frame.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_initial_state_renders_placeholder() {
        let (_tx, mut app) = test_app();

        let text = render_to_text(&mut app);
        assert!(text.contains("Loading metrics..."));
        assert!(!text.contains("instance:"));
    }

    #[test]
    fn test_happy_path_renders_one_card() {
        let (tx, mut app) = test_app();
        tx.send(PollOutcome::Snapshot(cpu_snapshot("host1", "42.5")))
            .unwrap();
        app.reload_data();

        let text = render_to_text(&mut app);
        assert!(text.contains("bigip_cpu_usage"));
        assert!(text.contains("instance: host1"));
        assert!(text.contains("value:    42.5"));
        assert!(!text.contains("Loading metrics..."));
    }

    #[test]
    fn test_empty_result_renders_placeholder_again() {
        let (tx, mut app) = test_app();
        tx.send(PollOutcome::Snapshot(cpu_snapshot("host1", "42.5")))
            .unwrap();
        app.reload_data();

        tx.send(PollOutcome::Snapshot(Vec::new())).unwrap();
        app.reload_data();

        let text = render_to_text(&mut app);
        assert!(text.contains("Loading metrics..."));
        assert!(!text.contains("host1"));
    }

    #[test]
    fn test_unnamed_series_gets_a_fallback_title() {
        let (tx, mut app) = test_app();
        tx.send(PollOutcome::Snapshot(vec![MetricSample {
            metric: BTreeMap::new(),
            value: (0.0, "7".to_string()),
        }]))
        .unwrap();
        app.reload_data();

        let text = render_to_text(&mut app);
        assert!(text.contains("(unnamed series)"));
        assert!(text.contains("value:    7"));
    }
}
