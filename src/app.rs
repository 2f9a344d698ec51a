//! Application state.
//!
//! The display state is one cell: the latest [`DashboardData`] or nothing
//! yet. It lives here for the duration of the TUI session and is dropped on
//! teardown — never promoted to global storage.

use crate::data::DashboardData;
use crate::source::SampleSource;
use crate::ui::Theme;

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Data source
    source: Box<dyn SampleSource>,
    /// The latest full snapshot, or `None` before the first outcome.
    pub data: Option<DashboardData>,
    /// The most recent poll error; displayed alongside stale data.
    pub load_error: Option<String>,

    // Navigation state
    pub selected_card: usize,

    // UI
    pub theme: Theme,
}

impl App {
    /// Create a new App with the given data source.
    pub fn new(source: Box<dyn SampleSource>) -> Self {
        Self {
            running: true,
            show_help: false,
            source,
            data: None,
            load_error: None,
            selected_card: 0,
            theme: Theme::auto_detect(),
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Drain the data source and apply any new outcome.
    ///
    /// A new snapshot replaces the display state in full; a failed poll
    /// leaves it unchanged. Returns true if the display state was replaced.
    pub fn reload_data(&mut self) -> bool {
        let updated = if let Some(snapshot) = self.source.poll() {
            self.data = Some(DashboardData::from_snapshot(snapshot));
            true
        } else {
            false
        };

        self.load_error = self.source.error().map(str::to_string);

        // Clamp selection when the card list shrank
        if let Some(ref data) = self.data {
            if self.selected_card >= data.cards.len() {
                self.selected_card = data.cards.len().saturating_sub(1);
            }
        }

        updated
    }

    /// True when there is nothing to render but the loading placeholder.
    pub fn showing_placeholder(&self) -> bool {
        self.data.as_ref().map_or(true, |d| d.is_empty())
    }

    /// Number of cards currently displayed.
    pub fn card_count(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.cards.len())
    }

    /// Move selection down by one card.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move selection up by one card.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move selection down by n cards.
    pub fn select_next_n(&mut self, n: usize) {
        let max = self.card_count().saturating_sub(1);
        self.selected_card = (self.selected_card + n).min(max);
    }

    /// Move selection up by n cards.
    pub fn select_prev_n(&mut self, n: usize) {
        self.selected_card = self.selected_card.saturating_sub(n);
    }

    /// Jump to the first card.
    pub fn select_first(&mut self) {
        self.selected_card = 0;
    }

    /// Jump to the last card.
    pub fn select_last(&mut self) {
        self.selected_card = self.card_count().saturating_sub(1);
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
