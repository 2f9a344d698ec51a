//! Channel-based data source.
//!
//! Receives poll outcomes from the background poller over an unbounded
//! channel and applies them in arrival order. Because overlapping polls are
//! allowed upstream, arrival order is completion order: whichever poll
//! resolves last wins the display state.

use tokio::sync::mpsc;

use super::SampleSource;
use crate::data::MetricSnapshot;

/// The result of one completed poll.
#[derive(Debug, Clone)]
pub enum PollOutcome {
    /// The poll succeeded; this snapshot replaces the previous one in full.
    Snapshot(MetricSnapshot),
    /// The poll failed; the display keeps its current snapshot.
    Failed(String),
}

/// A data source that receives poll outcomes via a channel.
///
/// Draining happens on the TUI thread; the poller only ever sends. A failed
/// poll sets the error without touching the snapshot, and a later success
/// clears it.
#[derive(Debug)]
pub struct ChannelSource {
    receiver: mpsc::UnboundedReceiver<PollOutcome>,
    description: String,
    last_error: Option<String>,
}

impl ChannelSource {
    /// Create a new channel source.
    pub fn new(receiver: mpsc::UnboundedReceiver<PollOutcome>, description: &str) -> Self {
        Self {
            receiver,
            description: format!("poll: {}", description),
            last_error: None,
        }
    }

    /// Create a channel pair for sending outcomes to a ChannelSource.
    ///
    /// Returns (sender, source); the sender side is what the poller holds.
    pub fn create(description: &str) -> (mpsc::UnboundedSender<PollOutcome>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        let source = Self::new(rx, description);
        (tx, source)
    }
}

impl SampleSource for ChannelSource {
    fn poll(&mut self) -> Option<MetricSnapshot> {
        let mut latest = None;

        // Drain everything pending, applying outcomes in arrival order.
        // Last drained snapshot wins (last-to-resolve, not last-issued).
        while let Ok(outcome) = self.receiver.try_recv() {
            match outcome {
                PollOutcome::Snapshot(snapshot) => {
                    self.last_error = None;
                    latest = Some(snapshot);
                }
                PollOutcome::Failed(err) => {
                    self.last_error = Some(err);
                }
            }
        }

        latest
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
