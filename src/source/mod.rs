//! Data source abstraction for receiving metric snapshots.
//!
//! The TUI polls a [`SampleSource`] once per frame; the only production
//! implementation is [`ChannelSource`], fed by the background poller.

mod channel;

pub use channel::{ChannelSource, PollOutcome};

use std::fmt::Debug;

use crate::data::MetricSnapshot;

/// Trait for receiving metric snapshots.
///
/// # Example
///
/// ```
/// use promview::{ChannelSource, SampleSource};
///
/// let (_tx, mut source) = ChannelSource::create("example");
/// assert!(source.poll().is_none());
/// ```
pub trait SampleSource: Send + Debug {
    /// Poll for the latest snapshot.
    ///
    /// Returns `Some(snapshot)` if new data arrived since the last poll,
    /// `None` otherwise. Must be non-blocking.
    fn poll(&mut self) -> Option<MetricSnapshot>;

    /// Human-readable description of the source, for the status bar.
    fn description(&self) -> &str;

    /// The most recent poll error, if the last completed poll failed.
    fn error(&self) -> Option<&str>;
}
