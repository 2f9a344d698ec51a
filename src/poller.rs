//! Background poll loop.
//!
//! Owns the periodic timer: one query at spawn time, then one per interval,
//! indefinitely. The timer does not wait for the previous request — each
//! tick spawns an independent fetch task, so a slow response can overlap the
//! next poll and outcomes arrive in completion order. That race is part of
//! the observed behavior this viewer reproduces; see the `late_response_wins`
//! test.
//!
//! Failures never stop the loop: they are logged and forwarded as
//! [`PollOutcome::Failed`], leaving the display state untouched.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::InstantQuery;
use crate::source::{ChannelSource, PollOutcome};

/// Handle to the running poll loop.
///
/// Dropping the handle does not stop the loop; call [`shutdown`] on
/// teardown. In-flight requests are not cancelled — only the timer is, so no
/// further polls are initiated afterward.
///
/// [`shutdown`]: PollerHandle::shutdown
#[derive(Debug)]
pub struct PollerHandle {
    timer: JoinHandle<()>,
}

impl PollerHandle {
    /// Cancel the periodic timer. No further polls will be initiated.
    pub fn shutdown(&self) {
        self.timer.abort();
    }
}

/// Spawn the poll loop on the current tokio runtime.
///
/// Returns the channel-backed source for the TUI and the handle used to stop
/// the timer on teardown.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use promview::{poller, QueryClient};
///
/// tokio_test::block_on(async {
///     let client = QueryClient::builder()
///         .endpoint("http://localhost:9090")
///         .build();
///     let (source, handle) = poller::spawn(client, Duration::from_secs(15));
///     // ... hand `source` to the TUI ...
///     handle.shutdown();
/// });
/// ```
pub fn spawn<Q: InstantQuery>(query: Q, every: Duration) -> (ChannelSource, PollerHandle) {
    let (tx, source) = ChannelSource::create(&query.target());
    let query = Arc::new(query);

    let timer = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            // First tick completes immediately, so one poll fires at t=0.
            ticker.tick().await;

            let query = Arc::clone(&query);
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = match query.fetch().await {
                    Ok(snapshot) => {
                        debug!(samples = snapshot.len(), "poll succeeded");
                        PollOutcome::Snapshot(snapshot)
                    }
                    Err(e) => {
                        warn!("poll failed: {e}");
                        PollOutcome::Failed(e.to_string())
                    }
                };
                // Receiver gone means the TUI is shutting down; nothing to do.
                let _ = tx.send(outcome);
            });
        }
    });

    (source, PollerHandle { timer })
}
