//! # promview
//!
//! A terminal dashboard that polls a Prometheus-compatible backend with one
//! fixed instant query and renders the latest values as a list of cards.
//!
//! The entire system is a display loop: fetch → parse → render → wait →
//! repeat. Each successful poll replaces the displayed snapshot in full;
//! failed polls are logged and leave the display stale but unchanged.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌──────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal │ │
//! │  │ (state) │    │ (cards)  │    │(render) │    │          │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └──────────┘ │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  ┌─────────┐    ┌─────────┐    ┌─────────────────────────┐  │
//! │  │ source  │◀───│ poller  │◀───│ client (HTTP, fixed     │  │
//! │  │(channel)│    │ (timer) │    │ query expression)       │  │
//! │  └─────────┘    └─────────┘    └─────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`client`]**: the fixed instant query over HTTP ([`QueryClient`]),
//!   plus the [`InstantQuery`] trait tests use to substitute fakes
//! - **[`poller`]**: the periodic timer; one poll at spawn, then one per
//!   interval, with no overlap guard — late responses win
//! - **[`source`]**: the [`SampleSource`] trait and the channel-backed
//!   source the poller feeds
//! - **[`data`]**: wire types and the render-ready card projection
//! - **[`app`]**: the single display-state cell and navigation
//! - **[`ui`]**: ratatui rendering — card list, header, status bar, theme
//!
//! ## Usage
//!
//! ```bash
//! # Poll the default backend (http://prometheus:9090) every 15s
//! promview
//!
//! # Point at another backend, log polls to a file
//! promview --endpoint http://metrics.local:9090 --log-file promview.log
//! ```
//!
//! ### As a library
//!
//! ```
//! use promview::{App, ChannelSource};
//!
//! // Create a channel for feeding snapshots to the TUI state
//! let (_tx, source) = ChannelSource::create("example");
//! let app = App::new(Box::new(source));
//! assert!(app.showing_placeholder());
//! ```

pub mod app;
pub mod client;
pub mod config;
pub mod data;
pub mod events;
pub mod poller;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use client::{InstantQuery, QueryClient, QueryError, QUERY_EXPR};
pub use config::Settings;
pub use data::{DashboardData, MetricCard, MetricSample, MetricSnapshot};
pub use poller::PollerHandle;
pub use source::{ChannelSource, PollOutcome, SampleSource};
