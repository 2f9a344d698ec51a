//! Terminal rendering using ratatui.
//!
//! - [`cards`]: the card list (or loading placeholder)
//! - [`common`]: header bar, status bar, help overlay
//! - [`theme`]: light/dark theme with terminal detection

pub mod cards;
pub mod common;
pub mod theme;

pub use theme::Theme;
