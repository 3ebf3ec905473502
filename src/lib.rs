//! # TraderVerse - Gamified Social Trading TUI
//!
//! A terminal client for a gamified social-trading platform: share and react
//! to trade ideas, browse trading tools, watch reels, and spend an XP
//! balance in the store.
//!
//! ## Architecture
//!
//! The application follows a unidirectional data-flow pattern:
//!
//! - **App**: Core application lifecycle and the event loop
//! - **UI**: Layout and rendering logic
//! - **State**: Centralized state management (store + reducer)
//! - **Events**: Input handling and key bindings
//! - **Analytics**: Simulated series for the statistical-arbitrage panel
//! - **Config**: Configuration management

pub mod analytics;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
