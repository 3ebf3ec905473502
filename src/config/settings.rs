//! Configuration settings for TraderVerse.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Session (XP/gamification) configuration.
    pub session: SessionConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
}

impl Config {
    /// Load from the default location; a missing file yields the defaults.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load from an explicit path or the default location.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let path = resolve_path(path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|e| crate::Error::config(e.to_string()))
    }

    /// Write the current configuration back out as toml.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let path = resolve_path(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let rendered =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&path, rendered)?;
        Ok(())
    }
}

/// Explicit path, or `config.toml` under the platform config dir, falling
/// back to the working directory when no home is available.
fn resolve_path(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| {
        super::config_dir()
            .map(|dir| dir.join("config.toml"))
            .unwrap_or_else(|_| PathBuf::from("config.toml"))
    })
}

/// Session configuration for the in-memory XP ledger.
///
/// Nothing here is persisted across sessions; these values only seed the
/// in-memory state at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// XP balance at session start.
    pub starting_xp: u64,
    /// How long an XP toast stays on screen, in milliseconds.
    pub toast_duration_ms: u64,
    /// Hours granted by the ad-free store item.
    pub ad_free_hours: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_xp: 1250,
            toast_duration_ms: 3000,
            ad_free_hours: 24,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Enable Unicode symbols in charts and icons.
    pub unicode_symbols: bool,
    /// Show the status bar.
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_support: true,
            unicode_symbols: true,
            show_status_bar: true,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up.
    pub up: String,
    /// Navigate down.
    pub down: String,
    /// Select/confirm.
    pub select: String,
    /// Cancel/back.
    pub back: String,
    /// Switch to home tab.
    pub home: String,
    /// Switch to tools tab.
    pub tools: String,
    /// Switch to ideas tab.
    pub ideas: String,
    /// Switch to reels tab.
    pub reels: String,
    /// Switch to XP store tab.
    pub xp_store: String,
    /// Like the selected trade idea.
    pub like: String,
    /// Comment on the selected trade idea.
    pub comment: String,
    /// Share the selected trade idea.
    pub share: String,
    /// Upload a reel.
    pub upload: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            select: "Enter".to_string(),
            back: "Esc".to_string(),
            home: "1".to_string(),
            tools: "2".to_string(),
            ideas: "3".to_string(),
            reels: "4".to_string(),
            xp_store: "5".to_string(),
            like: "l".to_string(),
            comment: "c".to_string(),
            share: "s".to_string(),
            upload: "u".to_string(),
        }
    }
}
