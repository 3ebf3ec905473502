//! UI widgets.

mod help;
mod home;
mod ideas;
mod modals;
mod notifications;
mod reels;
mod stat_arb;
mod status_bar;
mod tab_bar;
mod tools;
mod xp_store;

pub use help::HelpPanel;
pub use home::HomeView;
pub use ideas::IdeasView;
pub use modals::render_tool_modals;
pub use notifications::render_toasts;
pub use reels::ReelsView;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
pub use tools::ToolsView;
pub use xp_store::XpStoreView;
