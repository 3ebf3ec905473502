//! Terminal UI rendering.

pub mod layout;
pub mod widgets;

use ratatui::Frame;

use crate::state::{Store, Tab};

use layout::Layout;
use widgets::{
    HelpPanel, HomeView, IdeasView, ReelsView, StatusBar, TabBar, ToolsView, XpStoreView,
    render_tool_modals, render_toasts,
};

/// Top-level UI renderer.
pub struct Ui;

impl Ui {
    /// Render one frame from the store.
    pub fn render(frame: &mut Frame, store: &Store) {
        let layout = Layout::new(frame.area());

        StatusBar::render(frame, layout.status_area, store);
        TabBar::render(frame, layout.tab_area, store);

        match store.app.active_tab {
            Tab::Home => HomeView::render(frame, layout.main_area, store),
            Tab::Tools => ToolsView::render(frame, layout.main_area, store),
            Tab::Ideas => IdeasView::render(frame, layout.main_area, store),
            Tab::Reels => ReelsView::render(frame, layout.main_area, store),
            Tab::XpStore => XpStoreView::render(frame, layout.main_area, store),
        }

        if store.app.show_help {
            HelpPanel::render(frame);
        }
        render_tool_modals(frame, store);

        // Toasts draw last so they sit above every overlay.
        render_toasts(frame, frame.area(), store);
    }
}
