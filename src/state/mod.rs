//! State management for TraderVerse.
//!
//! Centralized state with a unidirectional data flow: input events become
//! `Action`s, and `Store::reduce` is the single synchronous transition
//! function. Deferred work (toast expiry) re-enters through the action
//! channel.

mod app_state;
mod ideas_state;
mod notifications;
mod reels_state;
mod tools_state;
mod xp_state;

pub use app_state::{AppState, InputMode, Tab};
pub use ideas_state::{Direction, IdeasState, TradeIdea, sample_ideas};
pub use notifications::{NotificationState, XpToast, schedule_expiry};
pub use reels_state::{Reel, ReelsState, sample_reels};
pub use tools_state::{
    AlertKind, ChartInfo, CorrelationEntry, EconomicEvent, Impact, SentimentEntry, StrengthEntry,
    Tool, ToolsState, correlation_data, currency_strength, economic_events, market_sentiment,
};
pub use xp_state::{XpAward, XpItem, XpItemCategory, XpState, catalog};

use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SetTab(Tab),
    NextTab,
    PreviousTab,
    ToggleHelp,

    // List/grid movement within the active tab
    ScrollUp,
    ScrollDown,

    // Tools
    OpenSelectedTool,
    OpenTool(Tool),
    CloseTool,
    UseTool,

    // Ideas
    LikeIdea(String),
    CommentIdea(String),
    ShareIdea,

    // Reels
    UploadReel,

    // XP store
    PurchaseSelected,

    // Price-alert form
    CycleAlertPair,
    CycleAlertKind,
    EditAlertPrice,
    InputChar(char),
    InputBackspace,
    CommitInput,
    CancelInput,

    // Statistical-arbitrage sub-widget
    CycleStatArbPair1,
    CycleStatArbPair2,
    CycleStatArbPeriod,
    ToggleStatArbInfo,
    ShowChartInfo(ChartInfo),
    CloseModal,

    // Toast expiry (dispatched by the per-toast timer)
    ExpireToast(u64),

    // Quit
    Quit,
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// XP ledger and store catalog.
    pub xp: XpState,
    /// XP toast queue.
    pub notifications: NotificationState,
    /// Trade-idea feed.
    pub ideas: IdeasState,
    /// Tool panels.
    pub tools: ToolsState,
    /// Reels.
    pub reels: ReelsState,
    /// Action sender for deferred dispatch.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with the given action sender.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            app: AppState::new(),
            xp: XpState::default(),
            notifications: NotificationState::default(),
            ideas: IdeasState::default(),
            tools: ToolsState::default(),
            reels: ReelsState::default(),
            action_tx,
        }
    }

    /// A sender clone for deferred tasks.
    pub fn sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::SetTab(tab) => self.app.active_tab = tab,
            Action::NextTab => self.app.active_tab = self.app.active_tab.next(),
            Action::PreviousTab => self.app.active_tab = self.app.active_tab.previous(),
            Action::ToggleHelp => {
                // At most one overlay at a time.
                self.tools.close_modals();
                self.app.show_help = !self.app.show_help;
            }

            // Movement
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),

            // Tools
            Action::OpenSelectedTool => {
                self.tools.selected_tool = Some(self.tools.grid_tool());
            }
            Action::OpenTool(tool) => self.tools.selected_tool = Some(tool),
            Action::CloseTool => self.tools.close_tool(),
            Action::UseTool => self.credit(XpAward::UseTool),

            // Ideas
            Action::LikeIdea(id) => {
                if self.ideas.like(&id) {
                    self.credit(XpAward::LikeIdea);
                }
            }
            Action::CommentIdea(id) => {
                if self.ideas.comment(&id) {
                    self.credit(XpAward::CommentIdea);
                }
            }
            Action::ShareIdea => self.credit(XpAward::ShareIdea),

            // Reels
            Action::UploadReel => self.credit(XpAward::UploadReel),

            // XP store. Failure is silent: the buy affordance renders
            // disabled and an unaffordable purchase changes nothing.
            Action::PurchaseSelected => {
                let index = self.xp.selected_index;
                if self.xp.purchase(index) {
                    tracing::info!(index, balance = self.xp.balance, "purchased store item");
                }
            }

            // Price-alert form
            Action::CycleAlertPair => self.tools.cycle_alert_pair(),
            Action::CycleAlertKind => self.tools.alert_kind = self.tools.alert_kind.next(),
            Action::EditAlertPrice => {
                self.app.input_mode = InputMode::Insert;
                self.app.clear_input();
                let existing = self.tools.alert_price.clone();
                for c in existing.chars() {
                    self.app.push_char(c);
                }
            }
            Action::InputChar(c) => {
                if self.app.is_editing() {
                    self.app.push_char(c);
                }
            }
            Action::InputBackspace => {
                if self.app.is_editing() {
                    self.app.pop_char();
                }
            }
            Action::CommitInput => {
                self.tools.alert_price = self.app.input_buffer.clone();
                self.app.clear_input();
                self.app.input_mode = InputMode::Normal;
            }
            Action::CancelInput => {
                self.app.clear_input();
                self.app.input_mode = InputMode::Normal;
            }

            // Statistical arbitrage
            Action::CycleStatArbPair1 => self.tools.cycle_stat_arb_pair1(),
            Action::CycleStatArbPair2 => self.tools.cycle_stat_arb_pair2(),
            Action::CycleStatArbPeriod => self.tools.cycle_period(),
            Action::ToggleStatArbInfo => {
                let open = self.tools.show_stat_arb_info;
                self.app.show_help = false;
                self.tools.close_modals();
                self.tools.show_stat_arb_info = !open;
            }
            Action::ShowChartInfo(info) => {
                self.app.show_help = false;
                self.tools.close_modals();
                self.tools.chart_info = Some(info);
            }
            Action::CloseModal => {
                self.app.show_help = false;
                self.tools.close_modals();
            }

            // Toast expiry
            Action::ExpireToast(id) => self.notifications.remove(id),

            // Quit
            Action::Quit => self.app.should_quit = true,
        }
    }

    /// Credit an award and push its toast.
    fn credit(&mut self, award: XpAward) {
        self.xp.credit(award.amount());
        self.notifications.push(award.label(), award.amount());
        tracing::debug!(
            award = award.label(),
            amount = award.amount(),
            balance = self.xp.balance,
            "credited XP"
        );
    }

    fn scroll(&mut self, delta: i32) {
        match self.app.active_tab {
            Tab::Tools => {
                if self.tools.selected_tool.is_none() {
                    self.tools.move_grid(delta);
                }
            }
            Tab::Ideas => self.ideas.move_selection(delta),
            Tab::Reels => self.reels.move_selection(delta),
            Tab::XpStore => self.xp.move_selection(delta),
            Tab::Home => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(tx)
    }

    #[test]
    fn test_like_credits_exactly_once() {
        let mut store = test_store();
        store.reduce(Action::LikeIdea("1".to_string()));
        store.reduce(Action::LikeIdea("1".to_string()));

        assert_eq!(store.xp.balance, 1252);
        assert_eq!(store.notifications.len(), 1);
        assert!(store.ideas.is_liked("1"));
        assert_eq!(store.ideas.liked.len(), 1);
    }

    #[test]
    fn test_comment_credits_every_time() {
        let mut store = test_store();
        for _ in 0..4 {
            store.reduce(Action::CommentIdea("1".to_string()));
        }
        assert_eq!(store.xp.balance, 1250 + 4 * 3);
        assert_eq!(store.notifications.len(), 4);
    }

    #[test]
    fn test_use_tool_credits_and_labels_toast() {
        let mut store = test_store();
        store.reduce(Action::UseTool);
        assert_eq!(store.xp.balance, 1255);
        assert_eq!(store.notifications.toasts[0].message, "Used trading tool");
        assert_eq!(store.notifications.toasts[0].xp, 5);
    }

    #[test]
    fn test_purchase_failure_is_silent() {
        let mut store = test_store();
        let badge = store.xp.items.iter().position(|i| i.cost == 5000).unwrap();
        store.xp.selected_index = badge;
        store.reduce(Action::PurchaseSelected);
        assert_eq!(store.xp.balance, 1250);
        assert!(store.notifications.is_empty());
    }

    #[test]
    fn test_purchase_ad_free_scenario() {
        let mut store = test_store();
        let ad_free = store.xp.items.iter().position(|i| i.cost == 500).unwrap();
        store.xp.selected_index = ad_free;
        store.reduce(Action::PurchaseSelected);
        assert_eq!(store.xp.balance, 750);
        assert_eq!(store.xp.ad_free_hours_remaining, 24);
    }

    #[test]
    fn test_expire_toast_removes_by_id() {
        let mut store = test_store();
        store.reduce(Action::UseTool);
        let id = store.notifications.toasts[0].id;
        store.reduce(Action::ExpireToast(id));
        assert!(store.notifications.is_empty());
        // Firing again for the same id is a no-op.
        store.reduce(Action::ExpireToast(id));
        assert!(store.notifications.is_empty());
    }

    #[test]
    fn test_one_overlay_at_a_time() {
        let mut store = test_store();
        store.reduce(Action::ToggleHelp);
        assert!(store.app.show_help);

        store.reduce(Action::ToggleStatArbInfo);
        assert!(!store.app.show_help);
        assert!(store.tools.show_stat_arb_info);

        store.reduce(Action::ShowChartInfo(ChartInfo::Garch));
        assert!(!store.tools.show_stat_arb_info);
        assert_eq!(store.tools.chart_info, Some(ChartInfo::Garch));

        store.reduce(Action::CloseModal);
        assert!(!store.tools.modal_open());
    }

    #[test]
    fn test_tab_switching() {
        let mut store = test_store();
        store.reduce(Action::SetTab(Tab::Ideas));
        assert_eq!(store.app.active_tab, Tab::Ideas);
        store.reduce(Action::NextTab);
        assert_eq!(store.app.active_tab, Tab::Reels);
        store.reduce(Action::PreviousTab);
        assert_eq!(store.app.active_tab, Tab::Ideas);
    }

    #[test]
    fn test_open_and_close_tool() {
        let mut store = test_store();
        store.reduce(Action::SetTab(Tab::Tools));
        store.reduce(Action::ScrollDown);
        store.reduce(Action::OpenSelectedTool);
        assert_eq!(store.tools.selected_tool, Some(Tool::PositionSize));
        store.reduce(Action::CloseTool);
        assert_eq!(store.tools.selected_tool, None);
    }

    #[test]
    fn test_alert_price_editing_roundtrip() {
        let mut store = test_store();
        store.reduce(Action::EditAlertPrice);
        assert!(store.app.is_editing());
        for c in "1.0850".chars() {
            store.reduce(Action::InputChar(c));
        }
        store.reduce(Action::InputBackspace);
        store.reduce(Action::CommitInput);
        assert_eq!(store.tools.alert_price, "1.085");
        assert!(!store.app.is_editing());

        // Cancel discards edits but keeps the committed value.
        store.reduce(Action::EditAlertPrice);
        store.reduce(Action::InputChar('9'));
        store.reduce(Action::CancelInput);
        assert_eq!(store.tools.alert_price, "1.085");
    }

    #[test]
    fn test_share_and_upload_credit() {
        let mut store = test_store();
        store.reduce(Action::ShareIdea);
        store.reduce(Action::UploadReel);
        assert_eq!(store.xp.balance, 1250 + 10 + 20);
        assert_eq!(store.notifications.len(), 2);
    }
}
