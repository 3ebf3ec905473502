//! Event handler for processing input events.

use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, ChartInfo, InputMode, Store, Tab, Tool};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keybindings: KeyBindings,
    /// Store reference for state-aware handling.
    store_snapshot: Option<StoreSnapshot>,
}

/// Snapshot of relevant store state for event handling.
#[derive(Clone)]
struct StoreSnapshot {
    input_mode: InputMode,
    active_tab: Tab,
    selected_tool: Option<Tool>,
    modal_open: bool,
    selected_idea_id: Option<String>,
    selected_item_affordable: bool,
}

impl EventHandler {
    /// Create a new event handler with the given bindings.
    pub fn new(keybindings: KeyBindings) -> Self {
        Self {
            keybindings,
            store_snapshot: None,
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        let affordable = store
            .xp
            .selected_item()
            .map(|item| store.xp.can_afford(item.cost))
            .unwrap_or(false);
        self.store_snapshot = Some(StoreSnapshot {
            input_mode: store.app.input_mode,
            active_tab: store.app.active_tab,
            selected_tool: store.tools.selected_tool,
            modal_open: store.app.show_help || store.tools.modal_open(),
            selected_idea_id: store.ideas.selected_idea().map(|i| i.id.clone()),
            selected_item_affordable: affordable,
        });
    }

    /// Get the next action from user input.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            match event {
                CrosstermEvent::Key(key) => {
                    if let Some(action) = self.handle_key(key) {
                        return Ok(Some(action));
                    }
                }
                CrosstermEvent::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse(mouse) {
                        return Ok(Some(action));
                    }
                }
                CrosstermEvent::Resize(_, _) => {
                    // Terminal will automatically redraw
                }
                _ => {}
            }
        }
        Ok(None)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let snapshot = self.store_snapshot.as_ref()?;

        match snapshot.input_mode {
            InputMode::Normal => self.handle_normal_mode(key, snapshot),
            InputMode::Insert => Self::handle_insert_mode(key),
        }
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }

    fn handle_normal_mode(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = super::InputEvent::from(key);

        // A modal swallows everything except dismissal and quit.
        if snapshot.modal_open {
            if input.matches(&self.keybindings.back)
                || input.matches(&self.keybindings.select)
                || input.matches(&self.keybindings.help)
            {
                return Some(Action::CloseModal);
            }
            if input.matches(&self.keybindings.quit) {
                return Some(Action::Quit);
            }
            return None;
        }

        // Global shortcuts
        if input.matches(&self.keybindings.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&self.keybindings.help) {
            return Some(Action::ToggleHelp);
        }

        // Tab switching
        if input.matches(&self.keybindings.home) {
            return Some(Action::SetTab(Tab::Home));
        }
        if input.matches(&self.keybindings.tools) {
            return Some(Action::SetTab(Tab::Tools));
        }
        if input.matches(&self.keybindings.ideas) {
            return Some(Action::SetTab(Tab::Ideas));
        }
        if input.matches(&self.keybindings.reels) {
            return Some(Action::SetTab(Tab::Reels));
        }
        if input.matches(&self.keybindings.xp_store) {
            return Some(Action::SetTab(Tab::XpStore));
        }
        if key.code == KeyCode::Tab {
            return Some(Action::NextTab);
        }
        if key.code == KeyCode::BackTab {
            return Some(Action::PreviousTab);
        }

        // Navigation
        if input.matches(&self.keybindings.up) || key.code == KeyCode::Up {
            return Some(Action::ScrollUp);
        }
        if input.matches(&self.keybindings.down) || key.code == KeyCode::Down {
            return Some(Action::ScrollDown);
        }

        // Tab-specific actions
        match snapshot.active_tab {
            Tab::Home => None,
            Tab::Tools => self.handle_tools_tab(key, snapshot),
            Tab::Ideas => self.handle_ideas_tab(key, snapshot),
            Tab::Reels => self.handle_reels_tab(key),
            Tab::XpStore => self.handle_store_tab(key, snapshot),
        }
    }

    fn handle_tools_tab(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = super::InputEvent::from(key);

        let Some(tool) = snapshot.selected_tool else {
            // Grid view: Enter opens the tool under the cursor.
            if input.matches(&self.keybindings.select) {
                return Some(Action::OpenSelectedTool);
            }
            return None;
        };

        if input.matches(&self.keybindings.back) {
            return Some(Action::CloseTool);
        }
        // Enter triggers the open tool's "+5 XP" action.
        if input.matches(&self.keybindings.select) {
            return Some(Action::UseTool);
        }

        match tool {
            Tool::PriceAlerts => match key.code {
                KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::CycleAlertPair),
                KeyCode::Char('t') | KeyCode::Char('T') => Some(Action::CycleAlertKind),
                KeyCode::Char('e') | KeyCode::Char('E') => Some(Action::EditAlertPrice),
                _ => None,
            },
            Tool::StatisticalArbitrage => match key.code {
                KeyCode::Char('o') | KeyCode::Char('O') => Some(Action::CycleStatArbPair1),
                KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::CycleStatArbPair2),
                KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::CycleStatArbPeriod),
                KeyCode::Char('i') | KeyCode::Char('I') => Some(Action::ToggleStatArbInfo),
                KeyCode::Char('z') | KeyCode::Char('Z') => {
                    Some(Action::ShowChartInfo(ChartInfo::ZScore))
                }
                KeyCode::Char('g') | KeyCode::Char('G') => {
                    Some(Action::ShowChartInfo(ChartInfo::Garch))
                }
                KeyCode::Char('x') | KeyCode::Char('X') => {
                    Some(Action::ShowChartInfo(ChartInfo::Percentage))
                }
                _ => None,
            },
            _ => None,
        }
    }

    fn handle_ideas_tab(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = super::InputEvent::from(key);
        let idea_id = snapshot.selected_idea_id.as_ref()?;

        if input.matches(&self.keybindings.like) {
            return Some(Action::LikeIdea(idea_id.clone()));
        }
        if input.matches(&self.keybindings.comment) {
            return Some(Action::CommentIdea(idea_id.clone()));
        }
        if input.matches(&self.keybindings.share) {
            return Some(Action::ShareIdea);
        }

        None
    }

    fn handle_reels_tab(&self, key: KeyEvent) -> Option<Action> {
        let input = super::InputEvent::from(key);

        if input.matches(&self.keybindings.upload) {
            return Some(Action::UploadReel);
        }

        None
    }

    fn handle_store_tab(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = super::InputEvent::from(key);

        // The buy affordance is disabled client-side when unaffordable.
        if input.matches(&self.keybindings.select) && snapshot.selected_item_affordable {
            return Some(Action::PurchaseSelected);
        }

        None
    }

    fn handle_insert_mode(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::CancelInput),
            KeyCode::Enter => Some(Action::CommitInput),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Char(c) => Some(Action::InputChar(c)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Store;
    use tokio::sync::mpsc;

    fn handler_for(store: &Store) -> EventHandler {
        let mut handler = EventHandler::new(KeyBindings::default());
        handler.update_store_snapshot(store);
        handler
    }

    fn test_store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(tx)
    }

    #[test]
    fn test_help_key_dismisses_open_overlay() {
        let mut store = test_store();
        store.reduce(Action::ToggleHelp);
        let handler = handler_for(&store);

        let question = KeyEvent::from(KeyCode::Char('?'));
        assert!(matches!(
            handler.handle_key(question),
            Some(Action::CloseModal)
        ));
        let esc = KeyEvent::from(KeyCode::Esc);
        assert!(matches!(handler.handle_key(esc), Some(Action::CloseModal)));
    }

    #[test]
    fn test_open_modal_swallows_tab_keys() {
        let mut store = test_store();
        store.reduce(Action::ToggleHelp);
        let handler = handler_for(&store);

        let three = KeyEvent::from(KeyCode::Char('3'));
        assert!(handler.handle_key(three).is_none());
    }

    #[test]
    fn test_store_tab_enter_gated_on_affordability() {
        let mut store = test_store();
        store.reduce(Action::SetTab(crate::state::Tab::XpStore));
        let enter = KeyEvent::from(KeyCode::Enter);

        // Default selection is affordable at the starting balance.
        let handler = handler_for(&store);
        assert!(matches!(
            handler.handle_key(enter),
            Some(Action::PurchaseSelected)
        ));

        store.xp.balance = 0;
        let handler = handler_for(&store);
        assert!(handler.handle_key(enter).is_none());
    }
}
