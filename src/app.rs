//! Main application module.
//!
//! Coordinates the event loop, state management, and rendering. Deferred
//! work (toast expiry timers) re-enters through the action channel.

use crate::config::Config;
use crate::error::Result;
use crate::events::EventHandler;
use crate::state::{Action, Store, schedule_expiry};
use crate::ui::Ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// How long a toast stays on screen.
    toast_duration: Duration,
    /// Whether mouse capture was enabled, for restore on drop.
    mouse_capture: bool,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if config.ui.mouse_support {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Create store, seeded from the session config
        let mut store = Store::new(action_tx);
        store.xp.balance = config.session.starting_xp;
        store.xp.ad_free_hours = config.session.ad_free_hours;

        // Create event handler
        let event_handler = EventHandler::new(config.keybindings.clone());

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            toast_duration: Duration::from_millis(config.session.toast_duration_ms),
            mouse_capture: config.ui.mouse_support,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            self.terminal.draw(|frame| {
                Ui::render(frame, &self.store);
            })?;

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.apply(action);
                    }
                }

                // Handle actions from the channel (expiry timers)
                Some(action) = self.action_rx.recv() => {
                    self.apply(action);
                }
            }

            if self.store.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Reduce an action, then schedule expiry for any toasts it pushed.
    fn apply(&mut self, action: Action) {
        tracing::debug!(?action, "applying action");
        self.store.reduce(action);

        for id in self.store.notifications.take_pending() {
            schedule_expiry(self.store.sender(), id, self.toast_duration);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        if self.mouse_capture {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = self.terminal.show_cursor();
    }
}
