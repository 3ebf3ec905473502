//! Application-level state.

/// The five bottom-nav tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Tools,
    Ideas,
    Reels,
    XpStore,
}

impl Tab {
    /// All tabs in nav order.
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Tools, Tab::Ideas, Tab::Reels, Tab::XpStore];

    /// Display label for the tab bar.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Tools => "Tools",
            Tab::Ideas => "Ideas",
            Tab::Reels => "Reels",
            Tab::XpStore => "XP Store",
        }
    }

    /// The next tab in nav order, wrapping.
    pub fn next(&self) -> Tab {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous tab in nav order, wrapping.
    pub fn previous(&self) -> Tab {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Editing a free-text field (the price-alert target price).
    Insert,
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Currently active tab.
    pub active_tab: Tab,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Whether to show the help overlay.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Current free-text input.
    pub input_buffer: String,
    /// Byte offset of the cursor in the input buffer.
    pub cursor_position: usize,
}

impl AppState {
    /// Create a new application state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if in an input mode.
    pub fn is_editing(&self) -> bool {
        self.input_mode == InputMode::Insert
    }

    /// Clear the input buffer.
    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }

    /// Add a character to the input buffer.
    pub fn push_char(&mut self, c: char) {
        self.input_buffer.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    /// Remove the character before the cursor.
    pub fn pop_char(&mut self) {
        if let Some((offset, _)) = self.input_buffer[..self.cursor_position]
            .char_indices()
            .next_back()
        {
            self.input_buffer.remove(offset);
            self.cursor_position = offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::XpStore.next(), Tab::Home);
        assert_eq!(Tab::Home.previous(), Tab::XpStore);

        let mut tab = Tab::Home;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Home);
    }

    #[test]
    fn test_input_buffer_editing() {
        let mut state = AppState::new();
        state.push_char('1');
        state.push_char('.');
        state.push_char('0');
        assert_eq!(state.input_buffer, "1.0");
        state.pop_char();
        assert_eq!(state.input_buffer, "1.");
        state.clear_input();
        assert_eq!(state.input_buffer, "");
        assert_eq!(state.cursor_position, 0);
        // Popping an empty buffer is a no-op.
        state.pop_char();
        assert_eq!(state.input_buffer, "");
    }
}
