//! XP toast rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::Store;
use crate::ui::layout::toast_rect;

/// Render the toast stack in insertion order, newest at the bottom.
/// Toasts that do not fit the terminal height are skipped, not dropped.
pub fn render_toasts(frame: &mut Frame, area: Rect, store: &Store) {
    for (i, toast) in store.notifications.toasts.iter().enumerate() {
        let Some(rect) = toast_rect(area, i) else {
            break;
        };

        frame.render_widget(Clear, rect);

        let content = Line::from(vec![
            Span::raw(format!("{} ", toast.message)),
            Span::styled(
                format!("+{} XP", toast.xp),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(paragraph, rect);
    }
}
