//! Placeholder reels grid.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::Store;

/// Reels view: a 2x2 grid of placeholder video cards.
pub struct ReelsView;

impl ReelsView {
    /// Render the reels grid.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let block = Block::default()
            .title(" Trading Reels — [u]pload +20 XP ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        for (row_idx, row_area) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row_area);

            for (col_idx, cell) in cols.iter().enumerate() {
                let index = row_idx * 2 + col_idx;
                if let Some(reel) = store.reels.reels.get(index) {
                    let selected = store.reels.selected_index == index;
                    let border_style = if selected {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };

                    let lines = vec![
                        Line::from(Span::styled(
                            reel.author,
                            Style::default().add_modifier(Modifier::BOLD),
                        )),
                        Line::from(Span::raw(reel.caption)),
                        Line::from(vec![
                            Span::styled(reel.likes_label, Style::default().fg(Color::DarkGray)),
                            Span::raw("  "),
                            Span::styled(reel.comments_label, Style::default().fg(Color::DarkGray)),
                        ]),
                        Line::from(Span::styled(
                            reel.xp_label,
                            Style::default().fg(Color::Green),
                        )),
                    ];

                    let card = Paragraph::new(lines).block(
                        Block::default()
                            .title(" ▶ ")
                            .borders(Borders::ALL)
                            .border_style(border_style),
                    );
                    frame.render_widget(card, *cell);
                }
            }
        }
    }
}
