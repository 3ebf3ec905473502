//! Trade-ideas feed widget.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{Direction as TradeDirection, Store, TradeIdea};

/// Trade ideas feed.
pub struct IdeasView;

impl IdeasView {
    /// Render the ideas feed, one card per post.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let block = Block::default()
            .title(" Trade Ideas — [l]ike +2 XP  [c]omment +3 XP  [s]hare +10 XP ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let card_height = 7u16;
        let constraints: Vec<Constraint> = store
            .ideas
            .ideas
            .iter()
            .map(|_| Constraint::Length(card_height))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();
        let cards = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (i, idea) in store.ideas.ideas.iter().enumerate() {
            let selected = store.ideas.selected_index == Some(i);
            Self::render_card(frame, cards[i], store, idea, selected);
        }
    }

    fn render_card(frame: &mut Frame, area: Rect, store: &Store, idea: &TradeIdea, selected: bool) {
        let direction_style = match idea.direction {
            TradeDirection::Buy => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            TradeDirection::Sell => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };

        let liked = store.ideas.is_liked(&idea.id);
        let like_span = if liked {
            Span::styled(format!("♥ {}", idea.likes), Style::default().fg(Color::Blue))
        } else {
            Span::styled(
                format!("♡ {} (+2 XP)", idea.likes),
                Style::default().fg(Color::DarkGray),
            )
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    idea.author.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" · {} · ", idea.time_ago),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("+{} XP", idea.xp_earned),
                    Style::default().fg(Color::Green),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("{} ", idea.pair),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(idea.direction.to_string(), direction_style),
                Span::raw(format!(
                    "   Entry {}  SL {}  TP {}",
                    idea.entry, idea.stop_loss, idea.take_profit
                )),
            ]),
            Line::from(Span::styled(
                idea.reasoning.clone(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(vec![
                like_span,
                Span::raw("   "),
                Span::styled(
                    format!("🗨 {} (+3 XP)", idea.comments),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];

        let border_style = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(card, area);
    }
}
