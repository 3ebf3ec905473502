//! Home tab: hero stats, ad-free banner, feature list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::Store;

/// Home view.
pub struct HomeView;

impl HomeView {
    /// Render the home view.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Hero
                Constraint::Length(3), // Win rate / followers
                Constraint::Length(3), // Ad-free banner
                Constraint::Min(0),    // Features
            ])
            .split(area);

        Self::render_hero(frame, chunks[0], store);
        Self::render_stats(frame, chunks[1]);
        if store.xp.ad_free_hours_remaining > 0 {
            Self::render_ad_free_banner(frame, chunks[2], store);
        }
        Self::render_features(frame, chunks[3]);
    }

    fn render_hero(frame: &mut Frame, area: Rect, store: &Store) {
        let lines = vec![
            Line::from(Span::styled(
                "TraderVerse",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Trade smarter. Share louder. Learn faster.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(vec![
                Span::styled(
                    format!("{} ", store.xp.balance),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("XP Points   "),
                Span::styled("47 ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("Ideas Shared   "),
                Span::styled("12 ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("Reels Posted"),
            ]),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_stats(frame: &mut Frame, area: Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let win_rate = Paragraph::new(Line::from(vec![
            Span::raw("Win Rate: "),
            Span::styled(
                "73%",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(win_rate, halves[0]);

        let followers = Paragraph::new(Line::from(vec![
            Span::raw("Followers: "),
            Span::styled(
                "324",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(followers, halves[1]);
    }

    fn render_ad_free_banner(frame: &mut Frame, area: Rect, store: &Store) {
        let banner = Paragraph::new(Line::from(vec![
            Span::styled(
                "Ad-Free Active ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "{} hours remaining",
                store.xp.ad_free_hours_remaining
            )),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(banner, area);
    }

    fn render_features(frame: &mut Frame, area: Rect) {
        let features = [
            (
                "Trading Tools",
                "Professional calculators, alerts, and analysis tools",
            ),
            (
                "Trade Ideas Hub",
                "Share and discover profitable trading opportunities",
            ),
            (
                "Trading Reels",
                "Short-form educational and analysis content",
            ),
        ];

        let mut lines = vec![Line::from(Span::styled(
            "App Features",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        for (title, description) in features {
            lines.push(Line::from(vec![
                Span::styled(format!("  {title}: "), Style::default().fg(Color::Cyan)),
                Span::styled(description, Style::default().fg(Color::DarkGray)),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }
}
