//! Tools tab: the tool grid and the seven simple tool panels.
//!
//! The statistical-arbitrage panel lives in its own module.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::state::{
    InputMode, Store, Tool, correlation_data, currency_strength, economic_events,
    market_sentiment,
};

use super::stat_arb::StatArbView;

/// Tools view.
pub struct ToolsView;

impl ToolsView {
    /// Render the tool grid or the open tool panel.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        match store.tools.selected_tool {
            None => Self::render_grid(frame, area, store),
            Some(Tool::StatisticalArbitrage) => StatArbView::render(frame, area, store),
            Some(tool) => Self::render_panel(frame, area, store, tool),
        }
    }

    fn render_grid(frame: &mut Frame, area: Rect, store: &Store) {
        let block = Block::default()
            .title(" Trading Tools — +5 XP per use ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        for (i, tool) in Tool::ALL.iter().enumerate() {
            let selected = store.tools.grid_index == i;
            let marker = if selected { "▶ " } else { "  " };
            let name_style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<24}", tool.name()), name_style),
                Span::styled(tool.description(), Style::default().fg(Color::DarkGray)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  j/k move · Enter open",
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_panel(frame: &mut Frame, area: Rect, store: &Store, tool: Tool) {
        let block = Block::default()
            .title(format!(" {} ", tool.name()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        match tool {
            Tool::PipCalculator => Self::render_pip_calculator(frame, chunks[0]),
            Tool::PositionSize => Self::render_position_size(frame, chunks[0]),
            Tool::EconomicCalendar => Self::render_calendar(frame, chunks[0]),
            Tool::MarketSentiment => Self::render_sentiment(frame, chunks[0]),
            Tool::CurrencyStrength => Self::render_strength(frame, chunks[0]),
            Tool::CorrelationMatrix => Self::render_correlations(frame, chunks[0]),
            Tool::PriceAlerts => Self::render_alerts(frame, chunks[0], store),
            Tool::StatisticalArbitrage => unreachable!("rendered by StatArbView"),
        }

        let footer = Paragraph::new(Line::from(Span::styled(
            format!("  [Enter] {} (+5 XP) · [Esc] back to tools", tool.action_label()),
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(footer, chunks[1]);
    }

    // The calculators show fixed placeholder results regardless of input.
    fn render_pip_calculator(frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Account Currency (USD)",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Currency Pair (EUR/USD)",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Trade Size (100000)",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Pip Value: "),
                Span::styled("$10.00", Style::default().add_modifier(Modifier::BOLD)),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_position_size(frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Account Balance ($10,000)",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Risk Percentage (2%)",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Entry Price (1.0850)",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Stop Loss (1.0800)",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Position Size: "),
                Span::styled("4,000 units", Style::default().add_modifier(Modifier::BOLD)),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_calendar(frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for event in economic_events() {
            lines.push(Line::from(vec![
                Span::styled(
                    event.event,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {} - {}  ", event.time, event.currency)),
                Span::styled(
                    event.impact.to_string(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!(
                    "  Forecast: {} | Previous: {}",
                    event.forecast, event.previous
                ),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_sentiment(frame: &mut Frame, area: Rect) {
        let entries = market_sentiment();
        let constraints: Vec<Constraint> =
            entries.iter().map(|_| Constraint::Length(2)).collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, entry) in entries.iter().enumerate() {
            let leaning = if entry.bullish > entry.bearish {
                "Bullish"
            } else {
                "Bearish"
            };
            let gauge = Gauge::default()
                .label(format!(
                    "{}  {}  Bullish {}% / Bearish {}%",
                    entry.pair, leaning, entry.bullish, entry.bearish
                ))
                .ratio(entry.bullish as f64 / 100.0)
                .gauge_style(Style::default().fg(Color::Green).bg(Color::Red));
            frame.render_widget(gauge, rows[i]);
        }
    }

    fn render_strength(frame: &mut Frame, area: Rect) {
        let entries = currency_strength();
        let constraints: Vec<Constraint> =
            entries.iter().map(|_| Constraint::Length(2)).collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, entry) in entries.iter().enumerate() {
            let color = if entry.strength > 70 {
                Color::Green
            } else if entry.strength > 50 {
                Color::Yellow
            } else {
                Color::Red
            };
            let gauge = Gauge::default()
                .label(format!(
                    "{}  {}  ({})",
                    entry.currency, entry.strength, entry.change
                ))
                .ratio(entry.strength as f64 / 100.0)
                .gauge_style(Style::default().fg(color));
            frame.render_widget(gauge, rows[i]);
        }
    }

    fn render_correlations(frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for entry in correlation_data() {
            let color = if entry.correlation > 0.5 {
                Color::Green
            } else if entry.correlation < -0.5 {
                Color::Red
            } else {
                Color::Yellow
            };
            lines.push(Line::from(vec![
                Span::raw(format!("{:<24}", entry.pairs)),
                Span::styled(
                    format!("{:+.2}", entry.correlation),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_alerts(frame: &mut Frame, area: Rect, store: &Store) {
        let editing = store.app.input_mode == InputMode::Insert;
        let price = if editing {
            format!("{}▏", store.app.input_buffer)
        } else if store.tools.alert_price.is_empty() {
            "e.g., 1.0850".to_string()
        } else {
            store.tools.alert_price.clone()
        };
        let price_style = if editing {
            Style::default().fg(Color::Yellow)
        } else if store.tools.alert_price.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let lines = vec![
            Line::from(vec![
                Span::raw("Pair:         "),
                Span::styled(
                    store.tools.alert_pair_name(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled("  [a] cycle", Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(vec![
                Span::raw("Trigger:      "),
                Span::styled(
                    store.tools.alert_kind.label(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled("  [t] cycle", Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(vec![
                Span::raw("Target Price: "),
                Span::styled(price, price_style),
                Span::styled("  [e] edit", Style::default().fg(Color::DarkGray)),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}
