//! Statistical-arbitrage panel: z-score bars, volatility sparkline,
//! percentage-spread bars.
//!
//! All three datasets are regenerated from the thread RNG on every frame, so
//! the charts flicker with fresh values. That matches the panel's mock
//! nature; nothing here is persisted.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Sparkline},
};

use crate::analytics::{Signal, StatArbSnapshot, ThreadRngSource};
use crate::state::Store;

/// Statistical-arbitrage view.
pub struct StatArbView;

impl StatArbView {
    /// Render the full stat-arb panel.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let snapshot = StatArbSnapshot::generate(&mut ThreadRngSource);

        let block = Block::default()
            .title(format!(
                " Statistical Arbitrage — {} / {} · {}-period ",
                store.tools.stat_arb_pair1_name(),
                store.tools.stat_arb_pair2_name(),
                store.tools.period_label(),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Current readings
                Constraint::Min(6),    // Z-score bars
                Constraint::Length(4), // Volatility sparkline
                Constraint::Length(4), // Percentage spread
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        Self::render_readings(frame, chunks[0], &snapshot);
        Self::render_z_scores(frame, chunks[1], &snapshot);
        Self::render_volatility(frame, chunks[2], &snapshot);
        Self::render_percentage(frame, chunks[3], &snapshot);

        let footer = Paragraph::new(Line::from(Span::styled(
            "  [o/p] pairs · [d] period · [i] about · [z/g/x] chart info · [Enter] Run Analysis (+5 XP)",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(footer, chunks[4]);
    }

    fn render_readings(frame: &mut Frame, area: Rect, snapshot: &StatArbSnapshot) {
        let latest = snapshot.latest_z();
        let signal_style = match latest.signal {
            Signal::Buy => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Signal::Sell => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Signal::Hold => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        };

        let lines = vec![
            Line::from(vec![
                Span::raw("Z-Score: "),
                Span::styled(
                    format!("{:.2}", latest.z_score),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("   Signal: "),
                Span::styled(latest.signal.to_string(), signal_style),
                Span::raw("   Spread: "),
                Span::styled(
                    format!("{:.5}", latest.spread),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("Volatility: "),
                Span::styled(
                    format!("{:.4}", snapshot.latest_volatility().volatility),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("   Forecast: "),
                Span::styled(
                    format!("{:.4}", snapshot.latest_volatility().forecast),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("   Spread %: "),
                Span::styled(
                    format!("{:+.2}%", snapshot.latest_spread().percentage),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    // Last ten z-scores as colored bars, shifted positive for the chart.
    fn render_z_scores(frame: &mut Frame, area: Rect, snapshot: &StatArbSnapshot) {
        let tail = &snapshot.z_scores[snapshot.z_scores.len().saturating_sub(10)..];
        let bars: Vec<Bar> = tail
            .iter()
            .map(|point| {
                let color = match point.signal {
                    Signal::Buy => Color::Green,
                    Signal::Sell => Color::Red,
                    Signal::Hold => Color::Cyan,
                };
                // Bar heights must be unsigned; offset by +6 so z of -6..+6 fits.
                let value = ((point.z_score + 6.0).max(0.0) * 10.0) as u64;
                Bar::default()
                    .value(value)
                    .text_value(format!("{:.1}", point.z_score))
                    .style(Style::default().fg(color))
            })
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .title(" Z-Score (last 10) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(5)
            .bar_gap(1);
        frame.render_widget(chart, area);
    }

    fn render_volatility(frame: &mut Frame, area: Rect, snapshot: &StatArbSnapshot) {
        let data: Vec<u64> = snapshot
            .volatility
            .iter()
            .map(|point| (point.volatility * 10_000.0) as u64)
            .collect();

        let sparkline = Sparkline::default()
            .block(
                Block::default()
                    .title(" Volatility (30-day) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .data(&data)
            .style(Style::default().fg(Color::Magenta));
        frame.render_widget(sparkline, area);
    }

    fn render_percentage(frame: &mut Frame, area: Rect, snapshot: &StatArbSnapshot) {
        // Shift the percentage series positive the same way as the z-scores.
        let data: Vec<u64> = snapshot
            .spread
            .iter()
            .map(|point| ((point.percentage + 25.0).max(0.0) * 10.0) as u64)
            .collect();

        let sparkline = Sparkline::default()
            .block(
                Block::default()
                    .title(" Spread % (100 points) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .data(&data)
            .style(Style::default().fg(Color::Blue));
        frame.render_widget(sparkline, area);
    }
}
