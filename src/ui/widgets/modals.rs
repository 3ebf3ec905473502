//! Explainer modals for the statistical-arbitrage panel.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{ChartInfo, Store};
use crate::ui::layout::centered_rect;

/// Render whichever tools-owned modal is open, if any.
pub fn render_tool_modals(frame: &mut Frame, store: &Store) {
    if store.tools.show_stat_arb_info {
        render_stat_arb_info(frame);
    } else if let Some(chart) = store.tools.chart_info {
        render_chart_info(frame, chart);
    }
}

fn render_stat_arb_info(frame: &mut Frame) {
    let area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "What is Statistical Arbitrage?",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(
            "Statistical arbitrage exploits temporary mispricings between \
             correlated currency pairs. When the spread between two pairs \
             deviates from its historical mean, a mean-reversion trade is \
             opened: sell the spread when it is unusually wide, buy it when \
             it is unusually narrow.",
        ),
        Line::from(""),
        Line::from(
            "The z-score measures how many standard deviations the current \
             spread sits from its mean. Readings beyond ±2 are treated as \
             trade signals; readings inside that band are HOLD.",
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or Enter to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let modal = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" About Statistical Arbitrage ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(modal, area);
}

fn render_chart_info(frame: &mut Frame, chart: ChartInfo) {
    let (title, body) = match chart {
        ChartInfo::ZScore => (
            " Z-Score Chart ",
            "The z-score chart normalizes the pair spread against a fixed \
             mean of 0.005 and standard deviation of 0.003. Values above +2 \
             flag SELL, below -2 flag BUY, and everything in between is HOLD.",
        ),
        ChartInfo::Garch => (
            " Volatility Forecast ",
            "The volatility panel shows a 30-day realized-volatility track \
             alongside a one-step forecast, in the style of a GARCH model \
             output. Both series here are simulated placeholders.",
        ),
        ChartInfo::Percentage => (
            " Percentage Spread ",
            "The percentage spread tracks two price walks and plots their \
             relative difference: (pair1 / pair2 - 1) * 100. Divergence from \
             zero indicates the pairs are drifting apart.",
        ),
    };

    let area = centered_rect(50, 35, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(body),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or Enter to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let modal = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(modal, area);
}
