//! Key-binding help overlay.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::layout::centered_rect;

const BINDINGS: &[(&str, &str)] = &[
    ("1-5 / Tab", "Switch tabs"),
    ("j / k, ↑ / ↓", "Move selection"),
    ("Enter", "Open tool / use tool / buy item"),
    ("Esc", "Close tool or modal"),
    ("l", "Like selected idea (+2 XP)"),
    ("c", "Comment on selected idea (+3 XP)"),
    ("s", "Share selected idea (+10 XP)"),
    ("u", "Upload a reel (+20 XP)"),
    ("a / t / e", "Price alert: pair / trigger / price"),
    ("o / p / d", "Stat-arb: pair 1 / pair 2 / period"),
    ("i, z / g / x", "Stat-arb: about / chart explainers"),
    ("?", "Toggle this help"),
    ("q", "Quit"),
];

/// Help overlay.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help overlay over the current frame.
    pub fn render(frame: &mut Frame) {
        let area = centered_rect(50, 60, frame.area());
        frame.render_widget(Clear, area);

        let mut lines = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, action) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {key:<14}"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )));

        let panel = Paragraph::new(lines).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(panel, area);
    }
}
