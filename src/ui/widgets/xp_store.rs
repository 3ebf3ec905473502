//! XP store widget: catalog, affordability, earn table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::state::{Store, XpAward, XpItemCategory};

/// XP store view.
pub struct XpStoreView;

impl XpStoreView {
    /// Render the store catalog and the earn-XP reference table.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),                                    // Catalog
                Constraint::Length(XpAward::ALL.len() as u16 + 3),     // Earn table
            ])
            .split(area);

        Self::render_catalog(frame, chunks[0], store);
        Self::render_earn_table(frame, chunks[1]);
    }

    fn render_catalog(frame: &mut Frame, area: Rect, store: &Store) {
        let header_cells = ["Item", "Category", "Cost", "Status"].iter().map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = store.xp.items.iter().map(|item| {
            let affordable = store.xp.can_afford(item.cost);
            let category = match item.category {
                XpItemCategory::Premium => "premium",
                XpItemCategory::Boost => "boost",
                XpItemCategory::Cosmetic => "cosmetic",
            };
            let status = if affordable {
                Cell::from("✓ Affordable — Enter to buy").style(Style::default().fg(Color::Green))
            } else {
                Cell::from(format!("Need {} more XP", item.cost - store.xp.balance))
                    .style(Style::default().fg(Color::Red))
            };

            Row::new(vec![
                Cell::from(format!("{} — {}", item.title, item.description)),
                Cell::from(category),
                Cell::from(format!("{} XP", item.cost)),
                status,
            ])
            .height(1)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(50),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Min(20),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" XP Store — {} XP ", store.xp.balance))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(Some(store.xp.selected_index));

        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_earn_table(frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            "Earn More XP",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        for award in XpAward::ALL {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  +{:<4}", award.amount()),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(award.description()),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(paragraph, area);
    }
}
