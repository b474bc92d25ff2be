use crate::model::Item;
use crate::ui::app::{App, BodyView, Focus};
use crate::ui::detail::{DetailDialogState, DetailField};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, corner_rect, layout_regions, visible_rows};
use crate::ui::theme::{
    BORDER, BRAND, CURSOR_ROW, DANGER, DIALOG_BORDER, MUTED, SUCCESS, TEXT, WARNING,
};
use crate::ui::view::SortKey;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;

const DETAIL_WIDTH: u16 = 52;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, toolbar, body, footer) = layout_regions(area);

    let low_stock = app
        .state()
        .items
        .iter()
        .filter(|item| app.query().is_low_stock(item))
        .count();
    frame.render_widget(Header::new().widget(app.state(), low_stock), header);
    frame.render_widget(toolbar_widget(app), toolbar);

    frame.render_widget(Clear, body);
    match app.body_view() {
        BodyView::Loading => render_status(
            frame,
            body,
            vec![Line::styled(
                "Loading inventory...",
                Style::default().fg(WARNING),
            )],
        ),
        BodyView::Error(message) => render_status(
            frame,
            body,
            vec![
                Line::styled(message, Style::default().fg(DANGER)),
                Line::from(""),
                Line::styled("Press r to retry.", Style::default().fg(TEXT)),
            ],
        ),
        BodyView::Empty => render_status(
            frame,
            body,
            vec![Line::styled(
                "No data. Press r to load the inventory.",
                Style::default().fg(TEXT),
            )],
        ),
        BodyView::NoMatches => render_status(
            frame,
            body,
            vec![Line::styled(
                "No items match the current filters.",
                Style::default().fg(TEXT),
            )],
        ),
        BodyView::Table => render_table(frame, body, app),
    }

    frame.render_widget(Footer::new().widget(footer, app.focus()), footer);

    if let Some(text) = app.state().message_text() {
        let width = text.chars().count() as u16 + 4;
        let toast = corner_rect(body, width, 3);
        frame.render_widget(Clear, toast);
        frame.render_widget(
            Paragraph::new(Line::styled(text, Style::default().fg(SUCCESS))).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(SUCCESS)),
            ),
            toast,
        );
    }

    if app.detail().is_visible() {
        render_detail(frame, area, app);
    }
}

fn toolbar_widget(app: &App) -> Paragraph<'static> {
    let query = app.query();
    let label_style = Style::default().fg(MUTED);
    let value_style = Style::default().fg(TEXT);
    let search_style = if app.focus() == Focus::Search {
        Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
    } else {
        value_style
    };
    let cursor = if app.focus() == Focus::Search { "_" } else { "" };
    let category = query
        .category
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| "All".to_string());

    Paragraph::new(Line::from(vec![
        Span::styled(" Search: ", label_style),
        Span::styled(format!("{}{}", app.search_input(), cursor), search_style),
        Span::styled("  │  Category: ", label_style),
        Span::styled(category, value_style),
        Span::styled("  │  Low stock only: ", label_style),
        Span::styled(if query.low_stock_only { "on" } else { "off" }, value_style),
        Span::styled("  │  Sort: ", label_style),
        Span::styled(
            format!("{} {}", query.sort_key.label(), query.sort_dir.arrow()),
            value_style,
        ),
    ]))
}

fn render_status(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'static>>) {
    let padding = area.height.saturating_sub(lines.len() as u16 + 2) / 2;
    let mut content = vec![Line::from(""); padding as usize];
    content.extend(lines);
    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER)),
        ),
        area,
    );
}

fn render_table(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let items = app.visible_items();
    let rows_fit = visible_rows(area).max(1);
    let offset = (app.cursor() + 1).saturating_sub(rows_fit);
    let query = app.query();

    let header_cells = SortKey::ALL.iter().map(|key| {
        let label = if *key == query.sort_key {
            format!("{} {}", key.label(), query.sort_dir.arrow())
        } else {
            key.label().to_string()
        };
        Cell::from(label)
    });
    let header = Row::new(header_cells).style(
        Style::default()
            .fg(TEXT)
            .add_modifier(Modifier::BOLD),
    );

    let rows = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows_fit)
        .map(|(idx, item)| {
            let mut style = Style::default().fg(TEXT);
            if query.is_low_stock(item) {
                style = style.fg(WARNING);
            }
            if idx == app.cursor() {
                style = style.bg(CURSOR_ROW).add_modifier(Modifier::BOLD);
            }
            item_row(item).style(style)
        });

    let widths = [
        Constraint::Length(10),
        Constraint::Min(18),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(7),
        Constraint::Length(17),
    ];
    let title = format!(" {} of {} ", items.len(), app.state().items.len());
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(Span::styled(title, Style::default().fg(MUTED)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER)),
    );
    frame.render_widget(table, area);
}

fn item_row(item: &Item) -> Row<'static> {
    Row::new(vec![
        Cell::from(item.id.clone()),
        Cell::from(item.name.clone()),
        Cell::from(item.category.label()),
        Cell::from(format!("{:>9.2}", item.price)),
        Cell::from(format!("{:>6}", item.stock)),
        Cell::from(item.updated_at.format("%Y-%m-%d %H:%M").to_string()),
    ])
}

fn render_detail(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let DetailDialogState::Visible {
        price,
        stock,
        focused,
        ..
    } = app.detail()
    else {
        return;
    };
    let Some(item) = app.detail_item() else {
        return;
    };
    let errors = app.detail().visible_errors();
    let label_style = Style::default().fg(MUTED);
    let value_style = Style::default().fg(TEXT);
    let error_style = Style::default().fg(DANGER);

    let field_line = |label: &'static str, value: &str, field: DetailField| {
        let active = *focused == field;
        let marker = if active { "› " } else { "  " };
        let style = if active {
            value_style.bg(CURSOR_ROW).add_modifier(Modifier::BOLD)
        } else {
            value_style
        };
        let cursor = if active { "_" } else { "" };
        Line::from(vec![
            Span::styled(marker, Style::default().fg(BRAND)),
            Span::styled(label, label_style),
            Span::styled(format!("{}{}", value, cursor), style),
        ])
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("ID:        ", label_style),
            Span::styled(item.id.clone(), value_style),
        ]),
        Line::from(vec![
            Span::styled("Category:  ", label_style),
            Span::styled(item.category.label(), value_style),
        ]),
        Line::from(vec![
            Span::styled("Updated:   ", label_style),
            Span::styled(
                item.updated_at.format("%Y-%m-%d %H:%M").to_string(),
                value_style,
            ),
        ]),
        Line::from(""),
        field_line("Price:   ", price.as_str(), DetailField::Price),
    ];
    if let Some(err) = &errors.price {
        lines.push(Line::styled(format!("    {}", err), error_style));
    }
    lines.push(field_line("Stock:   ", stock.as_str(), DetailField::Stock));
    if let Some(err) = &errors.stock {
        lines.push(Line::styled(format!("    {}", err), error_style));
    }
    lines.push(Line::from(""));
    let save_hint = if app.detail().can_save() {
        Span::styled("Enter: Save", Style::default().fg(SUCCESS))
    } else {
        Span::styled("Enter: Save", label_style.add_modifier(Modifier::DIM))
    };
    lines.push(Line::from(vec![
        save_hint,
        Span::styled("  Tab: Next field  Esc: Cancel", label_style),
    ]));

    let height = lines.len() as u16 + 2;
    let popup = centered_rect_by_size(area, DETAIL_WIDTH, height);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", item.name),
            Style::default().fg(BRAND),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIALOG_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::UiConfig;
    use crate::inventory::InventoryMachine;
    use crate::source::MockSource;
    use crate::store::MemoryStore;
    use crate::ui::app::{SharedSource, SharedStore};
    use chrono::Utc;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;

    fn app() -> App {
        let catalog = Catalog::new(8, 42, Utc::now());
        let store: SharedStore = Arc::new(MemoryStore::new());
        let source: SharedSource = Arc::new(MockSource::new(catalog.clone()));
        App::new(InventoryMachine::new(store, source, catalog), UiConfig::default())
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn empty_state_prompts_for_load() {
        assert!(screen(&app()).contains("No data. Press r to load the inventory."));
    }

    #[test]
    fn table_and_reset_toast_render() {
        let mut app = app();
        app.reset();
        let text = screen(&app);
        assert!(text.contains("ITM-0001"));
        assert!(text.contains("8 of 8"));
        assert!(text.contains("Inventory restored to the original data."));
    }

    #[test]
    fn detail_dialog_renders_fields() {
        let mut app = app();
        app.reset();
        app.open_selected();
        let text = screen(&app);
        assert!(text.contains("Price:"));
        assert!(text.contains("Stock:"));
        assert!(text.contains("Tab: Next field"));
    }
}
