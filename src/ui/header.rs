use crate::inventory::{InventoryState, LoadPhase};
use crate::ui::theme::{BORDER, BRAND, DANGER, MUTED, SUCCESS, TEXT, WARNING};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &InventoryState, low_stock: usize) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let separator_style = Style::default().fg(MUTED);
        let (status_icon, status_text, status_color) = match state.load_phase {
            LoadPhase::Idle => ("○", "Idle", MUTED),
            LoadPhase::Loading => ("◌", "Loading", WARNING),
            LoadPhase::Error => ("●", "Error", DANGER),
            LoadPhase::Loaded => ("●", "Loaded", SUCCESS),
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Stockroom",
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(status_icon, Style::default().fg(status_color)),
            Span::styled(format!(" {}", status_text), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} items", state.items.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{} low stock", low_stock),
                Style::default().fg(if low_stock > 0 { WARNING } else { TEXT }),
            ),
        ];
        if state.can_undo() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("undo available", text_style));
        }
        if state.pending_force_error {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                "next load fails",
                Style::default().fg(DANGER),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(BORDER)),
        )
    }
}
