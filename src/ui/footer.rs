use crate::ui::app::Focus;
use crate::ui::theme::{BORDER, BRAND, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(focus: Focus) -> &'static str {
        match focus {
            Focus::Table => {
                " ↑↓: Move │ Enter: Edit │ /: Search │ c: Category │ l: Low stock │ s/S: Sort │ r: Reload │ u: Undo │ x: Reset │ f: Fail next │ q: Quit"
            }
            Focus::Search => " Type to filter by name │ Enter/Esc: Done",
            Focus::Detail => " Tab: Switch field │ Enter: Save │ Esc: Cancel",
        }
    }

    fn mode(focus: Focus) -> &'static str {
        match focus {
            Focus::Table => " TABLE ",
            Focus::Search => " SEARCH ",
            Focus::Detail => " EDIT ",
        }
    }

    pub fn widget(&self, area: Rect, focus: Focus) -> Paragraph<'static> {
        let mode = Self::mode(focus);
        let hints = Self::hints(focus);
        let version = format!("v{} ", VERSION);

        // Char count, not byte count
        let used = mode.chars().count() + hints.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
        let mode_style = Style::default()
            .fg(BRAND)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED);

        let line = Line::from(vec![
            Span::styled(mode, mode_style),
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER)),
        )
    }
}
