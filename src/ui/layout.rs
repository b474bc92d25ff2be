use ratatui::layout::Rect;

/// Split the screen into header, toolbar, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let toolbar_height = 1.min(area.height.saturating_sub(header_height));
    let footer_height = 3.min(area.height.saturating_sub(header_height + toolbar_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let toolbar = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: toolbar_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + toolbar_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + toolbar_height + footer_height),
    };
    (header, toolbar, body, footer)
}

/// Rows of the table that fit in `body` (borders and header row excluded).
pub fn visible_rows(body: Rect) -> usize {
    body.height.saturating_sub(3) as usize
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// A rect hugging the bottom-right corner of `area`.
pub fn corner_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}
