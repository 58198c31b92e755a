use ratatui::layout::Rect;

/// Split the screen into header, optional notification banner, body and
/// footer. The banner is zero-height when there is nothing to show.
pub fn layout_regions(area: Rect, banner: bool) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let banner_height = if banner {
        3.min(area.height.saturating_sub(header_height + footer_height))
    } else {
        0
    };
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let banner = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: banner_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + banner_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + banner_height + footer_height),
    };
    (header, banner, body, footer)
}

/// Rect of at most `width` x `height` centered in `area`.
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
