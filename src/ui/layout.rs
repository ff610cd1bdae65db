use ratatui::layout::Rect;

const HEADER_HEIGHT: u16 = 3;
const STATS_HEIGHT: u16 = 4;
const FOOTER_HEIGHT: u16 = 3;

/// Screen areas, top to bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenRegions {
    pub header: Rect,
    /// The clickable dessert.
    pub dessert: Rect,
    pub stats: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> ScreenRegions {
    let header_height = area.height.min(HEADER_HEIGHT);
    let remaining = area.height.saturating_sub(header_height);
    let footer_height = remaining.min(FOOTER_HEIGHT);
    let remaining = remaining.saturating_sub(footer_height);
    let stats_height = remaining.min(STATS_HEIGHT);
    let dessert_height = remaining.saturating_sub(stats_height);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let dessert = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: dessert_height,
    };
    let stats = Rect {
        x: area.x,
        y: dessert.y + dessert_height,
        width: area.width,
        height: stats_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    ScreenRegions {
        header,
        dessert,
        stats,
        footer,
    }
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

/// True if the cell at (`col`, `row`) lies inside `rect`.
pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && row >= rect.y
        && col < rect.x.saturating_add(rect.width)
        && row < rect.y.saturating_add(rect.height)
}
