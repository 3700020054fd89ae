use ratatui::layout::Rect;

/// A `width` x `height` rectangle centred in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_and_clamps() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect(100, 50, area), area);
        let offset = Rect::new(10, 5, 20, 10);
        assert_eq!(centered_rect(10, 4, offset), Rect::new(15, 8, 10, 4));
    }
}
