//! Row-based viewport intersection.

/// The window of page rows currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First visible page row.
    pub offset: u16,
    /// Number of visible rows.
    pub height: u16,
    /// Rows trimmed from both edges before testing intersection, so an
    /// element has to be properly on screen rather than grazing an edge.
    pub margin: u16,
}

impl Viewport {
    pub fn new(offset: u16, height: u16) -> Self {
        Self {
            offset,
            height,
            margin: 0,
        }
    }

    pub fn with_margin(mut self, margin: u16) -> Self {
        self.margin = margin;
        self
    }

    /// Visible `[top, bottom)` page rows after the margin is applied.
    pub fn bounds(&self) -> (u32, u32) {
        let top = self.offset as u32 + self.margin as u32;
        let bottom = (self.offset as u32 + self.height as u32).saturating_sub(self.margin as u32);
        (top, bottom.max(top))
    }

    /// True if any of rows `[top, top + height)` fall inside the viewport.
    pub fn intersects(&self, top: u16, height: u16) -> bool {
        if height == 0 {
            return false;
        }
        let (view_top, view_bottom) = self.bounds();
        if view_top == view_bottom {
            return false;
        }
        let (top, bottom) = (top as u32, top as u32 + height as u32);
        top < view_bottom && bottom > view_top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_inside_viewport() {
        let vp = Viewport::new(10, 20);
        assert!(vp.intersects(10, 1));
        assert!(vp.intersects(29, 1));
        assert!(!vp.intersects(30, 1));
        assert!(!vp.intersects(9, 1));
    }

    #[test]
    fn test_partial_overlap_counts() {
        let vp = Viewport::new(10, 20);
        assert!(vp.intersects(5, 6));
        assert!(!vp.intersects(5, 5));
    }

    #[test]
    fn test_margin_shrinks_both_edges() {
        let vp = Viewport::new(10, 20).with_margin(1);
        assert!(!vp.intersects(10, 1));
        assert!(vp.intersects(11, 1));
        assert!(vp.intersects(28, 1));
        assert!(!vp.intersects(29, 1));
    }

    #[test]
    fn test_empty_viewport_sees_nothing() {
        let vp = Viewport::new(0, 0);
        assert!(!vp.intersects(0, 100));
        let vp = Viewport::new(0, 2).with_margin(1);
        assert!(!vp.intersects(0, 100));
    }

    #[test]
    fn test_zero_height_element_never_visible() {
        assert!(!Viewport::new(0, 50).intersects(10, 0));
    }
}
