//! Horizontal viewport over a single line of text.
//!
//! The window scrolls the minimum distance needed to keep the cursor
//! visible; it is never recentered. Offsets are in chars.

/// Visible window `[left, right)` of a line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub left: usize,
    pub right: usize,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of visible chars
    pub fn width(&self) -> usize {
        self.right - self.left
    }

    /// True if the cursor falls inside the window.
    /// A cursor sitting after the last char counts as visible at `right`, and
    /// an empty window holds the single position it sits on.
    pub fn contains(&self, cursor: usize, len: usize) -> bool {
        if cursor == len || self.left == self.right {
            self.left <= cursor && cursor <= self.right
        } else {
            self.left <= cursor && cursor < self.right
        }
    }

    /// Scroll the window so `cursor` is visible in a line of `len` chars.
    ///
    /// Lines that fit are shown whole. Otherwise the window keeps exactly
    /// `width` chars and only moves when the cursor leaves it. A zero width
    /// gives an empty window at the cursor.
    pub fn scroll_into_view(&mut self, cursor: usize, len: usize, width: usize) {
        let cursor = cursor.min(len);

        if len <= width {
            self.left = 0;
            self.right = len;
            return;
        }

        if width == 0 {
            self.left = cursor;
            self.right = cursor;
            return;
        }

        // Re-anchor after the content or width changed under us
        self.right = (self.left + width).min(len);
        self.left = self.right - width;

        if cursor < self.left {
            self.left = cursor;
            self.right = cursor + width;
        } else if cursor >= self.right {
            self.right = (cursor + 1).min(len);
            self.left = self.right - width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_shows_everything() {
        let mut viewport = Viewport::new();
        viewport.scroll_into_view(2, 5, 10);
        assert_eq!(viewport, Viewport { left: 0, right: 5 });
    }

    #[test]
    fn test_scrolls_right_minimally() {
        let mut viewport = Viewport::new();
        viewport.scroll_into_view(0, 20, 5);
        assert_eq!(viewport, Viewport { left: 0, right: 5 });

        viewport.scroll_into_view(4, 20, 5);
        assert_eq!(viewport, Viewport { left: 0, right: 5 });

        viewport.scroll_into_view(5, 20, 5);
        assert_eq!(viewport, Viewport { left: 1, right: 6 });

        viewport.scroll_into_view(12, 20, 5);
        assert_eq!(viewport, Viewport { left: 8, right: 13 });
    }

    #[test]
    fn test_scrolls_left_minimally() {
        let mut viewport = Viewport { left: 8, right: 13 };
        viewport.scroll_into_view(10, 20, 5);
        assert_eq!(viewport, Viewport { left: 8, right: 13 });

        viewport.scroll_into_view(6, 20, 5);
        assert_eq!(viewport, Viewport { left: 6, right: 11 });
    }

    #[test]
    fn test_cursor_at_end_of_line() {
        let mut viewport = Viewport::new();
        viewport.scroll_into_view(20, 20, 5);
        assert_eq!(viewport, Viewport { left: 15, right: 20 });
        assert!(viewport.contains(20, 20));
    }

    #[test]
    fn test_reanchors_after_shrink() {
        let mut viewport = Viewport { left: 15, right: 20 };
        viewport.scroll_into_view(8, 10, 5);
        assert_eq!(viewport, Viewport { left: 5, right: 10 });
    }

    #[test]
    fn test_zero_width() {
        let mut viewport = Viewport { left: 1, right: 4 };
        viewport.scroll_into_view(3, 6, 0);
        assert_eq!(viewport, Viewport { left: 3, right: 3 });
        assert_eq!(viewport.width(), 0);
        assert!(viewport.contains(3, 6));
        assert!(!viewport.contains(4, 6));

        viewport.scroll_into_view(6, 6, 0);
        assert_eq!(viewport, Viewport { left: 6, right: 6 });
        assert!(viewport.contains(6, 6));

        viewport.scroll_into_view(0, 0, 0);
        assert_eq!(viewport, Viewport { left: 0, right: 0 });
    }
}
