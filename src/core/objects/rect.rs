//=========================================================================
// Rect
//=========================================================================
//
// Plain integer rectangle passed to drawing calls. No native handle.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Rect ================================================================

/// Axis-aligned rectangle in pixels, C layout `{ x, y, w, h }`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle with no area (zero or negative extent).
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Overlapping area, or `None` if the rectangles do not overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if self.is_empty() || other.is_empty() {
            return None;
        }

        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return None;
        }

        Some(Rect::new(x, y, right - x, bottom - y))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_when_any_extent_is_non_positive() {
        assert!(Rect::new(0, 0, 0, 10).is_empty());
        assert!(Rect::new(0, 0, 10, -1).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn intersection_clips_to_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Some(Rect::new(5, 5, 5, 5)));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn far_apart_rects_do_not_overflow() {
        let a = Rect::new(i32::MAX - 1, 0, 1, 1);
        let b = Rect::new(i32::MIN, 0, 1, 1);
        assert_eq!(a.intersection(&b), None);
        assert_eq!(b.intersection(&a), None);

        let tall = Rect::new(0, i32::MIN, 4, 1);
        let low = Rect::new(0, i32::MAX - 1, 4, 1);
        assert_eq!(tall.intersection(&low), None);
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(2, 2, 3, 3);
        assert!(rect.contains_point(2, 2));
        assert!(rect.contains_point(4, 4));
        assert!(!rect.contains_point(5, 4));
    }
}
