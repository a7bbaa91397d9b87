//! Axis-aligned bounding boxes
//!
//! Every collision in the game is a rectangle overlap test: ball against
//! paddle, ball against brick cell. Boxes are half-open, so two boxes that
//! only share an edge do not overlap.

use glam::IVec2;

/// An axis-aligned rectangle in window pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

    /// Rectangle of the given size with its top-left corner at `origin`
    pub fn at(origin: IVec2, size: IVec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// True if the two boxes share any interior area
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_interior() {
        let a = Rect::new(0, 0, 50, 20);
        let b = Rect::new(40, 10, 20, 20);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = Rect::new(0, 0, 50, 20);
        let right = Rect::new(50, 0, 50, 20);
        let below = Rect::new(0, 20, 50, 20);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 5, 5);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_at_origin_and_edges() {
        let r = Rect::at(IVec2::new(10, 10), IVec2::new(5, 5));
        assert_eq!(r.origin(), IVec2::new(10, 10));
        assert_eq!((r.right(), r.bottom()), (15, 15));
        assert!(r.overlaps(&Rect::new(14, 14, 1, 1)));
        assert!(!r.overlaps(&Rect::new(15, 14, 1, 1)));
    }
}
