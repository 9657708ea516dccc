//! Core types for spark-widgets.
//!
//! Geometry primitives, colors, and the flag sets that every control carries.
//! Everything here is a plain value type: no tree access, no side effects.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

// =============================================================================
// Clamp helpers
// =============================================================================

/// Raise `value` to `min`. A zero bound means "unconstrained".
#[inline]
pub fn clamp_minimum(value: i32, min: i32) -> i32 {
    if min != 0 && value < min { min } else { value }
}

/// Lower `value` to `max`. A zero bound means "unconstrained".
#[inline]
pub fn clamp_maximum(value: i32, max: i32) -> i32 {
    if max != 0 && value > max { max } else { value }
}

/// Clamp to `[min, max]` where either bound may be zero (unconstrained).
///
/// The maximum is applied first, so a minimum larger than the maximum wins.
#[inline]
pub fn clamp_min_max(value: i32, min: i32, max: i32) -> i32 {
    clamp_minimum(clamp_maximum(value, max), min)
}

// =============================================================================
// Vec2
// =============================================================================

/// Integer 2D vector, used for positions, sizes and deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Set both components. Returns true if anything changed.
    pub fn set(&mut self, x: i32, y: i32) -> bool {
        if self.x != x || self.y != y {
            self.x = x;
            self.y = y;
            true
        } else {
            false
        }
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

// =============================================================================
// Borders
// =============================================================================

/// Per-edge insets (margins, padding, docking reservations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Borders {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Borders {
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Same inset on every edge.
    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Set all four edges. Returns true if anything changed.
    pub fn set(&mut self, other: Borders) -> bool {
        if *self != other {
            *self = other;
            true
        } else {
            false
        }
    }

    #[inline]
    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    #[inline]
    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

// =============================================================================
// Rect
// =============================================================================

/// Integer rectangle: origin plus size, in the owner's local space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub const fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub const fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub const fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Check if a point is inside (right and bottom edges excluded).
    #[inline]
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        !(px < self.x || py < self.y || px >= self.x + self.width || py >= self.y + self.height)
    }

    /// Shrink by per-edge insets.
    pub fn shrink(&self, borders: Borders) -> Rect {
        Rect {
            x: self.x + borders.left,
            y: self.y + borders.top,
            width: self.width - borders.horizontal(),
            height: self.height - borders.vertical(),
        }
    }

    /// Intersection of two rectangles.
    ///
    /// Disjoint rectangles yield the empty rectangle at the origin.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);

        if x1 > x2 || y1 > y2 {
            Rect::default()
        } else {
            Rect::new(x1, y1, x2 - x1, y2 - y1)
        }
    }

    /// Move the left edge by `amount`, keeping the right edge fixed.
    #[inline]
    pub fn shrink_horizontal(&mut self, amount: i32) {
        self.x += amount;
        self.width -= amount;
    }

    /// Move the top edge by `amount`, keeping the bottom edge fixed.
    #[inline]
    pub fn shrink_vertical(&mut self, amount: i32) {
        self.y += amount;
        self.height -= amount;
    }

    /// Grow each axis to at least `size`. Returns true if either axis grew.
    pub fn ensure_minimum_size(&mut self, size: Vec2) -> bool {
        let mut clamped = false;

        if self.width < size.x {
            self.width = size.x;
            clamped = true;
        }

        if self.height < size.y {
            self.height = size.y;
            clamped = true;
        }

        clamped
    }
}

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create an opaque color from `0xRRGGBB`.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(((hex >> 16) & 0xFF) as u8, ((hex >> 8) & 0xFF) as u8, (hex & 0xFF) as u8)
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

// =============================================================================
// Enums
// =============================================================================

/// Which strip of the parent's content rect a child consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Docking {
    #[default]
    None,
    Top,
    Right,
    Bottom,
    Left,
    Client,
}

impl Docking {
    /// Docked to one of the four edges (not None, not Client).
    #[inline]
    pub const fn is_edge(self) -> bool {
        matches!(self, Docking::Top | Docking::Right | Docking::Bottom | Docking::Left)
    }
}

/// Cursor hint derived by the root from the pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseCursor {
    #[default]
    Default,
    Move,
    /// Horizontal resize (left or right edge).
    ResizeH,
    /// Vertical resize (top or bottom edge).
    ResizeV,
    /// Diagonal resize, top-left / bottom-right corners.
    ResizeLR,
    /// Diagonal resize, top-right / bottom-left corners.
    ResizeRL,
}

/// A single pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// The button's bit in a [`MouseButtons`] set.
    #[inline]
    pub const fn flag(self) -> MouseButtons {
        match self {
            MouseButton::Left => MouseButtons::LEFT,
            MouseButton::Middle => MouseButtons::MIDDLE,
            MouseButton::Right => MouseButtons::RIGHT,
        }
    }
}

// =============================================================================
// Flag sets (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Persistent capability bits of a control.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ControlFlags: u32 {
        const VISIBLE = 1 << 0;
        const ENABLED = 1 << 1;
        const CAN_FOCUS = 1 << 2;
        const CAN_MOVE = 1 << 3;
        const CAN_RESIZE = 1 << 4;
        const CAN_DOCK_CHILDREN = 1 << 5;
        const ALWAYS_BRING_TO_FRONT = 1 << 6;
        /// Painted and hit-tested in the parent's padded space, ignoring the undocked offset.
        const PARENT_CLIP = 1 << 7;
        const PRESERVE_DEEP_FOCUS = 1 << 8;
        const PRE_DRAW = 1 << 9;
        const DRAW = 1 << 10;
        const POST_DRAW = 1 << 11;
        const NEEDS_TEXT_INPUT = 1 << 12;
    }
}

bitflags::bitflags! {
    /// Transient state bits, managed by the root.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ControlState: u32 {
        const DISABLED = 1 << 0;
        const HOT = 1 << 1;
        const DOWN = 1 << 2;
        const GRABBED = 1 << 3;
        const FOCUSED = 1 << 4;
        const DEEP_FOCUSED = 1 << 5;
        const MOVING = 1 << 6;
        const RESIZING = 1 << 7;
        const EXCLUSIVE = 1 << 8;
        const SELECTED = 1 << 9;
    }
}

bitflags::bitflags! {
    /// Rectangle edges, used for anchors and resize handles.
    ///
    /// `MOVE` is not an edge: hit-testing reports it alone when the pointer is
    /// over a movable control's title strip.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        const LEFT = 1 << 0;
        const TOP = 1 << 1;
        const RIGHT = 1 << 2;
        const BOTTOM = 1 << 3;
        const MOVE = 1 << 4;

        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
        const LEFT_OR_RIGHT = Self::LEFT.bits() | Self::RIGHT.bits();
        const TOP_OR_BOTTOM = Self::TOP.bits() | Self::BOTTOM.bits();
        const ALL = Self::LEFT.bits() | Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits();
    }
}

impl Edges {
    /// Only the resize edges, without the move sentinel.
    #[inline]
    pub fn resize_edges(self) -> Edges {
        self & Edges::ALL
    }

    /// True for the move sentinel reported by hit-testing.
    #[inline]
    pub fn is_move(self) -> bool {
        self == Edges::MOVE
    }
}

bitflags::bitflags! {
    /// Set of pressed pointer buttons.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        const LEFT = 1 << 0;
        const MIDDLE = 1 << 1;
        const RIGHT = 1 << 2;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bound_is_unconstrained() {
        assert_eq!(clamp_min_max(5, 0, 0), 5);
        assert_eq!(clamp_min_max(5, 10, 0), 10);
        assert_eq!(clamp_min_max(50, 0, 20), 20);
        assert_eq!(clamp_min_max(50, 30, 20), 30);
    }

    #[test]
    fn test_rect_intersect_disjoint_is_empty() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, 20, 5, 5);
        assert_eq!(a.intersect(&b), Rect::default());

        let c = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&c), Rect::new(5, 5, 5, 5));
    }

    #[test]
    fn test_rect_contains_excludes_far_edges() {
        let r = Rect::new(10, 10, 20, 20);
        assert!(r.contains(10, 10));
        assert!(r.contains(29, 29));
        assert!(!r.contains(30, 10));
        assert!(!r.contains(10, 30));
        assert!(!r.contains(9, 15));
    }

    #[test]
    fn test_rect_shrink_and_minimum() {
        let r = Rect::new(0, 0, 100, 50).shrink(Borders::new(1, 2, 3, 4));
        assert_eq!(r, Rect::new(4, 1, 94, 46));

        let mut r = Rect::new(0, 0, 10, 40);
        assert!(r.ensure_minimum_size(Vec2::new(20, 20)));
        assert_eq!(r.size(), Vec2::new(20, 40));
        assert!(!r.ensure_minimum_size(Vec2::new(20, 20)));

        let mut r = Rect::new(0, 0, 10, 10);
        r.shrink_horizontal(-5);
        assert_eq!(r, Rect::new(-5, 0, 15, 10));
    }

    #[test]
    fn test_docking_edges() {
        assert!(Docking::Top.is_edge());
        assert!(Docking::Left.is_edge());
        assert!(!Docking::Client.is_edge());
        assert!(!Docking::None.is_edge());
    }

    #[test]
    fn test_edges_composites() {
        assert_eq!(Edges::TOP | Edges::LEFT, Edges::TOP_LEFT);
        assert_eq!(Edges::ALL.bits().count_ones(), 4);
        assert!(!Edges::ALL.contains(Edges::MOVE));
        assert!(Edges::MOVE.is_move());
        assert!(Edges::MOVE.resize_edges().is_empty());
        assert_eq!((Edges::MOVE | Edges::LEFT).resize_edges(), Edges::LEFT);
    }

    #[test]
    fn test_rgba_from_hex() {
        assert_eq!(Rgba::from_hex(0x3060B0), Rgba::rgb(0x30, 0x60, 0xB0));
        assert_eq!(Rgba::from_hex(0xFFFFFF), Rgba::WHITE);
    }
}
