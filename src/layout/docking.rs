//! Docking layout.
//!
//! # Algorithm
//!
//! 1. **Content size**: start from the rect minus padding and title, reserve
//!    a border strip for every edge-docked child, grow outward to cover
//!    floating children that overflow, and never go below what the docked
//!    children need.
//! 2. **Arrangement**: carve the content rect edge by edge in child order.
//!    Top/Right/Bottom/Left children take a strip, the Client child takes
//!    whatever remains.
//!
//! Floating (`Docking::None`) children are never repositioned here; painting
//! and hit-testing translate them by the undocked offset.
//!
//! A clamped docked child makes the content size stale, so [`Control::layout`]
//! re-runs both passes, bounded by [`MAX_ARRANGE_PASSES`].

use crate::engine::Control;
use crate::types::{clamp_minimum, Borders, ControlFlags, Docking, Rect, Vec2};

/// Upper bound on arrangement passes per layout request.
pub const MAX_ARRANGE_PASSES: usize = 2;

impl Control {
    /// Recompute the content rect and undocked offset from the children.
    pub fn update_content_size(&self) {
        let (rect, padding, title_height) = {
            let d = self.data();
            (d.rect, d.padding, d.title_height)
        };

        let mut content = Rect::new(
            0,
            0,
            rect.width - padding.horizontal(),
            rect.height - padding.vertical() - title_height,
        );

        let mut borders = Borders::default();
        let mut minimum_docking = Vec2::ZERO;
        // (top-left, bottom-right) of visible, unclipped floating children
        let mut undocked: Option<(Vec2, Vec2)> = None;

        for child in self.children() {
            let c = child.data();
            if !c.flags.contains(ControlFlags::VISIBLE) {
                continue;
            }

            let min = c.minimum_size;

            match c.docking {
                Docking::None => {
                    if c.flags.contains(ControlFlags::PARENT_CLIP) {
                        continue;
                    }

                    let (top_left, bottom_right) = (c.rect.top_left(), c.rect.bottom_right());
                    undocked = Some(match undocked {
                        None => (top_left, bottom_right),
                        Some((tl, br)) => (
                            Vec2::new(tl.x.min(top_left.x), tl.y.min(top_left.y)),
                            Vec2::new(br.x.max(bottom_right.x), br.y.max(bottom_right.y)),
                        ),
                    });
                }
                Docking::Top => {
                    borders.top += clamp_minimum(c.rect.height, min.y) + c.margins.bottom;
                    if min.x != 0 {
                        minimum_docking.x = minimum_docking.x.max(borders.horizontal() + min.x);
                    }
                }
                Docking::Right => {
                    borders.right += clamp_minimum(c.rect.width, min.x) + c.margins.left;
                    if min.y != 0 {
                        minimum_docking.y = minimum_docking.y.max(borders.vertical() + min.y);
                    }
                }
                Docking::Bottom => {
                    borders.bottom += clamp_minimum(c.rect.height, min.y) + c.margins.top;
                    if min.x != 0 {
                        minimum_docking.x = minimum_docking.x.max(borders.horizontal() + min.x);
                    }
                }
                Docking::Left => {
                    borders.left += clamp_minimum(c.rect.width, min.x) + c.margins.right;
                    if min.y != 0 {
                        minimum_docking.y = minimum_docking.y.max(borders.vertical() + min.y);
                    }
                }
                Docking::Client => {}
            }
        }

        if let Some((top_left, bottom_right)) = undocked {
            if top_left.x < 0 {
                content.shrink_horizontal(top_left.x);
            }
            if top_left.y < 0 {
                content.shrink_vertical(top_left.y);
            }

            let limit = content.bottom_right() - Vec2::new(borders.horizontal(), borders.vertical());
            if bottom_right.x > limit.x {
                content.width += bottom_right.x - limit.x;
            }
            if bottom_right.y > limit.y {
                content.height += bottom_right.y - limit.y;
            }
        }

        content.width = content.width.max(minimum_docking.x).max(borders.horizontal());
        content.height = content.height.max(minimum_docking.y).max(borders.vertical());

        let mut d = self.data_mut();
        d.content_rect = content;
        d.undocked_offset = Vec2::new(borders.left, borders.top);
    }

    /// One arrangement pass: update the content size, then commit every
    /// docked child's rect.
    ///
    /// Returns true when a child had to be grown to its minimum size, which
    /// means the content size computed at the start of the pass is stale.
    pub fn arrange_children(&self) -> bool {
        self.update_content_size();

        let mut remaining = self.content_rect();
        let mut needs_rearranging = false;
        let children: Vec<Control> = self
            .children()
            .into_iter()
            .filter(|child| child.has_flags(ControlFlags::VISIBLE))
            .collect();

        for child in &children {
            let (mut r, margins, min, docking) = {
                let c = child.data();
                (c.rect, c.margins, c.minimum_size, c.docking)
            };

            match docking {
                Docking::Top => {
                    r.x = remaining.x;
                    r.y = remaining.y;
                    r.width = remaining.width;
                    needs_rearranging |= r.ensure_minimum_size(min);
                    remaining.shrink_vertical(r.height + margins.bottom);
                }
                Docking::Right => {
                    r.y = remaining.y;
                    r.height = remaining.height;
                    needs_rearranging |= r.ensure_minimum_size(min);
                    r.x = remaining.x + remaining.width - r.width;
                    remaining.width -= r.width + margins.left;
                }
                Docking::Bottom => {
                    r.x = remaining.x;
                    r.width = remaining.width;
                    needs_rearranging |= r.ensure_minimum_size(min);
                    r.y = remaining.y + remaining.height - r.height;
                    remaining.height -= r.height + margins.top;
                }
                Docking::Left => {
                    r.x = remaining.x;
                    r.y = remaining.y;
                    r.height = remaining.height;
                    needs_rearranging |= r.ensure_minimum_size(min);
                    remaining.shrink_horizontal(r.width + margins.right);
                }
                Docking::None | Docking::Client => continue,
            }

            child.set_rect(r);
        }

        // Client sits in the undocked group, already translated by the
        // left/top borders, so its origin is zero.
        for child in &children {
            if child.docking() != Docking::Client {
                continue;
            }

            let mut r = Rect::new(0, 0, remaining.width, remaining.height);
            needs_rearranging |= r.ensure_minimum_size(child.minimum_size());
            child.set_rect(r);
        }

        needs_rearranging
    }

    /// Run arrangement passes until nothing is clamped, at most
    /// [`MAX_ARRANGE_PASSES`] times.
    pub fn layout(&self) {
        for pass in 1..=MAX_ARRANGE_PASSES {
            if !self.arrange_children() {
                return;
            }

            if pass == MAX_ARRANGE_PASSES {
                debug!(control = self.id(), passes = pass, "layout still clamped after re-arrange cap");
            }
        }
    }

    /// Bring every dirty control in this subtree up to date, parents first.
    pub fn update_layout(&self) {
        if self.is_dirty() {
            self.layout();
            self.clear_dirty();
        }

        for child in self.children() {
            child.update_layout();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
