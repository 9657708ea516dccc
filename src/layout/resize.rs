//! Resize propagation.
//!
//! Resizing a control is a two-step protocol:
//!
//! 1. [`Control::clamp_resize_step`] narrows a requested delta so that no
//!    floating control in the subtree leaves its `[minimum, maximum]` bounds.
//!    Read-only.
//! 2. [`Control::resize_step`] commits the delta, lets floating children
//!    follow their anchors, and re-runs layout.
//!
//! Zero minimum or maximum components mean "unconstrained".

use crate::engine::Control;
use crate::types::{clamp_min_max, Docking, Edges, Rect, Vec2};

impl Control {
    /// Narrow `delta` to the tightest bound found in this subtree.
    ///
    /// Docked controls pass the delta through unchanged, along with their
    /// whole subtree.
    pub fn clamp_resize_step(&self, delta: Vec2) -> Vec2 {
        let (rect, min, max, docking) = {
            let d = self.data();
            (d.rect, d.minimum_size, d.maximum_size, d.docking)
        };

        if docking != Docking::None {
            return delta;
        }

        let width = clamp_min_max(rect.width + delta.x, min.x, max.x);
        let height = clamp_min_max(rect.height + delta.y, min.y, max.y);
        let clamped = Vec2::new(width - rect.width, height - rect.height);

        self.children()
            .iter()
            .fold(clamped, |delta, child| child.clamp_resize_step(delta))
    }

    /// Grow (or shrink) by `delta`, propagate to anchored children, re-layout.
    pub fn resize_step(&self, delta: Vec2) {
        if delta.is_zero() {
            return;
        }

        {
            let mut d = self.data_mut();
            d.rect.width += delta.x;
            d.rect.height += delta.y;
        }

        self.resize_step_children(delta);
        self.layout();
    }

    /// Apply a parent resize to the floating children.
    ///
    /// Per axis: an unanchored near edge slides the child by the delta; a
    /// near edge anchored together with the far edge stretches it instead.
    pub fn resize_step_children(&self, delta: Vec2) {
        for child in self.children() {
            let (docking, anchors) = {
                let c = child.data();
                (c.docking, c.anchors)
            };

            if docking != Docking::None {
                continue;
            }

            let mut shift = Vec2::ZERO;
            let mut stretch = Vec2::ZERO;

            if !anchors.contains(Edges::LEFT) {
                shift.x = delta.x;
            } else if anchors.contains(Edges::RIGHT) {
                stretch.x = delta.x;
            }

            if !anchors.contains(Edges::TOP) {
                shift.y = delta.y;
            } else if anchors.contains(Edges::BOTTOM) {
                stretch.y = delta.y;
            }

            child.offset_position(shift.x, shift.y);
            child.resize_step(stretch);
        }
    }

    /// Move and resize, running the size change through the clamp/commit protocol.
    pub fn set_rect(&self, rect: Rect) {
        let current = self.rect();
        let delta = self.clamp_resize_step(rect.size() - current.size());

        if current.position() == rect.position() && delta.is_zero() {
            return;
        }

        self.offset_position(rect.x - current.x, rect.y - current.y);
        self.resize_step(delta);
        self.set_dirty(true);
    }

    /// Resize to `width` x `height`, clamped to this control's own bounds.
    pub fn set_size(&self, width: i32, height: i32) {
        let (rect, min, max) = {
            let d = self.data();
            (d.rect, d.minimum_size, d.maximum_size)
        };

        let width = clamp_min_max(width, min.x, max.x);
        let height = clamp_min_max(height, min.y, max.y);

        if rect.width != width || rect.height != height {
            self.resize_step(Vec2::new(width - rect.width, height - rect.height));
            self.set_dirty(true);
        }
    }

    pub fn set_minimum_size(&self, width: i32, height: i32) {
        let changed = self.data_mut().minimum_size.set(width, height);
        if changed {
            let size = self.size();
            self.set_size(size.x, size.y);
            self.set_dirty(true);
        }
    }

    pub fn set_maximum_size(&self, width: i32, height: i32) {
        let changed = self.data_mut().maximum_size.set(width, height);
        if changed {
            let size = self.size();
            self.set_size(size.x, size.y);
            self.set_dirty(true);
        }
    }

    /// Size this control to fit its content, optionally sizing visible
    /// descendants first.
    pub fn auto_size(&self, recursive: bool) {
        if recursive {
            for child in self.children() {
                if child.is_visible(false) {
                    child.auto_size(true);
                }
            }
        }

        self.update_content_size();

        let (content, padding, title_height) = {
            let d = self.data();
            (d.content_rect, d.padding, d.title_height)
        };

        self.set_size(
            content.width + padding.horizontal(),
            content.height + padding.vertical() + title_height,
        );
    }
}

// =============================================================================
// TESTS
// =============================================================================
