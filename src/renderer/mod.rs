//! Renderer - Paint traversal over the control tree.
//!
//! The core never touches pixels. Drawing goes through a host-provided
//! [`Canvas`] (a vector graphics context, a software rasterizer, a test
//! recorder), and widgets receive it wrapped in a [`DrawContext`] together
//! with the inherited style and alpha.
//!
//! # Traversal
//!
//! For every visible control, in child order:
//!
//! ```text
//! save, translate to rect origin, apply alpha and style
//!   pre_draw
//!   clip to rect
//!   draw
//!   save, translate past padding + title, clip to content area
//!     docked children
//!     translate by undocked offset
//!     undocked and client children
//!   restore
//!   translate past padding + title
//!   parent-clip children
//!   post_draw
//! restore
//! ```
//!
//! Every callback sees (0, 0) as its control's top-left corner.

use std::rc::Rc;

use crate::engine::{ChildGroup, Control};
use crate::theme::Style;
use crate::types::{ControlFlags, Rect};

// =============================================================================
// Canvas - drawing collaborator
// =============================================================================

/// Host drawing surface with a transform and clip stack.
pub trait Canvas {
    /// Push the current transform, clip and alpha.
    fn save(&mut self);

    /// Pop back to the last [`Canvas::save`].
    fn restore(&mut self);

    fn translate(&mut self, x: i32, y: i32);

    /// Narrow the clip region to `rect` (in the current transform).
    fn intersect_clip(&mut self, rect: Rect);

    fn set_global_alpha(&mut self, alpha: f32);
}

// =============================================================================
// DrawContext
// =============================================================================

/// What a widget gets while drawing.
pub struct DrawContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    /// Style of the nearest styled ancestor (or the control itself).
    pub style: Rc<Style>,
    /// Accumulated alpha of the control and its ancestors.
    pub alpha: f32,
    /// Text cursor blink phase in `[0, 2)`.
    pub cursor_blinker: f64,
}

impl<'a> DrawContext<'a> {
    pub fn new(canvas: &'a mut dyn Canvas, style: Rc<Style>, cursor_blinker: f64) -> Self {
        Self {
            canvas,
            style,
            alpha: 1.0,
            cursor_blinker,
        }
    }

    /// True during the visible half of the text cursor blink period.
    pub fn cursor_visible(&self) -> bool {
        self.cursor_blinker < 1.0
    }
}

// =============================================================================
// Traversal
// =============================================================================

/// Paint `control` and its subtree. Layout must already be up to date.
pub fn traverse(ctx: &mut DrawContext<'_>, control: &Control) {
    let (flags, rect, padding, title_height, undocked_offset, alpha, style) = {
        let d = control.data();
        (d.flags, d.rect, d.padding, d.title_height, d.undocked_offset, d.alpha, d.style.clone())
    };

    if !flags.contains(ControlFlags::VISIBLE) {
        return;
    }

    let saved_style = ctx.style.clone();
    let saved_alpha = ctx.alpha;
    let widget = control.widget();

    ctx.canvas.save();
    ctx.canvas.translate(rect.x, rect.y);

    ctx.alpha *= alpha;
    ctx.canvas.set_global_alpha(ctx.alpha);

    if let Some(style) = style {
        ctx.style = style;
    }

    if flags.contains(ControlFlags::PRE_DRAW) {
        widget.pre_draw(control, ctx);
    }

    ctx.canvas.intersect_clip(Rect::new(0, 0, rect.width, rect.height));

    if flags.contains(ControlFlags::DRAW) {
        widget.draw(control, ctx);
    }

    let children = control.children();
    let content = Rect::new(0, 0, rect.width, rect.height).shrink(padding);
    let content = Rect::new(0, 0, content.width, content.height - title_height);

    ctx.canvas.save();
    ctx.canvas.translate(padding.left, padding.top + title_height);
    ctx.canvas.intersect_clip(content);

    for child in children.iter().filter(|c| c.child_group() == ChildGroup::Docked) {
        traverse(ctx, child);
    }

    ctx.canvas.translate(undocked_offset.x, undocked_offset.y);

    for child in children.iter().filter(|c| c.child_group() == ChildGroup::Undocked) {
        traverse(ctx, child);
    }

    ctx.canvas.restore();

    ctx.canvas.translate(padding.left, padding.top + title_height);

    for child in children.iter().filter(|c| c.child_group() == ChildGroup::Clipped) {
        traverse(ctx, child);
    }

    if flags.contains(ControlFlags::POST_DRAW) {
        widget.post_draw(control, ctx);
    }

    ctx.canvas.restore();

    ctx.style = saved_style;
    ctx.alpha = saved_alpha;
}

// =============================================================================
// TESTS
// =============================================================================
