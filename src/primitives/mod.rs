//! Control presets.
//!
//! Ready-configured controls for the common building blocks:
//! - [`window`] - Movable, resizable top-level frame with a title strip
//! - [`panel`] - Invisible container that only arranges its children
//! - [`button`] - Focusable control that reports Click events
//!
//! Each preset is a plain [`Control`] with its flags, geometry and a widget
//! whose type name identifies it. Nothing stops a caller from adjusting the
//! result further.
//!
//! # Example
//!
//! ```ignore
//! use spark_widgets::{primitives, state::Root, types::Docking};
//!
//! let root = Root::new(1024, 768);
//! let window = primitives::window(Some(root.control()), "Settings");
//! let toolbar = primitives::panel(Some(&window), Docking::Top);
//! let ok = primitives::button(Some(&toolbar), "OK", Docking::Right);
//! ```

use crate::engine::{Control, Widget};
use crate::theme::Metrics;
use crate::types::{Borders, ControlFlags, Docking};

/// Widget of a [`window`] control.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowWidget;

impl Widget for WindowWidget {
    fn type_name(&self) -> &'static str {
        "Window"
    }
}

/// Widget of a [`panel`] control.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanelWidget;

impl Widget for PanelWidget {
    fn type_name(&self) -> &'static str {
        "Panel"
    }
}

/// Widget of a [`button`] control.
#[derive(Debug, Default, Clone, Copy)]
pub struct ButtonWidget;

impl Widget for ButtonWidget {
    fn type_name(&self) -> &'static str {
        "Button"
    }
}

/// Top-level frame: focusable, movable by its title strip, resizable by its
/// borders, raised when grabbed, painted unclipped by its parent's padding.
pub fn window(parent: Option<&Control>, title: &str) -> Control {
    let metrics = Metrics::DEFAULT;
    let control = Control::with_widget(parent, WindowWidget);

    control.add_flags(
        ControlFlags::CAN_FOCUS
            | ControlFlags::CAN_MOVE
            | ControlFlags::CAN_RESIZE
            | ControlFlags::ALWAYS_BRING_TO_FRONT
            | ControlFlags::PRESERVE_DEEP_FOCUS
            | ControlFlags::PARENT_CLIP
            | ControlFlags::PRE_DRAW,
    );
    control.set_text(title);
    control.set_title_height(metrics.default_title_height);
    control.set_size(metrics.default_window_size.x, metrics.default_window_size.y);
    control.set_minimum_size(metrics.default_title_height * 2, metrics.default_title_height);

    control
}

/// Layout-only container (no drawing, no padding).
pub fn panel(parent: Option<&Control>, docking: Docking) -> Control {
    let control = Control::with_widget(parent, PanelWidget);
    control.remove_flags(ControlFlags::DRAW);
    control.set_padding(Borders::all(0));
    control.set_docking(docking);
    control
}

/// Focusable push button labelled `text`.
pub fn button(parent: Option<&Control>, text: &str, docking: Docking) -> Control {
    let control = Control::with_widget(parent, ButtonWidget);
    control.add_flags(ControlFlags::CAN_FOCUS);
    control.set_text(text);
    control.set_docking(docking);
    control
}

// =============================================================================
// TESTS
// =============================================================================
