//! Theme System for spark-widgets.
//!
//! Two kinds of shared parameters live here:
//!
//! - [`Style`] - visual parameters (colors, text size). Shared by reference
//!   (`Rc<Style>`) and inherited: a control without its own style uses the
//!   nearest ancestor's.
//! - [`Metrics`] - geometry configuration (resize handle thresholds, default
//!   control sizes, margins and padding).
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use spark_widgets::{Control, theme::Style, types::Rgba};
//!
//! let panel = Control::new(None);
//! panel.set_style(Some(Rc::new(Style::new(Rgba::from_hex(0x202020)))));
//!
//! let label = Control::new(Some(&panel));
//! // Inherits the panel's style
//! let style = label.get_style(true);
//! ```

use crate::types::{Rgba, Vec2};

// =============================================================================
// Style - shared visual parameters
// =============================================================================

/// Visual parameters handed to widgets while drawing.
///
/// Read-only from the consuming controls' point of view; replace the `Rc`
/// on the owning control to change it.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub color: Rgba,
    pub secondary_color: Rgba,
    pub text_color: Rgba,
    pub text_size: f32,
}

impl Style {
    pub const DEFAULT_COLOR: Rgba = Rgba::from_hex(0x303438);
    pub const DEFAULT_SECONDARY_COLOR: Rgba = Rgba::from_hex(0x3060B0);
    pub const DEFAULT_TEXT_COLOR: Rgba = Rgba::from_hex(0xFFFFFF);
    pub const DEFAULT_TEXT_SIZE: f32 = 13.0;

    /// Style with a single base color for both primary and secondary.
    pub fn new(color: Rgba) -> Self {
        Self {
            color,
            secondary_color: color,
            ..Self::default()
        }
    }

    /// Style with distinct primary and secondary colors.
    pub fn with_secondary(color: Rgba, secondary_color: Rgba) -> Self {
        Self {
            color,
            secondary_color,
            ..Self::default()
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Self::DEFAULT_COLOR,
            secondary_color: Self::DEFAULT_SECONDARY_COLOR,
            text_color: Self::DEFAULT_TEXT_COLOR,
            text_size: Self::DEFAULT_TEXT_SIZE,
        }
    }
}

// =============================================================================
// Metrics - geometry configuration
// =============================================================================

/// Geometry configuration for controls and hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    /// Distance from a border within which the border is a resize handle.
    pub resize_edge_size: i32,
    /// Distance along a flagged border within which the adjacent corner also matches.
    pub resize_corner_size: i32,
    pub default_margin: i32,
    pub default_padding: i32,
    pub default_control_size: Vec2,
    pub default_title_height: i32,
    pub default_window_size: Vec2,
}

impl Metrics {
    pub const DEFAULT: Metrics = Metrics {
        resize_edge_size: 6,
        resize_corner_size: 16,
        default_margin: 2,
        default_padding: 4,
        default_control_size: Vec2::new(90, 22),
        default_title_height: 22,
        default_window_size: Vec2::new(400, 300),
    };
}

impl Default for Metrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// TESTS
// =============================================================================
