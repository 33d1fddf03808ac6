//! Per-cell border state.
//!
//! Invariants:
//! * A side is drawn iff it is enabled AND its resolved width is `> 0`.
//! * `set_width(side, w)` with `w > 0` enables the side. Zero or negative
//!   widths are stored as given and never disable a side on their own.
//! * `width(side)` is `0.0` for a disabled side regardless of what is stored.
//! * `resolved_color(side)` never fails: per-side color, then default color,
//!   then black.
//!
//! The state is mutated while the owning cell is built and only read while
//! rendering; nothing in here knows how borders are drawn.

use crate::color::Color;
use crate::side::{Side, SideFlags};
use serde::Deserialize;

/// Border width a new cell starts with (the PDF cell model default).
pub const DEFAULT_BORDER_WIDTH: f32 = 0.5;

/// Target dash length of a dashed side before parity correction.
pub const DEFAULT_DASH_UNIT: f32 = 2.5;

/// Color used when neither a per-side nor a default color is set.
pub const FALLBACK_COLOR: Color = Color::BLACK;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BorderState {
    enabled: SideFlags,
    default_width: f32,
    widths: [Option<f32>; 4],
    default_color: Option<Color>,
    colors: [Option<Color>; 4],
    style: BorderStyle,
}

impl Default for BorderState {
    fn default() -> Self {
        Self::new()
    }
}

impl BorderState {
    pub fn new() -> Self {
        Self {
            enabled: SideFlags::NONE,
            default_width: DEFAULT_BORDER_WIDTH,
            widths: [None; 4],
            default_color: None,
            colors: [None; 4],
            style: BorderStyle::Solid,
        }
    }

    pub fn enable_side(&mut self, side: Side) {
        self.enabled |= side.flag();
    }

    pub fn disable_side(&mut self, side: Side) {
        self.enabled &= !side.flag();
    }

    #[inline]
    pub fn has_side(&self, side: Side) -> bool {
        self.enabled.contains(side.flag())
    }

    pub fn enabled_sides(&self) -> SideFlags {
        self.enabled
    }

    /// Replace the whole mask at once (the PDF `Border` property).
    pub fn set_enabled_sides(&mut self, sides: SideFlags) {
        self.enabled = sides;
    }

    /// Store an explicit width for `side`; positive widths enable it.
    pub fn set_width(&mut self, side: Side, width: f32) {
        self.widths[side.index()] = Some(width);
        if width > 0.0 {
            self.enable_side(side);
        }
    }

    /// Forget the explicit width so the side falls back to the default.
    pub fn clear_width(&mut self, side: Side) {
        self.widths[side.index()] = None;
    }

    /// Explicitly stored width, if any, ignoring the enable mask.
    pub fn explicit_width(&self, side: Side) -> Option<f32> {
        self.widths[side.index()]
    }

    /// Resolved width: `0.0` when disabled, else explicit width or default.
    pub fn width(&self, side: Side) -> f32 {
        if !self.has_side(side) {
            return 0.0;
        }
        self.widths[side.index()].unwrap_or(self.default_width)
    }

    pub fn default_width(&self) -> f32 {
        self.default_width
    }

    pub fn set_default_width(&mut self, width: f32) {
        self.default_width = width;
    }

    pub fn set_color(&mut self, side: Side, color: Option<Color>) {
        self.colors[side.index()] = color;
    }

    /// Explicit per-side color only.
    pub fn color(&self, side: Side) -> Option<Color> {
        self.colors[side.index()]
    }

    pub fn default_color(&self) -> Option<Color> {
        self.default_color
    }

    pub fn set_default_color(&mut self, color: Option<Color>) {
        self.default_color = color;
    }

    pub fn resolved_color(&self, side: Side) -> Color {
        self.colors[side.index()]
            .or(self.default_color)
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn style(&self) -> BorderStyle {
        self.style
    }

    pub fn set_style(&mut self, style: BorderStyle) {
        self.style = style;
    }

    /// Aggregate liveness check used to decide whether a cell needs a
    /// border pass at all. Not a per-side gate.
    pub fn has_borders(&self) -> bool {
        if self.enabled.is_empty() {
            return false;
        }
        let sides: f32 = Side::ALL.iter().map(|s| self.width(*s)).sum();
        self.default_width + sides > 0.0
    }

    /// Sides that will actually produce a stroke.
    pub fn drawn_sides(&self) -> impl Iterator<Item = Side> + '_ {
        self.enabled.sides().filter(move |s| self.width(*s) > 0.0)
    }

    // Builder-style helpers for table construction code.

    pub fn with_side(mut self, side: Side) -> Self {
        self.enable_side(side);
        self
    }

    pub fn with_width(mut self, side: Side, width: f32) -> Self {
        self.set_width(side, width);
        self
    }

    pub fn with_default_width(mut self, width: f32) -> Self {
        self.set_default_width(width);
        self
    }

    pub fn with_color(mut self, side: Side, color: Color) -> Self {
        self.set_color(side, Some(color));
        self
    }

    pub fn with_default_color(mut self, color: Color) -> Self {
        self.set_default_color(Some(color));
        self
    }

    pub fn with_style(mut self, style: BorderStyle) -> Self {
        self.set_style(style);
        self
    }
}
