//! Declarative border description (table files, config).
//!
//! A `BorderDecl` is applied through the regular mutation API, so the
//! auto-enable rule for positive widths holds for declared borders too.
//! Unset fields leave the base state untouched, so declarations layer: a
//! table-wide declaration first, then per-cell overrides.

use crate::color::Color;
use crate::side::Side;
use crate::state::{BorderState, BorderStyle};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SideDecl {
    pub width: Option<f32>,
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BorderDecl {
    /// Sides enabled up front, independent of widths.
    pub sides: Vec<Side>,
    pub width: Option<f32>,
    pub color: Option<Color>,
    pub style: Option<BorderStyle>,
    pub top: SideDecl,
    pub right: SideDecl,
    pub bottom: SideDecl,
    pub left: SideDecl,
}

impl BorderDecl {
    fn side(&self, side: Side) -> &SideDecl {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    /// Build a state on top of `base` (usually carrying configured defaults).
    pub fn apply_to(&self, mut base: BorderState) -> BorderState {
        if let Some(w) = self.width {
            base.set_default_width(w);
        }
        if self.color.is_some() {
            base.set_default_color(self.color);
        }
        if let Some(style) = self.style {
            base.set_style(style);
        }
        for side in &self.sides {
            base.enable_side(*side);
        }
        for side in Side::ALL {
            let decl = self.side(side);
            if let Some(w) = decl.width {
                base.set_width(side, w);
            }
            if decl.color.is_some() {
                base.set_color(side, decl.color);
            }
        }
        base
    }

    pub fn to_state(&self) -> BorderState {
        self.apply_to(BorderState::new())
    }
}
