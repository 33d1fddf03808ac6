//! Cell sides and the packed side mask.
//!
//! Bit values follow the PDF cell model (`TOP = 1`, `BOTTOM = 2`, `LEFT = 4`,
//! `RIGHT = 8`) so masks read the same as the documents they end up in.
//! Iteration order over [`Side::ALL`] is the stroke order used by the
//! renderer: top, right, bottom, left (clockwise starting at the top-left
//! corner).

use bitflags::bitflags;
use serde::Deserialize;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SideFlags: u8 {
        const TOP    = 0b0000_0001;
        const BOTTOM = 0b0000_0010;
        const LEFT   = 0b0000_0100;
        const RIGHT  = 0b0000_1000;
        const BOX = Self::TOP.bits() | Self::BOTTOM.bits() | Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

impl SideFlags {
    pub const NONE: SideFlags = SideFlags::empty();

    /// Sides present in the mask, in stroke order.
    pub fn sides(self) -> impl Iterator<Item = Side> {
        Side::ALL.into_iter().filter(move |s| self.contains(s.flag()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    #[inline]
    pub const fn flag(self) -> SideFlags {
        match self {
            Side::Top => SideFlags::TOP,
            Side::Right => SideFlags::RIGHT,
            Side::Bottom => SideFlags::BOTTOM,
            Side::Left => SideFlags::LEFT,
        }
    }

    /// Slot used by per-side arrays.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }

    /// Horizontal sides run along the rectangle's width.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

impl From<Side> for SideFlags {
    fn from(side: Side) -> Self {
        side.flag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_contains_every_side() {
        for side in Side::ALL {
            assert!(SideFlags::BOX.contains(side.flag()));
        }
        assert_eq!(SideFlags::BOX.bits(), 15);
    }

    #[test]
    fn sides_iterate_in_stroke_order() {
        let got: Vec<Side> = SideFlags::BOX.sides().collect();
        assert_eq!(got, vec![Side::Top, Side::Right, Side::Bottom, Side::Left]);
        let partial: Vec<Side> = (SideFlags::LEFT | SideFlags::TOP).sides().collect();
        assert_eq!(partial, vec![Side::Top, Side::Left]);
    }

    #[test]
    fn index_is_unique_per_side() {
        let mut seen = [false; 4];
        for side in Side::ALL {
            assert!(!seen[side.index()]);
            seen[side.index()] = true;
        }
    }
}
