//! Layout geometry consumed by the border renderer.
//!
//! `Rect` is the only thing the renderer needs from a host layout engine.
//! `TableLayout` is a minimal fixed grid used by the `cellborder` binary and
//! by tests to drive the renderer cell by cell.

pub mod geometry;
pub mod layout;

pub use geometry::{Point, Rect};
pub use layout::{LayoutError, TableLayout};
