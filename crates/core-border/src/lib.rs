//! Border state model for table cells.
//!
//! Each of the four sides of a cell carries its own enable bit, optional
//! width and optional color; the dash style is shared by the whole cell.
//! This crate holds data and fallback rules only. Drawing lives in
//! `core-render`.

pub mod color;
pub mod decl;
pub mod side;
pub mod state;

pub use color::{Color, ColorParseError};
pub use decl::{BorderDecl, SideDecl};
pub use side::{Side, SideFlags};
pub use state::{
    BorderState, BorderStyle, DEFAULT_BORDER_WIDTH, DEFAULT_DASH_UNIT, FALLBACK_COLOR,
};
