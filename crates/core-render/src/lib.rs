//! Border rendering for table cells.
//!
//! Takes a cell's `BorderState` and rectangle and strokes each enabled side
//! onto a [`DrawingSurface`]. Drawing and content rendering stay separate: the
//! border pass only issues stroke calls and leaves the surface's graphics
//! state exactly as it found it.
//!
//! Components:
//! - `surface`: the drawing capability trait and the save/restore bracket.
//! - `dash`: odd-segment dash pattern sizing.
//! - `border_renderer`: the per-cell border pass.
//! - `hooks` / `cell`: chaining the border pass in front of other per-cell
//!   render hooks.
//! - `writer`: recording surface for tests and diagnostics.
//! - `content_stream`: PDF content stream operator output.
//! - `metrics`: counters of what the renderer did.

pub mod border_renderer;
pub mod cell;
pub mod content_stream;
pub mod dash;
pub mod hooks;
pub mod metrics;
pub mod surface;
pub mod writer;

pub use border_renderer::BorderRenderer;
pub use cell::BorderStyledCell;
pub use content_stream::ContentStream;
pub use dash::{DEFAULT_DASH_UNIT, DashPattern};
pub use hooks::{CellRenderHook, HookChain};
pub use metrics::{RenderMetrics, RenderMetricsSnapshot};
pub use surface::DrawingSurface;
pub use writer::{Command, Recorder};
