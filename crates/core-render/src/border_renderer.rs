//! Border pass for a single cell.
//!
//! Reads a `BorderState` (never mutates it) and strokes each drawn side as a
//! two-point path inside one save/restore bracket:
//!
//! 1. No enabled side: no surface calls at all, hooks are not run.
//! 2. Otherwise `save_state`, then for Top, Right, Bottom, Left with resolved
//!    width `> 0`: line width, stroke color, dash (dashed style only),
//!    move, line, stroke.
//! 3. `restore_state` always follows a successful save, even if a side
//!    failed part way.
//! 4. Chained hooks run after the restore with the same rect and surface.
//!
//! A dashed side whose run length yields no dash pattern (zero length, or
//! shorter than one dash unit) is skipped without touching the surface.
//!
//! The pass holds no state between calls: the same state and rect produce
//! the same command sequence every time.

use crate::dash::{self, DEFAULT_DASH_UNIT, DashPattern};
use crate::hooks::HookChain;
use crate::metrics::RenderMetrics;
use crate::surface::{DrawingSurface, with_saved_state};
use anyhow::Result;
use core_border::{BorderState, BorderStyle, Side};
use core_model::Rect;
use tracing::{debug, trace};

#[derive(Debug)]
pub struct BorderRenderer {
    dash_unit: f32,
    metrics: RenderMetrics,
}

impl Default for BorderRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_DASH_UNIT)
    }
}

impl BorderRenderer {
    pub fn new(dash_unit: f32) -> Self {
        Self {
            dash_unit,
            metrics: RenderMetrics::default(),
        }
    }

    pub fn dash_unit(&self) -> f32 {
        self.dash_unit
    }

    pub fn metrics(&self) -> &RenderMetrics {
        &self.metrics
    }

    /// Draw the border of one cell.
    pub fn render(
        &self,
        state: &BorderState,
        rect: &Rect,
        surface: &mut dyn DrawingSurface,
    ) -> Result<()> {
        self.render_with_hooks(state, rect, surface, &HookChain::new())
    }

    /// Draw the border of one cell, then run the cell's chained hooks.
    pub fn render_with_hooks(
        &self,
        state: &BorderState,
        rect: &Rect,
        surface: &mut dyn DrawingSurface,
        hooks: &HookChain,
    ) -> Result<()> {
        if state.enabled_sides().is_empty() {
            RenderMetrics::bump(&self.metrics.cells_skipped);
            trace!(target: "render.border", "no_enabled_sides");
            return Ok(());
        }

        with_saved_state(surface, |s| {
            for side in Side::ALL {
                self.stroke_side(state, rect, side, s)?;
            }
            Ok(())
        })?;
        RenderMetrics::bump(&self.metrics.cells_rendered);

        let ran = hooks.run(rect, surface)?;
        RenderMetrics::add(&self.metrics.hooks_invoked, ran as u64);
        Ok(())
    }

    fn stroke_side(
        &self,
        state: &BorderState,
        rect: &Rect,
        side: Side,
        surface: &mut dyn DrawingSurface,
    ) -> Result<()> {
        let width = state.width(side);
        if width.is_nan() || width <= 0.0 {
            return Ok(());
        }

        let dash = match state.style() {
            BorderStyle::Solid => None,
            BorderStyle::Dashed => {
                let run = rect.run_length(side);
                match dash::pattern_for(run, self.dash_unit) {
                    Some(p) => Some(p),
                    None => {
                        RenderMetrics::bump(&self.metrics.degenerate_dashed_sides);
                        debug!(
                            target: "render.border",
                            side = side.name(),
                            run,
                            dash_unit = self.dash_unit,
                            "degenerate_dash_side_skipped"
                        );
                        return Ok(());
                    }
                }
            }
        };

        let color = state.resolved_color(side);
        surface.set_line_width(width)?;
        surface.set_stroke_color(color)?;
        if let Some(DashPattern { unit, phase, .. }) = dash {
            surface.set_line_dash(unit, phase)?;
            RenderMetrics::bump(&self.metrics.dashed_sides);
        }
        let ((x0, y0), (x1, y1)) = rect.edge(side);
        surface.move_to(x0, y0)?;
        surface.line_to(x1, y1)?;
        surface.stroke()?;
        RenderMetrics::bump(&self.metrics.sides_stroked);

        trace!(
            target: "render.border",
            side = side.name(),
            width,
            color = %color,
            segments = dash.map(|p| p.segments),
            "side_stroked"
        );
        Ok(())
    }
}
