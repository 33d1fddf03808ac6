//! Drawing surface capability.
//!
//! The renderer only needs a handful of stroke primitives from whatever
//! content stream it draws into. Errors from the surface propagate
//! unmodified; the renderer adds no recovery of its own.

use anyhow::Result;
use core_border::Color;

pub trait DrawingSurface {
    fn save_state(&mut self) -> Result<()>;
    fn restore_state(&mut self) -> Result<()>;
    fn set_line_width(&mut self, width: f32) -> Result<()>;
    fn set_stroke_color(&mut self, color: Color) -> Result<()>;
    /// Equal on/off dash of length `unit`, starting `phase` into the pattern.
    fn set_line_dash(&mut self, unit: f32, phase: f32) -> Result<()>;
    fn move_to(&mut self, x: f32, y: f32) -> Result<()>;
    fn line_to(&mut self, x: f32, y: f32) -> Result<()>;
    fn stroke(&mut self) -> Result<()>;
}

/// Run `body` between `save_state` and `restore_state`.
///
/// Once the save succeeded the restore is always issued, even when `body`
/// fails part way. The body's error wins over a restore error.
pub fn with_saved_state<F>(surface: &mut dyn DrawingSurface, body: F) -> Result<()>
where
    F: FnOnce(&mut dyn DrawingSurface) -> Result<()>,
{
    surface.save_state()?;
    let drawn = body(&mut *surface);
    let restored = surface.restore_state();
    drawn.and(restored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{Command, Recorder};
    use anyhow::anyhow;

    #[test]
    fn restore_runs_after_body_error() {
        let mut rec = Recorder::new();
        let res = with_saved_state(&mut rec, |s| {
            s.set_line_width(1.0)?;
            Err(anyhow!("boom"))
        });
        assert_eq!(res.unwrap_err().to_string(), "boom");
        assert_eq!(
            rec.commands(),
            &[
                Command::SaveState,
                Command::SetLineWidth(1.0),
                Command::RestoreState
            ]
        );
    }

    #[test]
    fn empty_body_still_brackets() {
        let mut rec = Recorder::new();
        with_saved_state(&mut rec, |_| Ok(())).unwrap();
        assert_eq!(rec.commands(), &[Command::SaveState, Command::RestoreState]);
    }
}
