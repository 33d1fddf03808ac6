//! Recording surface.
//!
//! Captures every drawing call as a [`Command`] in order. Used by tests and
//! diagnostics to compare render passes without a real content stream.
//!
//! Invariants:
//! * Commands preserve call order; nothing is merged or dropped.
//! * Recording never fails.

use crate::surface::DrawingSurface;
use anyhow::Result;
use core_border::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SaveState,
    RestoreState,
    SetLineWidth(f32),
    SetStrokeColor(Color),
    SetLineDash { unit: f32, phase: f32 },
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Stroke,
}

#[derive(Debug, Default, Clone)]
pub struct Recorder {
    cmds: Vec<Command>,
}

impl Recorder {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.cmds
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Number of `Stroke` commands recorded.
    pub fn strokes(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, Command::Stroke))
            .count()
    }
}

impl DrawingSurface for Recorder {
    fn save_state(&mut self) -> Result<()> {
        self.cmds.push(Command::SaveState);
        Ok(())
    }
    fn restore_state(&mut self) -> Result<()> {
        self.cmds.push(Command::RestoreState);
        Ok(())
    }
    fn set_line_width(&mut self, width: f32) -> Result<()> {
        self.cmds.push(Command::SetLineWidth(width));
        Ok(())
    }
    fn set_stroke_color(&mut self, color: Color) -> Result<()> {
        self.cmds.push(Command::SetStrokeColor(color));
        Ok(())
    }
    fn set_line_dash(&mut self, unit: f32, phase: f32) -> Result<()> {
        self.cmds.push(Command::SetLineDash { unit, phase });
        Ok(())
    }
    fn move_to(&mut self, x: f32, y: f32) -> Result<()> {
        self.cmds.push(Command::MoveTo(x, y));
        Ok(())
    }
    fn line_to(&mut self, x: f32, y: f32) -> Result<()> {
        self.cmds.push(Command::LineTo(x, y));
        Ok(())
    }
    fn stroke(&mut self) -> Result<()> {
        self.cmds.push(Command::Stroke);
        Ok(())
    }
}
