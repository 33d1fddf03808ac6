//! PDF content stream surface.
//!
//! Serializes drawing calls as page content operators, one per line:
//!
//! | call               | operator        |
//! |--------------------|-----------------|
//! | `save_state`       | `q`             |
//! | `restore_state`    | `Q`             |
//! | `set_line_width`   | `w`             |
//! | `set_stroke_color` | `r g b RG`      |
//! | `set_line_dash`    | `[unit] phase d`|
//! | `move_to`          | `x y m`         |
//! | `line_to`          | `x y l`         |
//! | `stroke`           | `S`             |
//!
//! Numbers are written with at most four fractional digits, trailing zeros
//! trimmed. Save/restore nesting is tracked; an unmatched `Q` is an error
//! instead of producing a stream a viewer would reject.

use crate::surface::DrawingSurface;
use anyhow::{Context, Result, bail};
use core_border::Color;
use std::io::Write;

pub struct ContentStream<W: Write> {
    out: W,
    depth: usize,
    ops: u64,
}

/// Format a PDF number: `1.5`, `3.3333`, `0`, `-2`.
pub fn format_number(v: f32) -> String {
    let mut s = format!("{v:.4}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

impl<W: Write> ContentStream<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            depth: 0,
            ops: 0,
        }
    }

    /// Operators written so far.
    pub fn operator_count(&self) -> u64 {
        self.ops
    }

    /// Current `q` nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn op(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}").context("writing content stream operator")?;
        self.ops += 1;
        Ok(())
    }

    /// Flush and hand back the writer. Fails if a `q` was never closed.
    pub fn finish(mut self) -> Result<W> {
        if self.depth != 0 {
            bail!("content stream ends with {} unrestored graphics states", self.depth);
        }
        self.out.flush().context("flushing content stream")?;
        Ok(self.out)
    }
}

impl<W: Write> DrawingSurface for ContentStream<W> {
    fn save_state(&mut self) -> Result<()> {
        self.op("q")?;
        self.depth += 1;
        Ok(())
    }

    fn restore_state(&mut self) -> Result<()> {
        if self.depth == 0 {
            bail!("restore_state without matching save_state");
        }
        self.op("Q")?;
        self.depth -= 1;
        Ok(())
    }

    fn set_line_width(&mut self, width: f32) -> Result<()> {
        self.op(&format!("{} w", format_number(width)))
    }

    fn set_stroke_color(&mut self, color: Color) -> Result<()> {
        let [r, g, b] = color.unit_components();
        self.op(&format!(
            "{} {} {} RG",
            format_number(r),
            format_number(g),
            format_number(b)
        ))
    }

    fn set_line_dash(&mut self, unit: f32, phase: f32) -> Result<()> {
        self.op(&format!(
            "[{}] {} d",
            format_number(unit),
            format_number(phase)
        ))
    }

    fn move_to(&mut self, x: f32, y: f32) -> Result<()> {
        self.op(&format!("{} {} m", format_number(x), format_number(y)))
    }

    fn line_to(&mut self, x: f32, y: f32) -> Result<()> {
        self.op(&format!("{} {} l", format_number(x), format_number(y)))
    }

    fn stroke(&mut self) -> Result<()> {
        self.op("S")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(10.0 / 3.0), "3.3333");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(100.0), "100");
    }

    #[test]
    fn writes_operators() {
        let mut cs = ContentStream::new(Vec::new());
        cs.save_state().unwrap();
        cs.set_line_width(2.0).unwrap();
        cs.set_stroke_color(Color::RED).unwrap();
        cs.set_line_dash(2.5, 0.0).unwrap();
        cs.move_to(0.0, 50.0).unwrap();
        cs.line_to(100.0, 50.0).unwrap();
        cs.stroke().unwrap();
        cs.restore_state().unwrap();
        assert_eq!(cs.operator_count(), 8);
        let out = String::from_utf8(cs.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "q\n2 w\n1 0 0 RG\n[2.5] 0 d\n0 50 m\n100 50 l\nS\nQ\n"
        );
    }

    #[test]
    fn unbalanced_restore_is_rejected() {
        let mut cs = ContentStream::new(Vec::new());
        assert!(cs.restore_state().is_err());
        assert_eq!(cs.operator_count(), 0);
    }

    #[test]
    fn finish_rejects_open_state() {
        let mut cs = ContentStream::new(Vec::new());
        cs.save_state().unwrap();
        assert_eq!(cs.depth(), 1);
        assert!(cs.finish().is_err());
    }
}
