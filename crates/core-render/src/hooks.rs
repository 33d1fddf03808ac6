//! Per-cell render hooks.
//!
//! A host calls one hook per cell once the cell's rectangle is known. Hooks
//! chain: a border-styled cell draws its border and then hands the same
//! rectangle and surface to every hook registered on it, in order.

use crate::surface::DrawingSurface;
use anyhow::Result;
use core_model::Rect;

pub trait CellRenderHook: Send + Sync {
    fn cell_layout(&self, rect: &Rect, surface: &mut dyn DrawingSurface) -> Result<()>;
}

impl<F> CellRenderHook for F
where
    F: Fn(&Rect, &mut dyn DrawingSurface) -> Result<()> + Send + Sync,
{
    fn cell_layout(&self, rect: &Rect, surface: &mut dyn DrawingSurface) -> Result<()> {
        self(rect, surface)
    }
}

#[derive(Default)]
pub struct HookChain {
    hooks: Vec<Box<dyn CellRenderHook>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    pub fn push<H: CellRenderHook + 'static>(&mut self, hook: H) {
        self.hooks.push(Box::new(hook));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Invoke every hook in insertion order; stops at the first error.
    pub fn run(&self, rect: &Rect, surface: &mut dyn DrawingSurface) -> Result<usize> {
        for hook in &self.hooks {
            hook.cell_layout(rect, &mut *surface)?;
        }
        Ok(self.hooks.len())
    }
}

impl std::fmt::Debug for HookChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookChain")
            .field("len", &self.hooks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{Command, Recorder};
    use anyhow::anyhow;

    #[test]
    fn hooks_run_in_insertion_order() {
        let mut chain = HookChain::new();
        chain.push(|_: &Rect, s: &mut dyn DrawingSurface| -> Result<()> {
            s.move_to(1.0, 0.0)
        });
        chain.push(|_: &Rect, s: &mut dyn DrawingSurface| -> Result<()> {
            s.move_to(2.0, 0.0)
        });
        let mut rec = Recorder::new();
        let ran = chain.run(&Rect::new(0.0, 1.0, 1.0, 0.0), &mut rec).unwrap();
        assert_eq!(ran, 2);
        assert_eq!(
            rec.commands(),
            &[Command::MoveTo(1.0, 0.0), Command::MoveTo(2.0, 0.0)]
        );
    }

    #[test]
    fn first_error_stops_the_chain() {
        let mut chain = HookChain::new();
        chain.push(|_: &Rect, _: &mut dyn DrawingSurface| -> Result<()> {
            Err(anyhow!("hook failed"))
        });
        chain.push(|_: &Rect, s: &mut dyn DrawingSurface| -> Result<()> {
            s.stroke()
        });
        let mut rec = Recorder::new();
        let err = chain.run(&Rect::new(0.0, 1.0, 1.0, 0.0), &mut rec).unwrap_err();
        assert_eq!(err.to_string(), "hook failed");
        assert!(rec.is_empty());
    }
}
