//! Border-styled cell event.
//!
//! Owns the cell's `BorderState` and any hooks the cell carried before it was
//! given a styled border. Registered with a host as the cell's render hook,
//! it draws the border first and then chains to the other hooks, so it adds
//! to existing per-cell drawing instead of replacing it.

use crate::border_renderer::BorderRenderer;
use crate::hooks::{CellRenderHook, HookChain};
use crate::surface::DrawingSurface;
use anyhow::Result;
use core_border::BorderState;
use core_model::Rect;
use std::sync::Arc;

#[derive(Debug)]
pub struct BorderStyledCell {
    border: BorderState,
    hooks: HookChain,
    renderer: Arc<BorderRenderer>,
}

impl BorderStyledCell {
    pub fn new(renderer: Arc<BorderRenderer>) -> Self {
        Self::with_border(renderer, BorderState::new())
    }

    pub fn with_border(renderer: Arc<BorderRenderer>, border: BorderState) -> Self {
        Self {
            border,
            hooks: HookChain::new(),
            renderer,
        }
    }

    pub fn border(&self) -> &BorderState {
        &self.border
    }

    /// Mutable access while the cell is being built.
    pub fn border_mut(&mut self) -> &mut BorderState {
        &mut self.border
    }

    /// Chain a hook to run after the border pass.
    pub fn push_hook<H: CellRenderHook + 'static>(&mut self, hook: H) {
        self.hooks.push(hook);
    }

    pub fn hooks(&self) -> &HookChain {
        &self.hooks
    }
}

impl CellRenderHook for BorderStyledCell {
    fn cell_layout(&self, rect: &Rect, surface: &mut dyn DrawingSurface) -> Result<()> {
        self.renderer
            .render_with_hooks(&self.border, rect, surface, &self.hooks)
    }
}
