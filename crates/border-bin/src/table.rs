//! Table description files.
//!
//! ```toml
//! origin = [36.0, 800.0]      # left, top
//! columns = [120.0, 80.0]
//! rows = [20.0, 20.0]
//!
//! [border]                    # applied to every cell
//! sides = ["top", "bottom"]
//!
//! [[cells]]
//! row = 0
//! col = 1
//! [cells.border]
//! style = "dashed"
//! [cells.border.left]
//! width = 1.0
//! color = "#ff0000"
//! ```
//!
//! Cell borders layer: configured defaults, then the table-wide `[border]`,
//! then every matching `[[cells]]` entry in file order.

use anyhow::{Context, Result};
use core_border::BorderDecl;
use core_config::EffectiveRender;
use core_model::{LayoutError, TableLayout};
use core_render::{BorderRenderer, BorderStyledCell, CellRenderHook, DrawingSurface};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
pub struct CellEntry {
    pub row: usize,
    pub col: usize,
    #[serde(default)]
    pub border: BorderDecl,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TableFile {
    #[serde(default)]
    pub origin: [f32; 2],
    pub columns: Vec<f32>,
    pub rows: Vec<f32>,
    #[serde(default)]
    pub border: BorderDecl,
    #[serde(default)]
    pub cells: Vec<CellEntry>,
}

impl TableFile {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("parsing table description")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading table file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn layout(&self) -> Result<TableLayout, LayoutError> {
        let [left, top] = self.origin;
        TableLayout::new(left, top, self.columns.clone(), self.rows.clone())
    }

    /// One styled cell per grid slot, row-major.
    pub fn build_cells(
        &self,
        render: &EffectiveRender,
        renderer: &Arc<BorderRenderer>,
        layout: &TableLayout,
    ) -> Result<Vec<BorderStyledCell>> {
        let cols = layout.column_count();
        let table_state = self.border.apply_to(render.base_border());
        let mut cells: Vec<BorderStyledCell> = (0..cols * layout.row_count())
            .map(|_| BorderStyledCell::with_border(Arc::clone(renderer), table_state.clone()))
            .collect();

        for entry in &self.cells {
            // Validates the index against the grid.
            layout.cell_rect(entry.row, entry.col)?;
            let cell = &mut cells[entry.row * cols + entry.col];
            let state = entry.border.apply_to(cell.border().clone());
            *cell.border_mut() = state;
            debug!(
                target: "runtime.table",
                row = entry.row,
                col = entry.col,
                sides = cell.border().enabled_sides().bits(),
                "cell_border_override"
            );
        }
        Ok(cells)
    }
}

/// Drive the border pass over every cell, the way a host table engine would
/// after laying each cell out.
pub fn render_table(
    layout: &TableLayout,
    cells: &[BorderStyledCell],
    surface: &mut dyn DrawingSurface,
) -> Result<()> {
    let cols = layout.column_count();
    for (row, col, rect) in layout.cells() {
        cells[row * cols + col]
            .cell_layout(&rect, &mut *surface)
            .with_context(|| format!("rendering cell ({row}, {col})"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_border::{BorderStyle, Color, Side, SideFlags};
    use core_config::Config;
    use core_render::{Command, Recorder};

    const SAMPLE: &str = r##"
origin = [0.0, 40.0]
columns = [50.0, 50.0]
rows = [20.0, 20.0]

[border]
sides = ["bottom"]

[[cells]]
row = 0
col = 1
[cells.border]
style = "dashed"
[cells.border.left]
width = 1.0
color = "#ff0000"
"##;

    fn effective() -> EffectiveRender {
        Config::default().effective()
    }

    #[test]
    fn layers_table_and_cell_borders() {
        let table = TableFile::parse(SAMPLE).unwrap();
        let layout = table.layout().unwrap();
        let renderer = Arc::new(BorderRenderer::default());
        let cells = table.build_cells(&effective(), &renderer, &layout).unwrap();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].border().enabled_sides(), SideFlags::BOTTOM);
        let styled = cells[1].border();
        assert_eq!(styled.enabled_sides(), SideFlags::BOTTOM | SideFlags::LEFT);
        assert_eq!(styled.style(), BorderStyle::Dashed);
        assert_eq!(styled.resolved_color(Side::Left), Color::RED);
        assert_eq!(styled.width(Side::Bottom), 0.5);
    }

    #[test]
    fn out_of_range_cell_entry_fails() {
        let table = TableFile::parse(
            "columns = [10.0]\nrows = [10.0]\n[[cells]]\nrow = 3\ncol = 0\n",
        )
        .unwrap();
        let layout = table.layout().unwrap();
        let renderer = Arc::new(BorderRenderer::default());
        let err = table
            .build_cells(&effective(), &renderer, &layout)
            .unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn render_table_visits_every_cell() {
        let table = TableFile::parse(SAMPLE).unwrap();
        let layout = table.layout().unwrap();
        let renderer = Arc::new(BorderRenderer::default());
        let cells = table.build_cells(&effective(), &renderer, &layout).unwrap();
        let mut rec = Recorder::new();
        render_table(&layout, &cells, &mut rec).unwrap();
        // 4 bottoms + 1 left
        assert_eq!(rec.strokes(), 5);
        let saves = rec
            .commands()
            .iter()
            .filter(|c| matches!(c, Command::SaveState))
            .count();
        assert_eq!(saves, 4);
        assert_eq!(renderer.metrics().snapshot().cells_rendered, 4);
    }

    #[test]
    fn missing_grid_fields_is_parse_error() {
        assert!(TableFile::parse("origin = [0.0, 0.0]").is_err());
    }
}
