//! cellborder entrypoint.
//!
//! Reads a table description, lays the grid out and writes every cell's
//! border pass as PDF content stream operators (stdout by default).
use anyhow::{Context, Result};
use clap::Parser;
use core_config::load_from;
use core_render::{BorderRenderer, ContentStream};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

mod table;

use table::{TableFile, render_table};

const LOG_FILE_NAME: &str = "cellborder.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(
    name = "cellborder",
    version,
    about = "Render table cell borders as PDF content stream operators"
)]
struct Args {
    /// Table description (TOML).
    pub table: PathBuf,
    /// Optional configuration file path (overrides discovery of `cellborder.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Write the content stream here instead of stdout.
    #[arg(long = "output", short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Default)]
struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn configure_logging(&mut self, log_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(log_dir)
            .with_context(|| format!("creating log directory {}", log_dir.display()))?;
        let log_path = log_dir.join(LOG_FILE_NAME);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_ansi(false)
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    fn run(&mut self, args: Args) -> Result<()> {
        let config = load_from(args.config.clone())?;
        self.configure_logging(&config.file.log.dir)?;
        Self::install_panic_hook();

        let effective = config.effective();
        info!(
            target: "runtime",
            table = %args.table.display(),
            config = ?config.path,
            dash_unit = effective.dash_unit,
            default_width = effective.default_width,
            "startup"
        );

        let table = TableFile::load(&args.table)?;
        let layout = table.layout().context("invalid table grid")?;
        let renderer = Arc::new(BorderRenderer::new(effective.dash_unit));
        let cells = table.build_cells(&effective, &renderer, &layout)?;

        let sink: Box<dyn Write> = match &args.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("creating output {}", path.display()))?,
            )),
            None => Box::new(stdout().lock()),
        };
        let mut stream = ContentStream::new(sink);
        render_table(&layout, &cells, &mut stream)?;
        let operators = stream.operator_count();
        stream.finish()?;

        let snap = renderer.metrics().snapshot();
        info!(
            target: "runtime",
            rows = layout.row_count(),
            columns = layout.column_count(),
            operators,
            cells_rendered = snap.cells_rendered,
            cells_skipped = snap.cells_skipped,
            sides_stroked = snap.sides_stroked,
            dashed_sides = snap.dashed_sides,
            degenerate_dashed_sides = snap.degenerate_dashed_sides,
            "render_complete"
        );
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut app = AppStartup::default();
    app.run(args)
}
