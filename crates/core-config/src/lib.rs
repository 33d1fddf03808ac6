//! Configuration loading and parsing.
//!
//! Parses `cellborder.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [render]
//! dash_unit = 2.5
//! default_width = 0.5
//! default_color = "#000000"
//! [log]
//! dir = "."
//! ```
//!
//! Missing files and parse errors fall back to defaults. Unknown fields are
//! ignored so older binaries keep reading newer files. Raw values are kept
//! as parsed; `Config::effective` clamps them into the ranges the renderer
//! accepts and logs every clamp under the `config` target.

use anyhow::Result;
use core_border::{BorderState, Color};
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

/// Smallest dash unit accepted; below this dashes are visually solid and
/// segment counts explode.
pub const MIN_DASH_UNIT: f32 = 0.1;

pub const CONFIG_FILE_NAME: &str = "cellborder.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    #[serde(default = "RenderConfig::default_dash_unit")]
    pub dash_unit: f32,
    #[serde(default = "RenderConfig::default_width")]
    pub default_width: f32,
    #[serde(default)]
    pub default_color: Option<Color>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dash_unit: Self::default_dash_unit(),
            default_width: Self::default_width(),
            default_color: None,
        }
    }
}

impl RenderConfig {
    const fn default_dash_unit() -> f32 {
        core_border::DEFAULT_DASH_UNIT
    }
    const fn default_width() -> f32 {
        core_border::DEFAULT_BORDER_WIDTH
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    #[serde(default = "LogConfig::default_dir")]
    pub dir: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
        }
    }
}

impl LogConfig {
    fn default_dir() -> PathBuf {
        PathBuf::from(".")
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
    pub path: Option<PathBuf>,
}

/// Render settings after clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveRender {
    pub dash_unit: f32,
    pub default_width: f32,
    pub default_color: Option<Color>,
}

impl EffectiveRender {
    /// Fresh border state carrying the configured defaults.
    pub fn base_border(&self) -> BorderState {
        let mut st = BorderState::new();
        st.set_default_width(self.default_width);
        st.set_default_color(self.default_color);
        st
    }
}

/// Config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("cellborder").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config {
            raw: Some(content),
            file,
            path: Some(path),
        }),
        Err(e) => {
            warn!(
                target: "config",
                file = %path.display(),
                error = %e,
                "config_parse_failed_using_defaults"
            );
            Ok(Config::default())
        }
    }
}

impl Config {
    pub fn effective(&self) -> EffectiveRender {
        let raw = &self.file.render;

        let dash_unit = if raw.dash_unit.is_finite() && raw.dash_unit >= MIN_DASH_UNIT {
            raw.dash_unit
        } else {
            MIN_DASH_UNIT
        };
        if dash_unit != raw.dash_unit {
            info!(
                target: "config",
                raw = raw.dash_unit,
                clamped = dash_unit,
                min = MIN_DASH_UNIT,
                "dash_unit_clamped"
            );
        }

        let default_width = if raw.default_width.is_finite() {
            raw.default_width.max(0.0)
        } else {
            0.0
        };
        if default_width != raw.default_width {
            info!(
                target: "config",
                raw = raw.default_width,
                clamped = default_width,
                "default_width_clamped"
            );
        }

        EffectiveRender {
            dash_unit,
            default_width,
            default_color: raw.default_color,
        }
    }
}
