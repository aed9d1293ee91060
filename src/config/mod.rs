use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

/// User configuration (YAML). Every field has a default so partial files load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f64,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f64,
    #[serde(default = "default_margin_left")]
    pub margin_left: f64,
    #[serde(default = "default_margin")]
    pub margin_top: f64,
    #[serde(default = "default_margin")]
    pub margin_right: f64,
    #[serde(default = "default_margin")]
    pub margin_bottom: f64,
    #[serde(default = "default_terminal_columns")]
    pub terminal_columns: usize,
    #[serde(default = "default_show_quarter_ticks")]
    pub show_quarter_ticks: bool,
    #[serde(default = "default_remarks_width")]
    pub remarks_width: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: String,
}

fn default_canvas_width() -> f64 {
    800.0
}
fn default_canvas_height() -> f64 {
    400.0
}
fn default_margin_left() -> f64 {
    100.0
}
fn default_margin() -> f64 {
    40.0
}
fn default_terminal_columns() -> usize {
    96
}
fn default_show_quarter_ticks() -> bool {
    true
}
fn default_remarks_width() -> usize {
    60
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_weekday() -> String {
    "None".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            margin_left: default_margin_left(),
            margin_top: default_margin(),
            margin_right: default_margin(),
            margin_bottom: default_margin(),
            terminal_columns: default_terminal_columns(),
            show_quarter_ticks: default_show_quarter_ticks(),
            remarks_width: default_remarks_width(),
            separator_char: default_separator_char(),
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rdutylog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rdutylog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdutylog.conf")
    }

    /// `--config` override when given, the standard location otherwise.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the default configuration to `path`.
    /// An existing file is kept unless `force` is set.
    pub fn init(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        Config::default().save(path)?;
        Ok(true)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        let grid_w = self.canvas_width - self.margin_left - self.margin_right;
        let grid_h = self.canvas_height - self.margin_top - self.margin_bottom;

        if grid_w <= 0.0 || grid_h <= 0.0 {
            return Err(AppError::Config(format!(
                "margins leave no room for the grid ({grid_w}x{grid_h})"
            )));
        }
        if self.terminal_columns == 0 {
            return Err(AppError::Config("terminal_columns must be > 0".into()));
        }
        if !matches!(
            self.show_weekday.as_str(),
            "None" | "Short" | "Medium" | "Long"
        ) {
            return Err(AppError::Config(format!(
                "show_weekday must be None, Short, Medium or Long (got '{}')",
                self.show_weekday
            )));
        }

        Ok(())
    }
}
