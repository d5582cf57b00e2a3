//! Session options.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

fn default_grid_size() -> f64 {
    20.0
}

fn default_true() -> bool {
    true
}

/// Behaviour switches for a [`DesignSession`](crate::DesignSession).
///
/// Every field has a default, so an options file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Grid cell size in canvas units.
    #[serde(default = "default_grid_size")]
    pub grid_size: f64,
    #[serde(default = "default_true")]
    pub snap_to_grid: bool,
    /// Validate after every successful mutation.
    #[serde(default = "default_true")]
    pub real_time_validation: bool,
    /// Whether frontends should show the metrics panel.
    #[serde(default = "default_true")]
    pub show_metrics: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            snap_to_grid: true,
            real_time_validation: true,
            show_metrics: true,
        }
    }
}

impl SessionOptions {
    pub fn check(&self) -> AppResult<()> {
        if !self.grid_size.is_finite() || self.grid_size <= 0.0 {
            return Err(AppError::Options(format!(
                "grid_size must be positive and finite (got {})",
                self.grid_size
            )));
        }
        Ok(())
    }
}

/// Load session options from a YAML file.
pub fn load_options(path: &Path) -> AppResult<SessionOptions> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let options: SessionOptions = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Options(format!("Failed to parse options YAML: {}", e)))?;
    options.check()?;
    Ok(options)
}
