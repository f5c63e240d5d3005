//! Demo configuration loaded from `options.toml`.

use std::fs;
use std::path::Path;

use dropselect::{DropdownConfig, SelectOption, Theme};
use log::info;
use serde::Deserialize;

use crate::error::DemoError;
use crate::paths;

/// Everything the demo reads from its config file.
///
/// ```toml
/// placeholder = "Pick..."
/// close_on_multi_select = false
/// options = [
///     { label = "First", value = 1 },
///     { label = "Second", value = "two" },
/// ]
///
/// [theme]
/// highlight = "oklch(0.5, 0.15, 140)"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub options: Vec<SelectOption>,
    pub placeholder: String,
    pub close_on_multi_select: bool,
    pub max_visible_rows: Option<u16>,
    pub theme: Theme,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let options = ["First", "Second", "Third", "Fourth", "Fifth", "Sixth"]
            .iter()
            .zip(1i64..)
            .map(|(label, value)| SelectOption::new(*label, value))
            .collect();
        let defaults = DropdownConfig::default();
        Self {
            options,
            placeholder: defaults.placeholder,
            close_on_multi_select: defaults.close_on_multi_select,
            max_visible_rows: defaults.max_visible_rows,
            theme: defaults.theme,
        }
    }
}

impl DemoConfig {
    /// Load the config.
    ///
    /// An explicit `$DROPSELECT_CONFIG` must exist. The default location is
    /// optional: without it the built-in options are used.
    pub fn load() -> Result<Self, DemoError> {
        if let Some(path) = std::env::var_os(paths::CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }
        match paths::config_file() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                info!("No config file, using built-in options");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, DemoError> {
        let text = fs::read_to_string(path)?;
        let config = Self::parse(&text).map_err(|source| DemoError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "Loaded {} options from {}",
            config.options.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Widget config shared by both dropdowns.
    pub fn dropdown_config(&self) -> DropdownConfig {
        let config = DropdownConfig::new()
            .placeholder(self.placeholder.clone())
            .close_on_multi_select(self.close_on_multi_select)
            .theme(self.theme.clone());
        match self.max_visible_rows {
            Some(rows) => config.max_visible_rows(rows),
            None => config,
        }
    }
}
