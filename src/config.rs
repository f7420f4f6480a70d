// src/config.rs
//! Optional `cartograph.toml`: default view flags and layout algorithm.
//!
//! CLI flags always win; the file only moves the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CartographError, Result};
use crate::filter::ViewFilter;
use crate::render::LayoutAlgorithm;

pub const CONFIG_FILE: &str = "cartograph.toml";

fn default_true() -> bool {
    true
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewDefaults {
    #[serde(default)]
    pub algorithm: LayoutAlgorithm,
    #[serde(default = "default_true")]
    pub show_functions: bool,
    #[serde(default = "default_true")]
    pub show_classes: bool,
    #[serde(default = "default_true")]
    pub show_methods: bool,
    #[serde(default = "default_true")]
    pub show_relationships: bool,
}

impl Default for ViewDefaults {
    fn default() -> Self {
        Self {
            algorithm: LayoutAlgorithm::default(),
            show_functions: true,
            show_classes: true,
            show_methods: true,
            show_relationships: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub view: ViewDefaults,
}

impl Config {
    /// Loads `cartograph.toml` from the given directory, falling back to
    /// defaults when the file does not exist. A malformed file is an error,
    /// not a silent fallback.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| CartographError::Io {
            source,
            path: path.clone(),
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// The filter seeded from configured defaults (empty search term).
    #[must_use]
    pub fn base_filter(&self) -> ViewFilter {
        ViewFilter {
            show_functions: self.view.show_functions,
            show_classes: self.view.show_classes,
            show_methods: self.view.show_methods,
            show_relationships: self.view.show_relationships,
            search: String::new(),
        }
    }
}
