//! Centralized presentation options with TOML preset support.
//!
//! All tweakable settings (geometry scales, colors, spin rates) are
//! consolidated here. Options serialize to/from TOML so a partial preset
//! file overriding a single section works against defaults.

mod animation;
mod colors;
mod geometry;

use std::path::Path;

pub use animation::AnimationOptions;
pub use colors::ColorOptions;
pub use geometry::GeometryOptions;
use serde::{Deserialize, Serialize};

use crate::error::MolstickError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[colors]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Atom sphere and bond cylinder sizing.
    pub geometry: GeometryOptions,
    /// Color palette options.
    pub colors: ColorOptions,
    /// Demo spin rates.
    pub animation: AnimationOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`MolstickError::Io`] if the file cannot be read,
    /// [`MolstickError::OptionsParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self, MolstickError> {
        let content =
            std::fs::read_to_string(path).map_err(MolstickError::Io)?;
        toml::from_str(&content)
            .map_err(|e| MolstickError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`MolstickError::OptionsParse`] on serialization failure,
    /// [`MolstickError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), MolstickError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MolstickError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MolstickError::Io)?;
        }
        std::fs::write(path, content).map_err(MolstickError::Io)
    }
}
