// SPDX-License-Identifier: MIT

//! Project files: everything a generation pass needs, in TOML or JSON.
//!
//! ```toml
//! library = ["Indigo", "Success"]
//!
//! [naming]
//! separator = "-"
//! abbreviate = true
//!
//! [[custom_colors]]
//! name = "Brand"
//! hex = "#0D6EFD"
//!
//! [[groups]]
//! id = "action"
//! name = "action"
//!
//! [[groups.variants]]
//! id = "action-primary"
//! name = "primary"
//! palette_ref = "custom:Brand"
//! ```
//!
//! `library` selects built-in collections by name; each one becomes a
//! `sample:<name>` palette. Sections left out fall back to the stock
//! defaults: default slots, default states and scales, spacing and radius
//! foundations, no groups.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use swatch_color::{ColorError, generate_tonal_scale};
use thiserror::Error;

use crate::foundation::{FoundationCategory, default_foundations};
use crate::generate::{Generation, generate_tokens};
use crate::library::{SAMPLE_COLLECTIONS, sample_collection};
use crate::model::{
    CUSTOM_LIBRARY, PrimitivePalette, ScaleConfig, SemanticGroup, StateConfig, default_scales, default_states,
};
use crate::naming::NamingConfig;
use crate::wizard::{WizardState, WizardStep};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML project: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON project: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown library collection '{name}' (expected one of: {})", collection_names())]
    UnknownCollection { name: String },

    #[error("custom color '{name}': {source}")]
    Color {
        name: String,
        #[source]
        source: ColorError,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

fn collection_names() -> String {
    SAMPLE_COLLECTIONS.iter().map(|c| c.name).collect::<Vec<_>>().join(", ")
}

/// A seed color expanded into a palette on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColor {
    pub name: String,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Built-in collections to include, by name.
    pub library: Vec<String>,
    pub palettes: Vec<PrimitivePalette>,
    pub custom_colors: Vec<CustomColor>,
    pub naming: NamingConfig,
    pub groups: Vec<SemanticGroup>,
    pub states: Vec<StateConfig>,
    pub scales: Vec<ScaleConfig>,
    /// Non-color scales merged into the CSS, SCSS, JSON and DTCG exports.
    #[serde(alias = "enabled_foundations")]
    pub foundations: Vec<FoundationCategory>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            library: Vec::new(),
            palettes: Vec::new(),
            custom_colors: Vec::new(),
            naming: NamingConfig::default(),
            groups: Vec::new(),
            states: default_states(),
            scales: default_scales(),
            foundations: default_foundations(),
        }
    }
}

impl ProjectConfig {
    /// Read a project file. `.json` files parse as JSON, anything else as TOML.
    ///
    /// # Errors
    ///
    /// I/O failures, parse failures, unknown library names, and custom colors
    /// with a malformed hex.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json { Self::from_json_str(&text) } else { Self::from_toml_str(&text) }
    }

    /// # Errors
    ///
    /// Parse failures, unknown library names, and custom colors with a
    /// malformed hex.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Parse failures, unknown library names, and custom colors with a
    /// malformed hex.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.library_palettes()?;
        self.expand_custom_colors().map(drop)
    }

    fn library_palettes(&self) -> Result<Vec<PrimitivePalette>> {
        self.library
            .iter()
            .map(|name| {
                sample_collection(name)
                    .map(|c| c.palette())
                    .ok_or_else(|| ConfigError::UnknownCollection { name: name.clone() })
            })
            .collect()
    }

    fn expand_custom_colors(&self) -> Result<Vec<PrimitivePalette>> {
        self.custom_colors
            .iter()
            .map(|custom| {
                let color_err = |source| ConfigError::Color { name: custom.name.clone(), source };
                let scale = generate_tonal_scale(&custom.hex, &custom.name).map_err(color_err)?;
                PrimitivePalette::from_tonal_scale(&scale, CUSTOM_LIBRARY).map_err(color_err)
            })
            .collect()
    }

    /// Declared palettes, then library selections, then the expanded custom
    /// colors.
    ///
    /// # Errors
    ///
    /// An unknown library name or a custom color with a malformed hex.
    pub fn palettes(&self) -> Result<Vec<PrimitivePalette>> {
        let mut palettes = self.palettes.clone();
        palettes.extend(self.library_palettes()?);
        palettes.extend(self.expand_custom_colors()?);
        Ok(palettes)
    }

    /// Run a generation pass over this project.
    ///
    /// # Errors
    ///
    /// An unknown library name or a custom color with a malformed hex.
    pub fn generate(&self) -> Result<Generation> {
        let palettes = self.palettes()?;
        Ok(generate_tokens(&palettes, &self.naming, &self.groups, &self.states, &self.scales))
    }

    /// Seed a wizard session from this project, parked on the first step.
    ///
    /// # Errors
    ///
    /// An unknown library name or a custom color with a malformed hex.
    pub fn into_wizard_state(self) -> Result<WizardState> {
        let palettes = self.palettes()?;
        Ok(WizardState {
            step: WizardStep::Palette,
            palettes,
            naming: self.naming,
            groups: self.groups,
            states: self.states,
            scales: self.scales,
            foundations: self.foundations,
            ..WizardState::default()
        })
    }
}
