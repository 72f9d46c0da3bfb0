//! # Calendar Configuration
//!
//! Everything that shapes the rendered page, in one serde-friendly struct.
//! A JSON config file may set any subset of fields; the rest keep their
//! defaults.
//!
//! ```json
//! {
//!   "grid": { "columns": 18 },
//!   "rules": {
//!     "labels": "name",
//!     "language": "fr",
//!     "palette": { "weekend_fill": "#f0f0f0" }
//!   },
//!   "font_family": null
//! }
//! ```
//!
//! ## Defaults
//!
//! | Setting | Value |
//! |---------|-------|
//! | Columns | 17 |
//! | Cell | 40 x 40 |
//! | Day text | 18px |
//! | Header | 40px bold at y = 50 |
//! | First row | y = 105 |
//! | Margins | 10 x 10 |
//! | Font | sans-serif |
//!
//! Command-line flags are layered on top with [`CalendarConfig::apply_overrides`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calendar::GridConfig;
use crate::canvas::Canvas;
use crate::error::AlmanacError;
use crate::style::{LabelStyle, Language, RuleTable};

fn default_font_family() -> Option<String> {
    Some("sans-serif".to_string())
}

/// Complete rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub grid: GridConfig,
    pub rules: RuleTable,
    /// Horizontal margin on each side.
    pub margin_w: f64,
    /// Vertical margin on each side.
    pub margin_h: f64,
    /// Document font family. `null` omits it.
    #[serde(default = "default_font_family")]
    pub font_family: Option<String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            rules: RuleTable::default(),
            margin_w: 10.0,
            margin_h: 10.0,
            font_family: default_font_family(),
        }
    }
}

/// Values supplied on the command line. `None` keeps the config value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub highlight_past: bool,
    pub labels: Option<LabelStyle>,
    pub language: Option<Language>,
    pub columns: Option<u32>,
    pub weekend_fill: Option<String>,
    pub first_fill: Option<String>,
    pub first_text: Option<String>,
    pub background: Option<String>,
}

impl CalendarConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, AlmanacError> {
        let config: CalendarConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self, AlmanacError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), AlmanacError> {
        self.grid.validate()?;
        for (name, value) in [("margin_w", self.margin_w), ("margin_h", self.margin_h)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AlmanacError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Layer command-line values over this config.
    ///
    /// `highlight_past` can only switch highlighting on; a config file that
    /// enables it stays enabled.
    pub fn apply_overrides(&mut self, overrides: Overrides) -> Result<(), AlmanacError> {
        let rules = &mut self.rules;
        rules.highlight_past |= overrides.highlight_past;
        if let Some(labels) = overrides.labels {
            rules.labels = labels;
        }
        if let Some(language) = overrides.language {
            rules.language = language;
        }
        if let Some(fill) = overrides.weekend_fill {
            rules.palette.weekend_fill = fill;
        }
        if let Some(fill) = overrides.first_fill {
            rules.palette.first_fill = fill;
        }
        if let Some(color) = overrides.first_text {
            rules.palette.first_text = color;
        }
        if let Some(color) = overrides.background {
            rules.palette.background = color;
        }
        if let Some(columns) = overrides.columns {
            self.grid.columns = columns;
        }
        self.validate()
    }

    /// An empty canvas with this config's margins and document style.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.margin_w, self.margin_h)
            .with_background(self.rules.palette.background.clone())
            .with_font_family(self.font_family.clone())
    }
}
