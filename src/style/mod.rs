//! # Cell Styling
//!
//! Every day cell's appearance is a pure function of its date, three flags
//! and a [`RuleTable`]. The historical calendar variants (month numbers,
//! month initials, localized month names, emoji, custom colors) are all just
//! different `RuleTable` values.
//!
//! ## Precedence
//!
//! ```text
//! first of month  >  weekend  >  plain day
//! ```
//!
//! Past highlighting is orthogonal: it adds a badge behind the label and
//! switches the label to the plain text color, whatever the cell kind.

pub mod months;

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::GridConfig;
use crate::canvas::FontWeight;
use crate::error::AlmanacError;

pub use months::{month_emoji, month_label, month_name};

/// Shrink factor for labels in highlighted cells.
const HIGHLIGHT_SHRINK: f64 = 1.125;

/// Shrink factor for three-letter month names.
const NAME_SHRINK: f64 = 1.5;

/// Badge radius as a fraction of the cell width.
const BADGE_DIVISOR: f64 = 2.5;

// ============================================================================
// RULE TABLE INPUTS
// ============================================================================

/// What a first-of-month cell shows instead of its day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Month number (1-12).
    #[default]
    Number,
    /// First letter of the month name.
    Initial,
    /// Three-letter month abbreviation.
    Name,
    /// One emoji per month.
    Emoji,
}

/// Language used for `Initial` and `Name` labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
    Fr,
    Es,
    It,
    Nl,
    Pt,
    Sv,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::En,
        Language::De,
        Language::Fr,
        Language::Es,
        Language::It,
        Language::Nl,
        Language::Pt,
        Language::Sv,
    ];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::It => "it",
            Language::Nl => "nl",
            Language::Pt => "pt",
            Language::Sv => "sv",
        }
    }
}

impl FromStr for Language {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| AlmanacError::Language(s.to_string()))
    }
}

/// Colors for every cell kind. Any CSS color string is accepted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub cell_fill: String,
    pub weekend_fill: String,
    pub first_fill: String,
    pub first_text: String,
    pub text: String,
    pub stroke: String,
    pub badge: String,
    pub background: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            cell_fill: "white".into(),
            weekend_fill: "white".into(),
            first_fill: "black".into(),
            first_text: "white".into(),
            text: "black".into(),
            stroke: "black".into(),
            badge: "red".into(),
            background: "white".into(),
        }
    }
}

/// Classification of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayFlags {
    pub first_of_month: bool,
    pub weekend: bool,
    pub in_past: bool,
}

// ============================================================================
// RULE TABLE
// ============================================================================

/// The full styling rule for one calendar variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTable {
    pub labels: LabelStyle,
    pub language: Language,
    pub palette: Palette,
    /// Badge dates strictly before today.
    pub highlight_past: bool,
    /// Render weekend day numbers in bold.
    pub weekend_bold: bool,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            labels: LabelStyle::default(),
            language: Language::default(),
            palette: Palette::default(),
            highlight_past: false,
            weekend_bold: true,
        }
    }
}

/// Circle drawn behind a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Badge<'a> {
    pub radius: f64,
    pub fill: &'a str,
}

/// Resolved appearance of one day cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStyle<'a> {
    pub fill: &'a str,
    pub stroke: &'a str,
    pub text_color: &'a str,
    pub weight: FontWeight,
    pub size: f64,
    pub label: String,
    pub badge: Option<Badge<'a>>,
}

impl RuleTable {
    /// Classify `date`. `today` only matters when past highlighting is on.
    pub fn classify(&self, date: NaiveDate, today: Option<NaiveDate>) -> DayFlags {
        DayFlags {
            first_of_month: date.day() == 1,
            weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
            in_past: self.highlight_past && today.is_some_and(|today| date < today),
        }
    }

    /// Decide how the cell for `date` is drawn.
    pub fn decide(&self, date: NaiveDate, flags: DayFlags, grid: &GridConfig) -> CellStyle<'_> {
        let palette = &self.palette;
        let text_size = grid.text_size;

        let mut style = if flags.first_of_month {
            let size = match self.labels {
                LabelStyle::Name => text_size / NAME_SHRINK,
                _ => text_size / HIGHLIGHT_SHRINK,
            };
            CellStyle {
                fill: &palette.first_fill,
                stroke: &palette.stroke,
                text_color: &palette.first_text,
                weight: FontWeight::Bold,
                size,
                label: month_label(self.labels, self.language, date.month()),
                badge: None,
            }
        } else if flags.weekend {
            CellStyle {
                fill: &palette.weekend_fill,
                stroke: &palette.stroke,
                text_color: &palette.text,
                weight: if self.weekend_bold {
                    FontWeight::Bold
                } else {
                    FontWeight::Normal
                },
                size: text_size,
                label: date.day().to_string(),
                badge: None,
            }
        } else {
            CellStyle {
                fill: &palette.cell_fill,
                stroke: &palette.stroke,
                text_color: &palette.text,
                weight: FontWeight::Normal,
                size: text_size,
                label: date.day().to_string(),
                badge: None,
            }
        };

        if flags.in_past {
            style.badge = Some(Badge {
                radius: grid.cell_width / BADGE_DIVISOR,
                fill: &palette.badge,
            });
            style.text_color = &palette.text;
            if !flags.first_of_month {
                style.size = text_size / HIGHLIGHT_SHRINK;
            }
        }

        style
    }
}
