//! Grid geometry for the year layout.
//!
//! ```text
//!          column 0   column 1         column N-1
//!        ┌─────────┬─────────┬ ... ┬─────────┐  ← header_offset()
//! row 0  │ index 0 │ index 1 │     │ N-1     │
//!        ├─────────┼─────────┼ ... ┼─────────┤
//! row 1  │ N       │ N+1     │     │ 2N-1    │
//!        └─────────┴─────────┴ ... ┴─────────┘
//! ```
//!
//! Cells fill left to right, then top to bottom. Month boundaries do not
//! start new rows.

use serde::{Deserialize, Serialize};

use crate::canvas::Point;
use crate::error::AlmanacError;

/// Cell and header metrics, in canvas units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of columns per row.
    pub columns: u32,
    pub cell_width: f64,
    pub cell_height: f64,
    /// Outline width of each cell.
    pub stroke_width: f64,
    /// Day-number font size.
    pub text_size: f64,
    /// Downward nudge applied to labels so digits look vertically centered.
    pub text_adjust_y: f64,
    /// Baseline of the year header.
    pub header_y: f64,
    pub header_size: f64,
    /// Gap between the header text and the first row.
    pub header_gap: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl GridConfig {
    /// 17 columns of 40x40 cells with the year above.
    pub const CLASSIC: GridConfig = GridConfig {
        columns: 17,
        cell_width: 40.0,
        cell_height: 40.0,
        stroke_width: 2.0,
        text_size: 18.0,
        text_adjust_y: 1.5,
        header_y: 50.0,
        header_size: 40.0,
        header_gap: 15.0,
    };

    /// Largest column index, `columns - 1`.
    pub fn max_column(&self) -> u32 {
        self.columns.saturating_sub(1)
    }

    /// Vertical offset of the first row.
    pub fn header_offset(&self) -> f64 {
        self.header_y + self.header_size + self.header_gap
    }

    /// Full width of one row of cells.
    pub fn grid_width(&self) -> f64 {
        f64::from(self.columns) * self.cell_width
    }

    /// `(row, column)` of the cell at 0-based `index`, or `None` for a grid
    /// without columns.
    pub fn position(&self, index: u32) -> Option<(u32, u32)> {
        Some((
            index.checked_div(self.columns)?,
            index.checked_rem(self.columns)?,
        ))
    }

    /// 0-based index of the cell at `(row, column)`, or `None` when it does
    /// not fit in a `u32`.
    pub fn index(&self, row: u32, column: u32) -> Option<u32> {
        row.checked_mul(self.columns)?.checked_add(column)
    }

    /// Top-left corner of the cell at `(row, column)`.
    pub fn cell_origin(&self, row: u32, column: u32) -> Point {
        Point::new(
            f64::from(column) * self.cell_width,
            f64::from(row) * self.cell_height + self.header_offset(),
        )
    }

    /// Anchor for a label centered in the cell at `origin`.
    pub fn label_anchor(&self, origin: Point) -> Point {
        Point::new(
            origin.x + self.cell_width / 2.0,
            origin.y + self.cell_height / 2.0 + self.text_adjust_y,
        )
    }

    /// Center of the cell at `origin`, without the label nudge.
    pub fn cell_center(&self, origin: Point) -> Point {
        Point::new(
            origin.x + self.cell_width / 2.0,
            origin.y + self.cell_height / 2.0,
        )
    }

    pub fn validate(&self) -> Result<(), AlmanacError> {
        if self.columns == 0 {
            return Err(AlmanacError::Config("columns must be at least 1".into()));
        }
        let sizes = [
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
            ("text_size", self.text_size),
            ("header_size", self.header_size),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(AlmanacError::Config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        let offsets = [
            ("stroke_width", self.stroke_width),
            ("header_y", self.header_y),
            ("header_gap", self.header_gap),
        ];
        for (name, value) in offsets {
            if !value.is_finite() || value < 0.0 {
                return Err(AlmanacError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !self.text_adjust_y.is_finite() {
            return Err(AlmanacError::Config(format!(
                "text_adjust_y must be finite, got {}",
                self.text_adjust_y
            )));
        }
        Ok(())
    }
}
