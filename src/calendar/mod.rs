//! # Year Layout
//!
//! Enumerates the days of one year and lays them out on a fixed grid, one
//! cell per day, under a centered year header.
//!
//! ## Drawing Order
//!
//! ```text
//! header label
//! for each day:
//!     cell rectangle
//!     badge circle      (past days, when highlighting is on)
//!     centered label
//! ```
//!
//! ## Usage
//!
//! ```
//! use almanac::calendar::YearLayout;
//! use almanac::config::CalendarConfig;
//!
//! let config = CalendarConfig::default();
//! let svg = YearLayout::new(2024, &config).render()?;
//! assert!(svg.trim_end().ends_with("</svg>"));
//! # Ok::<(), almanac::AlmanacError>(())
//! ```

mod grid;

pub use grid::GridConfig;

use chrono::{Datelike, Days, NaiveDate};
use log::debug;

use crate::canvas::{Canvas, FontWeight, Point};
use crate::config::CalendarConfig;
use crate::error::AlmanacError;

// ============================================================================
// DAY ENUMERATION
// ============================================================================

/// Proleptic Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Every date of one year in ascending order.
///
/// Clones iterate independently from the same position, so a fresh clone
/// of an unstarted sequence replays the whole year.
#[derive(Debug, Clone)]
pub struct YearDays {
    next: Option<NaiveDate>,
    year: i32,
    remaining: usize,
}

impl Iterator for YearDays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|d| d.year() == self.year);
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for YearDays {}

/// Days from January 1 to December 31 of `year`, inclusive.
pub fn days_in_year(year: i32) -> Result<YearDays, AlmanacError> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(AlmanacError::InvalidYear(year))?;
    let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(AlmanacError::InvalidYear(year))?;
    Ok(YearDays {
        next: Some(first),
        year,
        remaining: last.ordinal() as usize,
    })
}

/// A day placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// 0-based position within the year.
    pub index: u32,
    pub row: u32,
    pub column: u32,
}

/// Every day of `year` with its grid position.
pub fn day_cells(year: i32, grid: &GridConfig) -> Result<impl Iterator<Item = DayCell>, AlmanacError> {
    grid.validate()?;
    let columns = grid.columns;
    Ok(days_in_year(year)?.zip(0u32..).map(move |(date, index)| DayCell {
        date,
        index,
        row: index / columns,
        column: index % columns,
    }))
}

/// The date drawn at `(row, column)`, or `None` past the end of the year or
/// outside the grid.
pub fn date_at(year: i32, row: u32, column: u32, grid: &GridConfig) -> Option<NaiveDate> {
    if column >= grid.columns {
        return None;
    }
    let index = grid.index(row, column)?;
    NaiveDate::from_ymd_opt(year, 1, 1)?
        .checked_add_days(Days::new(u64::from(index)))
        .filter(|d| d.year() == year)
}

// ============================================================================
// YEAR LAYOUT
// ============================================================================

/// One year drawn with one configuration.
#[derive(Debug, Clone)]
pub struct YearLayout<'a> {
    pub year: i32,
    pub config: &'a CalendarConfig,
    /// Reference date for past highlighting. `None` disables it.
    pub today: Option<NaiveDate>,
}

impl<'a> YearLayout<'a> {
    pub fn new(year: i32, config: &'a CalendarConfig) -> Self {
        Self {
            year,
            config,
            today: None,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Draw the header and every day cell. Returns the number of cells.
    pub fn draw(&self, canvas: &mut Canvas) -> Result<usize, AlmanacError> {
        let cells = day_cells(self.year, &self.config.grid)?;

        self.draw_header(canvas);

        let mut drawn = 0;
        for cell in cells {
            self.draw_cell(canvas, &cell);
            drawn += 1;
        }

        debug!(
            "laid out {} with {} cells ({} shapes, bounds {:?})",
            self.year,
            drawn,
            canvas.len(),
            canvas.bounds()
        );
        Ok(drawn)
    }

    /// Draw onto a fresh canvas and serialize it.
    pub fn render(&self) -> Result<String, AlmanacError> {
        let mut canvas = self.config.canvas();
        self.draw(&mut canvas)?;
        Ok(canvas.render())
    }

    fn draw_header(&self, canvas: &mut Canvas) {
        let grid = &self.config.grid;
        canvas.label(
            Point::new(grid.grid_width() / 2.0, grid.header_y),
            &self.year.to_string(),
            grid.header_size,
            FontWeight::Bold,
            &self.config.rules.palette.text,
        );
    }

    fn draw_cell(&self, canvas: &mut Canvas, cell: &DayCell) {
        let grid = &self.config.grid;
        let rules = &self.config.rules;

        let flags = rules.classify(cell.date, self.today);
        let style = rules.decide(cell.date, flags, grid);
        let origin = grid.cell_origin(cell.row, cell.column);

        canvas.rectangle(
            Point::rect(origin, grid.cell_width, grid.cell_height),
            style.fill,
            style.stroke,
            grid.stroke_width,
        );
        if let Some(badge) = style.badge {
            canvas.circle(grid.cell_center(origin), badge.radius, badge.fill);
        }
        canvas.label(
            grid.label_anchor(origin),
            &style.label,
            style.size,
            style.weight,
            style.text_color,
        );
    }
}
