//! # Almanac - One-Page Year Calendars
//!
//! Almanac renders a whole year as a single SVG page: a fixed grid of day
//! cells under the year number, with weekends and the first day of every
//! month picked out. It provides:
//!
//! - **Canvas**: an append-only SVG surface that sizes itself to its content
//! - **Layout**: day enumeration and grid placement for one year
//! - **Styling**: rule tables for month labels, colors and past-day badges
//!
//! ## Quick Start
//!
//! ```
//! use almanac::{
//!     calendar::YearLayout,
//!     config::CalendarConfig,
//!     style::{LabelStyle, Language},
//! };
//!
//! let mut config = CalendarConfig::default();
//! config.rules.labels = LabelStyle::Name;
//! config.rules.language = Language::De;
//!
//! let svg = YearLayout::new(2024, &config).render()?;
//! assert!(svg.contains(">Mär</text>"));
//!
//! # Ok::<(), almanac::AlmanacError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`canvas`] | SVG primitives and bounding box tracking |
//! | [`calendar`] | Day enumeration and the year grid |
//! | [`style`] | Per-cell rule tables and month labels |
//! | [`config`] | JSON-loadable configuration |
//! | [`logging`] | Logger bootstrap for the binary |
//! | [`error`] | Error types |

pub mod calendar;
pub mod canvas;
pub mod config;
pub mod error;
pub mod logging;
pub mod style;

// Re-exports for convenience
pub use calendar::YearLayout;
pub use config::CalendarConfig;
pub use error::AlmanacError;
