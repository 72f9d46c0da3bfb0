//! # Almanac CLI
//!
//! Command-line interface for rendering one-page year calendars.
//!
//! ## Usage
//!
//! ```bash
//! # Classic calendar on stdout
//! almanac --year 2025
//!
//! # Mark every day before today
//! almanac --year 2025 --highlight-past
//!
//! # French month abbreviations, 18 columns, written to a file
//! almanac --year 2025 --labels name --language fr --columns 18 -o cal.svg
//!
//! # Custom colors
//! almanac --year 2025 --weekend-fill '#eeeeee' --first-fill navy --first-text gold
//!
//! # Settings from a JSON file, flags still win
//! almanac --year 2025 --config calendar.json --labels emoji
//! ```

use clap::Parser;
use log::info;
use std::path::PathBuf;

use almanac::{
    AlmanacError, CalendarConfig, YearLayout,
    config::Overrides,
    logging,
    style::{LabelStyle, Language},
};

/// Almanac - one-page yearly calendar as SVG
#[derive(Parser, Debug)]
#[command(name = "almanac")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Calendar year
    #[arg(long)]
    year: i32,

    /// Draw a badge on every day before today
    #[arg(long)]
    highlight_past: bool,

    /// What first-of-month cells show
    #[arg(long, value_enum)]
    labels: Option<LabelStyle>,

    /// Language for initial/name labels (en, de, fr, es, it, nl, pt, sv)
    #[arg(long)]
    language: Option<String>,

    /// Number of grid columns
    #[arg(long)]
    columns: Option<u32>,

    /// Fill color for weekend cells
    #[arg(long, value_name = "COLOR")]
    weekend_fill: Option<String>,

    /// Fill color for first-of-month cells
    #[arg(long, value_name = "COLOR")]
    first_fill: Option<String>,

    /// Text color for first-of-month cells
    #[arg(long, value_name = "COLOR")]
    first_text: Option<String>,

    /// Page background color
    #[arg(long, value_name = "COLOR")]
    background: Option<String>,

    /// JSON config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the SVG to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to a file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AlmanacError> {
    let cli = Cli::parse();

    let _logger = logging::init_logging(
        logging::level_for_verbosity(cli.verbose),
        cli.log_file.as_deref(),
    )?;

    let mut config = match &cli.config {
        Some(path) => {
            info!("loading config from {}", path.display());
            CalendarConfig::load(path)?
        }
        None => CalendarConfig::default(),
    };

    let language = cli
        .language
        .as_deref()
        .map(str::parse::<Language>)
        .transpose()?;

    config.apply_overrides(Overrides {
        highlight_past: cli.highlight_past,
        labels: cli.labels,
        language,
        columns: cli.columns,
        weekend_fill: cli.weekend_fill,
        first_fill: cli.first_fill,
        first_text: cli.first_text,
        background: cli.background,
    })?;

    let today = chrono::Local::now().date_naive();
    let svg = YearLayout::new(cli.year, &config).with_today(today).render()?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, svg + "\n")?;
            info!("wrote {}", path.display());
        }
        None => println!("{}", svg),
    }

    Ok(())
}
