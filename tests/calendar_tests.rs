//! # Calendar Tests
//!
//! End-to-end checks of the rendered SVG, through the library API and through
//! the `almanac` binary.

use almanac::calendar::{GridConfig, YearLayout, date_at, day_cells, is_leap_year};
use almanac::canvas::{Canvas, FontWeight, Point};
use almanac::config::CalendarConfig;
use almanac::style::{LabelStyle, Language, RuleTable};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::process::Command;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn count(svg: &str, needle: &str) -> usize {
    svg.matches(needle).count()
}

/// Opening tags of every element called `name`, in document order.
fn tags<'a>(svg: &'a str, name: &str) -> Vec<&'a str> {
    svg.match_indices(&format!("<{name} "))
        .map(|(start, _)| {
            let end = start + svg[start..].find('>').unwrap();
            &svg[start..=end]
        })
        .collect()
}

fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {name}=\"");
    let start = tag.find(&needle)? + needle.len();
    let end = start + tag[start..].find('"')?;
    Some(&tag[start..end])
}

/// The `(width, height)` attributes of the root element.
fn declared_size(svg: &str) -> (i64, i64) {
    let root = tags(svg, "svg")[0];
    let size = |name: &str| -> i64 { attr(root, name).unwrap().parse().unwrap() };
    (size("width"), size("height"))
}

fn almanac() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_almanac"));
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// LAYOUT
// ============================================================================

#[test]
fn one_cell_per_day() {
    let config = CalendarConfig::default();
    for year in [2023, 2024, 1900, 2000] {
        let svg = YearLayout::new(year, &config).render().unwrap();
        let expected = if is_leap_year(year) { 366 } else { 365 };
        assert_eq!(count(&svg, "<polygon "), expected, "year {year}");
        // one label per day plus the header
        assert_eq!(count(&svg, "<text "), expected + 1, "year {year}");
    }
}

#[test]
fn first_of_month_cells() {
    let config = CalendarConfig::default();
    let svg = YearLayout::new(2024, &config).render().unwrap();
    let cells = tags(&svg, "polygon");
    let black: Vec<_> = cells
        .iter()
        .filter(|tag| attr(tag, "fill") == Some("black"))
        .collect();
    assert_eq!(black.len(), 12);
    // Jan 1 2024 sits in the top-left corner
    let first = cells[0];
    assert_eq!(attr(first, "points"), Some("0,105 40,105 40,145 0,145"));
    assert_eq!(attr(first, "fill"), Some("black"));
    assert_eq!(attr(first, "stroke"), Some("black"));
    assert_eq!(attr(first, "stroke-width"), Some("2"));
}

#[test]
fn grid_positions_round_trip() {
    let grid = GridConfig {
        columns: 18,
        ..Default::default()
    };
    let cells: Vec<_> = day_cells(2024, &grid).unwrap().collect();
    assert_eq!(cells.len(), 366);
    assert_eq!(cells[59].date, date(2024, 2, 29));
    for cell in &cells {
        assert_eq!(date_at(2024, cell.row, cell.column, &grid), Some(cell.date));
    }

    let grid = GridConfig::default();
    let last = day_cells(2023, &grid).unwrap().last().unwrap();
    assert_eq!(last.index, 364);
    assert_eq!(last.date, date(2023, 12, 31));
}

#[test]
fn declared_size_matches_bounds_plus_margins() {
    let mut config = CalendarConfig::default();
    config.margin_w = 7.0;
    config.margin_h = 3.0;
    config.grid.columns = 20;

    let mut canvas = config.canvas();
    YearLayout::new(2023, &config).draw(&mut canvas).unwrap();
    let (w, h) = canvas.bounds();
    // 365 days over 20 columns = 19 rows
    assert_eq!((w, h), (800.0, 105.0 + 19.0 * 40.0));
    assert_eq!(declared_size(&canvas.render()), (814, 871));
}

#[test]
fn arbitrary_draw_sequences_are_sized_by_their_extremes() {
    let mut canvas = Canvas::new(4.0, 6.0);
    assert_eq!(declared_size(&canvas.render()), (8, 12));

    canvas.line(Point::new(1.0, 1.0), Point::new(30.5, 2.0), 1.0, "black");
    canvas.rectangle(Point::rect(Point::new(0.0, 10.0), 5.0, 5.0), "white", "black", 1.0);
    canvas.label(Point::new(999.0, 999.0), "ignored", 10.0, FontWeight::Normal, "black");
    canvas.circle(Point::new(10.0, 18.0), 2.0, "red");
    assert_eq!(canvas.bounds(), (30.5, 20.0));
    assert_eq!(declared_size(&canvas.render()), (38, 32));
}

#[test]
fn render_twice_is_identical() {
    let config = CalendarConfig::default();
    let mut canvas = config.canvas();
    YearLayout::new(2024, &config).draw(&mut canvas).unwrap();
    assert_eq!(canvas.render(), canvas.render());
}

#[test]
fn variants_are_rule_tables() {
    let render = |rules: RuleTable| {
        let config = CalendarConfig {
            rules,
            ..Default::default()
        };
        YearLayout::new(2025, &config).render().unwrap()
    };

    let initials = render(RuleTable {
        labels: LabelStyle::Initial,
        ..Default::default()
    });
    assert!(initials.contains(">J</text>"));
    assert!(initials.contains(">D</text>"));

    let spanish = render(RuleTable {
        labels: LabelStyle::Name,
        language: Language::Es,
        ..Default::default()
    });
    assert!(spanish.contains(">Ene</text>"));
    assert!(spanish.contains(">Dic</text>"));

    let emoji = render(RuleTable {
        labels: LabelStyle::Emoji,
        ..Default::default()
    });
    assert!(emoji.contains(">🎄</text>"));
}

#[test]
fn past_highlighting() {
    let mut config = CalendarConfig::default();
    config.rules.highlight_past = true;

    let svg = YearLayout::new(2024, &config)
        .with_today(date(2024, 2, 1))
        .render()
        .unwrap();
    assert_eq!(count(&svg, "<circle "), 31);

    // A whole year in the past
    let svg = YearLayout::new(2020, &config)
        .with_today(date(2024, 2, 1))
        .render()
        .unwrap();
    assert_eq!(count(&svg, "<circle "), 366);

    // A year in the future
    let svg = YearLayout::new(2030, &config)
        .with_today(date(2024, 2, 1))
        .render()
        .unwrap();
    assert_eq!(count(&svg, "<circle "), 0);
}

// ============================================================================
// BINARY
// ============================================================================

#[test]
fn cli_prints_svg_to_stdout() {
    let output = almanac().args(["--year", "2023"]).output().unwrap();
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).unwrap();
    assert_eq!(tags(&svg, "svg").len(), 1);
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(count(&svg, "<polygon "), 365);
    assert!(svg.contains(">2023</text>"));
}

#[test]
fn cli_color_overrides_and_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calendar.svg");

    let output = almanac()
        .args([
            "--year",
            "2024",
            "--columns",
            "18",
            "--weekend-fill",
            "#eeeeee",
            "--first-fill",
            "navy",
            "--first-text",
            "gold",
            "--labels",
            "name",
            "--language",
            "it",
            "-o",
        ])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let svg = std::fs::read_to_string(&path).unwrap();
    assert_eq!(count(&svg, "fill=\"navy\""), 12);
    assert!(svg.contains("fill=\"#eeeeee\""));
    assert!(svg.contains(">Gen</text>"));
    assert!(svg.contains("fill=\"gold\""));
    // 18 columns of 40 plus margins
    assert_eq!(declared_size(&svg).0, 740);
}

#[test]
fn cli_reads_json_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("almanac.json");
    std::fs::write(
        &config_path,
        r#"{"rules": {"labels": "initial", "palette": {"background": "ivory"}}, "font_family": null}"#,
    )
    .unwrap();

    let output = almanac()
        .args(["--year", "2024", "--config"])
        .arg(&config_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        attr(tags(&svg, "svg")[0], "style"),
        Some("background-color: ivory;")
    );
    assert!(svg.contains(">F</text>"));
}

#[test]
fn cli_rejects_unknown_language() {
    let output = almanac()
        .args(["--year", "2024", "--language", "tlh"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unsupported language: tlh"));
}

#[test]
fn cli_requires_a_year() {
    let output = almanac().output().unwrap();
    assert!(!output.status.success());
}
