//! # Vector Canvas
//!
//! A small append-only drawing surface that records SVG primitives and keeps
//! a running bounding box of everything drawn so far.
//!
//! ## Bounding Box
//!
//! The box starts as the single point `(0, 0)` and only ever grows, in both
//! directions. Each primitive contributes the points that define it:
//!
//! | Primitive   | Contributes                                  |
//! |-------------|----------------------------------------------|
//! | `rectangle` | all four corners                             |
//! | `circle`    | `center - radius` and `center + radius`      |
//! | `line`      | both endpoints                               |
//! | `label`     | nothing (must sit inside a bounded shape)    |
//!
//! The rendered document is `bounds + 2 * margin` on each axis, truncated to
//! whole pixels. Content drawn left of or above the origin is shifted back
//! into the page, so `origin()` always lands on the top-left margin.
//!
//! ## Usage
//!
//! ```
//! use almanac::canvas::{Canvas, FontWeight, Point};
//!
//! let mut canvas = Canvas::new(10.0, 10.0);
//! canvas.rectangle(
//!     Point::rect(Point::new(0.0, 0.0), 40.0, 40.0),
//!     "black",
//!     "black",
//!     2.0,
//! );
//! canvas.label(Point::new(20.0, 21.5), "1", 16.0, FontWeight::Bold, "white");
//!
//! let svg = canvas.render();
//! assert!(svg.contains(r#"width="60""#));
//! ```

mod markup;

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Corners of an axis-aligned rectangle in drawing order:
    /// top-left, top-right, bottom-right, bottom-left.
    pub fn rect(origin: Point, width: f64, height: f64) -> [Point; 4] {
        [
            origin,
            Point::new(origin.x + width, origin.y),
            Point::new(origin.x + width, origin.y + height),
            Point::new(origin.x, origin.y + height),
        ]
    }
}

/// Font weight for text labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// A recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Closed polygon with four corners.
    Rectangle {
        corners: [Point; 4],
        fill: String,
        stroke: String,
        stroke_width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: String,
    },
    /// Segment with square line caps.
    Line {
        start: Point,
        end: Point,
        width: f64,
        color: String,
    },
    /// Text centered on `origin` in both directions.
    Label {
        origin: Point,
        text: String,
        size: f64,
        weight: FontWeight,
        color: String,
    },
}

/// Append-only SVG drawing surface with bounding box tracking.
#[derive(Debug, Clone)]
pub struct Canvas {
    shapes: Vec<Shape>,
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    margin_w: f64,
    margin_h: f64,
    background: String,
    font_family: Option<String>,
}

impl Canvas {
    /// Create an empty canvas with fixed margins on every side.
    pub fn new(margin_w: f64, margin_h: f64) -> Self {
        Self {
            shapes: Vec::new(),
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
            margin_w,
            margin_h,
            background: "white".to_string(),
            font_family: Some("sans-serif".to_string()),
        }
    }

    /// Set the document background color.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    /// Set the document font family. `None` leaves it to the viewer.
    pub fn with_font_family(mut self, family: Option<String>) -> Self {
        self.font_family = family;
        self
    }

    fn grow(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }

    /// Draw a closed four-cornered polygon.
    ///
    /// Corners are expected in top-left, top-right, bottom-right, bottom-left
    /// order; orientation is not checked.
    pub fn rectangle(&mut self, corners: [Point; 4], fill: &str, stroke: &str, stroke_width: f64) {
        for corner in corners {
            self.grow(corner);
        }
        self.shapes.push(Shape::Rectangle {
            corners,
            fill: fill.to_string(),
            stroke: stroke.to_string(),
            stroke_width,
        });
    }

    /// Draw a filled circle. Its full extent counts toward the bounding box.
    pub fn circle(&mut self, center: Point, radius: f64, fill: &str) {
        self.grow(Point::new(center.x - radius, center.y - radius));
        self.grow(Point::new(center.x + radius, center.y + radius));
        self.shapes.push(Shape::Circle {
            center,
            radius,
            fill: fill.to_string(),
        });
    }

    /// Draw a line segment with square caps.
    pub fn line(&mut self, start: Point, end: Point, width: f64, color: &str) {
        self.grow(start);
        self.grow(end);
        self.shapes.push(Shape::Line {
            start,
            end,
            width,
            color: color.to_string(),
        });
    }

    /// Draw text centered on `origin`.
    ///
    /// Labels do not grow the bounding box; callers place them inside shapes
    /// that already do.
    pub fn label(&mut self, origin: Point, text: &str, size: f64, weight: FontWeight, color: &str) {
        self.shapes.push(Shape::Label {
            origin,
            text: text.to_string(),
            size,
            weight,
            color: color.to_string(),
        });
    }

    /// Tracked content size as `(width, height)`, margins excluded.
    pub fn bounds(&self) -> (f64, f64) {
        (self.max_x - self.min_x, self.max_y - self.min_y)
    }

    /// Top-left corner of the bounding box. `(0, 0)` unless something was
    /// drawn at negative coordinates.
    pub fn origin(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn margins(&self) -> (f64, f64) {
        (self.margin_w, self.margin_h)
    }

    /// Declared document size: content plus margins, truncated.
    pub fn document_size(&self) -> (i64, i64) {
        let (width, height) = self.bounds();
        (
            (width + 2.0 * self.margin_w) as i64,
            (height + 2.0 * self.margin_h) as i64,
        )
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Serialize every shape in draw order into a standalone SVG document.
    pub fn render(&self) -> String {
        markup::render(self)
    }
}
