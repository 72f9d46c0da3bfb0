//! SVG serialization for [`Canvas`].
//!
//! Every shape goes into a single translated group, so the margins and any
//! negative-origin shift are applied once rather than baked into every
//! coordinate. Escaping is left to the `svg` crate.

use svg::Document;
use svg::node::element::{Circle, Group, Line, Polygon, Text};

use super::{Canvas, Shape};

pub(super) fn render(canvas: &Canvas) -> String {
    let (width, height) = canvas.document_size();
    let (margin_w, margin_h) = canvas.margins();
    let shift = canvas.origin();

    let mut style = format!("background-color: {};", canvas.background);
    if let Some(family) = &canvas.font_family {
        style.push_str(&format!(" font-family: {family};"));
    }

    let group = canvas.shapes().iter().fold(
        Group::new().set(
            "transform",
            format!("translate({},{})", margin_w - shift.x, margin_h - shift.y),
        ),
        |group, shape| match shape {
            Shape::Rectangle {
                corners,
                fill,
                stroke,
                stroke_width,
            } => group.add(
                Polygon::new()
                    .set(
                        "points",
                        corners
                            .iter()
                            .map(|p| format!("{},{}", p.x, p.y))
                            .collect::<Vec<_>>()
                            .join(" "),
                    )
                    .set("fill", fill.as_str())
                    .set("stroke", stroke.as_str())
                    .set("stroke-width", *stroke_width),
            ),
            Shape::Circle {
                center,
                radius,
                fill,
            } => group.add(
                Circle::new()
                    .set("cx", center.x)
                    .set("cy", center.y)
                    .set("r", *radius)
                    .set("fill", fill.as_str()),
            ),
            Shape::Line {
                start,
                end,
                width,
                color,
            } => group.add(
                Line::new()
                    .set("x1", start.x)
                    .set("y1", start.y)
                    .set("x2", end.x)
                    .set("y2", end.y)
                    .set("stroke", color.as_str())
                    .set("stroke-width", *width)
                    .set("stroke-linecap", "square"),
            ),
            Shape::Label {
                origin,
                text,
                size,
                weight,
                color,
            } => group.add(
                Text::new(text.as_str())
                    .set("x", origin.x)
                    .set("y", origin.y)
                    .set("font-size", format!("{size}px"))
                    .set("font-weight", weight.as_str())
                    .set("fill", color.as_str())
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle"),
            ),
        },
    );

    Document::new()
        .set("version", "1.1")
        .set("width", width)
        .set("height", height)
        .set("style", style)
        .add(group)
        .to_string()
}
