//! Renderer-agnostic drawing primitives
//!
//! A scene is a back-to-front list of `Primitive`s. Consumers map them onto
//! whatever surface they own (SVG, canvas, native 2D); `Shape::to_path`
//! gives a `lyon` path for surfaces that want one.

use crate::layers::LayerKind;
use cafekit_core::{Color, Point};
use lyon::math::{point, Box2D};
use lyon::path::builder::BorderRadii;
use lyon::path::{Path, Winding};
use serde::{Deserialize, Serialize};

/// What part of the illustration a primitive belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveRole {
    CupOutline,
    Band(LayerKind),
    IceCube,
    ToppingDot,
    Baseline,
    Lid,
    LidHighlight,
    LidRim,
}

/// Primitive geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Polygon {
        points: Vec<Point>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    Circle {
        center: Point,
        radius: f64,
    },
    Line {
        from: Point,
        to: Point,
    },
}

impl Shape {
    /// Closed rectangle with rounded corners; the radius is capped at half
    /// the shorter side
    pub fn rounded_rect(x: f64, y: f64, width: f64, height: f64, corner_radius: f64) -> Self {
        Shape::Rect {
            x,
            y,
            width,
            height,
            corner_radius: corner_radius.min(width.min(height) / 2.0).max(0.0),
        }
    }

    /// Build a lyon path for this shape
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        match self {
            Shape::Polygon { points } => {
                if let Some((first, rest)) = points.split_first() {
                    builder.begin(point(first.x as f32, first.y as f32));
                    for p in rest {
                        builder.line_to(point(p.x as f32, p.y as f32));
                    }
                    builder.end(true);
                }
            }
            Shape::Rect {
                x,
                y,
                width,
                height,
                corner_radius,
            } => {
                let rect = Box2D::new(
                    point(*x as f32, *y as f32),
                    point((x + width) as f32, (y + height) as f32),
                );
                if *corner_radius > 0.0 {
                    builder.add_rounded_rectangle(
                        &rect,
                        &BorderRadii::new(*corner_radius as f32),
                        Winding::Positive,
                    );
                } else {
                    builder.add_rectangle(&rect, Winding::Positive);
                }
            }
            Shape::Circle { center, radius } => {
                builder.add_circle(
                    point(center.x as f32, center.y as f32),
                    *radius as f32,
                    Winding::Positive,
                );
            }
            Shape::Line { from, to } => {
                builder.begin(point(from.x as f32, from.y as f32));
                builder.line_to(point(to.x as f32, to.y as f32));
                builder.end(false);
            }
        }
        builder.build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// One drawable record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub role: PrimitiveRole,
    pub shape: Shape,
    pub fill: Option<Color>,
    pub opacity: f64,
    pub stroke: Option<Stroke>,
}

impl Primitive {
    /// Filled, unstroked primitive
    pub fn filled(role: PrimitiveRole, shape: Shape, fill: Color, opacity: f64) -> Self {
        Self {
            role,
            shape,
            fill: Some(fill),
            opacity,
            stroke: None,
        }
    }

    /// Stroked, unfilled primitive
    pub fn stroked(role: PrimitiveRole, shape: Shape, stroke: Stroke) -> Self {
        Self {
            role,
            shape,
            fill: None,
            opacity: 1.0,
            stroke: Some(stroke),
        }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_rect_caps_radius() {
        match Shape::rounded_rect(0.0, 0.0, 40.0, 10.0, 50.0) {
            Shape::Rect { corner_radius, .. } => assert_eq!(corner_radius, 5.0),
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn test_serializes_tagged_shape() {
        let prim = Primitive::filled(
            PrimitiveRole::Band(LayerKind::Milk),
            Shape::Line {
                from: Point::new(0.0, 0.0),
                to: Point::new(1.0, 0.0),
            },
            Color::WHITE,
            1.0,
        );
        let json = serde_json::to_value(&prim).unwrap();
        assert_eq!(json["shape"]["type"], "line");
        assert_eq!(json["role"]["band"], "milk");
        assert_eq!(json["fill"], "#ffffff");
        assert!(json["stroke"].is_null());
    }
}
