//! SVG export of a rendered scene
//!
//! Every primitive becomes one `<path>` element built from its lyon path,
//! so the SVG shows exactly what path-based surfaces draw.

use crate::primitive::{Primitive, Shape};
use crate::renderer::Scene;
use lyon::path::Event;

/// Default number of decimals written for coordinates
pub const DEFAULT_PRECISION: usize = 2;

/// SVG path data for a shape
pub fn shape_to_path_data(shape: &Shape, precision: usize) -> String {
    let path = shape.to_path();
    let p = precision;
    let mut commands = Vec::new();
    for event in path.iter() {
        match event {
            Event::Begin { at } => commands.push(format!("M {:.p$} {:.p$}", at.x, at.y)),
            Event::Line { to, .. } => commands.push(format!("L {:.p$} {:.p$}", to.x, to.y)),
            Event::Quadratic { ctrl, to, .. } => commands.push(format!(
                "Q {:.p$} {:.p$} {:.p$} {:.p$}",
                ctrl.x, ctrl.y, to.x, to.y
            )),
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => commands.push(format!(
                "C {:.p$} {:.p$} {:.p$} {:.p$} {:.p$} {:.p$}",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            )),
            Event::End { close: true, .. } => commands.push("Z".to_string()),
            Event::End { close: false, .. } => {}
        }
    }
    commands.join(" ")
}

fn primitive_element(primitive: &Primitive, precision: usize) -> String {
    let mut element = format!(
        "<path d=\"{}\"",
        shape_to_path_data(&primitive.shape, precision)
    );
    match primitive.fill {
        Some(fill) => element.push_str(&format!(" fill=\"{}\"", fill)),
        None => element.push_str(" fill=\"none\""),
    }
    if primitive.opacity < 1.0 {
        element.push_str(&format!(" opacity=\"{}\"", primitive.opacity));
    }
    if let Some(stroke) = primitive.stroke {
        element.push_str(&format!(
            " stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\"",
            stroke.color, stroke.width
        ));
    }
    element.push_str("/>");
    element
}

/// Serialize a scene as a standalone SVG document
pub fn to_svg(scene: &Scene, precision: usize) -> String {
    let mut svg = String::with_capacity(256 + scene.primitives.len() * 96);
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w:.p$} {h:.p$}\" width=\"{w:.p$}\" height=\"{h:.p$}\">\n",
        w = scene.width,
        h = scene.height,
        p = precision
    ));
    for primitive in &scene.primitives {
        svg.push_str("  ");
        svg.push_str(&primitive_element(primitive, precision));
        svg.push('\n');
    }
    svg.push_str("</svg>\n");
    svg
}
