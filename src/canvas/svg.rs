//! SVG serialization of a dial canvas

use crate::geometry::Point;
use crate::stylesheet::Stylesheet;

use super::{CanvasConfig, Shape};

/// Default indicator size in millimeters
pub const DEFAULT_INDICATOR_SIZE: f64 = 2.0;

/// Build a dial template incrementally
///
/// Shapes are painted in insertion order, so later shapes cover earlier ones.
#[derive(Debug, Clone)]
pub struct Canvas {
    config: CanvasConfig,
    style: Stylesheet,
    shapes: Vec<Shape>,
}

impl Canvas {
    /// Create an empty canvas
    pub fn new(config: CanvasConfig) -> Self {
        Self::with_stylesheet(config, Stylesheet::default())
    }

    /// Create an empty canvas that serializes with the given colours
    pub fn with_stylesheet(config: CanvasConfig, style: Stylesheet) -> Self {
        Self {
            config,
            style,
            shapes: vec![],
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn center(&self) -> Point {
        Point::new(self.config.width_mm / 2.0, self.config.height_mm / 2.0)
    }

    /// Shapes in paint order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Add a thin unfilled circle around the center
    pub fn circle(&mut self, radius: f64) {
        self.shapes.push(Shape::Circle { radius });
    }

    /// Add a filled ring segment between two radii and two dial angles
    ///
    /// Radii and angles are not checked; out-of-range values give
    /// geometrically odd but well-formed output.
    pub fn sector_ring(
        &mut self,
        outer_radius: f64,
        inner_radius: f64,
        start_degree: f64,
        end_degree: f64,
    ) {
        self.shapes.push(Shape::SectorRing {
            outer_radius,
            inner_radius,
            start_degree,
            end_degree,
        });
    }

    /// Add a position indicator of the default size
    pub fn indicator(&mut self, inner_radius: f64, pos_degree: f64) {
        self.indicator_sized(inner_radius, pos_degree, DEFAULT_INDICATOR_SIZE);
    }

    /// Add a position indicator pointing at the circle of `inner_radius`
    pub fn indicator_sized(&mut self, inner_radius: f64, pos_degree: f64, size: f64) {
        self.shapes.push(Shape::Indicator {
            inner_radius,
            pos_degree,
            size,
        });
    }

    /// Serialized elements in paint order
    pub fn elements(&self) -> Vec<String> {
        let center = self.center();
        self.shapes
            .iter()
            .map(|shape| shape.to_svg(center, &self.style))
            .collect()
    }

    /// Build the final SVG document
    pub fn export_to_svg(&self) -> String {
        let width = self.config.width_mm;
        let height = self.config.height_mm;

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push('\n');
        }

        svg.push_str(&format!(
            r#"<svg width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
            w = width,
            h = height
        ));
        svg.push('\n');
        svg.push_str(&self.elements().join("\n"));
        svg.push('\n');
        svg.push_str("</svg>");

        svg
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}
