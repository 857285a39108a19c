//! Shape records drawn on a dial canvas

use crate::geometry::{half_angle_degrees, large_arc, polar_to_cartesian, Point};
use crate::stylesheet::Stylesheet;

use super::path::SvgPath;

/// A drawable primitive, positioned relative to the canvas center
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Unfilled reference circle
    Circle { radius: f64 },
    /// Filled annulus wedge between two radii and two dial angles
    SectorRing {
        outer_radius: f64,
        inner_radius: f64,
        start_degree: f64,
        end_degree: f64,
    },
    /// Filled triangle whose tip touches the circle of `inner_radius`
    Indicator {
        inner_radius: f64,
        pos_degree: f64,
        size: f64,
    },
}

impl Shape {
    /// SVG element name this shape serializes to
    pub fn tag(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::SectorRing { .. } => "path",
            Shape::Indicator { .. } => "polygon",
        }
    }

    /// Serialize as a single SVG element
    pub fn to_svg(&self, center: Point, style: &Stylesheet) -> String {
        match self {
            Shape::Circle { radius } => format!(
                r#"<circle cx="{}" cy="{}" r="{}" stroke="{}" stroke-width="{}" fill="none" />"#,
                center.x, center.y, radius, style.outline, style.outline_width
            ),
            Shape::SectorRing { .. } => format!(
                r#"<path d="{}" stroke="none" stroke-width="{}" fill="{}"/>"#,
                self.sector_path(center).to_svg_d(),
                style.outline_width,
                style.ink
            ),
            Shape::Indicator { .. } => {
                let points = self
                    .indicator_points(center)
                    .iter()
                    .map(|p| format!("{},{}", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(r#"<polygon points="{}" fill="{}" />"#, points, style.ink)
            }
        }
    }

    /// Outline of a sector ring: outer arc from the end angle back to the
    /// start angle, then the inner arc forward again.
    ///
    /// The two arcs must sweep in opposite directions for the outline to
    /// close into a simple region. Empty for other shapes.
    pub fn sector_path(&self, center: Point) -> SvgPath {
        let Shape::SectorRing {
            outer_radius,
            inner_radius,
            start_degree,
            end_degree,
        } = *self
        else {
            return SvgPath::new();
        };

        let start_outer = polar_to_cartesian(center, outer_radius, end_degree);
        let end_outer = polar_to_cartesian(center, outer_radius, start_degree);
        let start_inner = polar_to_cartesian(center, inner_radius, end_degree);
        let end_inner = polar_to_cartesian(center, inner_radius, start_degree);
        let large = large_arc(start_degree, end_degree);

        SvgPath::new()
            .move_to(start_outer)
            .arc_to(end_outer, outer_radius, large, false)
            .line_to(end_inner)
            .arc_to(start_inner, inner_radius, large, true)
            .close()
    }

    /// Tip and the two base corners of an indicator. Empty for other shapes.
    ///
    /// The base keeps roughly the same physical width at any radius.
    pub fn indicator_points(&self, center: Point) -> Vec<Point> {
        let Shape::Indicator {
            inner_radius,
            pos_degree,
            size,
        } = *self
        else {
            return Vec::new();
        };

        let tip = polar_to_cartesian(center, inner_radius, pos_degree);
        let base_radius = inner_radius + size;
        let half = half_angle_degrees(size / 2.0, base_radius);

        vec![
            tip,
            polar_to_cartesian(center, base_radius, pos_degree - half),
            polar_to_cartesian(center, base_radius, pos_degree + half),
        ]
    }
}
