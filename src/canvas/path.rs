//! SVG path data for closed dial outlines

use crate::geometry::Point;

/// A segment in a path
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Circular arc to point
    ArcTo {
        end: Point,
        radius: f64,
        large_arc: bool,
        sweep: bool, // true = clockwise in SVG coordinates (y-down)
    },
    /// Close path back to start
    Close,
}

/// A sequence of segments ready for SVG rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgPath {
    pub segments: Vec<PathSegment>,
}

impl SvgPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Point) -> Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn arc_to(mut self, end: Point, radius: f64, large_arc: bool, sweep: bool) -> Self {
        self.segments.push(PathSegment::ArcTo {
            end,
            radius,
            large_arc,
            sweep,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// Convert to SVG path `d` attribute string
    ///
    /// Coordinates keep full precision; the template is printed at 1:1 scale.
    pub fn to_svg_d(&self) -> String {
        self.segments
            .iter()
            .map(|seg| match seg {
                PathSegment::MoveTo(p) => format!("M {} {}", p.x, p.y),
                PathSegment::LineTo(p) => format!("L {} {}", p.x, p.y),
                PathSegment::ArcTo {
                    end,
                    radius,
                    large_arc,
                    sweep,
                } => {
                    // A rx ry x-axis-rotation large-arc-flag sweep-flag x y
                    format!(
                        "A {} {} 0 {} {} {} {}",
                        radius,
                        radius,
                        u8::from(*large_arc),
                        u8::from(*sweep),
                        end.x,
                        end.y
                    )
                }
                PathSegment::Close => "Z".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
