//! Polar geometry shared by every dial shape
//!
//! Dial angles are measured in degrees with 0 pointing up (canvas north)
//! and increasing clockwise, which matches SVG's y-down coordinate system.

/// A 2D point in canvas millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Convert a dial angle (0 = up, clockwise) to standard radians
pub fn dial_to_radians(degrees: f64) -> f64 {
    (degrees - 90.0) * std::f64::consts::PI / 180.0
}

/// Position of a point at `radius` and dial angle `degrees` around `center`
pub fn polar_to_cartesian(center: Point, radius: f64, degrees: f64) -> Point {
    let radians = dial_to_radians(degrees);
    Point {
        x: center.x + radius * radians.cos(),
        y: center.y + radius * radians.sin(),
    }
}

/// SVG large-arc flag for an arc sweeping from `start` to `end` degrees
pub fn large_arc(start_degree: f64, end_degree: f64) -> bool {
    end_degree - start_degree > 180.0
}

/// Angular half-width, in degrees, of a chord of `half_width` at `radius`
pub fn half_angle_degrees(half_width: f64, radius: f64) -> f64 {
    (half_width / radius).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            actual.distance(expected) < EPS,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_zero_degrees_points_up() {
        let p = polar_to_cartesian(Point::new(50.0, 50.0), 38.0, 0.0);
        assert_close(p, Point::new(50.0, 12.0));
    }

    #[test]
    fn test_angles_increase_clockwise() {
        let c = Point::new(50.0, 50.0);
        assert_close(polar_to_cartesian(c, 13.0, 90.0), Point::new(63.0, 50.0));
        assert_close(polar_to_cartesian(c, 8.0, 180.0), Point::new(50.0, 58.0));
        assert_close(polar_to_cartesian(c, 10.0, 270.0), Point::new(40.0, 50.0));
    }

    #[test]
    fn test_zero_radius_is_center() {
        let c = Point::new(12.5, 7.0);
        assert_close(polar_to_cartesian(c, 0.0, 123.0), c);
    }

    #[test]
    fn test_large_arc_threshold() {
        assert!(!large_arc(0.0, 180.0));
        assert!(large_arc(0.0, 181.0));
        assert!(!large_arc(20.0, 27.5));
        assert!(large_arc(10.0, 350.0));
    }

    #[test]
    fn test_half_angle() {
        let deg = half_angle_degrees(1.0, 40.0);
        assert!((deg - 1.0_f64.atan2(40.0).to_degrees()).abs() < 1e-3);
        assert!((deg - 0.025_f64.to_degrees()).abs() < EPS);
    }
}
