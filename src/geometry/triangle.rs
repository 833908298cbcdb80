use crate::math::{cross, difference, distance, length};

use super::{display_name, push_metrics, NamedPoint, Shape};

/// Display name used for triangles created without one.
pub const UNNAMED_TRIANGLE: &str = "unnamed triangle";

/// A triangle spanned by three points.
///
/// Collinear vertices are accepted and yield an area of exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    points: [NamedPoint; 3],
    name: String,
}

impl Triangle {
    /// Creates a triangle from copies of three points.
    #[must_use]
    pub fn new(p1: NamedPoint, p2: NamedPoint, p3: NamedPoint, name: impl Into<String>) -> Self {
        Self {
            points: [p1, p2, p3],
            name: name.into(),
        }
    }

    /// Returns the three vertices in construction order.
    #[must_use]
    pub fn points(&self) -> &[NamedPoint; 3] {
        &self.points
    }
}

impl Shape for Triangle {
    /// Half the magnitude of the cross product of the two edges leaving `p1`.
    fn area(&self) -> f64 {
        let [p1, p2, p3] = &self.points;
        let v1 = difference(p2.position(), p1.position());
        let v2 = difference(p3.position(), p1.position());
        length(&cross(&v1, &v2)) / 2.0
    }

    fn perimeter(&self) -> f64 {
        let [p1, p2, p3] = &self.points;
        distance(p1.position(), p2.position())
            + distance(p2.position(), p3.position())
            + distance(p3.position(), p1.position())
    }

    fn name(&self) -> String {
        display_name(&self.name, UNNAMED_TRIANGLE)
    }

    fn describe_with(&self, precision: usize) -> String {
        let mut out = format!("Triangle: {}", self.name());
        push_metrics(&mut out, self, precision);
        out
    }
}
