use crate::math::distance;

use super::{display_name, push_metrics, push_vertices, NamedPoint, Shape};

/// Display name used for squares created without one.
pub const UNNAMED_SQUARE: &str = "unnamed square";

/// A square given by its four corners.
///
/// Only `p1` and `p2` drive the metrics: they are taken to be adjacent
/// corners, so `|p2 - p1|` is the side length. `p3` and `p4` are stored and
/// displayed but never checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    points: [NamedPoint; 4],
    name: String,
}

impl Square {
    /// Creates a square from copies of four corners.
    #[must_use]
    pub fn new(
        p1: NamedPoint,
        p2: NamedPoint,
        p3: NamedPoint,
        p4: NamedPoint,
        name: impl Into<String>,
    ) -> Self {
        Self {
            points: [p1, p2, p3, p4],
            name: name.into(),
        }
    }

    /// Returns the four corners in construction order.
    #[must_use]
    pub fn points(&self) -> &[NamedPoint; 4] {
        &self.points
    }

    /// Length of the side `p1 → p2`.
    #[must_use]
    pub fn side(&self) -> f64 {
        distance(self.points[0].position(), self.points[1].position())
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        let side = self.side();
        side * side
    }

    fn perimeter(&self) -> f64 {
        4.0 * self.side()
    }

    fn name(&self) -> String {
        display_name(&self.name, UNNAMED_SQUARE)
    }

    fn describe_with(&self, precision: usize) -> String {
        let mut out = format!("Square: {}", self.name());
        push_vertices(&mut out, &self.points, precision);
        push_metrics(&mut out, self, precision);
        out
    }
}
