use crate::math::distance;

use super::{display_name, push_metrics, push_vertices, NamedPoint, Shape};

/// Display name used for rectangles created without one.
pub const UNNAMED_RECTANGLE: &str = "unnamed rectangle";

/// A quadrilateral `p1 → p2 → p3 → p4 → p1` treated as a rectangle.
///
/// The perimeter sums all four consecutive edges. The area is
/// `|p1p2| · |p1p4|`, which assumes the two sides meeting at `p1` are
/// orthogonal; this is not verified.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    points: [NamedPoint; 4],
    name: String,
}

impl Rectangle {
    /// Creates a rectangle from copies of four corners in boundary order.
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

    /// Returns the four corners in boundary order.
    #[must_use]
    pub fn points(&self) -> &[NamedPoint; 4] {
        &self.points
    }

    /// Lengths of the edges `p1p2`, `p2p3`, `p3p4`, `p4p1`.
    #[must_use]
    pub fn edge_lengths(&self) -> [f64; 4] {
        std::array::from_fn(|i| {
            distance(
                self.points[i].position(),
                self.points[(i + 1) % 4].position(),
            )
        })
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        let [p1, p2, _, p4] = &self.points;
        let width = distance(p2.position(), p1.position());
        let height = distance(p4.position(), p1.position());
        (width * height).abs()
    }

    fn perimeter(&self) -> f64 {
        self.edge_lengths().iter().sum()
    }

    fn name(&self) -> String {
        display_name(&self.name, UNNAMED_RECTANGLE)
    }

    fn describe_with(&self, precision: usize) -> String {
        let mut out = format!("Rectangle: {}", self.name());
        push_vertices(&mut out, &self.points, precision);
        push_metrics(&mut out, self, precision);
        out
    }
}
