use crate::math::{cross, difference, length, Vector3};

use super::{display_name, push_metrics, NamedPoint, Shape};

/// Display name used for planes created without one.
pub const UNNAMED_PLANE: &str = "unnamed plane";

/// An infinite plane `Ax + By + Cz + D = 0`.
///
/// A plane is unbounded, so its area and perimeter are both
/// [`f64::INFINITY`]. The coefficients are not normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    edge_span: Option<f64>,
    name: String,
}

impl Plane {
    /// Creates a plane from its equation coefficients.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            a,
            b,
            c,
            d,
            edge_span: None,
            name: String::new(),
        }
    }

    /// Creates the plane through three points.
    ///
    /// The normal is `(p2 - p1) × (p3 - p1)`. Collinear points produce a zero
    /// normal and therefore the degenerate equation `0x + 0y + 0z + 0 = 0`.
    #[must_use]
    pub fn from_points(p1: &NamedPoint, p2: &NamedPoint, p3: &NamedPoint) -> Self {
        let origin = p1.position();
        let v1 = difference(p2.position(), origin);
        let v2 = difference(p3.position(), origin);
        let n = cross(&v1, &v2);
        let d = -(n.x * origin.x + n.y * origin.y + n.z * origin.z);
        Self {
            edge_span: Some(length(&v1) * length(&v2)),
            ..Self::new(n.x, n.y, n.z, d)
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns `[A, B, C, D]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// For a plane built from points, `|p2 - p1| · |p3 - p1|`; the normal's
    /// length is only meaningful relative to it. `None` for direct coefficients.
    #[must_use]
    pub fn edge_span(&self) -> Option<f64> {
        self.edge_span
    }

    /// Returns the (unnormalized) normal vector `(A, B, C)`.
    #[must_use]
    pub fn plane_normal(&self) -> Vector3 {
        Vector3::new(self.a, self.b, self.c)
    }
}

impl Shape for Plane {
    fn area(&self) -> f64 {
        f64::INFINITY
    }

    fn perimeter(&self) -> f64 {
        f64::INFINITY
    }

    fn name(&self) -> String {
        display_name(&self.name, UNNAMED_PLANE)
    }

    fn describe_with(&self, precision: usize) -> String {
        let p = precision;
        let mut out = format!(
            "Plane: {}\nEquation: {:.p$}x + {:.p$}y + {:.p$}z + {:.p$} = 0",
            self.name(),
            self.a,
            self.b,
            self.c,
            self.d
        );
        push_metrics(&mut out, self, precision);
        out
    }
}
