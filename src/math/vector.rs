use super::{Point3, Vector3, TOLERANCE};

/// Returns the vector pointing from `b` to `a` (`a - b` componentwise).
///
/// Not commutative: `difference(a, b) == -difference(b, a)`.
#[must_use]
pub fn difference(a: &Point3, b: &Point3) -> Vector3 {
    a - b
}

/// Standard 3D cross product `a × b`.
///
/// The result is the zero vector iff `a` and `b` are parallel, which includes
/// either of them being zero.
#[must_use]
pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
    a.cross(b)
}

/// Euclidean norm `sqrt(x² + y² + z²)`.
#[must_use]
pub fn length(v: &Vector3) -> f64 {
    v.norm()
}

/// Distance between two points.
#[must_use]
pub fn distance(a: &Point3, b: &Point3) -> f64 {
    length(&difference(a, b))
}

/// Returns `true` if `a`, `b` and `c` lie on one line.
///
/// The cross product magnitude is compared against the product of the two
/// edge lengths, so the check does not depend on the scale of the input.
/// Coincident points count as collinear.
#[must_use]
pub fn are_collinear(a: &Point3, b: &Point3, c: &Point3) -> bool {
    are_collinear_within(a, b, c, TOLERANCE)
}

/// [`are_collinear`] with a caller-chosen relative tolerance.
#[must_use]
pub fn are_collinear_within(a: &Point3, b: &Point3, c: &Point3, tolerance: f64) -> bool {
    let ab = difference(b, a);
    let ac = difference(c, a);
    is_parallel_span(&cross(&ab, &ac), length(&ab) * length(&ac), tolerance)
}

/// Returns `true` if a cross product is negligible next to `scale`, the
/// product of the lengths of the two vectors it was built from.
#[must_use]
pub fn is_parallel_span(cross: &Vector3, scale: f64, tolerance: f64) -> bool {
    if scale < TOLERANCE * TOLERANCE {
        return true;
    }
    length(cross) <= tolerance * scale
}
