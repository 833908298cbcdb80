use std::fmt;

use crate::math::Point3;

/// Display name used for points created without one.
pub const UNNAMED_POINT: &str = "unnamed point";

/// A 3D position tagged with an optional display name.
///
/// The name may be empty; [`NamedPoint::name`] then returns
/// [`UNNAMED_POINT`]. Figures copy the points they are built from, so a
/// `NamedPoint` is a plain value with no identity beyond its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedPoint {
    name: String,
    position: Point3,
}

impl NamedPoint {
    /// Creates a named point at `(x, y, z)`.
    #[must_use]
    pub fn new(name: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self::at(name, Point3::new(x, y, z))
    }

    /// Creates a named point at an existing position.
    #[must_use]
    pub fn at(name: impl Into<String>, position: Point3) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    /// Creates a point with an empty name.
    #[must_use]
    pub fn unnamed(position: Point3) -> Self {
        Self::at(String::new(), position)
    }

    /// Returns the display name, or [`UNNAMED_POINT`] when empty.
    #[must_use]
    pub fn name(&self) -> &str {
        if self.name.is_empty() {
            UNNAMED_POINT
        } else {
            &self.name
        }
    }

    /// Returns the name exactly as stored (possibly empty).
    #[must_use]
    pub fn raw_name(&self) -> &str {
        &self.name
    }

    /// Returns the position of the point.
    #[must_use]
    pub fn position(&self) -> &Point3 {
        &self.position
    }
}

/// Formats as `name(x, y, z)`. A precision (`{:.2}`) applies to every coordinate.
impl fmt::Display for NamedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.position.coords;
        match f.precision() {
            Some(p) => write!(
                f,
                "{}({:.p$}, {:.p$}, {:.p$})",
                self.name(),
                c.x,
                c.y,
                c.z
            ),
            None => write!(
                f,
                "{}({}, {}, {})",
                self.name(),
                c.x,
                c.y,
                c.z
            ),
        }
    }
}

/// Builds the vertices of a figure entered by coordinates.
///
/// Vertices are named `<figure>_p1`, `<figure>_p2`, ... When `figure` is
/// empty the vertices are left unnamed.
#[must_use]
pub fn name_vertices<const N: usize>(figure: &str, positions: [Point3; N]) -> [NamedPoint; N] {
    let mut i = 0;
    positions.map(|position| {
        i += 1;
        if figure.is_empty() {
            NamedPoint::unnamed(position)
        } else {
            NamedPoint::at(format!("{figure}_p{i}"), position)
        }
    })
}
