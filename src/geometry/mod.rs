mod figure;
mod plane;
mod point;
mod rectangle;
mod square;
mod triangle;

pub use figure::Figure;
pub use plane::{Plane, UNNAMED_PLANE};
pub use point::{name_vertices, NamedPoint, UNNAMED_POINT};
pub use rectangle::{Rectangle, UNNAMED_RECTANGLE};
pub use square::{Square, UNNAMED_SQUARE};
pub use triangle::{Triangle, UNNAMED_TRIANGLE};

use crate::params::DEFAULT_PRECISION;

/// Capability shared by every figure.
pub trait Shape {
    /// Returns the area. Finite and non-negative for bounded figures,
    /// [`f64::INFINITY`] for unbounded ones.
    fn area(&self) -> f64;

    /// Returns the perimeter, with the same convention as [`Shape::area`].
    fn perimeter(&self) -> f64;

    /// Returns the stored name, or a variant-specific placeholder when empty.
    fn name(&self) -> String;

    /// Returns a multi-line summary, printing numbers with `precision` decimals.
    fn describe_with(&self, precision: usize) -> String;

    /// Returns a multi-line summary using [`DEFAULT_PRECISION`].
    fn describe(&self) -> String {
        self.describe_with(DEFAULT_PRECISION)
    }
}

/// Returns `name`, or `placeholder` when `name` is empty.
pub(crate) fn display_name(name: &str, placeholder: &str) -> String {
    if name.is_empty() {
        placeholder.to_owned()
    } else {
        name.to_owned()
    }
}

/// Appends the area and perimeter lines shared by every description.
pub(crate) fn push_metrics(out: &mut String, shape: &impl Shape, precision: usize) {
    use std::fmt::Write;

    // Writing to a String cannot fail.
    let _ = write!(
        out,
        "\nArea: {:.p$}\nPerimeter: {:.p$}",
        shape.area(),
        shape.perimeter(),
        p = precision
    );
}

/// Appends an indented vertex listing.
pub(crate) fn push_vertices(out: &mut String, points: &[NamedPoint], precision: usize) {
    use std::fmt::Write;

    out.push_str("\nVertices:");
    for point in points {
        let _ = write!(out, "\n  {point:.precision$}");
    }
}
