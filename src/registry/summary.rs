use std::fmt;

use crate::geometry::Shape;

/// Name and metrics of one registry entry, as shown when a shape is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSummary {
    pub name: String,
    pub area: f64,
    pub perimeter: f64,
}

impl ShapeSummary {
    /// Evaluates `shape` once and captures the result.
    #[must_use]
    pub fn of(shape: &impl Shape) -> Self {
        Self {
            name: shape.name(),
            area: shape.area(),
            perimeter: shape.perimeter(),
        }
    }
}

impl fmt::Display for ShapeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(crate::params::DEFAULT_PRECISION);
        write!(
            f,
            "Selected shape: {}\nArea: {:.p$}\nPerimeter: {:.p$}",
            self.name, self.area, self.perimeter
        )
    }
}
