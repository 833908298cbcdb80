use super::{Plane, Rectangle, Shape, Square, Triangle};

/// Closed set of figures the evaluator knows about.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Triangle(Triangle),
    Plane(Plane),
    Square(Square),
    Rectangle(Rectangle),
}

impl Figure {
    /// Returns the variant's kind as a lowercase word.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Triangle(_) => "triangle",
            Self::Plane(_) => "plane",
            Self::Square(_) => "square",
            Self::Rectangle(_) => "rectangle",
        }
    }

    fn as_shape(&self) -> &dyn Shape {
        match self {
            Self::Triangle(t) => t,
            Self::Plane(p) => p,
            Self::Square(s) => s,
            Self::Rectangle(r) => r,
        }
    }
}

impl Shape for Figure {
    fn area(&self) -> f64 {
        self.as_shape().area()
    }

    fn perimeter(&self) -> f64 {
        self.as_shape().perimeter()
    }

    fn name(&self) -> String {
        self.as_shape().name()
    }

    fn describe_with(&self, precision: usize) -> String {
        self.as_shape().describe_with(precision)
    }
}

impl From<Triangle> for Figure {
    fn from(t: Triangle) -> Self {
        Self::Triangle(t)
    }
}

impl From<Plane> for Figure {
    fn from(p: Plane) -> Self {
        Self::Plane(p)
    }
}

impl From<Square> for Figure {
    fn from(s: Square) -> Self {
        Self::Square(s)
    }
}

impl From<Rectangle> for Figure {
    fn from(r: Rectangle) -> Self {
        Self::Rectangle(r)
    }
}
