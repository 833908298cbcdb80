use crate::error::GeometryError;
use crate::geometry::{Figure, NamedPoint, Plane, Rectangle, Square, Triangle};
use crate::math::{
    are_collinear_within, cross, difference, distance, is_parallel_span, length, Point3, TOLERANCE,
};

/// Checks that a figure is geometrically what its variant claims.
///
/// The figure's metrics never depend on this check: it only reports
/// problems so a strict [`Registry`](crate::Registry) can refuse the figure.
pub struct CheckFigure<'a> {
    figure: &'a Figure,
    tolerance: f64,
}

impl<'a> CheckFigure<'a> {
    /// Creates a check with the global [`TOLERANCE`].
    #[must_use]
    pub fn new(figure: &'a Figure) -> Self {
        Self {
            figure,
            tolerance: TOLERANCE,
        }
    }

    /// Sets a custom relative tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Runs the check.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for non-finite input and for
    /// collinear or coincident vertices, and [`GeometryError::NotRectangular`]
    /// for quadrilaterals whose corners are not right angles or whose sides
    /// disagree.
    pub fn execute(&self) -> Result<(), GeometryError> {
        check_finite(self.figure)?;
        match self.figure {
            Figure::Triangle(t) => check_triangle(t, self.tolerance),
            Figure::Plane(p) => check_plane(p, self.tolerance),
            Figure::Square(s) => check_square(s, self.tolerance),
            Figure::Rectangle(r) => check_rectangle(r, self.tolerance),
        }
    }
}

/// NaN fails every comparison below, so it has to be caught up front.
fn check_finite(figure: &Figure) -> Result<(), GeometryError> {
    let finite = match figure {
        Figure::Triangle(t) => points_finite(t.points()),
        Figure::Plane(p) => p.coefficients().iter().all(|v| v.is_finite()),
        Figure::Square(s) => points_finite(s.points()),
        Figure::Rectangle(r) => points_finite(r.points()),
    };
    if finite {
        Ok(())
    } else {
        Err(GeometryError::Degenerate(format!(
            "{} has a non-finite coordinate",
            figure.kind()
        )))
    }
}

fn points_finite(points: &[NamedPoint]) -> bool {
    points
        .iter()
        .all(|p| p.position().coords.iter().all(|v| v.is_finite()))
}

fn check_triangle(triangle: &Triangle, tolerance: f64) -> Result<(), GeometryError> {
    let [a, b, c] = triangle.points();
    if are_collinear_within(a.position(), b.position(), c.position(), tolerance) {
        return Err(GeometryError::Degenerate(
            "triangle vertices are collinear".into(),
        ));
    }
    Ok(())
}

fn check_plane(plane: &Plane, tolerance: f64) -> Result<(), GeometryError> {
    let normal = plane.plane_normal();
    let degenerate = match plane.edge_span() {
        Some(span) => is_parallel_span(&normal, span, tolerance),
        None => {
            let largest = plane
                .coefficients()
                .iter()
                .fold(0.0_f64, |acc, v| acc.max(v.abs()));
            length(&normal) <= tolerance * largest
        }
    };
    if degenerate {
        return Err(GeometryError::Degenerate(
            "plane normal is zero (collinear points or A = B = C = 0)".into(),
        ));
    }
    Ok(())
}

fn check_square(square: &Square, tolerance: f64) -> Result<(), GeometryError> {
    let points = square.points();
    check_quad_corners(points, "square", tolerance)?;

    let side = square.side();
    for (i, point) in points.iter().enumerate() {
        let next = &points[(i + 1) % 4];
        let edge = distance(point.position(), next.position());
        if (edge - side).abs() > tolerance * side {
            return Err(GeometryError::NotRectangular(format!(
                "square with sides {side} and {edge}"
            )));
        }
    }
    Ok(())
}

fn check_rectangle(rectangle: &Rectangle, tolerance: f64) -> Result<(), GeometryError> {
    check_quad_corners(rectangle.points(), "rectangle", tolerance)
}

/// Verifies non-zero edges, right angles at every corner, and coplanarity.
fn check_quad_corners(
    points: &[NamedPoint; 4],
    kind: &str,
    tolerance: f64,
) -> Result<(), GeometryError> {
    let pos: [&Point3; 4] = std::array::from_fn(|i| points[i].position());
    let edges: [_; 4] = std::array::from_fn(|i| difference(pos[(i + 1) % 4], pos[i]));

    for (i, edge) in edges.iter().enumerate() {
        if length(edge) < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "{kind} edge {} has zero length",
                i + 1
            )));
        }
    }

    for i in 0..4 {
        let incoming = &edges[(i + 3) % 4];
        let outgoing = &edges[i];
        let cos = incoming.dot(outgoing) / (length(incoming) * length(outgoing));
        if cos.abs() > tolerance.max(TOLERANCE) {
            return Err(GeometryError::NotRectangular(format!(
                "{kind} corner {} is not a right angle",
                i + 1
            )));
        }
    }

    // Right angles everywhere still allow a skew quadrilateral in 3D.
    let normal = cross(&edges[0], &edges[1]);
    let out_of_plane = normal.dot(&difference(pos[3], pos[0])) / length(&normal);
    let scale = length(&edges[0]).max(length(&edges[1]));
    if out_of_plane.abs() > tolerance.max(TOLERANCE) * scale {
        return Err(GeometryError::NotRectangular(format!(
            "{kind} corners are not coplanar"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> NamedPoint {
        NamedPoint::new("", x, y, z)
    }

    fn quad(pts: [[f64; 3]; 4]) -> [NamedPoint; 4] {
        pts.map(|[x, y, z]| p(x, y, z))
    }

    fn square(pts: [[f64; 3]; 4]) -> Figure {
        let [a, b, c, d] = quad(pts);
        Square::new(a, b, c, d, "s").into()
    }

    fn rectangle(pts: [[f64; 3]; 4]) -> Figure {
        let [a, b, c, d] = quad(pts);
        Rectangle::new(a, b, c, d, "r").into()
    }

    #[test]
    fn valid_triangle_passes() {
        let fig: Figure = Triangle::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), "").into();
        assert!(CheckFigure::new(&fig).execute().is_ok());
    }

    #[test]
    fn collinear_triangle_is_degenerate() {
        let fig: Figure = Triangle::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0), "").into();
        assert!(matches!(
            CheckFigure::new(&fig).execute(),
            Err(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn plane_checks() {
        let ok: Figure = Plane::from_points(&p(1.0, 0.0, 0.0), &p(0.0, 1.0, 0.0), &p(0.0, 0.0, 1.0)).into();
        assert!(CheckFigure::new(&ok).execute().is_ok());

        let flat: Figure = Plane::from_points(&p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0), &p(3.0, 0.0, 0.0)).into();
        assert!(matches!(
            CheckFigure::new(&flat).execute(),
            Err(GeometryError::Degenerate(_))
        ));

        let zero: Figure = Plane::new(0.0, 0.0, 0.0, 5.0).into();
        assert!(CheckFigure::new(&zero).execute().is_err());
    }

    #[test]
    fn small_plane_is_judged_relative_to_its_edges() {
        let (a, b, c) = (p(0.0, 0.0, 0.0), p(1e-6, 0.0, 0.0), p(0.0, 1e-6, 0.0));
        let tri: Figure = Triangle::new(a.clone(), b.clone(), c.clone(), "").into();
        let plane: Figure = Plane::from_points(&a, &b, &c).into();
        assert!(CheckFigure::new(&tri).execute().is_ok());
        assert!(CheckFigure::new(&plane).execute().is_ok());

        let tiny: Figure = Plane::new(0.0, 0.0, 1e-12, 0.0).into();
        assert!(CheckFigure::new(&tiny).execute().is_ok());
    }

    #[test]
    fn tolerance_applies_to_triangles_and_planes() {
        let (a, b, c) = (p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 1e-4, 0.0));
        let tri: Figure = Triangle::new(a.clone(), b.clone(), c.clone(), "").into();
        let plane: Figure = Plane::from_points(&a, &b, &c).into();
        for fig in [&tri, &plane] {
            assert!(CheckFigure::new(fig).execute().is_ok());
            assert!(matches!(
                CheckFigure::new(fig).with_tolerance(1e-3).execute(),
                Err(GeometryError::Degenerate(_))
            ));
        }

        let steep: Figure = Plane::new(1e-4, 0.0, 0.0, 1.0).into();
        assert!(CheckFigure::new(&steep).execute().is_ok());
        assert!(CheckFigure::new(&steep).with_tolerance(1e-3).execute().is_err());
    }

    #[test]
    fn non_finite_input_is_degenerate() {
        let nan: Figure =
            Triangle::new(p(f64::NAN, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), "").into();
        let inf_plane: Figure = Plane::new(f64::INFINITY, 0.0, 0.0, 0.0).into();
        let inf_rect = rectangle([
            [0.0, 0.0, 0.0],
            [f64::INFINITY, 0.0, 0.0],
            [2.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ]);
        for fig in [&nan, &inf_plane, &inf_rect] {
            assert!(matches!(
                CheckFigure::new(fig).execute(),
                Err(GeometryError::Degenerate(msg)) if msg.contains("non-finite")
            ));
        }
    }

    #[test]
    fn real_square_passes() {
        let fig = square([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]]);
        assert!(CheckFigure::new(&fig).execute().is_ok());

        let tilted = square([[0.0, 0.0, 0.0], [0.0, 3.0, 4.0], [0.0, -1.0, 7.0], [0.0, -4.0, 3.0]]);
        assert!(CheckFigure::new(&tilted).execute().is_ok());
    }

    #[test]
    fn rectangle_is_not_a_square() {
        let fig = square([[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 1.0, 0.0], [0.0, 1.0, 0.0]]);
        assert!(matches!(
            CheckFigure::new(&fig).execute(),
            Err(GeometryError::NotRectangular(_))
        ));

        let as_rect = rectangle([[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 1.0, 0.0], [0.0, 1.0, 0.0]]);
        assert!(CheckFigure::new(&as_rect).execute().is_ok());
    }

    #[test]
    fn rhombus_is_not_rectangular() {
        let h = 3.0_f64.sqrt() / 2.0;
        let fig = rectangle([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.5, h, 0.0], [0.5, h, 0.0]]);
        assert!(matches!(
            CheckFigure::new(&fig).execute(),
            Err(GeometryError::NotRectangular(_))
        ));
    }

    #[test]
    fn repeated_corner_is_degenerate() {
        let fig = rectangle([[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [2.0, 1.0, 0.0], [0.0, 1.0, 0.0]]);
        assert!(matches!(
            CheckFigure::new(&fig).execute(),
            Err(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn skew_quadrilateral_is_rejected() {
        // Four right-angled corners are impossible off-plane, but a loose
        // tolerance lets the corner test pass so the coplanarity test fires.
        let fig = rectangle([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.5]]);
        let err = CheckFigure::new(&fig).with_tolerance(0.3).execute();
        assert!(matches!(err, Err(GeometryError::NotRectangular(msg)) if msg.contains("coplanar")));
    }

    #[test]
    fn loose_tolerance_accepts_near_square() {
        let fig = square([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.001, 0.0], [0.0, 1.0, 0.0]]);
        assert!(CheckFigure::new(&fig).execute().is_err());
        assert!(CheckFigure::new(&fig).with_tolerance(0.01).execute().is_ok());
    }
}
