mod summary;

pub use summary::ShapeSummary;

use slotmap::SlotMap;

use crate::error::{RegistryError, Result};
use crate::geometry::{Figure, NamedPoint, Shape};
use crate::operations::CheckFigure;
use crate::params::{EvalParams, Validation};

slotmap::new_key_type! {
    /// Unique identifier for a point in the registry.
    pub struct PointId;

    /// Unique identifier for a shape in the registry.
    pub struct ShapeId;
}

/// Process-lifetime collection of every point and shape the user created.
///
/// Entries live in arenas keyed by typed IDs; separate key lists keep the
/// insertion order, which is the only order used for 1-based lookup. There
/// is no removal.
#[derive(Debug, Default)]
pub struct Registry {
    params: EvalParams,
    points: SlotMap<PointId, NamedPoint>,
    shapes: SlotMap<ShapeId, Figure>,
    point_order: Vec<PointId>,
    shape_order: Vec<ShapeId>,
}

impl Registry {
    /// Creates an empty, permissive registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with custom parameters.
    #[must_use]
    pub fn with_params(params: EvalParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Returns the evaluation parameters.
    #[must_use]
    pub fn params(&self) -> &EvalParams {
        &self.params
    }

    // --- Points ---

    /// Appends a point and returns its ID.
    pub fn add_point(&mut self, point: NamedPoint) -> PointId {
        tracing::debug!(point = %point, index = self.point_order.len() + 1, "point added");
        let id = self.points.insert(point);
        self.point_order.push(id);
        id
    }

    /// Returns the point with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID belongs to another registry.
    pub fn point(&self, id: PointId) -> Result<&NamedPoint> {
        self.points
            .get(id)
            .ok_or_else(|| RegistryError::EntityNotFound("point").into())
    }

    /// Returns the point at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IndexOutOfRange`] unless `1 <= index <= point_count()`.
    pub fn point_at(&self, index: usize) -> Result<&NamedPoint> {
        let id = resolve(&self.point_order, "point", index)?;
        self.point(id)
    }

    /// Copies the points at the given 1-based positions.
    ///
    /// Figures own their vertices, so the result is detached from the
    /// registry. Indices may repeat.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IndexOutOfRange`] for the first bad index.
    pub fn points_at<const N: usize>(&self, indices: [usize; N]) -> Result<[NamedPoint; N]> {
        let mut copies = Vec::with_capacity(N);
        for index in indices {
            copies.push(self.point_at(index)?.clone());
        }
        copies
            .try_into()
            .map_err(|_| RegistryError::EntityNotFound("point").into())
    }

    /// Ensures at least `required` points are stored before building `figure`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InsufficientPoints`] when too few points exist.
    pub fn require_points(&self, figure: &'static str, required: usize) -> Result<()> {
        let available = self.point_count();
        if available < required {
            return Err(RegistryError::InsufficientPoints {
                figure,
                required,
                available,
            }
            .into());
        }
        Ok(())
    }

    /// Number of stored points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.point_order.len()
    }

    /// Iterates over points in insertion order.
    pub fn points(&self) -> impl Iterator<Item = &NamedPoint> + '_ {
        self.point_order.iter().filter_map(|id| self.points.get(*id))
    }

    // --- Shapes ---

    /// Appends a figure and returns its ID.
    ///
    /// In [`Validation::Strict`] mode the figure is checked first; in
    /// permissive mode problems are only logged.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`](crate::error::GeometryError) when strict
    /// validation rejects the figure.
    pub fn add_figure(&mut self, figure: impl Into<Figure>) -> Result<ShapeId> {
        let figure = figure.into();
        if let Err(err) = CheckFigure::new(&figure).execute() {
            match self.params.validation {
                Validation::Strict => {
                    tracing::debug!(kind = figure.kind(), %err, "figure rejected");
                    return Err(err.into());
                }
                Validation::Permissive => {
                    tracing::warn!(kind = figure.kind(), name = %figure.name(), %err, "accepting questionable figure");
                }
            }
        }
        tracing::debug!(
            kind = figure.kind(),
            name = %figure.name(),
            index = self.shape_order.len() + 1,
            "shape added"
        );
        let id = self.shapes.insert(figure);
        self.shape_order.push(id);
        Ok(id)
    }

    /// Returns the shape with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID belongs to another registry.
    pub fn shape(&self, id: ShapeId) -> Result<&Figure> {
        self.shapes
            .get(id)
            .ok_or_else(|| RegistryError::EntityNotFound("shape").into())
    }

    /// Returns the shape at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IndexOutOfRange`] unless `1 <= index <= shape_count()`.
    pub fn shape_at(&self, index: usize) -> Result<&Figure> {
        let id = resolve(&self.shape_order, "shape", index)?;
        self.shape(id)
    }

    /// Returns name, area and perimeter of the shape at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IndexOutOfRange`] for a bad index.
    pub fn summary(&self, index: usize) -> Result<ShapeSummary> {
        self.shape_at(index).map(ShapeSummary::of)
    }

    /// Number of stored shapes.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.shape_order.len()
    }

    /// Iterates over shapes in insertion order.
    pub fn shapes(&self) -> impl Iterator<Item = &Figure> + '_ {
        self.shape_order.iter().filter_map(|id| self.shapes.get(*id))
    }

    /// Describes every shape in insertion order, one block per shape.
    #[must_use]
    pub fn describe_all(&self) -> String {
        self.shapes()
            .map(|shape| shape.describe_with(self.params.precision))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn resolve<K: Copy>(order: &[K], kind: &'static str, index: usize) -> Result<K> {
    index
        .checked_sub(1)
        .and_then(|i| order.get(i))
        .copied()
        .ok_or_else(|| {
            RegistryError::IndexOutOfRange {
                kind,
                index,
                len: order.len(),
            }
            .into()
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{FiguraError, GeometryError};
    use crate::geometry::{Plane, Rectangle, Square, Triangle};
    use approx::assert_relative_eq;

    fn p(name: &str, x: f64, y: f64, z: f64) -> NamedPoint {
        NamedPoint::new(name, x, y, z)
    }

    fn unit_triangle(name: &str) -> Triangle {
        Triangle::new(
            p("", 0.0, 0.0, 0.0),
            p("", 1.0, 0.0, 0.0),
            p("", 0.0, 1.0, 0.0),
            name,
        )
    }

    #[test]
    fn points_keep_insertion_order() {
        let mut reg = Registry::new();
        for (name, x) in [("c", 0.0), ("a", 1.0), ("b", 2.0)] {
            reg.add_point(p(name, x, 0.0, 0.0));
        }
        let names: Vec<_> = reg.points().map(NamedPoint::name).collect();
        assert_eq!(names, ["c", "a", "b"]);
        assert_eq!(reg.point_at(1).unwrap().name(), "c");
        assert_eq!(reg.point_at(3).unwrap().name(), "b");
        assert_eq!(reg.point_count(), 3);
    }

    #[test]
    fn one_based_lookup_rejects_zero_and_overflow() {
        let mut reg = Registry::new();
        reg.add_point(p("a", 0.0, 0.0, 0.0));
        assert!(matches!(
            reg.point_at(0),
            Err(FiguraError::Registry(RegistryError::IndexOutOfRange {
                index: 0,
                len: 1,
                ..
            }))
        ));
        assert!(reg.point_at(2).is_err());
        assert!(reg.shape_at(1).is_err());
        assert!(reg.summary(1).is_err());
    }

    #[test]
    fn figures_copy_points() {
        let mut reg = Registry::new();
        reg.add_point(p("a", 0.0, 0.0, 0.0));
        reg.add_point(p("b", 1.0, 0.0, 0.0));
        reg.add_point(p("c", 0.0, 1.0, 0.0));

        let [a, b, c] = reg.points_at([1, 2, 3]).unwrap();
        let id = reg.add_figure(Triangle::new(a, b, c, "abc")).unwrap();

        // Later points do not disturb the stored triangle.
        reg.add_point(p("d", 100.0, 100.0, 100.0));
        let Figure::Triangle(t) = reg.shape(id).unwrap() else {
            panic!("expected a triangle");
        };
        assert_eq!(t.points()[0].name(), "a");
        assert_relative_eq!(t.area(), 0.5);
    }

    #[test]
    fn points_at_reports_bad_index() {
        let mut reg = Registry::new();
        reg.add_point(p("a", 0.0, 0.0, 0.0));
        let err = reg.points_at([1, 1, 4]).unwrap_err();
        assert!(matches!(
            err,
            FiguraError::Registry(RegistryError::IndexOutOfRange { index: 4, .. })
        ));
        let [x, y] = reg.points_at([1, 1]).unwrap();
        assert_eq!(x, y);
    }

    #[test]
    fn require_points_counts_stored_points() {
        let mut reg = Registry::new();
        reg.add_point(p("a", 0.0, 0.0, 0.0));
        assert!(matches!(
            reg.require_points("triangle", 3),
            Err(FiguraError::Registry(RegistryError::InsufficientPoints {
                required: 3,
                available: 1,
                ..
            }))
        ));
        assert!(reg.require_points("point", 1).is_ok());
    }

    #[test]
    fn summaries_follow_insertion_order() {
        let mut reg = Registry::new();
        reg.add_figure(unit_triangle("first")).unwrap();
        reg.add_figure(Plane::new(0.0, 0.0, 1.0, 0.0).with_name("second"))
            .unwrap();
        reg.add_figure(Rectangle::new(
            p("", 0.0, 0.0, 0.0),
            p("", 2.0, 0.0, 0.0),
            p("", 2.0, 1.0, 0.0),
            p("", 0.0, 1.0, 0.0),
            "third",
        ))
        .unwrap();

        let names: Vec<_> = reg.shapes().map(Shape::name).collect();
        assert_eq!(names, ["first", "second", "third"]);

        let s = reg.summary(3).unwrap();
        assert_eq!(s.name, "third");
        assert_relative_eq!(s.area, 2.0);
        assert_relative_eq!(s.perimeter, 6.0);

        let plane = reg.summary(2).unwrap();
        assert_eq!(plane.area, f64::INFINITY);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn permissive_registry_accepts_degenerate_figures() {
        let mut reg = Registry::new();
        let tri = Triangle::new(
            p("", 0.0, 0.0, 0.0),
            p("", 1.0, 0.0, 0.0),
            p("", 2.0, 0.0, 0.0),
            "",
        );
        reg.add_figure(tri).unwrap();
        assert_eq!(reg.summary(1).unwrap().area, 0.0);
    }

    #[test]
    fn strict_registry_rejects_degenerate_figures() {
        let params = EvalParams::default().with_validation(Validation::Strict);
        let mut reg = Registry::with_params(params);

        let flat = Plane::from_points(
            &p("", 0.0, 0.0, 0.0),
            &p("", 1.0, 0.0, 0.0),
            &p("", 2.0, 0.0, 0.0),
        );
        assert!(matches!(
            reg.add_figure(flat),
            Err(FiguraError::Geometry(GeometryError::Degenerate(_)))
        ));

        let not_square = Square::new(
            p("", 0.0, 0.0, 0.0),
            p("", 1.0, 0.0, 0.0),
            p("", 5.0, 3.0, 0.0),
            p("", 0.0, 1.0, 0.0),
            "",
        );
        assert!(reg.add_figure(not_square).is_err());
        assert_eq!(reg.shape_count(), 0);

        reg.add_figure(unit_triangle("ok")).unwrap();
        assert_eq!(reg.shape_count(), 1);
    }

    #[test]
    fn describe_all_joins_descriptions() {
        let params = EvalParams::default().with_precision(2);
        let mut reg = Registry::with_params(params);
        reg.add_figure(unit_triangle("a")).unwrap();
        reg.add_figure(unit_triangle("")).unwrap();
        assert_eq!(
            reg.describe_all(),
            "Triangle: a\nArea: 0.50\nPerimeter: 3.41\n\
             Triangle: unnamed triangle\nArea: 0.50\nPerimeter: 3.41"
        );
        assert_eq!(Registry::new().describe_all(), "");
    }
}
