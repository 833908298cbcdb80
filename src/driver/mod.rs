//! Interactive text driver.
//!
//! Reads whitespace-separated answers, builds points and figures, and hands
//! them to a [`Registry`]. Everything that can go wrong with user input is
//! handled here; the geometry layer only ever sees resolved values.

mod input;
mod menu;

pub use input::Tokens;
pub use menu::{MenuItem, PlaneSource, Source};

use std::io::{BufRead, Write};

use crate::error::{FiguraError, InputError};
use crate::geometry::{
    name_vertices, Figure, NamedPoint, Plane, Rectangle, Shape, Square, Triangle,
};
use crate::math::Point3;
use crate::params::EvalParams;
use crate::registry::Registry;

/// Token that stands for "no name" when a name is asked for.
pub const NO_NAME: &str = "-";

type DriverResult<T> = std::result::Result<T, InputError>;

type QuadBuilder<F> = fn(NamedPoint, NamedPoint, NamedPoint, NamedPoint, String) -> F;

/// One interactive session over an input and an output stream.
pub struct Session<R, W> {
    input: Tokens<R>,
    out: W,
    registry: Registry,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty registry.
    pub fn new(input: R, out: W, params: EvalParams) -> Self {
        Self {
            input: Tokens::new(input),
            out,
            registry: Registry::with_params(params),
        }
    }

    /// Consumes the session, returning its registry.
    #[must_use]
    pub fn into_registry(self) -> Registry {
        self.registry
    }

    /// Runs the menu loop until the user exits or input ends, then prints
    /// every created shape.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Io`] if reading or writing fails.
    pub fn run(&mut self) -> DriverResult<()> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) | Err(InputError::UnexpectedEof) => break,
                Err(err) => return Err(err),
            }
        }
        self.print_report()
    }

    /// Shows the menu and runs one entry. Returns `false` on exit.
    fn step(&mut self) -> DriverResult<bool> {
        writeln!(self.out, "Choose an action:")?;
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, item.label())?;
        }
        let choice = self.read_choice(MenuItem::ALL.len())?;
        let Some(item) = MenuItem::from_number(choice) else {
            return Ok(true);
        };
        tracing::debug!(?item, "menu");

        match item {
            MenuItem::Triangle => self.create_triangle()?,
            MenuItem::Plane => self.create_plane()?,
            MenuItem::Square => self.create_quad("square", Square::new)?,
            MenuItem::Rectangle => self.create_quad("rectangle", Rectangle::new)?,
            MenuItem::AddPoint => self.add_point()?,
            MenuItem::Inspect => self.inspect()?,
            MenuItem::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn print_report(&mut self) -> DriverResult<()> {
        writeln!(self.out, "Created shapes:")?;
        for shape in self.registry.shapes() {
            writeln!(
                self.out,
                "{}",
                shape.describe_with(self.registry.params().precision)
            )?;
        }
        self.out.flush()?;
        Ok(())
    }

    // --- Menu entries ---

    fn add_point(&mut self) -> DriverResult<()> {
        self.prompt("Enter point coordinates (x y z): ")?;
        let position = self.read_position()?;
        let name = self.read_name("Enter point name: ")?;
        let point = NamedPoint::at(name, position);
        writeln!(self.out, "Added point {point}.")?;
        self.registry.add_point(point);
        Ok(())
    }

    fn create_triangle(&mut self) -> DriverResult<()> {
        let Some(source) = self.read_source()? else {
            return Ok(());
        };
        let vertices = match source {
            Source::Coordinates => {
                self.prompt("Enter coordinates (x1 y1 z1 x2 y2 z2 x3 y3 z3): ")?;
                let positions = self.read_positions::<3>()?;
                let name = self.read_name("Enter triangle name: ")?;
                let vertices = name_vertices(&name, positions);
                Some((vertices, name))
            }
            Source::StoredPoints => match self.pick_points::<3>("triangle")? {
                Some(vertices) => Some((vertices, self.read_name("Enter triangle name: ")?)),
                None => None,
            },
        };
        if let Some(([a, b, c], name)) = vertices {
            self.store(Triangle::new(a, b, c, name))?;
        }
        Ok(())
    }

    fn create_plane(&mut self) -> DriverResult<()> {
        writeln!(self.out, "Choose how to build the plane:")?;
        writeln!(self.out, "1. From stored points")?;
        writeln!(self.out, "2. From coordinates")?;
        writeln!(self.out, "3. From coefficients (A B C D)")?;
        writeln!(self.out, "4. Back")?;
        let choice = self.read_choice(PlaneSource::ALL.len())?;
        let plane = match PlaneSource::ALL[choice - 1] {
            PlaneSource::StoredPoints => self
                .pick_points::<3>("plane")?
                .map(|[a, b, c]| Plane::from_points(&a, &b, &c)),
            PlaneSource::Coordinates => {
                self.prompt("Enter coordinates (x1 y1 z1 x2 y2 z2 x3 y3 z3): ")?;
                let [a, b, c] = self.read_positions::<3>()?.map(NamedPoint::unnamed);
                Some(Plane::from_points(&a, &b, &c))
            }
            PlaneSource::Coefficients => {
                self.prompt("Enter coefficients (A B C D): ")?;
                let [a, b, c, d] = self.read_numbers::<4>()?;
                Some(Plane::new(a, b, c, d))
            }
            PlaneSource::Back => None,
        };
        if let Some(plane) = plane {
            let name = self.read_name("Enter plane name: ")?;
            self.store(plane.with_name(name))?;
        }
        Ok(())
    }

    fn create_quad<F>(&mut self, kind: &'static str, build: QuadBuilder<F>) -> DriverResult<()>
    where
        F: Into<Figure>,
    {
        let Some(source) = self.read_source()? else {
            return Ok(());
        };
        let prompt = format!("Enter {kind} name: ");
        let vertices = match source {
            Source::Coordinates => {
                self.prompt(&format!(
                    "Enter 12 coordinates for the {kind} (x1 y1 z1 ... x4 y4 z4): "
                ))?;
                let positions = self.read_positions::<4>()?;
                let name = self.read_name(&prompt)?;
                Some((name_vertices(&name, positions), name))
            }
            Source::StoredPoints => match self.pick_points::<4>(kind)? {
                Some(vertices) => Some((vertices, self.read_name(&prompt)?)),
                None => None,
            },
        };
        if let Some(([a, b, c, d], name)) = vertices {
            self.store(build(a, b, c, d, name))?;
        }
        Ok(())
    }

    fn inspect(&mut self) -> DriverResult<()> {
        if self.registry.shape_count() == 0 {
            writeln!(self.out, "No shapes created yet.")?;
            return Ok(());
        }
        writeln!(self.out, "Created shapes:")?;
        for (i, shape) in self.registry.shapes().enumerate() {
            writeln!(self.out, "{}: {}", i + 1, shape.name())?;
        }
        self.prompt("Select a shape: ")?;
        let index = self.read_index()?;
        match self.registry.summary(index) {
            Ok(summary) => {
                let precision = self.registry.params().precision;
                writeln!(self.out, "{summary:.precision$}")?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    // --- Helpers ---

    fn store(&mut self, figure: impl Into<Figure>) -> DriverResult<()> {
        let figure = figure.into();
        let label = format!("{} '{}'", figure.kind(), figure.name());
        match self.registry.add_figure(figure) {
            Ok(_) => writeln!(self.out, "Created {label}.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    /// Lists stored points and copies the `N` the user selects.
    ///
    /// Returns `None`, after telling the user why, when too few points are
    /// stored or an index is out of range.
    fn pick_points<const N: usize>(
        &mut self,
        figure: &'static str,
    ) -> DriverResult<Option<[NamedPoint; N]>> {
        if let Err(err) = self.registry.require_points(figure, N) {
            self.report(&err)?;
            return Ok(None);
        }
        writeln!(self.out, "Stored points:")?;
        for (i, point) in self.registry.points().enumerate() {
            writeln!(self.out, "{}: {point}", i + 1)?;
        }
        self.prompt(&format!("Select {N} points: "))?;
        let mut indices = [0; N];
        for index in &mut indices {
            *index = self.read_index()?;
        }
        match self.registry.points_at(indices) {
            Ok(points) => Ok(Some(points)),
            Err(err) => {
                self.report(&err)?;
                Ok(None)
            }
        }
    }

    fn read_source(&mut self) -> DriverResult<Option<Source>> {
        writeln!(self.out, "Choose how to enter the vertices:")?;
        writeln!(self.out, "1. By coordinates")?;
        writeln!(self.out, "2. From stored points")?;
        Ok(match self.read_choice(2)? {
            1 => Some(Source::Coordinates),
            2 => Some(Source::StoredPoints),
            _ => None,
        })
    }

    fn read_name(&mut self, prompt: &str) -> DriverResult<String> {
        self.prompt(prompt)?;
        let token = self.input.next_token()?;
        Ok(if token == NO_NAME { String::new() } else { token })
    }

    /// Reads a number in `1..=max`, asking again until one arrives.
    fn read_choice(&mut self, max: usize) -> DriverResult<usize> {
        loop {
            let value = self.read_index()?;
            if (1..=max).contains(&value) {
                return Ok(value);
            }
            let err = InputError::InvalidChoice { value, max };
            tracing::debug!(%err, "retrying");
            writeln!(self.out, "{err}. Try again:")?;
        }
    }

    fn read_index(&mut self) -> DriverResult<usize> {
        self.read_retrying(Tokens::next_parsed)
    }

    /// Reads one finite coordinate or coefficient.
    fn read_number(&mut self) -> DriverResult<f64> {
        self.read_retrying(Tokens::next_finite)
    }

    /// Reads with `next`, asking again after every malformed token.
    fn read_retrying<T>(
        &mut self,
        next: fn(&mut Tokens<R>) -> DriverResult<T>,
    ) -> DriverResult<T> {
        loop {
            match next(&mut self.input) {
                Ok(value) => return Ok(value),
                Err(err @ InputError::InvalidNumber(_)) => {
                    tracing::debug!(%err, "retrying");
                    writeln!(self.out, "{err}. Please enter a number:")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn read_numbers<const N: usize>(&mut self) -> DriverResult<[f64; N]> {
        let mut values = [0.0; N];
        for value in &mut values {
            *value = self.read_number()?;
        }
        Ok(values)
    }

    fn read_position(&mut self) -> DriverResult<Point3> {
        let [x, y, z] = self.read_numbers::<3>()?;
        Ok(Point3::new(x, y, z))
    }

    fn read_positions<const N: usize>(&mut self) -> DriverResult<[Point3; N]> {
        let mut positions = [Point3::origin(); N];
        for position in &mut positions {
            *position = self.read_position()?;
        }
        Ok(positions)
    }

    fn prompt(&mut self, text: &str) -> DriverResult<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    fn report(&mut self, err: &FiguraError) -> DriverResult<()> {
        tracing::info!(%err, "request refused");
        writeln!(self.out, "Error: {err}")?;
        Ok(())
    }
}
