pub mod driver;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod params;
pub mod registry;

pub use error::{FiguraError, Result};
pub use geometry::{Figure, NamedPoint, Shape};
pub use params::{EvalParams, Validation};
pub use registry::Registry;
