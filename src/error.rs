use thiserror::Error;

/// Top-level error type for the figura evaluator.
#[derive(Debug, Error)]
pub enum FiguraError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors raised when strict validation rejects a figure.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("not rectangular: {0}")]
    NotRectangular(String),
}

/// Errors related to registry lookups.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("{kind} index {index} is out of range [1, {len}]")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("a {figure} needs {required} points, only {available} stored")]
    InsufficientPoints {
        figure: &'static str,
        required: usize,
        available: usize,
    },
}

/// Errors produced while reading driver input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    #[error("choice {value} is out of range [1, {max}]")]
    InvalidChoice { value: usize, max: usize },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`FiguraError`].
pub type Result<T> = std::result::Result<T, FiguraError>;
