mod check;

pub use check::CheckFigure;
