/// Top-level menu entries, numbered from 1 in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Triangle,
    Plane,
    Square,
    Rectangle,
    AddPoint,
    Inspect,
    Exit,
}

impl MenuItem {
    pub const ALL: [Self; 7] = [
        Self::Triangle,
        Self::Plane,
        Self::Square,
        Self::Rectangle,
        Self::AddPoint,
        Self::Inspect,
        Self::Exit,
    ];

    /// Maps a 1-based menu number to its entry.
    #[must_use]
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Triangle => "Create a triangle",
            Self::Plane => "Create a plane",
            Self::Square => "Create a square",
            Self::Rectangle => "Create a rectangle",
            Self::AddPoint => "Add a point",
            Self::Inspect => "Inspect a created shape",
            Self::Exit => "Exit",
        }
    }
}

/// How a figure's vertices are supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Coordinates,
    StoredPoints,
}

/// Ways to build a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSource {
    StoredPoints,
    Coordinates,
    Coefficients,
    Back,
}

impl PlaneSource {
    pub const ALL: [Self; 4] = [
        Self::StoredPoints,
        Self::Coordinates,
        Self::Coefficients,
        Self::Back,
    ];
}
