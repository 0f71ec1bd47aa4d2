pub mod direction;
pub mod rect;
pub mod space;

pub use direction::{Cardinal, Quadrant};
pub use rect::GridRect;
pub use space::{GridService, GridSpace, Occupant};

/// World-space point type used by grid conversion.
pub type WorldPoint = nalgebra::Point2<f64>;

/// World-space vector type.
pub type WorldVector = nalgebra::Vector2<f64>;

/// An integer cell on the authoring grid.
///
/// `+y` points North and `+x` points East. Ordering is by `x`, then `y`,
/// so ordered collections of coordinates iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridCoordinate {
    pub x: i32,
    pub y: i32,
}

impl GridCoordinate {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate shifted by `(dx, dy)`, or `None` past the
    /// edge of the `i32` plane.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Returns the orthogonal neighbor in the given direction.
    ///
    /// `None` at the edge of the plane; callers treat a missing neighbor as
    /// outside every shape.
    #[must_use]
    pub fn step(self, dir: Cardinal) -> Option<Self> {
        let (dx, dy) = dir.offset();
        self.offset(dx, dy)
    }

    /// Returns the diagonal neighbor in the given quadrant.
    #[must_use]
    pub fn diagonal(self, quadrant: Quadrant) -> Option<Self> {
        let (dx, dy) = quadrant.offset();
        self.offset(dx, dy)
    }

    /// The existing orthogonal neighbors in N, E, S, W order.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Self> {
        Cardinal::ALL.into_iter().filter_map(move |dir| self.step(dir))
    }

    /// The existing diagonal neighbors in NE, NW, SE, SW order.
    pub fn diagonal_neighbors(self) -> impl Iterator<Item = Self> {
        Quadrant::ALL.into_iter().filter_map(move |q| self.diagonal(q))
    }
}

impl From<(i32, i32)> for GridCoordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
