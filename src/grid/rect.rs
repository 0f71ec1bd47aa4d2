use super::GridCoordinate;

/// An inclusive, axis-aligned rectangle of grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridRect {
    min: GridCoordinate,
    max: GridCoordinate,
}

impl GridRect {
    /// Creates the rectangle enclosing two drag corners, in any order.
    #[must_use]
    pub fn from_corners(a: GridCoordinate, b: GridCoordinate) -> Self {
        Self {
            min: GridCoordinate::new(a.x.min(b.x), a.y.min(b.y)),
            max: GridCoordinate::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a rectangle from its bottom-left cell and a size in cells.
    ///
    /// A zero dimension is clamped to one cell. A size reaching past the
    /// edge of the plane is clamped to it.
    #[must_use]
    pub fn from_origin_size(origin: GridCoordinate, width: u32, height: u32) -> Self {
        let w = i32::try_from(width.max(1) - 1).unwrap_or(i32::MAX);
        let h = i32::try_from(height.max(1) - 1).unwrap_or(i32::MAX);
        Self {
            min: origin,
            max: GridCoordinate::new(origin.x.saturating_add(w), origin.y.saturating_add(h)),
        }
    }

    /// A single-cell rectangle.
    #[must_use]
    pub fn cell(at: GridCoordinate) -> Self {
        Self { min: at, max: at }
    }

    /// The bottom-left cell.
    #[must_use]
    pub fn min(&self) -> GridCoordinate {
        self.min
    }

    /// The top-right cell.
    #[must_use]
    pub fn max(&self) -> GridCoordinate {
        self.max
    }

    /// Width in cells.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    /// Height in cells.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }

    /// Number of cells covered.
    #[must_use]
    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[must_use]
    pub fn contains(&self, c: GridCoordinate) -> bool {
        (self.min.x..=self.max.x).contains(&c.x) && (self.min.y..=self.max.y).contains(&c.y)
    }

    /// Returns `true` if `c` lies on the outermost ring of the rectangle.
    #[must_use]
    pub fn is_border(&self, c: GridCoordinate) -> bool {
        self.contains(c)
            && (c.x == self.min.x || c.x == self.max.x || c.y == self.min.y || c.y == self.max.y)
    }

    /// All cells, x-major.
    pub fn cells(&self) -> impl Iterator<Item = GridCoordinate> + '_ {
        (self.min.x..=self.max.x)
            .flat_map(move |x| (self.min.y..=self.max.y).map(move |y| GridCoordinate::new(x, y)))
    }

    /// Border cells only.
    pub fn border_cells(&self) -> impl Iterator<Item = GridCoordinate> + '_ {
        self.cells().filter(move |&c| self.is_border(c))
    }

    /// Interior cells only.
    pub fn interior_cells(&self) -> impl Iterator<Item = GridCoordinate> + '_ {
        self.cells().filter(move |&c| !self.is_border(c))
    }
}
