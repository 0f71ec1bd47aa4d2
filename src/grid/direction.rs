/// One of the four orthogonal grid directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

impl Cardinal {
    /// All directions in N, E, S, W order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Unit offset `(dx, dy)` of this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Returns `true` for North and South.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::North | Self::South)
    }
}

/// One of the four diagonal quadrants around a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Quadrant {
    /// All quadrants in NE, NW, SE, SW order.
    pub const ALL: [Self; 4] = [
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Unit diagonal offset `(dx, dy)`.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::NorthEast => (1, 1),
            Self::NorthWest => (-1, 1),
            Self::SouthEast => (1, -1),
            Self::SouthWest => (-1, -1),
        }
    }

    /// The quadrant diagonally across the cell.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::NorthEast => Self::SouthWest,
            Self::NorthWest => Self::SouthEast,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
        }
    }

    /// The vertical and horizontal directions bounding this quadrant.
    #[must_use]
    pub const fn sides(self) -> (Cardinal, Cardinal) {
        match self {
            Self::NorthEast => (Cardinal::North, Cardinal::East),
            Self::NorthWest => (Cardinal::North, Cardinal::West),
            Self::SouthEast => (Cardinal::South, Cardinal::East),
            Self::SouthWest => (Cardinal::South, Cardinal::West),
        }
    }

    /// The quadrant spanned by two perpendicular directions.
    ///
    /// Returns `None` if the directions are parallel.
    #[must_use]
    pub fn between(a: Cardinal, b: Cardinal) -> Option<Self> {
        let (vertical, horizontal) = match (a.is_vertical(), b.is_vertical()) {
            (true, false) => (a, b),
            (false, true) => (b, a),
            _ => return None,
        };
        Some(match (vertical, horizontal) {
            (Cardinal::North, Cardinal::East) => Self::NorthEast,
            (Cardinal::North, _) => Self::NorthWest,
            (_, Cardinal::East) => Self::SouthEast,
            _ => Self::SouthWest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_round_trips() {
        for dir in Cardinal::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.opposite().is_vertical(), dir.is_vertical());
        }
        for q in Quadrant::ALL {
            assert_eq!(q.opposite().opposite(), q);
        }
    }

    #[test]
    fn between_matches_sides() {
        for q in Quadrant::ALL {
            let (v, h) = q.sides();
            assert_eq!(Quadrant::between(v, h), Some(q));
            assert_eq!(Quadrant::between(h, v), Some(q));
        }
        assert_eq!(Quadrant::between(Cardinal::North, Cardinal::South), None);
    }
}
