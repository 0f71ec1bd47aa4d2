use crate::grid::{Cardinal, GridCoordinate, Quadrant};

/// Role of a cell inside a shape under construction.
///
/// Cells outside the shape have no role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRole {
    Wall,
    Floor,
}

/// Placement rotation of a room, applied clockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QuarterTurn {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl QuarterTurn {
    /// All rotations in increasing order.
    pub const ALL: [Self; 4] = [Self::Deg0, Self::Deg90, Self::Deg180, Self::Deg270];

    /// Number of clockwise quarter turns (0–3).
    #[must_use]
    pub const fn turns(self) -> u8 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// The next rotation, wrapping after 270°.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_turns(self.turns() + 1)
    }

    /// Builds a rotation from a turn count, modulo 4.
    #[must_use]
    pub const fn from_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }
}

/// The side of the room a wall cell faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WallOrientation {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Clockwise ring of straight facings.
const STRAIGHT_RING: [WallOrientation; 4] = [
    WallOrientation::North,
    WallOrientation::East,
    WallOrientation::South,
    WallOrientation::West,
];

/// Clockwise ring of corner facings.
const CORNER_RING: [WallOrientation; 4] = [
    WallOrientation::NorthEast,
    WallOrientation::SouthEast,
    WallOrientation::SouthWest,
    WallOrientation::NorthWest,
];

impl WallOrientation {
    /// All orientations, straight sides first.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    #[must_use]
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::NorthEast | Self::NorthWest | Self::SouthEast | Self::SouthWest
        )
    }

    /// Rotates this facing clockwise by `rotation`.
    #[must_use]
    pub fn rotated(self, rotation: QuarterTurn) -> Self {
        let ring = if self.is_corner() {
            &CORNER_RING
        } else {
            &STRAIGHT_RING
        };
        let index = ring.iter().position(|&o| o == self).unwrap_or(0);
        ring[(index + usize::from(rotation.turns())) % 4]
    }

    /// Prefab rotation in degrees.
    ///
    /// Straight walls are authored facing South and corners facing SouthWest;
    /// every other facing is one of the four clockwise quarter turns away.
    #[must_use]
    pub const fn rotation_degrees(self) -> u16 {
        match self {
            Self::South | Self::SouthWest => 0,
            Self::West | Self::NorthWest => 90,
            Self::North | Self::NorthEast => 180,
            Self::East | Self::SouthEast => 270,
        }
    }

    /// Orientation of a wall whose room interior lies in direction `dir`.
    #[must_use]
    pub const fn facing_away_from(dir: Cardinal) -> Self {
        match dir {
            Cardinal::North => Self::South,
            Cardinal::East => Self::West,
            Cardinal::South => Self::North,
            Cardinal::West => Self::East,
        }
    }

    /// Orientation of a corner whose room interior lies in quadrant `q`.
    #[must_use]
    pub const fn facing_away_from_quadrant(q: Quadrant) -> Self {
        match q.opposite() {
            Quadrant::NorthEast => Self::NorthEast,
            Quadrant::NorthWest => Self::NorthWest,
            Quadrant::SouthEast => Self::SouthEast,
            Quadrant::SouthWest => Self::SouthWest,
        }
    }
}

/// Shape of a wall segment, used to pick a prefab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallKind {
    Straight,
    OuterCorner,
    InnerCorner,
}

/// A classified wall cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallRecord {
    pub coordinate: GridCoordinate,
    pub orientation: WallOrientation,
    pub kind: WallKind,
    /// Rotation of the room that produced this record.
    pub owning_room_rotation: QuarterTurn,
}

impl WallRecord {
    /// Creates a new wall record.
    #[must_use]
    pub fn new(
        coordinate: GridCoordinate,
        orientation: WallOrientation,
        kind: WallKind,
        owning_room_rotation: QuarterTurn,
    ) -> Self {
        Self {
            coordinate,
            orientation,
            kind,
            owning_room_rotation,
        }
    }

    /// Clockwise world rotation for the wall prefab.
    #[must_use]
    pub fn prefab_rotation(&self) -> nalgebra::Rotation2<f64> {
        let degrees = f64::from(self.orientation.rotation_degrees());
        nalgebra::Rotation2::new(-degrees.to_radians())
    }
}
