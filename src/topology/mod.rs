pub mod draft;
pub mod wall;

pub use draft::RoomShapeDraft;
pub use wall::{CellRole, QuarterTurn, WallKind, WallOrientation, WallRecord};
