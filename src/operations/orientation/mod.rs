mod freeform;
mod rectangular;

pub use freeform::FreeformContext;
pub use rectangular::classify_rect_cell;

use crate::grid::{GridCoordinate, GridRect};
use crate::topology::{QuarterTurn, RoomShapeDraft, WallKind, WallOrientation, WallRecord};

/// How wall orientation is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationMode {
    /// The shape is still the drawn rectangle; orientation comes from the
    /// sides of it the cell lies on.
    Rectangular(GridRect),
    /// The shape has been carved; orientation comes from neighbor patterns.
    Freeform,
}

/// Produces a [`WallRecord`] for every perimeter cell of a draft.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyWalls {
    mode: ClassificationMode,
    rotation: QuarterTurn,
}

impl ClassifyWalls {
    /// Creates a new `ClassifyWalls` operation.
    #[must_use]
    pub fn new(mode: ClassificationMode, rotation: QuarterTurn) -> Self {
        Self { mode, rotation }
    }

    /// Classifies one perimeter cell. Returns `None` for non-wall cells.
    ///
    /// Both modes derive the facing in the room's own frame and then turn it
    /// by the room rotation, so carving never changes how a wall is rotated.
    #[must_use]
    pub fn classify(&self, draft: &RoomShapeDraft, cell: GridCoordinate) -> Option<WallRecord> {
        if !draft.perimeter().contains(&cell) {
            return None;
        }
        let (orientation, kind) = match self.mode {
            ClassificationMode::Rectangular(rect) => classify_rect_cell(&rect, cell, self.rotation)
                .unwrap_or((WallOrientation::North, WallKind::Straight)),
            ClassificationMode::Freeform => {
                let (orientation, kind) = FreeformContext {
                    walls: draft.perimeter(),
                    floor: draft.floor(),
                    inner_corners: draft.inner_corners(),
                }
                .classify(cell);
                (orientation.rotated(self.rotation), kind)
            }
        };
        Some(WallRecord::new(cell, orientation, kind, self.rotation))
    }

    /// Classifies every perimeter cell, x-major.
    #[must_use]
    pub fn execute(&self, draft: &RoomShapeDraft) -> Vec<WallRecord> {
        draft
            .perimeter()
            .iter()
            .filter_map(|&cell| self.classify(draft, cell))
            .collect()
    }
}
