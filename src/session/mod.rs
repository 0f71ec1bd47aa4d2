//! Interactive room authoring.
//!
//! A [`RoomShapeSession`] drives one draft at a time through
//! draw → preview → confirm → finalize. Carving switches wall classification
//! from the rectangle index test to neighbor patterns.

mod phase;

pub use phase::SessionPhase;

use tracing::{debug, info};

use crate::error::{Result, SessionError};
use crate::grid::{GridCoordinate, GridRect};
use crate::operations::{
    ClassificationMode, ClassifyWalls, Reclassify, ReclassifyConfig, ReclassifyReport,
};
use crate::registry::{DoorLayer, WallRegistry};
use crate::room::RoomEntity;
use crate::topology::{QuarterTurn, RoomShapeDraft, WallRecord};

/// Session parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub reclassify: ReclassifyConfig,
}

impl SessionConfig {
    #[must_use]
    pub fn new(reclassify: ReclassifyConfig) -> Self {
        Self { reclassify }
    }
}

/// Authoring state machine for a single room draft.
#[derive(Debug, Clone, Default)]
pub struct RoomShapeSession {
    config: SessionConfig,
    phase: SessionPhase,
    draft: RoomShapeDraft,
    anchor: Option<GridCoordinate>,
    rect: Option<GridRect>,
    rotation: QuarterTurn,
    freeform: bool,
    last_report: Option<ReclassifyReport>,
}

impl RoomShapeSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The active draft. Empty while idle.
    #[must_use]
    pub fn draft(&self) -> &RoomShapeDraft {
        &self.draft
    }

    /// The drawn rectangle, if a draft is active.
    #[must_use]
    pub fn rect(&self) -> Option<GridRect> {
        self.rect
    }

    #[must_use]
    pub fn rotation(&self) -> QuarterTurn {
        self.rotation
    }

    /// Report of the latest reclassification, if the draft was carved.
    #[must_use]
    pub fn last_report(&self) -> Option<&ReclassifyReport> {
        self.last_report.as_ref()
    }

    /// Classification mode currently in effect.
    #[must_use]
    pub fn classification_mode(&self) -> Option<ClassificationMode> {
        if self.freeform {
            Some(ClassificationMode::Freeform)
        } else {
            self.rect.map(ClassificationMode::Rectangular)
        }
    }

    /// Starts a draft holding the single cell `at`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::DraftActive` if a draft already exists.
    pub fn begin(&mut self, at: GridCoordinate) -> Result<()> {
        if self.phase.has_draft() {
            return Err(SessionError::DraftActive.into());
        }
        self.anchor = Some(at);
        self.rect = Some(GridRect::cell(at));
        self.draft = RoomShapeDraft::single_cell(at);
        self.freeform = false;
        self.last_report = None;
        self.transition(SessionPhase::Drawing);
        Ok(())
    }

    /// Stretches the rectangle from the anchor to `at`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside `Drawing`.
    pub fn drag_to(&mut self, at: GridCoordinate) -> Result<()> {
        self.expect_phase(SessionPhase::Drawing, "drag_to")?;
        let anchor = self.anchor.unwrap_or(at);
        let rect = GridRect::from_corners(anchor, at);
        self.draft.reset_to_rect(&rect);
        self.rect = Some(rect);
        Ok(())
    }

    /// Freezes the rectangle.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside `Drawing`.
    pub fn end_drag(&mut self) -> Result<()> {
        self.expect_phase(SessionPhase::Drawing, "end_drag")?;
        self.transition(SessionPhase::PreviewReady);
        Ok(())
    }

    /// Removes the draft cells inside `selection` and reclassifies.
    ///
    /// Returns the number of cells removed. A carve that removes nothing
    /// leaves the draft and the classification mode untouched.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside `PreviewReady` and
    /// `Confirmed`.
    pub fn carve(&mut self, selection: &GridRect) -> Result<usize> {
        if !self.phase.can_carve() {
            return Err(self.invalid("carve"));
        }
        let removed = self.draft.carve(selection);
        if removed == 0 {
            return Ok(0);
        }
        let report = Reclassify::new(self.config.reclassify).execute(&mut self.draft);
        debug!(
            removed,
            walls = self.draft.perimeter().len(),
            floor = self.draft.floor().len(),
            inner_corners = report.inner_corners,
            "draft carved"
        );
        self.freeform = true;
        self.last_report = Some(report);
        Ok(removed)
    }

    /// Accepts the previewed shape.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside `PreviewReady`.
    pub fn confirm(&mut self) -> Result<()> {
        self.expect_phase(SessionPhase::PreviewReady, "confirm")?;
        self.transition(SessionPhase::Confirmed);
        Ok(())
    }

    /// Sets the room rotation used for wall records.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside `Drawing` and
    /// `PreviewReady`.
    pub fn set_rotation(&mut self, rotation: QuarterTurn) -> Result<()> {
        if !self.phase.can_rotate() {
            return Err(self.invalid("set_rotation"));
        }
        self.rotation = rotation;
        Ok(())
    }

    /// Wall records for the current draft, x-major. Empty while idle.
    #[must_use]
    pub fn preview_records(&self) -> Vec<WallRecord> {
        match self.classification_mode() {
            Some(mode) if self.phase.has_draft() => {
                ClassifyWalls::new(mode, self.rotation).execute(&self.draft)
            }
            _ => Vec::new(),
        }
    }

    /// Commits the draft.
    ///
    /// Every wall record is added to `registry` (door cells are skipped by
    /// the registry), door exclusions are cleared, and the session returns to
    /// `Idle`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotReady` outside `Confirmed`. Nothing is
    /// mutated in that case.
    pub fn finalize<D: DoorLayer + ?Sized>(
        &mut self,
        registry: &mut WallRegistry,
        doors: &D,
    ) -> Result<RoomEntity> {
        if self.phase != SessionPhase::Confirmed {
            return Err(SessionError::NotReady { phase: self.phase }.into());
        }
        let rect = self
            .rect
            .ok_or(SessionError::NotReady { phase: self.phase })?;

        let records = self.preview_records();
        let added = records
            .iter()
            .filter(|record| registry.add(**record, doors))
            .count();
        registry.clear_door_exclusions();

        let (final_perimeter, final_floor) = std::mem::take(&mut self.draft).into_parts();
        let room = RoomEntity {
            origin: rect.min(),
            size: (rect.width(), rect.height()),
            rotation: self.rotation,
            final_perimeter,
            final_floor,
        };
        info!(
            origin = ?room.origin,
            width = rect.width(),
            height = rect.height(),
            walls = records.len(),
            added,
            "room finalized"
        );
        self.reset();
        Ok(room)
    }

    /// Discards the draft. Always succeeds and never touches shared state.
    pub fn cancel(&mut self) {
        if self.phase.has_draft() {
            debug!(phase = ?self.phase, "draft cancelled");
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.draft = RoomShapeDraft::new();
        self.anchor = None;
        self.rect = None;
        self.freeform = false;
        self.last_report = None;
        self.transition(SessionPhase::Idle);
    }

    fn transition(&mut self, to: SessionPhase) {
        if self.phase != to {
            debug!(from = ?self.phase, ?to, "session phase");
        }
        self.phase = to;
    }

    fn expect_phase(&self, phase: SessionPhase, event: &'static str) -> Result<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(self.invalid(event))
        }
    }

    fn invalid(&self, event: &'static str) -> crate::RoomGridError {
        SessionError::InvalidTransition {
            phase: self.phase,
            event,
        }
        .into()
    }
}
