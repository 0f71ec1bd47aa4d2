use thiserror::Error;

use crate::session::SessionPhase;

/// Top-level error type for the roomgrid kernel.
#[derive(Debug, Error)]
pub enum RoomGridError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    RoomStore(#[from] RoomStoreError),
}

/// Errors related to grid space configuration.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("cell size must be positive and finite, got {0}")]
    InvalidCellSize(f64),
}

/// Errors reported by the authoring session.
///
/// None of these are fatal: the session stays in the phase it was in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("room is not ready to finalize (phase: {phase:?})")]
    NotReady { phase: SessionPhase },

    #[error("`{event}` is not accepted in phase {phase:?}")]
    InvalidTransition {
        phase: SessionPhase,
        event: &'static str,
    },

    #[error("a draft is already active in this session")]
    DraftActive,
}

/// Errors related to the finalized room store.
#[derive(Debug, Error)]
pub enum RoomStoreError {
    #[error("room not found")]
    RoomNotFound,
}

/// Convenience type alias for results using [`RoomGridError`].
pub type Result<T> = std::result::Result<T, RoomGridError>;
