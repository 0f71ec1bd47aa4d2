/// Stage of a room authoring session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// No draft.
    #[default]
    Idle,
    /// Rectangle being dragged out from the anchor cell.
    Drawing,
    /// Rectangle frozen; cells may be carved.
    PreviewReady,
    /// Shape accepted; carving is still allowed until finalize.
    Confirmed,
}

impl SessionPhase {
    /// Returns `true` while a draft exists.
    #[must_use]
    pub const fn has_draft(self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub const fn can_carve(self) -> bool {
        matches!(self, Self::PreviewReady | Self::Confirmed)
    }

    #[must_use]
    pub const fn can_rotate(self) -> bool {
        matches!(self, Self::Drawing | Self::PreviewReady)
    }
}
