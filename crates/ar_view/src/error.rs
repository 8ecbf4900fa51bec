use thiserror::Error;

/// Decode failures at the collaborator boundary.
///
/// Rendering itself never fails: defect conditions inside a frame are
/// logged and drawn with a safe fallback instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("unknown team color code: {0}")]
    UnknownTeamColor(i32),
    #[error("unknown play state code: {0}")]
    UnknownPlayState(i32),
}
