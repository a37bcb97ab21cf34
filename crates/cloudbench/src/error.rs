use crate::cloud::{ItemId, PointKind};
use thiserror::Error;

/// Failures surfaced by tools, the action executor, and selection building.
///
/// No-op conditions (empty selections, whole-item sentinels, items absent from
/// a selection map) are not errors and never appear here; they show up only as
/// a possibly-empty result list. Out-of-range indices discovered while
/// extracting are a hard fault instead, since they mean the selection snapshot
/// went stale.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("cannot resolve a point type from an empty input batch")]
    EmptyBatch,

    #[error("mixed point types in one batch: {first} and {other}")]
    MixedPointKinds { first: PointKind, other: PointKind },

    #[error("point type hint {hint} does not match the inputs' actual type {actual}")]
    HintMismatch { hint: PointKind, actual: PointKind },

    #[error("item {id} is not in the project")]
    UnknownItem { id: ItemId },

    /// Rejected while recording a selection against a live item. The same
    /// condition found later, during extraction, panics instead.
    #[error("selection index {index} out of range for item with {points} points")]
    IndexOutOfRange { index: usize, points: usize },
}

/// Result type for action-core operations.
pub type ActionResult<T> = Result<T, ActionError>;
