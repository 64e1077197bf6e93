//! Errors raised when a host-supplied joint action cannot be executed.

use crate::action::Direction;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Position, Side, UnitId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("{side} roster has no unit {actor}")]
    UnknownActor { side: Side, actor: UnitId },

    #[error("unit {actor} attacks unknown target {target}")]
    UnknownTarget { actor: UnitId, target: UnitId },

    #[error("unit {actor} cannot reach {target} (distance {distance}, range {range})")]
    TargetOutOfRange {
        actor: UnitId,
        target: UnitId,
        distance: u32,
        range: u32,
    },

    #[error("unit {actor} cannot move {direction}: only cardinal moves are legal")]
    DiagonalMove { actor: UnitId, direction: Direction },

    #[error("unit {actor} cannot enter {destination}")]
    DestinationBlocked {
        actor: UnitId,
        destination: Position,
    },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            UnknownActor { .. } => "ACTION_UNKNOWN_ACTOR",
            UnknownTarget { .. } => "ACTION_UNKNOWN_TARGET",
            TargetOutOfRange { .. } => "ACTION_TARGET_OUT_OF_RANGE",
            DiagonalMove { .. } => "ACTION_DIAGONAL_MOVE",
            DestinationBlocked { .. } => "ACTION_DESTINATION_BLOCKED",
        }
    }
}
