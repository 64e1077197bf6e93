//! State construction errors.
//!
//! Every variant here means the host handed over a snapshot that breaks the
//! model's invariants. They are reported, never repaired.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Position, Side, UnitId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Map has a zero-sized extent.
    #[error("map must have positive dimensions (got {width}x{height})")]
    EmptyMap { width: u32, height: u32 },

    /// Obstacle listed outside the map.
    #[error("obstacle at {position} is out of bounds (map size: {map_width}x{map_height})")]
    ObstacleOutOfBounds {
        position: Position,
        map_width: u32,
        map_height: u32,
    },

    /// Unit placed outside the map.
    #[error("{side} unit {unit} at {position} is out of bounds (map size: {map_width}x{map_height})")]
    PositionOutOfBounds {
        side: Side,
        unit: UnitId,
        position: Position,
        map_width: u32,
        map_height: u32,
    },

    /// Unit placed on an obstacle.
    #[error("{side} unit {unit} stands on obstacle at {position}")]
    PositionBlocked {
        side: Side,
        unit: UnitId,
        position: Position,
    },

    /// Two units share a cell.
    #[error("{side} unit {unit} shares {position} with {occupant_side} unit {occupant}")]
    PositionOccupied {
        side: Side,
        unit: UnitId,
        position: Position,
        occupant_side: Side,
        occupant: UnitId,
    },

    /// Identity appears twice in one roster.
    #[error("{side} roster lists unit {unit} more than once")]
    DuplicateUnit { side: Side, unit: UnitId },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            EmptyMap { .. } => "STATE_EMPTY_MAP",
            ObstacleOutOfBounds { .. } => "STATE_OBSTACLE_OUT_OF_BOUNDS",
            PositionOutOfBounds { .. } => "STATE_POSITION_OUT_OF_BOUNDS",
            PositionBlocked { .. } => "STATE_POSITION_BLOCKED",
            PositionOccupied { .. } => "STATE_POSITION_OCCUPIED",
            DuplicateUnit { .. } => "STATE_DUPLICATE_UNIT",
        }
    }
}
