//! Deterministic combat model for small tactical skirmishes.
//!
//! `skirmish-core` defines the grid map, the unit rosters of both sides, the
//! action vocabulary, and the [`CombatState`] snapshot together with its
//! child generation. Everything here is pure: states are cloned on every
//! branch and never mutated in place once shared.
pub mod action;
pub mod config;
pub mod error;
pub mod map;
pub mod snapshot;
pub mod state;

pub use action::{Action, ActionError, Direction, JointAction};
pub use config::{ConfigError, EvaluatorKind, SearchConfig};
pub use error::{ErrorSeverity, GameError};
pub use map::{GridMap, MapDimensions};
pub use snapshot::{Snapshot, UnitSpec};
pub use state::{CombatState, Position, SearchNode, Side, StateError, Unit, UnitId};
