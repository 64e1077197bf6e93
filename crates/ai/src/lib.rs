//! Adversarial search for the controlled side of a skirmish.
//!
//! The agent answers one question per decision point: which joint action
//! should the controlled units take now?
//!
//! 1. **Expansion**: [`skirmish_core::CombatState::expand`] enumerates every
//!    joint action of the side to move.
//! 2. **Ordering**: children are scored once by the [`Evaluator`] and searched
//!    best-first from the mover's perspective.
//! 3. **Search**: [`AlphaBeta`] runs depth-limited minimax with pruning. Each
//!    frame reads maximizing/minimizing from its own state's side to move.
//! 4. **Decision**: [`MinimaxAgent`] returns the joint action of the best
//!    root child together with its backed-up value and search statistics.
//!
//! # Core Components
//!
//! - [`Evaluator`]: pluggable static evaluation, higher is better for the
//!   controlled side ([`LineOfSightEvaluator`], [`ProximityEvaluator`])
//! - [`AlphaBeta`]: the search itself
//! - [`MinimaxAgent`]: configuration-checked entry point used by hosts

pub mod agent;
pub mod evaluation;
pub mod search;

pub use agent::{Decision, MinimaxAgent};
pub use evaluation::{Evaluator, LineOfSightEvaluator, ProximityEvaluator, evaluator_for};
pub use search::{AlphaBeta, SearchOutcome, SearchStats};
