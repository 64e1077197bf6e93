//! Decision entry point used by hosts.

use skirmish_core::{
    CombatState, ConfigError, JointAction, SearchConfig, SearchNode, Side, Snapshot, StateError,
};

use crate::evaluation::{Evaluator, evaluator_for};
use crate::search::{AlphaBeta, SearchStats};

/// Joint action chosen for one decision point.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    /// Side the joint action belongs to.
    pub side: Side,
    pub joint_action: JointAction,
    /// Backed-up minimax value, from the controlled side's perspective.
    pub value: f64,
    pub stats: SearchStats,
}

/// Minimax agent with a fixed look-ahead depth.
///
/// The agent is stateless between decisions: each call searches a fresh tree
/// rooted at the given state and keeps nothing afterwards.
pub struct MinimaxAgent {
    config: SearchConfig,
    search: AlphaBeta<Box<dyn Evaluator>>,
}

impl MinimaxAgent {
    /// Builds an agent, rejecting invalid configuration before any search runs.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        Self::with_evaluator(config, evaluator_for(config.evaluator))
    }

    /// Builds an agent around a custom evaluation policy.
    pub fn with_evaluator(
        config: SearchConfig,
        evaluator: Box<dyn Evaluator>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            search: AlphaBeta::new(evaluator),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Picks the joint action for the side to move in `state`.
    ///
    /// With the controlled side to move this is the agent's own decision; with
    /// the opposing side to move it is the reply the search expects.
    pub fn decide(&self, state: &CombatState) -> Decision {
        let side = state.side_to_move();
        let outcome = self.search.search(
            SearchNode::root(state.clone()),
            self.config.depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
        );

        tracing::debug!(
            %side,
            depth = self.config.depth,
            evaluator = self.search.evaluator().name(),
            value = outcome.value,
            actions = outcome.node.joint_action.len(),
            nodes = outcome.stats.nodes_expanded,
            leaves = outcome.stats.leaves_evaluated,
            cutoffs = outcome.stats.cutoffs,
            branching = outcome.stats.max_branching,
            "decision made"
        );

        Decision {
            side,
            joint_action: outcome.node.joint_action,
            value: outcome.value,
            stats: outcome.stats,
        }
    }

    /// Ingests a host snapshot and decides for the controlled side.
    pub fn decide_snapshot(&self, snapshot: &Snapshot) -> Result<Decision, StateError> {
        let state = CombatState::from_snapshot(snapshot)?;
        Ok(self.decide(&state))
    }
}

impl std::fmt::Debug for MinimaxAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinimaxAgent")
            .field("config", &self.config)
            .field("evaluator", &self.search.evaluator().name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use skirmish_core::{EvaluatorKind, UnitSpec};

    use super::*;

    #[test]
    fn zero_depth_fails_at_construction() {
        let config = SearchConfig {
            depth: 0,
            evaluator: EvaluatorKind::LineOfSight,
        };
        assert!(matches!(
            MinimaxAgent::new(config),
            Err(ConfigError::InvalidDepth { depth: 0 })
        ));
    }

    #[test]
    fn invalid_snapshot_is_reported() {
        let agent = MinimaxAgent::new(SearchConfig::default()).unwrap();
        let snapshot = Snapshot {
            width: 3,
            height: 3,
            obstacles: vec![],
            controlled: vec![UnitSpec::new(1, 1, 1, 1)],
            opposing: vec![UnitSpec::new(2, 1, 1, 1)],
        };
        assert!(matches!(
            agent.decide_snapshot(&snapshot),
            Err(StateError::PositionOccupied { .. })
        ));
    }

    #[test]
    fn decision_belongs_to_side_to_move() {
        let agent = MinimaxAgent::new(SearchConfig::new(1).unwrap()).unwrap();
        let snapshot = Snapshot {
            width: 4,
            height: 4,
            obstacles: vec![],
            controlled: vec![UnitSpec::new(1, 0, 0, 1)],
            opposing: vec![UnitSpec::new(2, 3, 3, 1)],
        };
        let state = CombatState::from_snapshot(&snapshot).unwrap();

        let ours = agent.decide(&state);
        assert_eq!(ours.side, Side::Controlled);
        assert!(ours.joint_action.get(skirmish_core::UnitId(1)).is_some());

        let theirs = agent.decide(&state.with_turn_passed());
        assert_eq!(theirs.side, Side::Opposing);
        assert!(theirs.joint_action.get(skirmish_core::UnitId(2)).is_some());
    }
}
