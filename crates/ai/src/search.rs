//! Depth-limited alpha-beta minimax over [`SearchNode`]s.
//!
//! The controlled side maximizes and the opposing side minimizes. Which of the
//! two a frame plays is read from the side to move of that frame's own state,
//! so frames share nothing but the evaluator and the statistics counters.

use skirmish_core::{CombatState, SearchNode};

use crate::evaluation::Evaluator;

/// Counters gathered during one call to [`AlphaBeta::search`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Interior nodes whose children were generated.
    pub nodes_expanded: u64,
    /// Nodes scored as leaves (depth exhausted or no children).
    pub leaves_evaluated: u64,
    /// Sibling loops abandoned by an alpha or beta cutoff.
    pub cutoffs: u64,
    /// Largest number of children seen at a single node.
    pub max_branching: usize,
}

/// Result of a search from one node.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// The best child of the searched node; the searched node itself when it
    /// is terminal. Its joint action is the one to execute now.
    pub node: SearchNode,
    /// Backed-up minimax value of the searched node.
    pub value: f64,
    pub stats: SearchStats,
}

/// Alpha-beta search parameterized by its static evaluation policy.
#[derive(Clone, Debug)]
pub struct AlphaBeta<E> {
    evaluator: E,
}

impl<E: Evaluator> AlphaBeta<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Searches `depth` plies below `node` inside the window `(alpha, beta)`.
    ///
    /// Pass `f64::NEG_INFINITY` and `f64::INFINITY` at the root to get an
    /// exact value. The returned node is the first child, in search order,
    /// that attains the best value.
    pub fn search(&self, node: SearchNode, depth: u32, alpha: f64, beta: f64) -> SearchOutcome {
        let mut stats = SearchStats::default();
        let (value, best) = self.alpha_beta(&node.state, depth, alpha, beta, &mut stats);

        tracing::trace!(
            depth,
            value,
            nodes = stats.nodes_expanded,
            leaves = stats.leaves_evaluated,
            cutoffs = stats.cutoffs,
            "search finished"
        );

        SearchOutcome {
            node: best.unwrap_or(node),
            value,
            stats,
        }
    }

    /// Scores each child once and sorts best-first for the side to move:
    /// descending for the maximizer, ascending for the minimizer. The sort is
    /// stable, so equally scored children keep generation order.
    pub fn order_children(
        &self,
        children: Vec<SearchNode>,
        maximizing: bool,
    ) -> Vec<(f64, SearchNode)> {
        let mut scored: Vec<(f64, SearchNode)> = children
            .into_iter()
            .map(|child| (self.evaluator.evaluate(&child.state), child))
            .collect();

        if maximizing {
            scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
        } else {
            scored.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        }
        scored
    }

    fn leaf(&self, state: &CombatState, stats: &mut SearchStats) -> f64 {
        stats.leaves_evaluated += 1;
        self.evaluator.evaluate(state)
    }

    fn alpha_beta(
        &self,
        state: &CombatState,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        stats: &mut SearchStats,
    ) -> (f64, Option<SearchNode>) {
        if depth == 0 {
            return (self.leaf(state, stats), None);
        }

        let children = state.expand();
        if children.is_empty() {
            return (self.leaf(state, stats), None);
        }

        stats.nodes_expanded += 1;
        stats.max_branching = stats.max_branching.max(children.len());

        let maximizing = state.is_controlled_turn();
        let mut best: Option<(f64, SearchNode)> = None;

        // Consumed in order: siblings behind a cutoff are dropped unvisited.
        for (_, child) in self.order_children(children, maximizing) {
            let (value, _) = self.alpha_beta(&child.state, depth - 1, alpha, beta, stats);

            let improves = match &best {
                None => true,
                Some((best_value, _)) if maximizing => value > *best_value,
                Some((best_value, _)) => value < *best_value,
            };
            if improves {
                best = Some((value, child));
            }

            let Some((best_value, _)) = &best else {
                continue;
            };
            if maximizing {
                alpha = alpha.max(*best_value);
                if *best_value >= beta {
                    stats.cutoffs += 1;
                    break;
                }
            } else {
                beta = beta.min(*best_value);
                if *best_value <= alpha {
                    stats.cutoffs += 1;
                    break;
                }
            }
        }

        match best {
            Some((value, node)) => (value, Some(node)),
            None => (self.leaf(state, stats), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use skirmish_core::{Action, GridMap, Position, Side, Unit, UnitId};

    use super::*;
    use crate::evaluation::LineOfSightEvaluator;

    /// Scores by how far the controlled unit sits east.
    struct Eastward;

    impl Evaluator for Eastward {
        fn evaluate(&self, state: &CombatState) -> f64 {
            f64::from(state.roster(Side::Controlled)[0].position.x)
        }

        fn name(&self) -> &'static str {
            "eastward"
        }
    }

    fn lone_unit(to_move: Side) -> CombatState {
        CombatState::new(
            Arc::new(GridMap::open(5, 5).unwrap()),
            vec![Unit::new(UnitId(1), Position::new(2, 2), 0)],
            vec![Unit::new(UnitId(9), Position::new(0, 0), 0)],
            to_move,
        )
        .unwrap()
    }

    #[test]
    fn ordering_is_best_first_for_each_side() {
        let search = AlphaBeta::new(Eastward);
        let children = lone_unit(Side::Controlled).expand();

        let descending: Vec<f64> = search
            .order_children(children.clone(), true)
            .into_iter()
            .map(|(score, _)| score)
            .collect();
        assert_eq!(descending.first(), Some(&3.0));
        assert_eq!(descending.last(), Some(&1.0));

        let ascending: Vec<f64> = search
            .order_children(children, false)
            .into_iter()
            .map(|(score, _)| score)
            .collect();
        assert_eq!(ascending.first(), Some(&1.0));
    }

    #[test]
    fn maximizer_picks_highest_valued_move() {
        let search = AlphaBeta::new(Eastward);
        let outcome = search.search(
            SearchNode::root(lone_unit(Side::Controlled)),
            1,
            f64::NEG_INFINITY,
            f64::INFINITY,
        );

        assert_eq!(outcome.value, 3.0);
        assert_eq!(
            outcome.node.joint_action.get(UnitId(1)),
            Some(&Action::Move {
                direction: skirmish_core::Direction::East
            })
        );
    }

    #[test]
    fn depth_zero_returns_the_node_itself() {
        let search = AlphaBeta::new(Eastward);
        let root = SearchNode::root(lone_unit(Side::Controlled));
        let outcome = search.search(root.clone(), 0, f64::NEG_INFINITY, f64::INFINITY);

        assert_eq!(outcome.node, root);
        assert_eq!(outcome.value, 2.0);
        assert_eq!(outcome.stats.leaves_evaluated, 1);
        assert_eq!(outcome.stats.nodes_expanded, 0);
    }

    #[test]
    fn opposing_frame_minimizes() {
        // Line-of-sight scores rise as the opponent closes in, so the
        // minimizing side steps away.
        let search = AlphaBeta::new(LineOfSightEvaluator::default());
        let state = CombatState::new(
            Arc::new(GridMap::open(5, 5).unwrap()),
            vec![Unit::new(UnitId(1), Position::new(0, 0), 0)],
            vec![Unit::new(UnitId(9), Position::new(2, 2), 0)],
            Side::Opposing,
        )
        .unwrap();

        let outcome = search.search(SearchNode::root(state), 1, f64::NEG_INFINITY, f64::INFINITY);
        let moved = outcome.node.state.roster(Side::Opposing)[0].position;
        assert!(moved.chebyshev_distance(Position::ORIGIN) > 2);
        assert_eq!(outcome.node.state.side_to_move(), Side::Controlled);
    }

    #[test]
    fn narrow_window_prunes() {
        let search = AlphaBeta::new(Eastward);
        // Any child reaches at least 1.0, so beta = 0.5 cuts after the first.
        let outcome = search.search(
            SearchNode::root(lone_unit(Side::Controlled)),
            1,
            f64::NEG_INFINITY,
            0.5,
        );
        assert_eq!(outcome.stats.cutoffs, 1);
        assert_eq!(outcome.stats.leaves_evaluated, 1);
    }
}
