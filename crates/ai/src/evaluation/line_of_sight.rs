use skirmish_core::{CombatState, Position, Side};

use super::{Evaluator, nearest};

/// Rewards closing on visible opponents and backing away from hidden ones.
///
/// For every controlled unit, take its nearest opponent by Chebyshev distance
/// `d`. If no obstacle lies in the bounding rectangle between them, add
/// `area / (d + 1)`; otherwise subtract it. Add `closing_bonus` when
/// `d < bonus_radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineOfSightEvaluator {
    pub closing_bonus: f64,
    pub bonus_radius: u32,
}

impl LineOfSightEvaluator {
    pub const DEFAULT_CLOSING_BONUS: f64 = 10_000.0;
    pub const DEFAULT_BONUS_RADIUS: u32 = 2;

    pub fn new(closing_bonus: f64, bonus_radius: u32) -> Self {
        Self {
            closing_bonus,
            bonus_radius,
        }
    }
}

impl Default for LineOfSightEvaluator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CLOSING_BONUS, Self::DEFAULT_BONUS_RADIUS)
    }
}

impl Evaluator for LineOfSightEvaluator {
    fn evaluate(&self, state: &CombatState) -> f64 {
        let map = state.map();
        let area = map.dimensions().area() as f64;
        let opponents = state.roster(Side::Opposing);

        state
            .roster(Side::Controlled)
            .iter()
            .filter_map(|unit| {
                nearest(unit.position, opponents, Position::chebyshev_distance)
                    .map(|(target, distance)| (unit, target, distance))
            })
            .map(|(unit, target, distance)| {
                let term = area / (f64::from(distance) + 1.0);
                let signed = if map.has_clear_rectangle(unit.position, target.position) {
                    term
                } else {
                    -term
                };
                if distance < self.bonus_radius {
                    signed + self.closing_bonus
                } else {
                    signed
                }
            })
            .sum()
    }

    fn name(&self) -> &'static str {
        "line_of_sight"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use skirmish_core::{GridMap, MapDimensions, Unit, UnitId};

    use super::*;

    fn duel(obstacles: &[(i32, i32)], ours: (i32, i32), theirs: (i32, i32)) -> CombatState {
        let obstacles = obstacles.iter().map(|&(x, y)| Position::new(x, y));
        let map = GridMap::new(MapDimensions::new(4, 4), obstacles).unwrap();
        CombatState::new(
            Arc::new(map),
            vec![Unit::new(UnitId(1), Position::new(ours.0, ours.1), 1)],
            vec![Unit::new(UnitId(2), Position::new(theirs.0, theirs.1), 1)],
            Side::Controlled,
        )
        .unwrap()
    }

    #[test]
    fn clear_sight_adds_area_over_distance() {
        let score = LineOfSightEvaluator::default().evaluate(&duel(&[], (0, 0), (3, 3)));
        assert_eq!(score, 16.0 / 4.0);
    }

    #[test]
    fn blocked_sight_subtracts_the_same_term() {
        let score = LineOfSightEvaluator::default().evaluate(&duel(&[(1, 2)], (0, 0), (3, 3)));
        assert_eq!(score, -16.0 / 4.0);
    }

    #[test]
    fn adjacent_opponent_earns_closing_bonus() {
        let score = LineOfSightEvaluator::default().evaluate(&duel(&[], (1, 1), (2, 2)));
        assert_eq!(score, 16.0 / 2.0 + 10_000.0);
    }

    #[test]
    fn no_opponents_scores_zero() {
        let map = Arc::new(GridMap::open(4, 4).unwrap());
        let state = CombatState::new(
            map,
            vec![Unit::new(UnitId(1), Position::ORIGIN, 1)],
            vec![],
            Side::Controlled,
        )
        .unwrap();
        assert_eq!(LineOfSightEvaluator::default().evaluate(&state), 0.0);
    }

    #[test]
    fn score_ignores_side_to_move() {
        let state = duel(&[], (0, 1), (2, 3));
        let evaluator = LineOfSightEvaluator::default();
        assert_eq!(
            evaluator.evaluate(&state).to_bits(),
            evaluator.evaluate(&state.with_turn_passed()).to_bits()
        );
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let state = duel(&[(2, 1)], (0, 0), (3, 2));
        let evaluator = LineOfSightEvaluator::default();
        let first = evaluator.evaluate(&state);
        let second = evaluator.evaluate(&state);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
