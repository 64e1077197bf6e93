use skirmish_core::{CombatState, Position, Side};

use super::{Evaluator, nearest};

/// Weighted linear combination of closeness and attack threats.
///
/// ```text
/// score = -distance_weight × Σ nearest Manhattan distance (controlled units)
///         + threat_weight × (controlled units with a target in range)
///         - threat_weight × (opposing units with a target in range)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityEvaluator {
    pub distance_weight: f64,
    pub threat_weight: f64,
}

impl ProximityEvaluator {
    pub const DEFAULT_DISTANCE_WEIGHT: f64 = 1.0;
    pub const DEFAULT_THREAT_WEIGHT: f64 = 50.0;

    pub fn new(distance_weight: f64, threat_weight: f64) -> Self {
        Self {
            distance_weight,
            threat_weight,
        }
    }

    fn threats(state: &CombatState, side: Side) -> usize {
        (0..state.roster(side).len())
            .filter(|&index| state.attack_target(side, index).is_some())
            .count()
    }
}

impl Default for ProximityEvaluator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DISTANCE_WEIGHT, Self::DEFAULT_THREAT_WEIGHT)
    }
}

impl Evaluator for ProximityEvaluator {
    fn evaluate(&self, state: &CombatState) -> f64 {
        let opponents = state.roster(Side::Opposing);
        let total_distance: u32 = state
            .roster(Side::Controlled)
            .iter()
            .filter_map(|unit| nearest(unit.position, opponents, Position::manhattan_distance))
            .map(|(_, distance)| distance)
            .sum();

        let ours = Self::threats(state, Side::Controlled) as f64;
        let theirs = Self::threats(state, Side::Opposing) as f64;

        -self.distance_weight * f64::from(total_distance) + self.threat_weight * (ours - theirs)
    }

    fn name(&self) -> &'static str {
        "proximity"
    }
}
