//! Static evaluation policies.
//!
//! An [`Evaluator`] maps a [`CombatState`] to a finite score where higher is
//! better for the controlled side, whoever moves next. It runs once per
//! generated node, so implementations stay cheap and hold no mutable state:
//! scoring the same state twice must give bit-identical results.

mod line_of_sight;
mod proximity;

use skirmish_core::{CombatState, EvaluatorKind, Position, Unit};

pub use line_of_sight::LineOfSightEvaluator;
pub use proximity::ProximityEvaluator;

/// Scoring capability consumed by the search.
pub trait Evaluator: Send + Sync {
    /// Score of `state` from the controlled side's point of view.
    fn evaluate(&self, state: &CombatState) -> f64;

    /// Short identifier for logs.
    fn name(&self) -> &'static str;
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    #[inline]
    fn evaluate(&self, state: &CombatState) -> f64 {
        (**self).evaluate(state)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    #[inline]
    fn evaluate(&self, state: &CombatState) -> f64 {
        (**self).evaluate(state)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Builds the evaluator selected in configuration, with default weights.
pub fn evaluator_for(kind: EvaluatorKind) -> Box<dyn Evaluator> {
    match kind {
        EvaluatorKind::LineOfSight => Box::new(LineOfSightEvaluator::default()),
        EvaluatorKind::Proximity => Box::new(ProximityEvaluator::default()),
    }
}

/// Closest unit of `candidates` to `from` under `metric`.
///
/// Ties go to the earliest unit in roster order.
fn nearest<'a>(
    from: Position,
    candidates: &'a [Unit],
    metric: impl Fn(Position, Position) -> u32,
) -> Option<(&'a Unit, u32)> {
    candidates.iter().fold(None, |best, candidate| {
        let distance = metric(from, candidate.position);
        match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((candidate, distance)),
        }
    })
}
