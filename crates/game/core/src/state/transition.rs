//! Applying a chosen joint action to obtain the next observed state.

use crate::action::{Action, ActionError, JointAction};

use super::CombatState;

impl CombatState {
    /// Executes `joint_action` for the side to move and returns the successor.
    ///
    /// Actions are applied in roster order, the same order [`expand`] decides
    /// units in, so any joint action produced by `expand` applies cleanly and
    /// lands on the same state. Attacks are checked for range but change no
    /// positions. Units absent from the joint action pass.
    ///
    /// [`expand`]: CombatState::expand
    pub fn apply(&self, joint_action: &JointAction) -> Result<CombatState, ActionError> {
        let mover = self.to_move;

        if let Some((actor, _)) = joint_action
            .iter()
            .find(|(actor, _)| self.unit(mover, *actor).is_none())
        {
            return Err(ActionError::UnknownActor { side: mover, actor });
        }

        let mut next = self.with_turn_passed();
        for index in 0..next.roster(mover).len() {
            let unit = next.roster(mover)[index];
            let Some(action) = joint_action.get(unit.id) else {
                continue;
            };

            match *action {
                Action::Attack { target } => {
                    let defender = next.unit(mover.opponent(), target).ok_or(
                        ActionError::UnknownTarget {
                            actor: unit.id,
                            target,
                        },
                    )?;
                    let distance = unit.position.manhattan_distance(defender.position);
                    if distance > unit.range {
                        return Err(ActionError::TargetOutOfRange {
                            actor: unit.id,
                            target,
                            distance,
                            range: unit.range,
                        });
                    }
                }
                Action::Move { direction } => {
                    if !direction.is_cardinal() {
                        return Err(ActionError::DiagonalMove {
                            actor: unit.id,
                            direction,
                        });
                    }
                    let destination = unit.position.step(direction);
                    if !next.can_enter(destination) {
                        return Err(ActionError::DestinationBlocked {
                            actor: unit.id,
                            destination,
                        });
                    }
                    next.relocate(mover, index, destination);
                }
            }
        }

        Ok(next)
    }
}
