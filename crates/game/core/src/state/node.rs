use crate::action::JointAction;

use super::CombatState;

/// A state in the search tree together with the joint action that produced it.
///
/// The joint action covers only the units of the side that just moved. It is
/// empty for the root and for a turn handover by a side with no units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub joint_action: JointAction,
    pub state: CombatState,
}

impl SearchNode {
    pub fn new(joint_action: JointAction, state: CombatState) -> Self {
        Self {
            joint_action,
            state,
        }
    }

    /// Entry node for a decision point: no provenance yet.
    pub fn root(state: CombatState) -> Self {
        Self::new(JointAction::new(), state)
    }
}
