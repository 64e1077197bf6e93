//! Child generation: every joint action the side to move can take.

use crate::action::{Action, Direction};

use super::{CombatState, SearchNode, Side};

impl CombatState {
    /// Enumerates one ply for the side to move.
    ///
    /// Units are decided in roster order and each unit's choices are crossed
    /// with every partial joint action built so far, so `n` units with up to
    /// five options each yield up to `5^n` children. A unit that can attack
    /// always attacks its first eligible target and never moves. A unit with
    /// neither an attack nor an open neighbour passes, leaving its branch
    /// unchanged. Every child has the turn flag flipped.
    ///
    /// The result is never empty: a side with no units produces a single
    /// handover child with an empty joint action.
    pub fn expand(&self) -> Vec<SearchNode> {
        let mover = self.to_move;
        let seed = SearchNode::root(self.with_turn_passed());
        let unit_count = self.roster(mover).len();

        (0..unit_count).fold(vec![seed], |frontier, index| {
            let mut next = Vec::with_capacity(frontier.len() * Direction::CARDINAL.len());
            for node in frontier {
                branch_unit(node, mover, index, &mut next);
            }
            next
        })
    }
}

/// Extends `node` with every choice of the unit at `index` on `side`.
fn branch_unit(node: SearchNode, side: Side, index: usize, out: &mut Vec<SearchNode>) {
    let unit = node.state.roster(side)[index];

    if let Some(target) = node.state.attack_target(side, index) {
        let mut child = node;
        child
            .joint_action
            .insert(unit.id, Action::Attack { target });
        out.push(child);
        return;
    }

    let before = out.len();
    for direction in Direction::CARDINAL {
        let destination = unit.position.step(direction);
        if !node.state.can_enter(destination) {
            continue;
        }

        let mut state = node.state.clone();
        state.relocate(side, index, destination);
        let mut joint_action = node.joint_action.clone();
        joint_action.insert(unit.id, Action::Move { direction });
        out.push(SearchNode::new(joint_action, state));
    }

    // Boxed in: the unit passes and the branch survives without it.
    if out.len() == before {
        out.push(node);
    }
}
