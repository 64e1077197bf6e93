//! Decision rounds played between two searches sharing one agent.
use anyhow::Result;
use skirmish_ai::MinimaxAgent;
use skirmish_core::{CombatState, Side};

/// One executed decision.
#[derive(Clone, Debug)]
pub struct Round {
    pub number: u32,
    pub side: Side,
    pub joint_action: skirmish_core::JointAction,
    pub value: f64,
}

/// Plays `rounds` decisions, alternating sides, starting from `state`.
///
/// Each round the agent decides for whichever side is to move and the chosen
/// joint action is applied, so the opposing side plays the reply the search
/// itself predicts. Returns the executed rounds and the final state.
pub fn play(
    agent: &MinimaxAgent,
    mut state: CombatState,
    rounds: u32,
) -> Result<(Vec<Round>, CombatState)> {
    let mut played = Vec::with_capacity(rounds as usize);

    for number in 1..=rounds {
        let decision = agent.decide(&state);
        state = state.apply(&decision.joint_action)?;

        tracing::info!(
            round = number,
            side = %decision.side,
            value = decision.value,
            nodes = decision.stats.nodes_expanded,
            "{}",
            decision.joint_action
        );

        played.push(Round {
            number,
            side: decision.side,
            joint_action: decision.joint_action,
            value: decision.value,
        });
    }

    Ok((played, state))
}

/// Logs where every unit stands.
pub fn log_positions(state: &CombatState) {
    for side in [Side::Controlled, Side::Opposing] {
        for unit in state.roster(side) {
            tracing::info!(%side, unit = %unit.id, position = %unit.position, "unit");
        }
    }
}
