//! Combat state representation.
//!
//! A [`CombatState`] is a complete snapshot of one decision point: the shared
//! map, both rosters, and the side to move. Derived states are produced by
//! cloning the whole snapshot and then changing the clone, so a state that
//! has been handed out is never observed half-updated.
mod children;
mod common;
mod error;
mod node;
mod transition;

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::map::GridMap;

pub use common::{Position, UnitId};
pub use error::StateError;
pub use node::SearchNode;

/// One of the two opposing sides.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    /// The side the agent plays for. Scores are from its perspective.
    Controlled,
    Opposing,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Side::Controlled => Side::Opposing,
            Side::Opposing => Side::Controlled,
        }
    }
}

/// A mobile combatant. Only the position changes during a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id: UnitId,
    pub position: Position,
    /// Attack reach, measured in Manhattan distance.
    pub range: u32,
}

impl Unit {
    pub const fn new(id: UnitId, position: Position, range: u32) -> Self {
        Self {
            id,
            position,
            range,
        }
    }
}

/// Snapshot of the skirmish at one node of the search tree.
///
/// Roster order is significant: it fixes the order in which units are expanded
/// and is preserved by every clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatState {
    map: Arc<GridMap>,
    controlled: Vec<Unit>,
    opposing: Vec<Unit>,
    to_move: Side,
}

impl CombatState {
    /// Builds a validated state.
    ///
    /// Fails when a unit is out of bounds, stands on an obstacle, shares a
    /// cell with any other unit, or repeats an identity within its roster.
    pub fn new(
        map: Arc<GridMap>,
        controlled: Vec<Unit>,
        opposing: Vec<Unit>,
        to_move: Side,
    ) -> Result<Self, StateError> {
        let state = Self {
            map,
            controlled,
            opposing,
            to_move,
        };
        state.validate()?;
        Ok(state)
    }

    fn validate(&self) -> Result<(), StateError> {
        let dimensions = self.map.dimensions();
        let mut occupied: Vec<(Position, Side, UnitId)> = Vec::new();

        for side in [Side::Controlled, Side::Opposing] {
            let mut seen = BTreeSet::new();
            for unit in self.roster(side) {
                if !seen.insert(unit.id) {
                    return Err(StateError::DuplicateUnit {
                        side,
                        unit: unit.id,
                    });
                }
                if !dimensions.contains(unit.position) {
                    return Err(StateError::PositionOutOfBounds {
                        side,
                        unit: unit.id,
                        position: unit.position,
                        map_width: dimensions.width,
                        map_height: dimensions.height,
                    });
                }
                if self.map.is_obstacle(unit.position) {
                    return Err(StateError::PositionBlocked {
                        side,
                        unit: unit.id,
                        position: unit.position,
                    });
                }
                if let Some(&(_, occupant_side, occupant)) =
                    occupied.iter().find(|(position, ..)| *position == unit.position)
                {
                    return Err(StateError::PositionOccupied {
                        side,
                        unit: unit.id,
                        position: unit.position,
                        occupant_side,
                        occupant,
                    });
                }
                occupied.push((unit.position, side, unit.id));
            }
        }

        Ok(())
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    /// Shared handle to the map, for building sibling states.
    pub fn shared_map(&self) -> Arc<GridMap> {
        Arc::clone(&self.map)
    }

    pub fn side_to_move(&self) -> Side {
        self.to_move
    }

    pub fn is_controlled_turn(&self) -> bool {
        self.to_move == Side::Controlled
    }

    pub fn roster(&self, side: Side) -> &[Unit] {
        match side {
            Side::Controlled => &self.controlled,
            Side::Opposing => &self.opposing,
        }
    }

    fn roster_mut(&mut self, side: Side) -> &mut [Unit] {
        match side {
            Side::Controlled => &mut self.controlled,
            Side::Opposing => &mut self.opposing,
        }
    }

    pub fn unit(&self, side: Side, id: UnitId) -> Option<&Unit> {
        self.roster(side).iter().find(|unit| unit.id == id)
    }

    pub fn unit_index(&self, side: Side, id: UnitId) -> Option<usize> {
        self.roster(side).iter().position(|unit| unit.id == id)
    }

    /// The unit standing on `position`, of either side.
    pub fn occupant(&self, position: Position) -> Option<(Side, UnitId)> {
        [Side::Controlled, Side::Opposing]
            .into_iter()
            .find_map(|side| {
                self.roster(side)
                    .iter()
                    .find(|unit| unit.position == position)
                    .map(|unit| (side, unit.id))
            })
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupant(position).is_some()
    }

    /// Whether a unit could step onto `position`: in bounds, no obstacle, no unit.
    pub fn can_enter(&self, position: Position) -> bool {
        self.map.is_walkable(position) && !self.is_occupied(position)
    }

    /// First opponent, in roster order, that the unit at `index` can strike.
    ///
    /// Eligibility is Manhattan distance `<=` the attacker's range.
    pub fn attack_target(&self, side: Side, index: usize) -> Option<UnitId> {
        let attacker = self.roster(side).get(index)?;
        self.roster(side.opponent())
            .iter()
            .find(|defender| attacker.position.manhattan_distance(defender.position) <= attacker.range)
            .map(|defender| defender.id)
    }

    /// Copy of this state with the turn handed to the other side.
    pub fn with_turn_passed(&self) -> Self {
        let mut next = self.clone();
        next.to_move = self.to_move.opponent();
        next
    }

    /// Moves one unit. Callers check `can_enter` first.
    fn relocate(&mut self, side: Side, index: usize, destination: Position) {
        self.roster_mut(side)[index].position = destination;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapDimensions;

    fn unit(id: u32, x: i32, y: i32, range: u32) -> Unit {
        Unit::new(UnitId(id), Position::new(x, y), range)
    }

    fn map_with(obstacles: &[(i32, i32)]) -> Arc<GridMap> {
        let obstacles = obstacles.iter().map(|&(x, y)| Position::new(x, y));
        Arc::new(GridMap::new(MapDimensions::new(5, 5), obstacles).unwrap())
    }

    #[test]
    fn rejects_units_sharing_a_cell_across_sides() {
        let result = CombatState::new(
            map_with(&[]),
            vec![unit(1, 2, 2, 1)],
            vec![unit(7, 2, 2, 1)],
            Side::Controlled,
        );
        assert_eq!(
            result.unwrap_err(),
            StateError::PositionOccupied {
                side: Side::Opposing,
                unit: UnitId(7),
                position: Position::new(2, 2),
                occupant_side: Side::Controlled,
                occupant: UnitId(1),
            }
        );
    }

    #[test]
    fn rejects_unit_on_obstacle() {
        let result = CombatState::new(
            map_with(&[(1, 1)]),
            vec![unit(1, 1, 1, 1)],
            vec![],
            Side::Controlled,
        );
        assert!(matches!(result, Err(StateError::PositionBlocked { .. })));
    }

    #[test]
    fn rejects_out_of_bounds_unit() {
        let result = CombatState::new(
            map_with(&[]),
            vec![],
            vec![unit(2, 5, 0, 1)],
            Side::Controlled,
        );
        assert!(matches!(
            result,
            Err(StateError::PositionOutOfBounds {
                side: Side::Opposing,
                ..
            })
        ));
    }

    #[test]
    fn rejects_duplicate_identity_within_roster() {
        let result = CombatState::new(
            map_with(&[]),
            vec![unit(1, 0, 0, 1), unit(1, 4, 4, 1)],
            vec![],
            Side::Controlled,
        );
        assert!(matches!(result, Err(StateError::DuplicateUnit { .. })));
    }

    #[test]
    fn same_identity_on_both_sides_is_allowed() {
        let state = CombatState::new(
            map_with(&[]),
            vec![unit(1, 0, 0, 1)],
            vec![unit(1, 4, 4, 1)],
            Side::Controlled,
        );
        assert!(state.is_ok());
    }

    #[test]
    fn attack_target_uses_inclusive_manhattan_range() {
        let state = CombatState::new(
            map_with(&[]),
            vec![unit(1, 0, 0, 2)],
            vec![unit(5, 2, 2, 1), unit(6, 1, 1, 1)],
            Side::Controlled,
        )
        .unwrap();

        // (2,2) is Manhattan 4 away, (1,1) is exactly 2.
        assert_eq!(state.attack_target(Side::Controlled, 0), Some(UnitId(6)));
        // Opposing unit 6 has range 1 and the controlled unit is 2 away.
        assert_eq!(state.attack_target(Side::Opposing, 1), None);
    }

    #[test]
    fn turn_passing_keeps_rosters_and_shares_map() {
        let state = CombatState::new(
            map_with(&[(3, 3)]),
            vec![unit(1, 0, 0, 1)],
            vec![unit(2, 4, 4, 1)],
            Side::Controlled,
        )
        .unwrap();

        let passed = state.with_turn_passed();
        assert_eq!(passed.side_to_move(), Side::Opposing);
        assert_eq!(passed.roster(Side::Controlled), state.roster(Side::Controlled));
        assert!(Arc::ptr_eq(&passed.map, &state.map));
    }

    #[test]
    fn occupant_reports_side() {
        let state = CombatState::new(
            map_with(&[]),
            vec![unit(1, 0, 0, 1)],
            vec![unit(2, 4, 4, 1)],
            Side::Controlled,
        )
        .unwrap();

        assert_eq!(state.occupant(Position::new(4, 4)), Some((Side::Opposing, UnitId(2))));
        assert!(!state.can_enter(Position::new(0, 0)));
        assert!(state.can_enter(Position::new(1, 0)));
    }
}
