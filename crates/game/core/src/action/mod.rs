//! Per-unit actions and the joint actions a side submits for one ply.
mod error;

use std::collections::BTreeMap;

use crate::state::UnitId;

pub use error::ActionError;

/// Compass direction on the grid. North increases `y`.
///
/// All eight directions exist so host commands can be expressed, but only the
/// four cardinal ones are legal moves.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Legal move directions, in the order children are generated.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    pub const fn is_cardinal(self) -> bool {
        let (dx, dy) = self.delta();
        dx == 0 || dy == 0
    }
}

/// What a single unit does during its side's ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move { direction: Direction },
    Attack { target: UnitId },
}

impl Action {
    pub const fn is_attack(&self) -> bool {
        matches!(self, Action::Attack { .. })
    }
}

/// The actions of every unit that acted in one ply, keyed by unit identity.
///
/// Units that passed (boxed in, nothing to strike) are simply absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointAction {
    actions: BTreeMap<UnitId, Action>,
}

impl JointAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `action` for `unit`, returning any action it replaces.
    pub fn insert(&mut self, unit: UnitId, action: Action) -> Option<Action> {
        self.actions.insert(unit, action)
    }

    pub fn get(&self, unit: UnitId) -> Option<&Action> {
        self.actions.get(&unit)
    }

    pub fn iter(&self) -> impl Iterator<Item = (UnitId, &Action)> + '_ {
        self.actions.iter().map(|(unit, action)| (*unit, action))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { direction } => write!(f, "move {direction}"),
            Action::Attack { target } => write!(f, "attack {target}"),
        }
    }
}

impl std::fmt::Display for JointAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("pass");
        }
        for (i, (unit, action)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{unit}: {action}")?;
        }
        Ok(())
    }
}

impl FromIterator<(UnitId, Action)> for JointAction {
    fn from_iter<I: IntoIterator<Item = (UnitId, Action)>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_axis_aligned_directions_are_cardinal() {
        let cardinal: Vec<_> = Direction::ALL
            .into_iter()
            .filter(|direction| direction.is_cardinal())
            .collect();
        assert_eq!(cardinal.len(), 4);
        for direction in Direction::CARDINAL {
            assert!(cardinal.contains(&direction));
        }
    }

    #[test]
    fn opposite_deltas_cancel() {
        let pairs = [
            (Direction::North, Direction::South),
            (Direction::East, Direction::West),
            (Direction::NorthEast, Direction::SouthWest),
            (Direction::NorthWest, Direction::SouthEast),
        ];
        for (a, b) in pairs {
            let (ax, ay) = a.delta();
            let (bx, by) = b.delta();
            assert_eq!((ax + bx, ay + by), (0, 0));
        }
    }

    #[test]
    fn direction_names_round_trip_through_strum() {
        assert_eq!(Direction::SouthWest.to_string(), "south_west");
        assert_eq!("NORTH".parse::<Direction>().unwrap(), Direction::North);
    }

    #[test]
    fn joint_action_iterates_by_identity() {
        let joint: JointAction = [
            (UnitId(5), Action::Attack { target: UnitId(1) }),
            (
                UnitId(2),
                Action::Move {
                    direction: Direction::West,
                },
            ),
        ]
        .into_iter()
        .collect();

        let ids: Vec<_> = joint.iter().map(|(unit, _)| unit).collect();
        assert_eq!(ids, vec![UnitId(2), UnitId(5)]);
        assert!(joint.get(UnitId(5)).unwrap().is_attack());
    }

    #[test]
    fn joint_action_display() {
        assert_eq!(JointAction::new().to_string(), "pass");

        let joint: JointAction = [
            (UnitId(3), Action::Attack { target: UnitId(7) }),
            (
                UnitId(1),
                Action::Move {
                    direction: Direction::North,
                },
            ),
        ]
        .into_iter()
        .collect();
        assert_eq!(joint.to_string(), "#1: move north, #3: attack #7");
    }
}
