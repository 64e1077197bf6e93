//! Host-facing snapshot of a decision point.
//!
//! The host simulation translates its own world view into a [`Snapshot`] once
//! per decision. Nothing else crosses the boundary: no health, no damage.

use std::sync::Arc;

use crate::map::{GridMap, MapDimensions};
use crate::state::{CombatState, Position, Side, StateError, Unit, UnitId};

/// One unit as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitSpec {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub range: u32,
}

impl UnitSpec {
    pub const fn new(id: u32, x: i32, y: i32, range: u32) -> Self {
        Self { id, x, y, range }
    }

    fn to_unit(self) -> Unit {
        Unit::new(UnitId(self.id), Position::new(self.x, self.y), self.range)
    }
}

/// Map extent, obstacle cells, and both rosters in host order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<(i32, i32)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub controlled: Vec<UnitSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub opposing: Vec<UnitSpec>,
}

impl Snapshot {
    pub fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.width, self.height)
    }
}

impl CombatState {
    /// Builds the root state of a decision point with the controlled side to move.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, StateError> {
        let obstacles = snapshot
            .obstacles
            .iter()
            .map(|&(x, y)| Position::new(x, y));
        let map = GridMap::new(snapshot.dimensions(), obstacles)?;

        CombatState::new(
            Arc::new(map),
            snapshot.controlled.iter().map(|spec| spec.to_unit()).collect(),
            snapshot.opposing.iter().map(|spec| spec.to_unit()).collect(),
            Side::Controlled,
        )
    }
}
