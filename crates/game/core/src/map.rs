//! Static battlefield layout: rectangular bounds plus blocked cells.

use std::collections::BTreeSet;

use crate::state::{Position, StateError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Immutable grid shared by every state derived from one decision point.
///
/// States hold it behind an `Arc`, so branching never copies the obstacle set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    dimensions: MapDimensions,
    obstacles: BTreeSet<Position>,
}

impl GridMap {
    /// Builds a map, rejecting empty extents and obstacles outside the bounds.
    pub fn new(
        dimensions: MapDimensions,
        obstacles: impl IntoIterator<Item = Position>,
    ) -> Result<Self, StateError> {
        if dimensions.width == 0 || dimensions.height == 0 {
            return Err(StateError::EmptyMap {
                width: dimensions.width,
                height: dimensions.height,
            });
        }

        let mut blocked = BTreeSet::new();
        for position in obstacles {
            if !dimensions.contains(position) {
                return Err(StateError::ObstacleOutOfBounds {
                    position,
                    map_width: dimensions.width,
                    map_height: dimensions.height,
                });
            }
            blocked.insert(position);
        }

        Ok(Self {
            dimensions,
            obstacles: blocked,
        })
    }

    /// An obstacle-free map.
    pub fn open(width: u32, height: u32) -> Result<Self, StateError> {
        Self::new(MapDimensions::new(width, height), [])
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    pub fn obstacles(&self) -> impl Iterator<Item = Position> + '_ {
        self.obstacles.iter().copied()
    }

    pub fn is_obstacle(&self, position: Position) -> bool {
        self.obstacles.contains(&position)
    }

    /// In bounds and not blocked. Occupancy by units is a state concern.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.contains(position) && !self.is_obstacle(position)
    }

    /// Returns true when no obstacle lies inside the inclusive bounding
    /// rectangle spanned by `from` and `to`.
    ///
    /// This is a coarse rasterized line of sight: any obstacle in the box
    /// between the two cells counts as blocking, even off the straight line.
    pub fn has_clear_rectangle(&self, from: Position, to: Position) -> bool {
        let (min_x, max_x) = (from.x.min(to.x), from.x.max(to.x));
        let (min_y, max_y) = (from.y.min(to.y), from.y.max(to.y));

        !self.obstacles.iter().any(|obstacle| {
            (min_x..=max_x).contains(&obstacle.x) && (min_y..=max_y).contains(&obstacle.y)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(
            GridMap::open(0, 4),
            Err(StateError::EmptyMap { width: 0, height: 4 })
        ));
    }

    #[test]
    fn rejects_obstacle_outside_bounds() {
        let result = GridMap::new(MapDimensions::new(3, 3), [Position::new(3, 1)]);
        assert!(matches!(
            result,
            Err(StateError::ObstacleOutOfBounds { position, .. }) if position == Position::new(3, 1)
        ));
    }

    #[test]
    fn walkability_respects_bounds_and_obstacles() {
        let map = GridMap::new(MapDimensions::new(4, 4), [Position::new(1, 1)]).unwrap();
        assert!(map.is_walkable(Position::new(0, 0)));
        assert!(!map.is_walkable(Position::new(1, 1)));
        assert!(!map.is_walkable(Position::new(-1, 0)));
        assert!(!map.is_walkable(Position::new(0, 4)));
    }

    #[test]
    fn clear_rectangle_checks_whole_bounding_box() {
        let map = GridMap::new(MapDimensions::new(5, 5), [Position::new(2, 0)]).unwrap();

        // Obstacle sits inside the box even though it is off the diagonal.
        assert!(!map.has_clear_rectangle(Position::new(0, 0), Position::new(3, 3)));
        // Argument order does not matter.
        assert!(!map.has_clear_rectangle(Position::new(3, 3), Position::new(0, 0)));
        // Box that excludes column 2.
        assert!(map.has_clear_rectangle(Position::new(3, 0), Position::new(4, 4)));
        assert!(map.has_clear_rectangle(Position::new(0, 1), Position::new(4, 4)));
    }

    #[test]
    fn area_is_width_times_height() {
        assert_eq!(MapDimensions::new(4, 6).area(), 24);
    }
}
