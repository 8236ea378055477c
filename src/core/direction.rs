//! The four cardinal directions used to address passages.
//!
//! Discriminants are stable and double as array indices, so algorithms can
//! keep per-direction data in `[T; 4]` and pack direction flags with
//! [`Direction::bitmask`].

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// A cardinal direction. `y` grows southwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Direction {
    North = 0, // (x, y-1)
    East = 1,  // (x+1, y)
    South = 2, // (x, y+1)
    West = 3,  // (x-1, y)
}

impl Direction {
    /// All directions in declaration order. Iteration order is part of the
    /// contract: seeded algorithms depend on it.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Converts a raw direction value.
    pub const fn from_index(index: usize) -> Result<Direction> {
        match index {
            0 => Ok(Direction::North),
            1 => Ok(Direction::East),
            2 => Ok(Direction::South),
            3 => Ok(Direction::West),
            _ => Err(GridError::InvalidDirection(index)),
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    #[inline]
    pub const fn dx(self) -> i32 {
        match self {
            Direction::East => 1,
            Direction::West => -1,
            Direction::North | Direction::South => 0,
        }
    }

    #[inline]
    pub const fn dy(self) -> i32 {
        match self {
            Direction::North => -1,
            Direction::South => 1,
            Direction::East | Direction::West => 0,
        }
    }

    /// The coordinate one step from `(x, y)` in this direction.
    #[inline]
    pub const fn step(self, x: i32, y: i32) -> (i32, i32) {
        (x + self.dx(), y + self.dy())
    }

    /// `1 << index`. The four masks are disjoint and together make `0b1111`.
    #[inline]
    pub const fn bitmask(self) -> u8 {
        1 << self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self> {
        Direction::from_index(value as usize)
    }
}

impl From<Direction> for u8 {
    fn from(dir: Direction) -> u8 {
        dir as u8
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_four_directions_in_declaration_order() {
        assert_eq!(Direction::ALL.len(), 4);
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }

    #[test]
    fn dx_matches_unit_vectors() {
        assert_eq!(Direction::North.dx(), 0);
        assert_eq!(Direction::East.dx(), 1);
        assert_eq!(Direction::South.dx(), 0);
        assert_eq!(Direction::West.dx(), -1);
    }

    #[test]
    fn dy_matches_unit_vectors() {
        assert_eq!(Direction::North.dy(), -1);
        assert_eq!(Direction::East.dy(), 0);
        assert_eq!(Direction::South.dy(), 1);
        assert_eq!(Direction::West.dy(), 0);
    }

    #[test]
    fn opposite_pairs_and_involution() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::South.opposite(), Direction::North);
        assert_eq!(Direction::West.opposite(), Direction::East);
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.dx() + dir.opposite().dx(), 0);
            assert_eq!(dir.dy() + dir.opposite().dy(), 0);
        }
    }

    #[test]
    fn bitmasks_union_to_fifteen() {
        let union = Direction::ALL.iter().fold(0u8, |acc, d| acc | d.bitmask());
        assert_eq!(union, 15);
        assert_eq!(Direction::West.bitmask(), 8);
    }

    #[test]
    fn step_moves_one_cell() {
        assert_eq!(Direction::North.step(3, 4), (3, 3));
        assert_eq!(Direction::East.step(3, 4), (4, 4));
        assert_eq!(Direction::South.step(3, 4), (3, 5));
        assert_eq!(Direction::West.step(0, 0), (-1, 0));
    }

    #[test]
    fn raw_values_outside_range_are_rejected() {
        assert_eq!(Direction::from_index(2), Ok(Direction::South));
        assert_eq!(Direction::try_from(3u8), Ok(Direction::West));
        assert_eq!(
            Direction::from_index(4),
            Err(GridError::InvalidDirection(4))
        );
        assert_eq!(
            Direction::try_from(255u8),
            Err(GridError::InvalidDirection(255))
        );
        for dir in Direction::ALL {
            assert_eq!(Direction::try_from(u8::from(dir)), Ok(dir));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Direction::East).unwrap();
        assert_eq!(json, "\"east\"");
        let dir: Direction = serde_json::from_str("\"west\"").unwrap();
        assert_eq!(dir, Direction::West);
    }
}
