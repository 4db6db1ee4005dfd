//! Grid coordinates and directions
//!
//! The board is a fixed `GRID_WIDTH` x `GRID_HEIGHT` torus: leaving one edge
//! teleports to the opposite one. y grows downward, matching canvas space.

use std::ops::Add;

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{GRID_HEIGHT, GRID_WIDTH};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Uniformly random cell within the grid
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0..GRID_WIDTH),
            y: rng.random_range(0..GRID_HEIGHT),
        }
    }

    /// Apply the border teleport: each axis is corrected independently
    pub fn wrapped(self) -> Self {
        Self {
            x: self.x.rem_euclid(GRID_WIDTH),
            y: self.y.rem_euclid(GRID_HEIGHT),
        }
    }

    pub fn in_bounds(&self) -> bool {
        (0..GRID_WIDTH).contains(&self.x) && (0..GRID_HEIGHT).contains(&self.y)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<Position> for IVec2 {
    fn from(p: Position) -> Self {
        IVec2::new(p.x, p.y)
    }
}

/// Movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit move for one tick
    pub fn vector(self) -> Position {
        match self {
            Direction::Up => Position::new(0, -1),
            Direction::Down => Position::new(0, 1),
            Direction::Left => Position::new(-1, 0),
            Direction::Right => Position::new(1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_add_is_componentwise() {
        let p = Position::new(3, 2) + Position::new(-1, 4);
        assert_eq!(p, Position::new(2, 6));
    }

    #[test]
    fn test_wrap_each_edge() {
        assert_eq!(Position::new(-1, 3).wrapped(), Position::new(GRID_WIDTH - 1, 3));
        assert_eq!(Position::new(GRID_WIDTH, 3).wrapped(), Position::new(0, 3));
        assert_eq!(Position::new(4, -1).wrapped(), Position::new(4, GRID_HEIGHT - 1));
        assert_eq!(Position::new(4, GRID_HEIGHT).wrapped(), Position::new(4, 0));
        // Both axes out at once are both corrected
        assert_eq!(Position::new(-1, GRID_HEIGHT).wrapped(), Position::new(GRID_WIDTH - 1, 0));
    }

    #[test]
    fn test_right_edge_wraps_to_zero() {
        let head = Position::new(11, 4);
        assert_eq!((head + Direction::Right.vector()).wrapped(), Position::new(0, 4));
    }

    #[test]
    fn test_opposites() {
        for d in Direction::ALL {
            assert_ne!(d, d.opposite());
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.vector() + d.opposite().vector(), Position::new(0, 0));
        }
    }

    #[test]
    fn test_random_stays_on_grid() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            assert!(Position::random(&mut rng).in_bounds());
        }
    }

    proptest! {
        #[test]
        fn prop_step_then_wrap_in_bounds(
            x in 0..GRID_WIDTH,
            y in 0..GRID_HEIGHT,
            dir in 0usize..4,
        ) {
            let p = Position::new(x, y);
            let moved = (p + Direction::ALL[dir].vector()).wrapped();
            prop_assert!(moved.in_bounds());
        }

        #[test]
        fn prop_wrap_keeps_in_bounds_cells(x in 0..GRID_WIDTH, y in 0..GRID_HEIGHT) {
            let p = Position::new(x, y);
            prop_assert_eq!(p.wrapped(), p);
        }
    }
}
