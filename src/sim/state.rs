//! Game state and core simulation types
//!
//! `Session` owns everything a running game mutates. It is created once and
//! reset in place on collision.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food::{self, Food, FoodKind, FoodPolicy};
use super::grid::{Direction, Position};
use crate::settings::Settings;

/// Starting body, head first
pub const INITIAL_BODY: [Position; 3] = [
    Position::new(3, 2),
    Position::new(2, 2),
    Position::new(1, 2),
];

/// The player's snake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Segments, head first, tail last. Never empty.
    body: VecDeque<Position>,
    /// Tick interval in milliseconds
    pub speed: u32,
    /// Remaining accelerations; also the size of the next step
    pub speed_boost: u32,
}

impl Snake {
    pub fn new(settings: &Settings) -> Self {
        Self {
            body: INITIAL_BODY.into_iter().collect(),
            speed: settings.initial_interval_ms,
            speed_boost: settings.speed_boost_budget,
        }
    }

    /// Build a snake from explicit segments (head first)
    pub fn from_segments(segments: &[Position], settings: &Settings) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            body: segments.iter().copied().collect(),
            ..Self::new(settings)
        })
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Move one cell: new wrapped head in front, tail dropped.
    /// Returns the cell the tail vacated.
    pub fn advance(&mut self, direction: Direction) -> Position {
        let new_head = (self.head() + direction.vector()).wrapped();
        self.body.push_front(new_head);
        match self.body.pop_back() {
            Some(old_tail) => old_tail,
            None => new_head,
        }
    }

    /// Append a segment at the tail end
    pub fn grow(&mut self, at: Position) {
        self.body.push_back(at);
    }

    /// True if any non-head segment shares the head's cell
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|p| *p == head)
    }

    /// Direction the head is facing, derived from the head and neck.
    /// A one-segment snake faces right.
    pub fn heading(&self) -> Direction {
        let Some(neck) = self.body.get(1) else {
            return Direction::default();
        };
        let head = self.head();
        Direction::ALL
            .into_iter()
            .find(|d| (*neck + d.vector()).wrapped() == head)
            .unwrap_or_default()
    }

    /// Shorten the tick interval while budget remains.
    /// Returns true if the interval changed.
    pub fn accelerate(&mut self) -> bool {
        if self.speed_boost == 0 {
            return false;
        }
        self.speed = self.speed.saturating_sub(self.speed_boost);
        self.speed_boost -= 1;
        true
    }
}

/// Score and steering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub score: u64,
    pub direction: Direction,
}

/// Things that happened during a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Head ran into the body; the session was reset
    Collision { final_score: u64 },
    FoodEaten { kind: FoodKind, score: u64 },
    FoodSpawned { kind: FoodKind, position: Position },
    FoodExpired { kind: FoodKind },
    /// Tick interval changed (ms); the clock must restart
    SpeedChanged { interval_ms: u32 },
}

/// One running game
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    pub snake: Snake,
    pub food: Vec<Food>,
    pub state: GameState,
    /// Simulation tick counter (not reset on collision)
    pub time_ticks: u64,
    rng: Pcg32,
    policies: Vec<Box<dyn FoodPolicy>>,
}

impl Session {
    /// Create a new session with the given seed
    pub fn new(seed: u64, settings: Settings) -> Self {
        let policies = food::policies(&settings);
        Self {
            seed,
            snake: Snake::new(&settings),
            food: Vec::new(),
            state: GameState::default(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            policies,
            settings,
        }
    }

    /// Back to the starting configuration. The RNG keeps its stream.
    pub fn reset(&mut self) {
        self.snake = Snake::new(&self.settings);
        self.food.clear();
        self.state = GameState::default();
    }

    /// Split borrow for the food pass
    pub(crate) fn food_parts(
        &mut self,
    ) -> (&[Box<dyn FoodPolicy>], &mut Vec<Food>, &GameState, &mut Pcg32) {
        (
            self.policies.as_slice(),
            &mut self.food,
            &self.state,
            &mut self.rng,
        )
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("seed", &self.seed)
            .field("snake", &self.snake)
            .field("food", &self.food)
            .field("state", &self.state)
            .field("time_ticks", &self.time_ticks)
            .finish_non_exhaustive()
    }
}
