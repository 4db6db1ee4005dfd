//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - Seeded RNG only
//! - Time enters only through `TickClock`
//! - Drawing goes through the `Renderer` trait, never a platform API

pub mod clock;
pub mod food;
pub mod grid;
pub mod state;
pub mod tick;

pub use clock::TickClock;
pub use food::{Food, FoodKind, FoodPolicy, PremiumFood, RegularFood};
pub use grid::{Direction, Position};
pub use state::{GameEvent, GameState, INITIAL_BODY, Session, Snake};
pub use tick::{produce_food, tick};
