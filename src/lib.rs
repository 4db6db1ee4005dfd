//! Canvas Snake - a grid Snake game for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, food, snake, tick loop, clock)
//! - `game`: Frame-driven game driver wrapping the simulation
//! - `input`: Keyboard code to direction mapping
//! - `renderer`: Draw-call seam plus the WebGPU pipeline
//! - `settings`: Gameplay tuning, persisted in LocalStorage on web

pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Board dimensions in cells (fixed, not configurable at runtime)
    pub const GRID_WIDTH: i32 = 12;
    pub const GRID_HEIGHT: i32 = 8;

    /// Size of one cell in board pixels
    pub const CELL_SIZE: f32 = 70.0;

    /// Board size in pixels
    pub const BOARD_WIDTH_PX: f32 = GRID_WIDTH as f32 * CELL_SIZE;
    pub const BOARD_HEIGHT_PX: f32 = GRID_HEIGHT as f32 * CELL_SIZE;

    /// Initial tick interval in milliseconds
    pub const INITIAL_INTERVAL_MS: u32 = 500;
    /// Number of accelerations available; each one shortens the interval by
    /// the budget still remaining (25, 24, ..., 1)
    pub const SPEED_BOOST_BUDGET: u32 = 25;

    /// Food values
    pub const REGULAR_FOOD_SCORE: u64 = 10;
    pub const PREMIUM_FOOD_SCORE: u64 = 20;
    /// Premium food may only appear when the score is a multiple of this
    pub const PREMIUM_SCORE_MULTIPLE: u64 = 50;
    /// Premium food lifetime in ticks
    pub const PREMIUM_MAX_AGE: u32 = 16;

    /// Longest frame delta fed to the tick clock (ms)
    pub const MAX_FRAME_DT_MS: f64 = 1000.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 4;
}

/// Text shown in the on-screen score readout
pub fn score_text(score: u64) -> String {
    format!("Score: {}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(0), "Score: 0");
        assert_eq!(score_text(120), "Score: 120");
    }

    #[test]
    fn test_board_size_matches_grid() {
        assert_eq!(consts::BOARD_WIDTH_PX, 840.0);
        assert_eq!(consts::BOARD_HEIGHT_PX, 560.0);
    }
}
