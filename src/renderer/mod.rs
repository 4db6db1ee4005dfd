//! Rendering
//!
//! The simulation draws through the `Renderer` trait. `SceneBuilder` turns
//! those calls into coloured triangles, and `RenderState` puts them on the
//! canvas with WebGPU (or WebGL2 as fallback).

pub mod pipeline;
pub mod scene;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::SceneBuilder;
pub use vertex::Vertex;

use crate::sim::{Position, Snake};

/// Draw calls issued by the game loop
pub trait Renderer {
    /// Wipe the board to the background colour
    fn clear(&mut self);

    /// Body segments plus the head, oriented along the snake's heading
    fn draw_snake(&mut self, snake: &Snake);

    /// One food item; the score picks its colour
    fn draw_food(&mut self, score: u64, position: Position);
}

/// Captures draw calls for assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub clears: usize,
    pub snakes: Vec<Vec<Position>>,
    pub food: Vec<(u64, Position)>,
}

#[cfg(test)]
impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.clears += 1;
        self.snakes.clear();
        self.food.clear();
    }

    fn draw_snake(&mut self, snake: &Snake) {
        self.snakes.push(snake.segments().collect());
    }

    fn draw_food(&mut self, score: u64, position: Position) {
        self.food.push((score, position));
    }
}
