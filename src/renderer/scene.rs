//! Shape generation for the board
//!
//! Everything is built in board pixel space: origin at the top-left corner,
//! y pointing down, one cell = `CELL_SIZE` pixels.

use glam::{IVec2, Vec2};
use std::f32::consts::PI;

use super::Renderer;
use super::vertex::{Vertex, colors};
use crate::consts::{BOARD_HEIGHT_PX, BOARD_WIDTH_PX, CELL_SIZE};
use crate::sim::{Position, Snake};

/// Gap left around food and body cells so neighbours stay distinct
const CELL_INSET: f32 = 1.0;
const CIRCLE_SEGMENTS: u32 = 16;

/// Top-left pixel of a cell
pub fn cell_origin(position: Position) -> Vec2 {
    IVec2::from(position).as_vec2() * CELL_SIZE
}

/// Generate vertices for an axis-aligned rectangle (two triangles)
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let max = min + size;
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Colour used for a food item worth `score` points
pub fn food_color(score: u64) -> [f32; 4] {
    if score > 10 {
        colors::FOOD_PREMIUM
    } else {
        colors::FOOD_REGULAR
    }
}

/// Collects one frame of triangles from `Renderer` calls
#[derive(Debug, Default)]
pub struct SceneBuilder {
    vertices: Vec<Vertex>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    fn inset_cell(&mut self, position: Position, color: [f32; 4]) {
        let min = cell_origin(position) + Vec2::splat(CELL_INSET);
        let size = Vec2::splat(CELL_SIZE - 2.0 * CELL_INSET);
        self.vertices.extend(rect(min, size, color));
    }

    fn head(&mut self, snake: &Snake) {
        let head = snake.head();
        self.inset_cell(head, colors::SNAKE_HEAD);

        let center = cell_origin(head) + Vec2::splat(CELL_SIZE / 2.0);
        let forward = IVec2::from(snake.heading().vector()).as_vec2();
        let side = forward.perp();

        for sign in [-1.0, 1.0] {
            let eye = center + forward * CELL_SIZE * 0.15 + side * sign * CELL_SIZE * 0.2;
            self.vertices
                .extend(circle(eye, CELL_SIZE * 0.11, colors::SNAKE_EYE, CIRCLE_SEGMENTS));
            let pupil = eye + forward * CELL_SIZE * 0.04;
            self.vertices
                .extend(circle(pupil, CELL_SIZE * 0.05, colors::SNAKE_PUPIL, CIRCLE_SEGMENTS));
        }
    }
}

impl Renderer for SceneBuilder {
    fn clear(&mut self) {
        self.vertices.clear();
        self.vertices.extend(rect(
            Vec2::ZERO,
            Vec2::new(BOARD_WIDTH_PX, BOARD_HEIGHT_PX),
            colors::BACKGROUND,
        ));
    }

    fn draw_snake(&mut self, snake: &Snake) {
        for segment in snake.segments().skip(1) {
            self.inset_cell(segment, colors::SNAKE_BODY);
        }
        self.head(snake);
    }

    fn draw_food(&mut self, score: u64, position: Position) {
        self.inset_cell(position, food_color(score));
    }
}
