mod generation;

use std::error::Error;
use std::fmt;

use rand::rngs::SmallRng;
use raylib::prelude::{Rectangle, Vector2};

use crate::config::{CELL_LENGTH, WALL_THICKNESS};
use crate::math::point_rect_distance;

// The maze hands an entity the wall segments it might be overlapping and
// delegates resolution. The candidate list is owned by the handler and
// filtered destructively.
pub trait CollisionHandler {
    fn handle_collision(&mut self, sides: Vec<Rectangle>) -> Result<(), UnresolvedCollision>;
}

// Backtracking hit its iteration cap, or there was no recorded motion to
// undo while the entity still overlapped a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnresolvedCollision;

impl fmt::Display for UnresolvedCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "collision could not be resolved by backtracking")
    }
}

impl Error for UnresolvedCollision {}

pub struct Maze {
    pub columns: usize,
    pub rows: usize,
    walls: Vec<Rectangle>,
    // Passages of the spanning tree, indexed by cell (col + row * columns).
    open_right: Vec<bool>,
    open_down: Vec<bool>,
}

impl Maze {
    pub fn generate(rng: &mut SmallRng) -> Self {
        generation::generate_maze(rng)
    }

    pub fn walls(&self) -> &[Rectangle] {
        &self.walls
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.columns as f32 * CELL_LENGTH + WALL_THICKNESS,
            height: self.rows as f32 * CELL_LENGTH + WALL_THICKNESS,
        }
    }

    // Wall segments close enough to an entity center to possibly overlap it.
    pub fn collision_candidates(&self, center: Vector2) -> Vec<Rectangle> {
        self.walls
            .iter()
            .copied()
            .filter(|wall| point_rect_distance(center, *wall) < CELL_LENGTH)
            .collect()
    }

    // Gather nearby walls and let the entity resolve any overlap itself.
    pub fn check_entity(
        &self,
        center: Vector2,
        handler: &mut dyn CollisionHandler,
    ) -> Result<(), UnresolvedCollision> {
        handler.handle_collision(self.collision_candidates(center))
    }

    pub fn is_open_right(&self, col: usize, row: usize) -> bool {
        self.open_right[col + row * self.columns]
    }

    pub fn is_open_down(&self, col: usize, row: usize) -> bool {
        self.open_down[col + row * self.columns]
    }
}
