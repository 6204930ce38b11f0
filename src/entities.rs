use raylib::prelude::{Color, Vector2};

use crate::physics::Quad;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Olive",
            Player::Two => "Cobalt",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Player::One => Color::new(128, 150, 62, 255),
            Player::Two => Color::new(72, 132, 224, 255),
        }
    }
}

// The whole control vocabulary a keybinding can map to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Forward,
    Reverse,
    Left,
    Right,
    Fire,
}

// The undo-eligible subset of Op. Firing moves nothing, so it can never
// reach the collision backtracking dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionOp {
    Forward,
    Reverse,
    Left,
    Right,
}

impl Op {
    pub fn motion(self) -> Option<MotionOp> {
        match self {
            Op::Forward => Some(MotionOp::Forward),
            Op::Reverse => Some(MotionOp::Reverse),
            Op::Left => Some(MotionOp::Left),
            Op::Right => Some(MotionOp::Right),
            Op::Fire => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tank {
    pub player: Player,
    pub body: Quad,
    pub head: Quad,
    // Center of the body, shared rotation origin for both shapes.
    pub pivot: Vector2,
    // Heading in radians, accumulates without wraparound.
    pub theta: f32,
    // Per-tick displacements, recomputed on every rotation.
    pub forward_step: Vector2,
    pub reverse_step: Vector2,
    pub last_motion: Option<MotionOp>,
    pub bullets: BulletManager,
    pub alive: bool,
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub pos: Vector2,
    pub vel: Vector2,
    pub life: u32,
}

// Per-tank projectile pool. Each tank owns exactly one.
#[derive(Clone, Debug, Default)]
pub struct BulletManager {
    pub bullets: Vec<Bullet>,
    pub cooldown: u32,
}

impl BulletManager {
    pub fn new() -> Self {
        Self::default()
    }
}
