use raylib::prelude::{Rectangle, Vector2};

use crate::config::{MAX_BACKTRACK_STEPS, TURNING_ANGLE};
use crate::entities::{MotionOp, Tank};
use crate::math::decompose_vector;
use crate::maze::{CollisionHandler, UnresolvedCollision};
use crate::physics::quad_intersects_rect;

use super::motion;

enum Backtrack {
    Step(Vector2),
    Turn(f32),
}

impl Tank {
    pub fn intersects(&self, side: Rectangle) -> bool {
        quad_intersects_rect(&self.head, side) || quad_intersects_rect(&self.body, side)
    }
}

impl CollisionHandler for Tank {
    // Filters the candidates down to walls actually overlapping the tank,
    // then undoes the last motion in small increments until none remain.
    // Fails instead of looping when the cap is reached or when there is no
    // motion to undo.
    fn handle_collision(&mut self, mut sides: Vec<Rectangle>) -> Result<(), UnresolvedCollision> {
        sides.retain(|side| self.intersects(*side));
        if sides.is_empty() {
            return Ok(());
        }

        let op = match self.last_motion {
            Some(op) => op,
            None => return Err(UnresolvedCollision),
        };
        // The translation undo is a unit step projected once at the current
        // heading; the rotation undo is a fixed fraction of the turn angle.
        let undo = match op {
            MotionOp::Forward => Backtrack::Step(decompose_vector(-1.0, self.theta)),
            MotionOp::Reverse => Backtrack::Step(decompose_vector(1.0, self.theta)),
            MotionOp::Right => Backtrack::Turn(-TURNING_ANGLE / 12.0),
            MotionOp::Left => Backtrack::Turn(TURNING_ANGLE / 12.0),
        };

        for _ in 0..MAX_BACKTRACK_STEPS {
            match undo {
                Backtrack::Step(delta) => motion::move_by(self, delta),
                Backtrack::Turn(delta) => motion::rotate(self, delta),
            }
            sides.retain(|side| self.intersects(*side));
            if sides.is_empty() {
                return Ok(());
            }
        }
        Err(UnresolvedCollision)
    }
}
