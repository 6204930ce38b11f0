use raylib::prelude::Vector2;

use crate::config::{TANK_VELOCITY, TURNING_ANGLE};
use crate::entities::{Op, Tank};
use crate::math::{decompose_vector, vec2_add};

use super::combat;

// Tags the motion (if any) before mutating, so the collision handler always
// knows which op to undo. Firing leaves the tag alone.
pub fn apply_op(tank: &mut Tank, op: Op) {
    if let Some(motion) = op.motion() {
        tank.last_motion = Some(motion);
    }
    match op {
        Op::Forward => {
            let step = tank.forward_step;
            move_by(tank, step);
        }
        Op::Reverse => {
            let step = tank.reverse_step;
            move_by(tank, step);
        }
        // Positive angles turn clockwise on screen because the y axis
        // points down.
        Op::Right => rotate(tank, TURNING_ANGLE),
        Op::Left => rotate(tank, -TURNING_ANGLE),
        Op::Fire => combat::fire(tank),
    }
}

// Rotates both shapes about the shared pivot and refreshes the cached
// per-tick displacement vectors for the new heading.
pub fn rotate(tank: &mut Tank, delta: f32) {
    tank.theta += delta;
    tank.body.rotate_about(tank.pivot, delta);
    tank.head.rotate_about(tank.pivot, delta);
    tank.forward_step = decompose_vector(TANK_VELOCITY, tank.theta);
    tank.reverse_step = decompose_vector(-TANK_VELOCITY, tank.theta);
}

// Translates body, head and pivot together so the shapes never drift apart.
pub fn move_by(tank: &mut Tank, delta: Vector2) {
    tank.body.translate(delta);
    tank.head.translate(delta);
    tank.pivot = vec2_add(tank.pivot, delta);
}
