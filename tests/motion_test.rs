use approx::assert_abs_diff_eq;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use tank_duel::config::{TANK_VELOCITY, TURNING_ANGLE};
use tank_duel::entities::{MotionOp, Op, Player};
use tank_duel::game::tanks::{motion, spawn};
use tank_duel::math::{decompose_vector, vec2_distance, vec2_sub};

#[test]
fn forward_at_heading_zero_moves_everything_by_velocity() {
    let mut tank = spawn::new_tank(Player::One, 0.0);
    let pivot_before = tank.pivot;
    let body_before = *tank.body.corners();
    let head_before = *tank.head.corners();

    motion::apply_op(&mut tank, Op::Forward);

    assert_abs_diff_eq!(tank.pivot.x, pivot_before.x + TANK_VELOCITY);
    assert_abs_diff_eq!(tank.pivot.y, pivot_before.y);
    for (before, after) in body_before.iter().zip(tank.body.corners()) {
        assert_abs_diff_eq!(after.x, before.x + TANK_VELOCITY);
        assert_abs_diff_eq!(after.y, before.y);
    }
    for (before, after) in head_before.iter().zip(tank.head.corners()) {
        assert_abs_diff_eq!(after.x, before.x + TANK_VELOCITY);
        assert_abs_diff_eq!(after.y, before.y);
    }
    assert_eq!(tank.last_motion, Some(MotionOp::Forward));
}

#[test]
fn reverse_applies_the_negative_projection() {
    let mut tank = spawn::new_tank(Player::One, 0.0);
    let pivot_before = tank.pivot;
    motion::apply_op(&mut tank, Op::Reverse);
    assert_abs_diff_eq!(tank.pivot.x, pivot_before.x - TANK_VELOCITY);
    assert_abs_diff_eq!(tank.pivot.y, pivot_before.y);
    assert_eq!(tank.last_motion, Some(MotionOp::Reverse));
}

#[test]
fn every_op_tags_its_motion_subset() {
    let all = [Op::Forward, Op::Reverse, Op::Left, Op::Right, Op::Fire];
    for op in all {
        let mut tank = spawn::new_tank(Player::One, 0.0);
        motion::apply_op(&mut tank, op);
        assert_eq!(tank.last_motion, op.motion(), "{op:?}");
    }

    // Firing must not clobber the motion recorded before it.
    let mut tank = spawn::new_tank(Player::One, 0.0);
    motion::apply_op(&mut tank, Op::Left);
    motion::apply_op(&mut tank, Op::Fire);
    assert_eq!(tank.last_motion, Some(MotionOp::Left));
}

#[test]
fn symmetric_turns_cancel_exactly() {
    let mut tank = spawn::new_tank(Player::One, 0.0);
    motion::apply_op(&mut tank, Op::Right);
    motion::apply_op(&mut tank, Op::Right);
    motion::apply_op(&mut tank, Op::Left);
    motion::apply_op(&mut tank, Op::Left);
    assert_abs_diff_eq!(tank.theta, 0.0, epsilon = 1e-6);
}

#[test]
fn cached_steps_match_the_heading_after_any_rotation() {
    let mut tank = spawn::new_tank(Player::One, 0.0);
    let mut rng = SmallRng::seed_from_u64(11);
    for _ in 0..100 {
        if rng.random_range(0..2) == 0 {
            motion::apply_op(&mut tank, Op::Right);
        } else {
            motion::apply_op(&mut tank, Op::Left);
        }
        let forward = decompose_vector(TANK_VELOCITY, tank.theta);
        let reverse = decompose_vector(-TANK_VELOCITY, tank.theta);
        assert_abs_diff_eq!(tank.forward_step.x, forward.x);
        assert_abs_diff_eq!(tank.forward_step.y, forward.y);
        assert_abs_diff_eq!(tank.reverse_step.x, reverse.x);
        assert_abs_diff_eq!(tank.reverse_step.y, reverse.y);
    }
}

#[test]
fn head_never_drifts_relative_to_the_body() {
    let mut tank = spawn::new_tank(Player::One, 0.0);
    // At heading zero the head sits straight ahead of the pivot, so the
    // expected offset is just the length projected onto the heading.
    let offset_length = vec2_distance(tank.head.center(), tank.pivot);

    let ops = [Op::Forward, Op::Reverse, Op::Left, Op::Right];
    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..200 {
        let op = ops[rng.random_range(0..ops.len())];
        motion::apply_op(&mut tank, op);

        let offset = vec2_sub(tank.head.center(), tank.pivot);
        assert_abs_diff_eq!(
            vec2_distance(tank.head.center(), tank.pivot),
            offset_length,
            epsilon = 1e-3
        );
        // The offset is the initial offset rotated by the net heading change.
        let expected = decompose_vector(offset_length, tank.theta);
        assert_abs_diff_eq!(offset.x, expected.x, epsilon = 1e-3);
        assert_abs_diff_eq!(offset.y, expected.y, epsilon = 1e-3);
    }
}
