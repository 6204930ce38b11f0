use std::f32::consts::PI;

pub const COLUMNS: usize = 8;
pub const ROWS: usize = 5;
pub const CELL_LENGTH: f32 = 120.0;
pub const WALL_THICKNESS: f32 = 10.0;

pub const WINDOW_WIDTH: i32 = (COLUMNS as f32 * CELL_LENGTH + WALL_THICKNESS) as i32;
pub const WINDOW_HEIGHT: i32 = (ROWS as f32 * CELL_LENGTH + WALL_THICKNESS) as i32;

pub const TANK_VELOCITY: f32 = 3.0;
pub const TURNING_ANGLE: f32 = PI / 36.0;

pub const BODY_WIDTH: f32 = 40.0;
pub const BODY_HEIGHT: f32 = 30.0;
// Half of the head sticks out past the front of the body.
pub const HEAD_WIDTH: f32 = BODY_WIDTH / 2.0;
pub const HEAD_HEIGHT: f32 = BODY_HEIGHT / 4.0;

pub const MAX_BACKTRACK_STEPS: u32 = 120;

pub const BULLET_SPEED: f32 = 6.0;
pub const BULLET_RADIUS: f32 = 3.0;
pub const BULLET_LIFE_TICKS: u32 = 360;
pub const MAX_ACTIVE_BULLETS: usize = 5;
pub const FIRE_COOLDOWN_TICKS: u32 = 20;

// A fully rotated tank must fit inside a cell interior, or spawn placement
// can leave it overlapping maze geometry. The farthest point from the pivot
// is the outer head corner.
const TANK_REACH_SQ: f32 = (BODY_WIDTH / 2.0 + HEAD_WIDTH / 2.0) * (BODY_WIDTH / 2.0 + HEAD_WIDTH / 2.0)
    + (BODY_HEIGHT / 2.0) * (BODY_HEIGHT / 2.0);
const CELL_HALF_SPAN: f32 = (CELL_LENGTH - WALL_THICKNESS) / 2.0;
const _: () = assert!(CELL_HALF_SPAN * CELL_HALF_SPAN > TANK_REACH_SQ);
