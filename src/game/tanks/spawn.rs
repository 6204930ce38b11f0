use rand::{rngs::SmallRng, Rng};

use crate::config::{
    BODY_HEIGHT, BODY_WIDTH, CELL_LENGTH, HEAD_HEIGHT, HEAD_WIDTH, TANK_VELOCITY, WALL_THICKNESS,
};
use crate::entities::{BulletManager, Player, Tank};
use crate::math::{decompose_vector, vec2};
use crate::maze::Maze;
use crate::physics::Quad;

use super::motion;

pub fn spawn_tank(player: Player, initial_heading: f32, maze: &Maze, rng: &mut SmallRng) -> Tank {
    let mut tank = new_tank(player, initial_heading);
    place_in_random_cell(&mut tank, maze, rng);
    tank
}

// A tank at the local-space origin: body top-left at (0, 0), head offset so
// half of it protrudes from the front and it sits on the body's vertical
// centerline, both rotated to the initial heading.
pub fn new_tank(player: Player, initial_heading: f32) -> Tank {
    let body = Quad::axis_aligned(vec2(0.0, 0.0), BODY_WIDTH, BODY_HEIGHT);
    let head = Quad::axis_aligned(
        vec2(
            BODY_WIDTH - HEAD_WIDTH / 2.0,
            BODY_HEIGHT / 2.0 - HEAD_HEIGHT / 2.0,
        ),
        HEAD_WIDTH,
        HEAD_HEIGHT,
    );

    let mut tank = Tank {
        player,
        body,
        head,
        pivot: vec2(BODY_WIDTH / 2.0, BODY_HEIGHT / 2.0),
        theta: 0.0,
        forward_step: decompose_vector(TANK_VELOCITY, 0.0),
        reverse_step: decompose_vector(-TANK_VELOCITY, 0.0),
        last_motion: None,
        bullets: BulletManager::new(),
        alive: true,
    };
    motion::rotate(&mut tank, initial_heading);
    tank
}

// Centers the tank in a uniformly chosen cell: translate to the cell's
// corner, past the wall, to the interior center, then compensate for the
// body's top-left being the translation target rather than its center.
fn place_in_random_cell(tank: &mut Tank, maze: &Maze, rng: &mut SmallRng) {
    let col = rng.random_range(0..maze.columns) as f32;
    let row = rng.random_range(0..maze.rows) as f32;

    motion::move_by(tank, vec2(col * CELL_LENGTH, row * CELL_LENGTH));
    motion::move_by(tank, vec2(WALL_THICKNESS, WALL_THICKNESS));
    motion::move_by(
        tank,
        vec2(
            (CELL_LENGTH - WALL_THICKNESS) / 2.0,
            (CELL_LENGTH - WALL_THICKNESS) / 2.0,
        ),
    );
    motion::move_by(tank, vec2(-BODY_WIDTH / 2.0, -BODY_HEIGHT / 2.0));
}
