mod collisions;
pub mod combat;
pub mod motion;
pub mod spawn;

use std::f32::consts::PI;

use rand::rngs::SmallRng;

use crate::entities::{Player, Tank};
use crate::maze::Maze;

// The two duelists start facing opposite directions. Both may land in the
// same cell; spawn separation is not enforced.
pub fn spawn_all(rng: &mut SmallRng, maze: &Maze) -> Vec<Tank> {
    vec![
        spawn::spawn_tank(Player::One, 0.0, maze, rng),
        spawn::spawn_tank(Player::Two, PI, maze, rng),
    ]
}
