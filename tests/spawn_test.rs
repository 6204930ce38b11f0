use std::f32::consts::PI;

use approx::assert_abs_diff_eq;
use rand::{rngs::SmallRng, SeedableRng};

use tank_duel::config::{CELL_LENGTH, WALL_THICKNESS};
use tank_duel::entities::Player;
use tank_duel::game::tanks::{spawn, spawn_all};
use tank_duel::math::decompose_vector;
use tank_duel::maze::Maze;

#[test]
fn pivot_lands_at_the_center_of_exactly_one_cell() {
    for seed in 0..40 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let maze = Maze::generate(&mut rng);
        let tanks = spawn_all(&mut rng, &maze);

        let bounds = maze.bounds();
        let interior = CELL_LENGTH - WALL_THICKNESS;
        for tank in &tanks {
            assert!(tank.pivot.x > bounds.x && tank.pivot.x < bounds.x + bounds.width);
            assert!(tank.pivot.y > bounds.y && tank.pivot.y < bounds.y + bounds.height);

            let col = ((tank.pivot.x - WALL_THICKNESS) / CELL_LENGTH).floor();
            let row = ((tank.pivot.y - WALL_THICKNESS) / CELL_LENGTH).floor();
            assert!(col >= 0.0 && (col as usize) < maze.columns, "seed {seed}");
            assert!(row >= 0.0 && (row as usize) < maze.rows, "seed {seed}");

            let rel_x = tank.pivot.x - (col * CELL_LENGTH + WALL_THICKNESS);
            let rel_y = tank.pivot.y - (row * CELL_LENGTH + WALL_THICKNESS);
            assert!(rel_x > 0.0 && rel_x < interior);
            assert!(rel_y > 0.0 && rel_y < interior);
            assert_abs_diff_eq!(rel_x, interior / 2.0, epsilon = 1e-3);
            assert_abs_diff_eq!(rel_y, interior / 2.0, epsilon = 1e-3);
        }
    }
}

#[test]
fn spawned_tanks_do_not_overlap_any_wall() {
    for seed in 0..40 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let maze = Maze::generate(&mut rng);
        let tanks = spawn_all(&mut rng, &maze);
        for tank in &tanks {
            for wall in maze.walls() {
                assert!(!tank.intersects(*wall), "seed {seed}");
            }
        }
    }
}

#[test]
fn initial_headings_point_the_duelists_apart() {
    let mut rng = SmallRng::seed_from_u64(5);
    let maze = Maze::generate(&mut rng);
    let tanks = spawn_all(&mut rng, &maze);

    assert_eq!(tanks[0].player, Player::One);
    assert_abs_diff_eq!(tanks[0].theta, 0.0);
    assert_eq!(tanks[1].player, Player::Two);
    assert_abs_diff_eq!(tanks[1].theta, PI);
}

#[test]
fn head_offset_respects_the_initial_heading() {
    let tank = spawn::new_tank(Player::Two, PI);
    // Half the head protrudes, so its center sits on the body's front edge,
    // one body-half ahead of the pivot.
    let offset = decompose_vector(20.0, PI);
    assert_abs_diff_eq!(tank.head.center().x, tank.pivot.x + offset.x, epsilon = 1e-3);
    assert_abs_diff_eq!(tank.head.center().y, tank.pivot.y + offset.y, epsilon = 1e-3);
}
