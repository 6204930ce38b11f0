mod constants;
pub mod input;
mod render;
pub mod tanks;
mod update;

use rand::{rngs::SmallRng, SeedableRng};

use crate::entities::{Player, Tank};
use crate::maze::Maze;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScreenState {
    Title,
    Playing,
    RoundOver,
}

pub struct Game {
    state: ScreenState,
    maze: Maze,
    tanks: Vec<Tank>,
    rng: SmallRng,
    wins: [u32; 2],
    last_winner: Option<Player>,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let maze = Maze::generate(&mut rng);
        let tanks = tanks::spawn_all(&mut rng, &maze);
        Self {
            state: ScreenState::Title,
            maze,
            tanks,
            rng,
            wins: [0, 0],
            last_winner: None,
        }
    }

    fn reset_round(&mut self) {
        self.maze = Maze::generate(&mut self.rng);
        self.tanks = tanks::spawn_all(&mut self.rng, &self.maze);
        self.last_winner = None;
    }
}
