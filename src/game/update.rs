use raylib::prelude::RaylibHandle;

use crate::entities::{Op, Tank};
use crate::physics::quad_contains_point;

use super::input;
use super::tanks::{combat, motion};
use super::{Game, ScreenState};

impl Game {
    pub fn update(&mut self, rl: &RaylibHandle) {
        match self.state {
            ScreenState::Title => {
                if input::is_start_pressed(rl) {
                    self.reset_round();
                    self.state = ScreenState::Playing;
                }
            }
            ScreenState::Playing => self.tick(rl),
            ScreenState::RoundOver => {
                if input::is_start_pressed(rl) {
                    self.reset_round();
                    self.state = ScreenState::Playing;
                }
            }
        }
    }

    fn tick(&mut self, rl: &RaylibHandle) {
        let mut ops: Vec<Op> = Vec::new();
        for tank in &mut self.tanks {
            if !tank.alive {
                continue;
            }
            ops.clear();
            input::sample_ops(rl, tank.player, &mut ops);
            for &op in &ops {
                motion::apply_op(tank, op);
            }

            // The maze owns the overlap test scheduling; the tank owns the
            // resolution.
            let pivot = tank.pivot;
            if let Err(err) = self.maze.check_entity(pivot, tank) {
                log::warn!("{} tank stuck: {}", tank.player.name(), err);
            }
        }

        for tank in &mut self.tanks {
            combat::tick_bullets(&mut tank.bullets, &self.maze);
        }

        self.check_hits();
        self.settle_round();
    }

    fn check_hits(&mut self) {
        let (first, second) = self.tanks.split_at_mut(1);
        strike(&mut first[0], &mut second[0]);
        strike(&mut second[0], &mut first[0]);
    }

    fn settle_round(&mut self) {
        let survivors: Vec<_> = self
            .tanks
            .iter()
            .filter(|tank| tank.alive)
            .map(|tank| tank.player)
            .collect();
        if survivors.len() == self.tanks.len() {
            return;
        }

        self.state = ScreenState::RoundOver;
        self.last_winner = match survivors.as_slice() {
            [winner] => Some(*winner),
            _ => None,
        };
        match self.last_winner {
            Some(winner) => {
                self.wins[winner.index()] += 1;
                log::info!("{} wins the round", winner.name());
            }
            None => log::info!("round ends in mutual destruction"),
        }
    }
}

// Spends at most one of the shooter's bullets on the target.
fn strike(shooter: &mut Tank, target: &mut Tank) {
    if !target.alive {
        return;
    }
    let body = target.body;
    let head = target.head;
    let mut hit = false;
    shooter.bullets.bullets.retain(|bullet| {
        if !hit
            && (quad_contains_point(&body, bullet.pos) || quad_contains_point(&head, bullet.pos))
        {
            hit = true;
            return false;
        }
        true
    });
    if hit {
        target.alive = false;
    }
}
