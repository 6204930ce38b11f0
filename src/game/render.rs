use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle, Vector2};

use crate::config::{BULLET_RADIUS, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::entities::Player;
use crate::physics::Quad;

use super::constants::{HEAD_SHADE, HUD_BAR_HEIGHT};
use super::{Game, ScreenState};

impl Game {
    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::new(24, 26, 30, 255));
        match self.state {
            ScreenState::Title => self.draw_title(d),
            ScreenState::Playing | ScreenState::RoundOver => {
                self.draw_arena(d);
                self.draw_hud(d);
                if self.state == ScreenState::RoundOver {
                    self.draw_round_over(d);
                }
            }
        }
    }

    fn draw_arena(&self, d: &mut RaylibDrawHandle) {
        d.draw_rectangle_rec(self.maze.bounds(), Color::new(46, 50, 56, 255));
        for wall in self.maze.walls() {
            d.draw_rectangle_rec(*wall, Color::new(148, 134, 106, 255));
        }

        // Head above body, bullets above both.
        for tank in &self.tanks {
            if !tank.alive {
                continue;
            }
            draw_quad(d, &tank.body, tank.player.color());
            draw_quad(d, &tank.head, shade(tank.player.color(), HEAD_SHADE));
        }
        for tank in &self.tanks {
            for bullet in &tank.bullets.bullets {
                d.draw_circle_v(bullet.pos, BULLET_RADIUS, Color::new(236, 228, 200, 255));
            }
        }
    }

    fn draw_hud(&self, d: &mut RaylibDrawHandle) {
        d.draw_rectangle(0, 0, WINDOW_WIDTH, HUD_BAR_HEIGHT, Color::new(16, 18, 22, 210));
        let left = format!("{}: {}", Player::One.name(), self.wins[0]);
        let right = format!("{}: {}", Player::Two.name(), self.wins[1]);
        d.draw_text(&left, 16, 8, 20, Player::One.color());
        let right_width = d.measure_text(&right, 20);
        d.draw_text(
            &right,
            WINDOW_WIDTH - right_width - 16,
            8,
            20,
            Player::Two.color(),
        );
    }

    fn draw_title(&self, d: &mut RaylibDrawHandle) {
        let title = "TANK DUEL";
        let title_size = 56;
        let title_width = d.measure_text(title, title_size);
        d.draw_text(
            title,
            (WINDOW_WIDTH - title_width) / 2,
            90,
            title_size,
            Color::new(240, 240, 240, 255),
        );

        let lines = [
            ("Olive: arrow keys to drive, . to fire", Player::One.color()),
            ("Cobalt: WASD to drive, V to fire", Player::Two.color()),
            (
                "Last tank rolling wins the round",
                Color::new(220, 220, 220, 255),
            ),
        ];
        let mut y = 200;
        for (line, color) in lines {
            let size = 22;
            let width = d.measure_text(line, size);
            d.draw_text(line, (WINDOW_WIDTH - width) / 2, y, size, color);
            y += 40;
        }

        let prompt = "Press ENTER to start";
        let prompt_size = 28;
        let prompt_width = d.measure_text(prompt, prompt_size);
        d.draw_text(
            prompt,
            (WINDOW_WIDTH - prompt_width) / 2,
            y + 40,
            prompt_size,
            Color::new(240, 200, 110, 255),
        );
    }

    fn draw_round_over(&self, d: &mut RaylibDrawHandle) {
        d.draw_rectangle(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, Color::new(10, 10, 10, 160));
        let message = match self.last_winner {
            Some(player) => format!("{} wins the round!", player.name()),
            None => "Mutual destruction!".to_string(),
        };
        let size = 46;
        let width = d.measure_text(&message, size);
        d.draw_text(
            &message,
            (WINDOW_WIDTH - width) / 2,
            WINDOW_HEIGHT / 2 - 40,
            size,
            Color::new(240, 240, 240, 255),
        );
        let prompt = "Press ENTER for a new maze";
        let prompt_size = 24;
        let prompt_width = d.measure_text(prompt, prompt_size);
        d.draw_text(
            prompt,
            (WINDOW_WIDTH - prompt_width) / 2,
            WINDOW_HEIGHT / 2 + 20,
            prompt_size,
            Color::new(220, 200, 120, 255),
        );
    }
}

fn draw_quad(d: &mut RaylibDrawHandle, quad: &Quad, color: Color) {
    // Triangle fans want counter-clockwise screen order; the quad stores
    // its corners clockwise.
    let c = quad.corners();
    let fan: [Vector2; 4] = [c[0], c[3], c[2], c[1]];
    d.draw_triangle_fan(&fan, color);
}

fn shade(color: Color, factor: f32) -> Color {
    Color::new(
        (color.r as f32 * factor) as u8,
        (color.g as f32 * factor) as u8,
        (color.b as f32 * factor) as u8,
        color.a,
    )
}
