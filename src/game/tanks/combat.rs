use crate::config::{
    BULLET_LIFE_TICKS, BULLET_RADIUS, BULLET_SPEED, FIRE_COOLDOWN_TICKS, MAX_ACTIVE_BULLETS,
};
use crate::entities::{Bullet, BulletManager, Tank};
use crate::math::{decompose_vector, point_rect_distance, vec2_add};
use crate::maze::Maze;
use raylib::prelude::Vector2;

// Launches from the head's muzzle along the current heading, subject to the
// pool cap and the cooldown.
pub fn fire(tank: &mut Tank) {
    if tank.bullets.cooldown > 0 || tank.bullets.bullets.len() >= MAX_ACTIVE_BULLETS {
        return;
    }
    tank.bullets.bullets.push(Bullet {
        pos: tank.head.mid_right(),
        vel: decompose_vector(BULLET_SPEED, tank.theta),
        life: BULLET_LIFE_TICKS,
    });
    tank.bullets.cooldown = FIRE_COOLDOWN_TICKS;
}

// Bullets die at end of life or on wall contact.
pub fn tick_bullets(manager: &mut BulletManager, maze: &Maze) {
    if manager.cooldown > 0 {
        manager.cooldown -= 1;
    }
    manager.bullets.retain_mut(|bullet| {
        if bullet.life == 0 {
            return false;
        }
        bullet.life -= 1;
        bullet.pos = vec2_add(bullet.pos, bullet.vel);
        !hits_wall(bullet.pos, maze)
    });
}

fn hits_wall(pos: Vector2, maze: &Maze) -> bool {
    maze.walls()
        .iter()
        .any(|wall| point_rect_distance(pos, *wall) < BULLET_RADIUS)
}
