use raylib::prelude::{KeyboardKey, RaylibHandle};

use crate::entities::{Op, Player};

// Arrow keys plus `.` to fire.
pub const PLAYER_ONE_BINDINGS: [(KeyboardKey, Op); 5] = [
    (KeyboardKey::KEY_UP, Op::Forward),
    (KeyboardKey::KEY_RIGHT, Op::Right),
    (KeyboardKey::KEY_DOWN, Op::Reverse),
    (KeyboardKey::KEY_LEFT, Op::Left),
    (KeyboardKey::KEY_PERIOD, Op::Fire),
];

// WASD plus `V` to fire.
pub const PLAYER_TWO_BINDINGS: [(KeyboardKey, Op); 5] = [
    (KeyboardKey::KEY_W, Op::Forward),
    (KeyboardKey::KEY_D, Op::Right),
    (KeyboardKey::KEY_S, Op::Reverse),
    (KeyboardKey::KEY_A, Op::Left),
    (KeyboardKey::KEY_V, Op::Fire),
];

pub fn bindings_for(player: Player) -> &'static [(KeyboardKey, Op)] {
    match player {
        Player::One => &PLAYER_ONE_BINDINGS,
        Player::Two => &PLAYER_TWO_BINDINGS,
    }
}

pub fn op_for_key(player: Player, key: KeyboardKey) -> Option<Op> {
    bindings_for(player)
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, op)| *op)
}

// Motion keys repeat while held; fire triggers on the press edge.
pub fn sample_ops(rl: &RaylibHandle, player: Player, ops: &mut Vec<Op>) {
    for (key, op) in bindings_for(player) {
        let active = match op {
            Op::Fire => rl.is_key_pressed(*key),
            _ => rl.is_key_down(*key),
        };
        if active {
            ops.push(*op);
        }
    }
}

pub fn is_start_pressed(rl: &RaylibHandle) -> bool {
    rl.is_key_pressed(KeyboardKey::KEY_ENTER) || rl.is_key_pressed(KeyboardKey::KEY_SPACE)
}
