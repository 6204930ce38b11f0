use std::time::{SystemTime, UNIX_EPOCH};

use tank_duel::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use tank_duel::game::Game;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let debug_frame = args.iter().any(|arg| arg == "--render-frame");
    let seed = parse_seed(&args).unwrap_or_else(system_seed);
    log::info!("starting with seed {seed}");

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Tank Duel")
        .build();
    rl.set_target_fps(60);

    let mut game = Game::new(seed);

    if debug_frame {
        game.update(&rl);
        {
            let mut d = rl.begin_drawing(&thread);
            game.draw(&mut d);
        }
        rl.take_screenshot(&thread, "debug_frame.png");
        return;
    }

    while !rl.window_should_close() {
        game.update(&rl);
        let mut d = rl.begin_drawing(&thread);
        game.draw(&mut d);
    }
}

fn parse_seed(args: &[String]) -> Option<u64> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--seed" {
            if let Some(value) = iter.next() {
                if let Ok(parsed) = value.parse::<u64>() {
                    return Some(parsed);
                }
            }
        }
    }
    None
}

fn system_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
