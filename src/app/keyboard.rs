use ggez::input::keyboard::KeyCode;
use ggez::Context;

use crate::game::Input;

const PAUSE_KEY: KeyCode = KeyCode::P;
const RESTART_KEY: KeyCode = KeyCode::Return;

/// Snapshot of the keys the game cares about, arrows are read as held
/// keys while pause and restart only fire on the frame they go down
pub fn poll_input(ctx: &Context) -> Input {
    let keyboard = &ctx.keyboard;
    Input {
        pause: keyboard.is_key_just_pressed(PAUSE_KEY),
        restart: keyboard.is_key_just_pressed(RESTART_KEY),

        up: keyboard.is_key_pressed(KeyCode::Up),
        down: keyboard.is_key_pressed(KeyCode::Down),
        left: keyboard.is_key_pressed(KeyCode::Left),
        right: keyboard.is_key_pressed(KeyCode::Right),
    }
}
