use anyhow::Result;

use crate::snake::Direction::{self, *};
use crate::term::{KeyPress, Terminal};

/// What the player asked for during one frame
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Steer(Direction),
    Quit,
}

pub fn map_key(ch: char) -> Option<Direction> {
    match ch.to_ascii_lowercase() {
        'w' => Some(Up),
        's' => Some(Down),
        'a' => Some(Left),
        'd' => Some(Right),
        _ => None,
    }
}

/// Polls at most one key. The result is `current` unless a movement key was
/// pressed that does not turn the snake back onto itself.
pub fn read_direction<T: Terminal + ?Sized>(term: &mut T, current: Direction) -> Result<Control> {
    let dir = match term.poll_key()? {
        Some(KeyPress::Interrupt) => return Ok(Control::Quit),
        Some(KeyPress::Char(ch)) => map_key(ch)
            .filter(|&dir| dir != current.opposite())
            .unwrap_or(current),
        Some(KeyPress::Other) | None => current,
    };

    Ok(Control::Steer(dir))
}
