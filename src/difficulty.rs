use std::time::Duration;

use crate::config::Tuning;
use crate::snake::Direction;

/// Frame interval of a running game. Only ever gets shorter.
#[derive(Clone, Debug, PartialEq)]
pub struct Delay {
    current: Duration,
    step: Duration,
    min: Duration,
    horizontal_factor: f64,
}

impl Delay {
    pub fn new(tuning: &Tuning) -> Self {
        Delay {
            current: tuning.initial_delay.max(tuning.min_delay),
            step: tuning.delay_step,
            min: tuning.min_delay,
            horizontal_factor: tuning.horizontal_factor,
        }
    }

    pub fn current(&self) -> Duration {
        self.current
    }

    /// Called once per eaten food
    pub fn speed_up(&mut self) {
        self.current = self.current.checked_sub(self.step).unwrap_or_default().max(self.min);
    }

    /// How long to sleep after a frame spent moving in `direction`
    pub fn frame_sleep(&self, direction: Direction) -> Duration {
        if direction.is_horizontal() {
            self.current.mul_f64(self.horizontal_factor)
        } else {
            self.current
        }
    }
}
