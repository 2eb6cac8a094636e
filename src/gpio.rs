use embassy_rp::gpio::{Level, Pull};
use embassy_time::Duration;

const MIRROR_POLL_PERIOD: Duration = Duration::from_millis(10);

/// Numeric form of a level, as it appears in log lines.
pub fn level_bit(level: Level) -> u8 {
    match level {
        Level::Low => 0,
        Level::High => 1,
    }
}

pub fn inverted(level: Level) -> Level {
    match level {
        Level::Low => Level::High,
        Level::High => Level::Low,
    }
}

pub struct MirrorConfig {
    /// Time slept between two reads of the input. Also the only debounce window.
    pub poll_period: Duration,
    /// Pull applied to the input pin. `Pull::None` leaves a disconnected pin floating.
    pub pull: Pull,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            poll_period: MIRROR_POLL_PERIOD,
            pull: Pull::None,
        }
    }
}

/// Drives an output to the inverse of an input, reacting only to changes of the input.
pub struct InputMirror {
    last_state: Level,
}

impl InputMirror {
    pub const fn new(initial: Level) -> Self {
        Self {
            last_state: initial,
        }
    }

    /// Level the output should be configured with before the first read.
    pub fn initial_output(&self) -> Level {
        inverted(self.last_state)
    }

    pub fn last_state(&self) -> Level {
        self.last_state
    }

    /// Records a read of the input. Returns the level to write to the output when the
    /// read differs from the previous one, or `None` when the input is steady.
    pub fn observe(&mut self, current: Level) -> Option<Level> {
        if current == self.last_state {
            return None;
        }

        self.last_state = current;
        Some(inverted(current))
    }
}

impl Default for InputMirror {
    fn default() -> Self {
        Self::new(Level::Low)
    }
}
