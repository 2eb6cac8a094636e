use fixed::{types::extra::U4, FixedU16};
use snafu::prelude::*;

use super::error::*;

type Result<T, E = ServoErrorKind> = core::result::Result<T, E>;

/// 1MHz, 1us per tick
pub const SERVO_TIMEBASE_RESOLUTION_HZ: u32 = 1_000_000;
/// 20000 ticks, 20ms
pub const SERVO_TIMEBASE_PERIOD: u32 = 20_000;

const MAX_DIVIDER: u32 = 255;
const MAX_PERIOD_TICKS: u32 = u16::MAX as u32 + 1;

/// Tick rate and period of the counter driving the servo output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub struct ServoTimebase {
    pub resolution_hz: u32,
    pub period_ticks: u32,
}

/// Register-level values for a PWM slice realising a [`ServoTimebase`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PwmTiming {
    pub divider: FixedU16<U4>,
    /// Counter wraps after reaching `top`, so one period is `top + 1` ticks
    pub top: u16,
    pub period_ticks: u32,
    pub resolution_hz: u32,
}

impl Default for ServoTimebase {
    fn default() -> Self {
        Self {
            resolution_hz: SERVO_TIMEBASE_RESOLUTION_HZ,
            period_ticks: SERVO_TIMEBASE_PERIOD,
        }
    }
}

impl ServoTimebase {
    /// Computes the slice divider and counter top that produce this timebase from a
    /// system clock running at `clock_hz`.
    pub fn resolve(&self, clock_hz: u32) -> Result<PwmTiming> {
        let divider_fault = TimebaseDividerSnafu {
            clock_hz,
            resolution_hz: self.resolution_hz,
        };
        ensure!(
            self.resolution_hz != 0 && clock_hz % self.resolution_hz == 0,
            divider_fault
        );

        let divider = clock_hz / self.resolution_hz;
        ensure!((1..=MAX_DIVIDER).contains(&divider), divider_fault);
        let divider = FixedU16::<U4>::checked_from_num(divider).context(divider_fault)?;

        ensure!(
            (1..=MAX_PERIOD_TICKS).contains(&self.period_ticks),
            TimebasePeriodSnafu {
                period_ticks: self.period_ticks
            }
        );

        Ok(PwmTiming {
            divider,
            top: (self.period_ticks - 1) as u16,
            period_ticks: self.period_ticks,
            resolution_hz: self.resolution_hz,
        })
    }
}

impl PwmTiming {
    /// Converts a pulse width into a compare value, rejecting widths that the counter
    /// can't represent within a single period.
    pub fn compare_for(&self, pulse_width_us: i32) -> Result<u16> {
        let out_of_range = CompareOutOfRangeSnafu {
            pulse_width_us,
            period_ticks: self.period_ticks,
        };
        ensure!(pulse_width_us >= 0, out_of_range);

        let ticks = pulse_width_us as u64 * self.resolution_hz as u64 / 1_000_000;
        ensure!(ticks < self.period_ticks as u64, out_of_range);

        Ok(ticks as u16)
    }
}
