use snafu::prelude::Snafu;

#[derive(Debug, Snafu, defmt::Format)]
#[snafu(visibility(pub))]
pub enum ServoErrorKind {
    /// The system clock cannot be divided down to the requested tick rate by an
    /// integer divider in `1..=255`
    TimebaseDivider { clock_hz: u32, resolution_hz: u32 },
    /// The period does not fit the 16-bit PWM counter
    TimebasePeriod { period_ticks: u32 },
    /// The pulse width cannot be expressed as a compare value within one period
    CompareOutOfRange { pulse_width_us: i32, period_ticks: u32 },
}
