use defmt::info;
use embassy_rp::{
    clocks,
    pwm::{self, PwmPinA, Config, Pwm},
    Peripheral,
};

use super::{angle_to_pulse_width_us, error::*, timebase::*};

type Result<T, E = ServoErrorKind> = core::result::Result<T, E>;

/// A servo signal generated on channel A of a PWM slice.
///
/// The counter counts up from zero at the timebase's tick rate. The output goes high when
/// the counter wraps and low once it reaches the compare value, so the compare value is
/// the pulse width in ticks.
pub struct ServoOutput<'d, T: pwm::Channel> {
    pwm: Pwm<'d, T>,
    config: Config,
    timing: PwmTiming,
}

impl<'d, T: pwm::Channel> ServoOutput<'d, T> {
    /// Configures the slice for `timebase`, starts it with the servo centred, and routes
    /// it to `pin`. Fails when the system clock can't produce the timebase.
    pub fn new(
        slice: impl Peripheral<P = T> + 'd,
        pin: impl Peripheral<P = impl PwmPinA<T>> + 'd,
        timebase: ServoTimebase,
    ) -> Result<Self> {
        info!("Create timebase {}", timebase);
        let timing = timebase.resolve(clocks::clk_sys_freq())?;

        info!("Set initial compare value to center the servo");
        let compare_a = timing.compare_for(angle_to_pulse_width_us(0.0))?;

        let config = {
            let mut c = Config::default();
            c.divider = timing.divider;
            c.top = timing.top;
            c.compare_a = compare_a;
            c.phase_correct = false;
            c.invert_a = false;
            c.enable = true;
            c
        };

        info!("Connect slice to servo pin and start");
        let pwm = Pwm::new_output_a(slice, pin, config.clone());

        Ok(Self {
            pwm,
            config,
            timing,
        })
    }

    pub fn timing(&self) -> &PwmTiming {
        &self.timing
    }

    /// Compare value currently programmed into the slice
    pub fn compare(&self) -> u16 {
        self.config.compare_a
    }

    /// Sets the high time of each period. Takes effect at the next counter wrap.
    ///
    /// Widths beyond the servo's nominal range are written as-is. Only widths that
    /// can't be expressed within a single period are rejected, leaving the previous
    /// compare value in place.
    pub fn set_pulse_width(&mut self, pulse_width_us: i32) -> Result<()> {
        self.config.compare_a = self.timing.compare_for(pulse_width_us)?;
        self.pwm.set_config(&self.config);
        Ok(())
    }
}
