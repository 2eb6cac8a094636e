//! Two-axis analog joystick with a push button.
//!
//! Each axis is a potentiometer wired to an ADC input; the button is a plain digital
//! input. Samples are the raw 12-bit conversion codes, no centring or scaling is applied.

pub mod error;

use embassy_rp::{
    adc::{self, Adc},
    gpio::{AnyPin, Input, Level},
};

pub use error::JoystickErrorKind;
use error::*;

type Result<T, E = JoystickErrorKind> = core::result::Result<T, E>;

/// One reading of both axes and the button, taken back to back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub struct JoystickSample {
    pub x: u16,
    pub y: u16,
    #[defmt(Debug2Format)]
    pub button: Level,
}

impl JoystickSample {
    /// Planar angle of the stick, see [`angle_degrees`].
    pub fn angle(&self) -> f64 {
        angle_degrees(self.x, self.y)
    }
}

/// Angle in degrees of the vector `(x, y)` from the positive X axis, in `(-180, 180]`.
///
/// Uses the two-argument arctangent so the quadrant survives and `x == 0` needs no
/// special case. `(0, 0)` gives 0.
pub fn angle_degrees(x: u16, y: u16) -> f64 {
    signed_angle_degrees(x as i32, y as i32)
}

/// Same as [`angle_degrees`] for signed inputs.
pub fn signed_angle_degrees(x: i32, y: i32) -> f64 {
    let angle_rad = libm::atan2(y as f64, x as f64);
    angle_rad * (180.0 / core::f64::consts::PI)
}

pub struct Joystick<'d> {
    adc: Adc<'d, adc::Async>,
    x_axis: adc::Channel<'d>,
    y_axis: adc::Channel<'d>,
    button: Input<'d, AnyPin>,
}

impl<'d> Joystick<'d> {
    pub fn new(
        adc: Adc<'d, adc::Async>,
        x_axis: adc::Channel<'d>,
        y_axis: adc::Channel<'d>,
        button: Input<'d, AnyPin>,
    ) -> Self {
        Self {
            adc,
            x_axis,
            y_axis,
            button,
        }
    }

    /// Converts X, then Y, then reads the button.
    pub async fn sample(&mut self) -> Result<JoystickSample> {
        let x = self
            .adc
            .read(&mut self.x_axis)
            .await
            .map_err(|inner| AxisConversionSnafu { axis: Axis::X, inner }.build())?;
        let y = self
            .adc
            .read(&mut self.y_axis)
            .await
            .map_err(|inner| AxisConversionSnafu { axis: Axis::Y, inner }.build())?;
        let button = self.button.get_level();

        Ok(JoystickSample { x, y, button })
    }
}
