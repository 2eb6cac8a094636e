pub mod error;
pub mod output;
pub mod timebase;

pub use error::ServoErrorKind;
pub use output::ServoOutput;
pub use timebase::{PwmTiming, ServoTimebase};

/// Pulse width commanded at `SERVO_MIN_DEGREE`
pub const SERVO_MIN_PULSE_WIDTH_US: i32 = 500;
/// Pulse width commanded at `SERVO_MAX_DEGREE`
pub const SERVO_MAX_PULSE_WIDTH_US: i32 = 2500;
pub const SERVO_MIN_DEGREE: i32 = -90;
pub const SERVO_MAX_DEGREE: i32 = 90;

/// Maps an angle in degrees onto a servo pulse width in microseconds.
///
/// The angle is truncated toward zero to whole degrees, then interpolated linearly so
/// that `SERVO_MIN_DEGREE` gives `SERVO_MIN_PULSE_WIDTH_US` and `SERVO_MAX_DEGREE` gives
/// `SERVO_MAX_PULSE_WIDTH_US`.
///
/// The result is NOT clamped. Angles outside ±90° extrapolate past the servo's pulse
/// range (180° gives 3500µs, -180° gives -500µs). Joystick angles come from a full
/// `atan2` and routinely land there.
///
/// `angle` must stay within ±1_000_000° for the arithmetic to fit in an `i32`.
pub fn angle_to_pulse_width_us(angle: f64) -> i32 {
    let whole_degrees = angle as i32;

    (whole_degrees - SERVO_MIN_DEGREE) * (SERVO_MAX_PULSE_WIDTH_US - SERVO_MIN_PULSE_WIDTH_US)
        / (SERVO_MAX_DEGREE - SERVO_MIN_DEGREE)
        + SERVO_MIN_PULSE_WIDTH_US
}
