#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;
use stick_servo as _;

#[defmt_test::tests]
mod tests {
    use defmt::{assert, assert_eq, unwrap};
    use embassy_rp::peripherals::PWM_CH1;
    use fixed::{types::extra::U4, FixedU16};
    use stick_servo::servo::{ServoErrorKind, ServoOutput, ServoTimebase};

    const RP2040_CLK_SYS_HZ: u32 = 125_000_000;

    #[init]
    fn init() -> ServoOutput<'static, PWM_CH1> {
        let p = embassy_rp::init(Default::default());
        unwrap!(ServoOutput::new(p.PWM_CH1, p.PIN_18, ServoTimebase::default()))
    }

    #[test]
    fn default_timebase_is_1us_ticks_over_20ms() {
        let timebase = ServoTimebase::default();
        assert_eq!(timebase.resolution_hz, 1_000_000);
        assert_eq!(timebase.period_ticks, 20_000);

        let timing = unwrap!(timebase.resolve(RP2040_CLK_SYS_HZ).ok());
        assert!(timing.divider == FixedU16::<U4>::from_num(125));
        assert_eq!(timing.top, 19_999);
    }

    #[test]
    fn fractional_divider_is_rejected() {
        let err = ServoTimebase::default().resolve(133_333_333);
        assert!(matches!(err, Err(ServoErrorKind::TimebaseDivider { .. })));
    }

    #[test]
    fn oversized_divider_is_rejected() {
        let timebase = ServoTimebase {
            resolution_hz: 100_000,
            ..Default::default()
        };
        assert!(matches!(
            timebase.resolve(RP2040_CLK_SYS_HZ),
            Err(ServoErrorKind::TimebaseDivider { .. })
        ));
    }

    #[test]
    fn period_must_fit_counter() {
        for period_ticks in [0, 65_537, 1_000_000] {
            let timebase = ServoTimebase {
                period_ticks,
                ..Default::default()
            };
            assert!(matches!(
                timebase.resolve(RP2040_CLK_SYS_HZ),
                Err(ServoErrorKind::TimebasePeriod { .. })
            ));
        }

        let widest = ServoTimebase {
            period_ticks: 65_536,
            ..Default::default()
        };
        assert_eq!(unwrap!(widest.resolve(RP2040_CLK_SYS_HZ).ok()).top, u16::MAX);
    }

    #[test]
    fn compare_follows_pulse_width() {
        let timing = unwrap!(ServoTimebase::default().resolve(RP2040_CLK_SYS_HZ).ok());
        assert_eq!(unwrap!(timing.compare_for(0).ok()), 0);
        assert_eq!(unwrap!(timing.compare_for(1500).ok()), 1500);
        assert_eq!(unwrap!(timing.compare_for(3500).ok()), 3500);
        assert_eq!(unwrap!(timing.compare_for(19_999).ok()), 19_999);
        assert!(matches!(
            timing.compare_for(20_000),
            Err(ServoErrorKind::CompareOutOfRange { .. })
        ));
        assert!(matches!(
            timing.compare_for(-500),
            Err(ServoErrorKind::CompareOutOfRange { .. })
        ));
    }

    #[test]
    fn servo_starts_centred(servo: &mut ServoOutput<'static, PWM_CH1>) {
        assert_eq!(servo.compare(), 1500);
        assert_eq!(servo.timing().top, 19_999);
    }

    #[test]
    fn servo_accepts_unclamped_pulse(servo: &mut ServoOutput<'static, PWM_CH1>) {
        unwrap!(servo.set_pulse_width(3500).ok());
        assert_eq!(servo.compare(), 3500);
    }

    #[test]
    fn servo_keeps_previous_compare_on_negative_pulse(
        servo: &mut ServoOutput<'static, PWM_CH1>,
    ) {
        unwrap!(servo.set_pulse_width(2500).ok());
        assert!(servo.set_pulse_width(-500).is_err());
        assert_eq!(servo.compare(), 2500);
    }
}
