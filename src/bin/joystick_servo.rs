//! Points a hobby servo in the direction of an analog joystick.
//!
//! The raw X/Y conversion codes are turned into an angle with `atan2`, and that angle is
//! mapped onto a 500-2500us pulse on a 20ms period. The raw codes are never centred, so
//! a resting stick sits near 45°. Angles beyond ±90° are passed to the servo unclamped.

#![no_std]
#![no_main]
#![feature(type_alias_impl_trait)]

use defmt::{println, *};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::{
    adc::{self, Adc},
    bind_interrupts,
    gpio::{Input, Pin, Pull},
    peripherals::PWM_CH1,
};
use embassy_time::{Duration, Timer};
use panic_probe as _;
use stick_servo::{
    gpio::level_bit,
    joystick::Joystick,
    servo::{angle_to_pulse_width_us, ServoOutput, ServoTimebase},
};

/// Wait between printing a sample and moving the servo
const REPORT_SETTLE_DURATION: Duration = Duration::from_millis(50);
/// Wait after moving the servo before the next sample
const SERVO_MOVE_DURATION: Duration = Duration::from_millis(100);

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Start");

    let joystick = Joystick::new(
        Adc::new(p.ADC, Irqs, adc::Config::default()),
        adc::Channel::new_pin(p.PIN_26, Pull::None),
        adc::Channel::new_pin(p.PIN_27, Pull::None),
        Input::new(p.PIN_22.degrade(), Pull::None),
    );

    let servo = unwrap!(ServoOutput::new(
        p.PWM_CH1,
        p.PIN_18,
        ServoTimebase::default()
    ));

    unwrap!(spawner.spawn(drive_servo_from_joystick(joystick, servo)));
}

#[embassy_executor::task]
async fn drive_servo_from_joystick(
    mut joystick: Joystick<'static>,
    mut servo: ServoOutput<'static, PWM_CH1>,
) -> ! {
    loop {
        let sample = match joystick.sample().await {
            Ok(sample) => sample,
            Err(e) => {
                warn!("Joystick sample failed: {}", e);
                Timer::after(REPORT_SETTLE_DURATION + SERVO_MOVE_DURATION).await;
                continue;
            }
        };
        let angle = sample.angle();

        println!(
            "X: {}, Y: {}, Button: {}",
            sample.x,
            sample.y,
            level_bit(sample.button)
        );

        Timer::after(REPORT_SETTLE_DURATION).await;

        info!("Angle of rotation: {}", angle);
        if let Err(e) = servo.set_pulse_width(angle_to_pulse_width_us(angle)) {
            warn!("Servo pulse rejected: {}", e);
        }

        Timer::after(SERVO_MOVE_DURATION).await;
    }
}
