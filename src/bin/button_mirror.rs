//! Mirrors a push button onto the on-board LED, inverted: LED on while the button input
//! reads low, off while it reads high.
//!
//! The button pin has no internal pull enabled, so it must be driven externally. A
//! disconnected pin floats and the LED will flicker with it.

#![no_std]
#![no_main]
#![feature(type_alias_impl_trait)]

use defmt::*;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{AnyPin, Input, Output, Pin};
use embassy_time::Timer;
use panic_probe as _;
use stick_servo::gpio::{level_bit, InputMirror, MirrorConfig};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Hello from the button mirror!");

    let config = MirrorConfig::default();
    let mirror = InputMirror::default();

    let led = Output::new(p.PIN_25.degrade(), mirror.initial_output());
    let button = Input::new(p.PIN_15.degrade(), config.pull);

    unwrap!(spawner.spawn(mirror_button(button, led, mirror, config)));
}

#[embassy_executor::task]
async fn mirror_button(
    button: Input<'static, AnyPin>,
    mut led: Output<'static, AnyPin>,
    mut mirror: InputMirror,
    config: MirrorConfig,
) -> ! {
    loop {
        if let Some(led_level) = mirror.observe(button.get_level()) {
            led.set_level(led_level);
            info!("Button input is {}", level_bit(mirror.last_state()));
        }

        Timer::after(config.poll_period).await;
    }
}
