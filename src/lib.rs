#![no_std]

pub mod gpio;
pub mod joystick;
pub mod servo;
