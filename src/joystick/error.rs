use snafu::prelude::Snafu;

#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Snafu, defmt::Format)]
#[snafu(visibility(pub))]
pub enum JoystickErrorKind {
    AxisConversion {
        axis: Axis,
        inner: embassy_rp::adc::Error,
    },
}
