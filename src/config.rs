use can_x2_blink_core::{BlinkConfig, CAN_X2_BLINK, DispatchMethod};

pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

#[cfg(feature = "half-second")]
const PERIOD_US: u64 = 500_000;
#[cfg(not(feature = "half-second"))]
const PERIOD_US: u64 = CAN_X2_BLINK.period_us;

#[cfg(feature = "isr-dispatch")]
const DISPATCH: DispatchMethod = DispatchMethod::Isr;
#[cfg(not(feature = "isr-dispatch"))]
const DISPATCH: DispatchMethod = DispatchMethod::Task;

/// Status LED blinker of this build
pub const BLINK: BlinkConfig = CAN_X2_BLINK
    .with_period_us(PERIOD_US)
    .with_dispatch(DISPATCH);
