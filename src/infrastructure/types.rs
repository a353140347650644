use esp_hal::gpio::Output;

use can_x2_blink_core::{LedBlinker, TimerStateError};

/// Blink callback driving an `esp-hal` output
pub type EspLedBlinker = LedBlinker<Output<'static>>;

#[derive(Debug)]
pub enum TimerError {
    /// Timer used out of its lifecycle order
    State(TimerStateError),
    /// Hardware timer rejected the period
    Hardware(esp_hal::timer::Error),
    /// Timer task pool is exhausted
    Spawn,
}

impl From<TimerStateError> for TimerError {
    fn from(err: TimerStateError) -> Self {
        Self::State(err)
    }
}
