use crate::pin::PinConfig;
use crate::timer::{DispatchMethod, TimerArgs};

/// Blinker configuration, fixed at compile time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkConfig {
    /// LED pin and its electrical settings
    pub pin: PinConfig,
    /// Time between two toggles, in microseconds
    pub period_us: u64,
    /// Blink state before the first expiry, the pin starts at this level
    pub initial_state: bool,
    /// Name and dispatch context of the blink timer
    pub timer: TimerArgs,
    /// Log target of the startup messages
    pub log_tag: &'static str,
}

impl BlinkConfig {
    /// Same config with another toggle period
    pub const fn with_period_us(self, period_us: u64) -> Self {
        Self { period_us, ..self }
    }

    /// Same config delivering expiries on another context
    pub const fn with_dispatch(self, dispatch: DispatchMethod) -> Self {
        Self {
            timer: TimerArgs {
                dispatch,
                ..self.timer
            },
            ..self
        }
    }
}

/// ESP32-CAN-X2 (ESP32-S3) status LED on IO2, toggled once a second
pub const CAN_X2_BLINK: BlinkConfig = BlinkConfig {
    pin: PinConfig::led_output(2),
    period_us: 1_000_000,
    initial_state: true,
    timer: TimerArgs {
        name: "LED Timer",
        dispatch: DispatchMethod::Task,
    },
    log_tag: "ESP32-CAN-X2",
};
