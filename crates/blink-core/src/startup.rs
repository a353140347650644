//! Startup sequence
//!
//! Logs, configures the LED pin, then creates and starts the blink timer.
//! Each step only runs if the previous one succeeded, so a timer is never
//! created for a pin that failed to configure. Aborting on error is left to
//! the caller.

use core::fmt;

use crate::blinker::{BlinkState, LedBlinker};
use crate::config::BlinkConfig;
use crate::pin::{PinConfigError, PinConfigurator};
use crate::timer::{PeriodicTimer, TimerService};

#[derive(Debug, PartialEq, Eq)]
pub enum StartupError<PE, TE> {
    /// Pin configuration rejected before touching the hardware
    InvalidPin(PinConfigError),
    /// Platform failed to configure the pin
    Pin(PE),
    /// Platform failed to create the timer
    TimerCreate(TE),
    /// Platform failed to start the timer
    TimerStart(TE),
}

impl<PE: fmt::Debug, TE: fmt::Debug> fmt::Display for StartupError<PE, TE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPin(err) => write!(f, "invalid pin config: {err}"),
            Self::Pin(err) => write!(f, "pin config failed: {err:?}"),
            Self::TimerCreate(err) => write!(f, "timer create failed: {err:?}"),
            Self::TimerStart(err) => write!(f, "timer start failed: {err:?}"),
        }
    }
}

/// Runs the startup sequence and returns the running timer.
///
/// The dispatch context owns the running timer, dropping the returned handle
/// does not stop the blinking.
pub fn start_blinker<C, T>(
    config: &BlinkConfig,
    configurator: C,
    timers: &mut T,
) -> Result<T::Timer, StartupError<C::Error, T::Error>>
where
    C: PinConfigurator,
    T: TimerService<LedBlinker<C::Pin>>,
{
    let tag = config.log_tag;
    log::info!(target: tag, "Start");

    config.pin.validate().map_err(StartupError::InvalidPin)?;
    let initial = BlinkState::new(config.initial_state);
    let pin = configurator
        .configure(&config.pin, initial.level())
        .map_err(StartupError::Pin)?;
    log::debug!(
        target: tag,
        "GPIO{} configured, mask {:#x}",
        config.pin.pin,
        config.pin.pin_bit_mask()
    );

    let blinker = LedBlinker::new(pin, config.initial_state);
    let mut timer = timers
        .create(&config.timer, blinker)
        .map_err(StartupError::TimerCreate)?;
    timer
        .start_periodic(config.period_us)
        .map_err(StartupError::TimerStart)?;

    log::info!(
        target: tag,
        "{} running every {} us ({:?} dispatch)",
        config.timer.name,
        config.period_us,
        config.timer.dispatch
    );

    Ok(timer)
}
