//! Blink state and the timer callback driving the LED pin

use embedded_hal::digital::{OutputPin, PinState};

use crate::timer::TimerCallback;

/// Persistent on/off state of the blinking LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkState(bool);

impl BlinkState {
    pub const fn new(initial: bool) -> Self {
        Self(initial)
    }

    /// Current state
    pub const fn is_on(self) -> bool {
        self.0
    }

    /// Pin level matching the current state
    pub fn level(self) -> PinState {
        PinState::from(self.0)
    }

    /// Negates the state and returns the new pin level
    pub fn toggle(&mut self) -> PinState {
        self.0 = !self.0;
        self.level()
    }
}

/// Timer callback that owns the blink state and the output pin.
///
/// The pin is expected to already be driven to `state.level()` when the
/// blinker is created, so the state always mirrors the last written level.
pub struct LedBlinker<P> {
    pin: P,
    state: BlinkState,
}

impl<P> LedBlinker<P>
where
    P: OutputPin,
{
    pub fn new(pin: P, initial: bool) -> Self {
        Self {
            pin,
            state: BlinkState::new(initial),
        }
    }

    pub fn state(&self) -> BlinkState {
        self.state
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P> TimerCallback for LedBlinker<P>
where
    P: OutputPin,
{
    fn on_expiry(&mut self) {
        let level = self.state.toggle();
        // Nothing to report to from the dispatch context
        let _ = self.pin.set_state(level);
    }
}
