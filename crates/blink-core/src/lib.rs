#![no_std]

//! Status LED blinker core
//!
//! Hardware-agnostic part of the ESP32-CAN-X2 blink firmware:
//! - `pin` - pin configuration model and the [`PinConfigurator`] port
//! - `timer` - periodic timer ports and the timer lifecycle
//! - `blinker` - blink state and the timer callback that drives the pin
//! - `startup` - the fixed startup sequence
//! - `config` - board constants
//!
//! The firmware crate implements the ports on top of `esp-hal`, the tests
//! implement them with in-memory fakes.

pub mod blinker;
pub mod config;
pub mod pin;
pub mod startup;
pub mod timer;

pub use blinker::{BlinkState, LedBlinker};
pub use config::{BlinkConfig, CAN_X2_BLINK};
pub use pin::{InterruptType, PinConfig, PinConfigError, PinConfigurator, PinMode};
pub use startup::{StartupError, start_blinker};
pub use timer::{
    DispatchMethod, PeriodicTimer, TimerArgs, TimerCallback, TimerService, TimerState,
    TimerStateError,
};
