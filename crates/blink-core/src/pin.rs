//! Pin configuration model
//!
//! Mirrors the fields the ESP-IDF GPIO driver takes for a single pin and
//! validates them against the ESP32-S3 GPIO matrix before any hardware call.

use core::fmt;

use embedded_hal::digital::{OutputPin, PinState};

/// Highest GPIO number on the ESP32-S3
pub const MAX_GPIO: u8 = 48;

/// GPIOs wired to the in-package SPI flash and PSRAM
pub const FLASH_GPIOS: core::ops::RangeInclusive<u8> = 26..=32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptType {
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinConfigError {
    /// GPIO number does not exist on the chip
    InvalidPin(u8),
    /// GPIO is reserved for the SPI flash / PSRAM bus
    FlashPin(u8),
    /// Pull-up and pull-down requested at the same time
    ConflictingPulls(u8),
}

impl fmt::Display for PinConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPin(pin) => write!(f, "GPIO{pin} does not exist"),
            Self::FlashPin(pin) => write!(f, "GPIO{pin} is reserved for flash"),
            Self::ConflictingPulls(pin) => {
                write!(f, "GPIO{pin} cannot enable pull-up and pull-down together")
            }
        }
    }
}

/// Electrical configuration of a single GPIO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    pub pin: u8,
    pub mode: PinMode,
    pub pull_up: bool,
    pub pull_down: bool,
    pub interrupt: InterruptType,
}

impl PinConfig {
    /// Output with pull-up enabled, pull-down and interrupts disabled
    pub const fn led_output(pin: u8) -> Self {
        Self {
            pin,
            mode: PinMode::Output,
            pull_up: true,
            pull_down: false,
            interrupt: InterruptType::Disabled,
        }
    }

    /// Bit mask selecting this pin in the GPIO registers
    pub const fn pin_bit_mask(&self) -> u64 {
        match 1u64.checked_shl(self.pin as u32) {
            Some(mask) => mask,
            None => 0,
        }
    }

    pub fn validate(&self) -> Result<(), PinConfigError> {
        let pin = self.pin;
        if !gpio_exists(pin) {
            return Err(PinConfigError::InvalidPin(pin));
        }
        if self.pull_up && self.pull_down {
            return Err(PinConfigError::ConflictingPulls(pin));
        }
        if FLASH_GPIOS.contains(&pin) {
            return Err(PinConfigError::FlashPin(pin));
        }
        Ok(())
    }
}

const fn gpio_exists(pin: u8) -> bool {
    matches!(pin, 0..=21 | 26..=MAX_GPIO)
}

/// Platform service applying a [`PinConfig`] once.
///
/// Consumed on use: a pin is configured exactly once at startup.
pub trait PinConfigurator {
    type Pin: OutputPin;
    type Error: fmt::Debug;

    /// Applies `config` and drives the pin to `initial`
    fn configure(
        self,
        config: &PinConfig,
        initial: PinState,
    ) -> Result<Self::Pin, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_output_on_gpio2_is_valid() {
        assert_eq!(PinConfig::led_output(2).validate(), Ok(()));
        assert_eq!(PinConfig::led_output(2).pin_bit_mask(), 0b100);
    }

    #[test]
    fn missing_gpios_are_rejected() {
        for pin in [22, 23, 24, 25, 49, 255] {
            assert_eq!(
                PinConfig::led_output(pin).validate(),
                Err(PinConfigError::InvalidPin(pin))
            );
        }
    }

    #[test]
    fn flash_gpios_are_reserved() {
        for pin in 26..=32 {
            assert_eq!(
                PinConfig::led_output(pin).validate(),
                Err(PinConfigError::FlashPin(pin))
            );
        }
    }

    #[test]
    fn board_gpios_can_drive() {
        // CAN1 on IO6/IO7, MCP2515 SPI on IO10..=IO13, upper bank up to IO48
        for pin in [0, 2, 6, 7, 10, 11, 12, 13, 21, 33, 38, 47, 48] {
            assert_eq!(PinConfig::led_output(pin).validate(), Ok(()));
        }
    }

    #[test]
    fn both_pulls_conflict() {
        let config = PinConfig {
            pull_down: true,
            ..PinConfig::led_output(4)
        };
        assert_eq!(config.validate(), Err(PinConfigError::ConflictingPulls(4)));
    }
}
