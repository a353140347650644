use embedded_hal::digital::PinState;
use esp_hal::gpio::{DriveMode, Level, Output, OutputConfig, OutputPin, Pull};

use can_x2_blink_core::{InterruptType, PinConfig, PinConfigurator, PinMode};

#[derive(Debug)]
pub enum LedPinError {
    /// Configuration targets a different GPIO than the one provided
    PinMismatch { expected: u8, actual: u8 },
}

/// Configures a single GPIO as the LED output
pub struct EspPinConfigurator<P> {
    gpio: P,
}

impl<P> EspPinConfigurator<P>
where
    P: OutputPin + 'static,
{
    pub fn new(gpio: P) -> Self {
        Self { gpio }
    }
}

impl<P> PinConfigurator for EspPinConfigurator<P>
where
    P: OutputPin + 'static,
{
    type Pin = Output<'static>;
    type Error = LedPinError;

    fn configure(
        self,
        config: &PinConfig,
        initial: PinState,
    ) -> Result<Output<'static>, LedPinError> {
        let actual = self.gpio.number();
        if actual != config.pin {
            return Err(LedPinError::PinMismatch {
                expected: config.pin,
                actual,
            });
        }

        // Output never listens, so the interrupt stays disabled
        let PinMode::Output = config.mode;
        let InterruptType::Disabled = config.interrupt;

        let pull = if config.pull_up {
            Pull::Up
        } else if config.pull_down {
            Pull::Down
        } else {
            Pull::None
        };
        let output_config = OutputConfig::default()
            .with_drive_mode(DriveMode::PushPull)
            .with_pull(pull);

        let level = Level::from(initial == PinState::High);
        Ok(Output::new(self.gpio, level, output_config))
    }
}
