mod led_pin;

pub use led_pin::{EspPinConfigurator, LedPinError};
