//! Infrastructure layer - Port implementations
//!
//! Concrete implementations of the blinker ports on top of `esp-hal`.

pub mod adapters;
pub mod drivers;
pub mod types;
