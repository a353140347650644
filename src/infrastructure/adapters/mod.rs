mod blink_task;
mod blink_timer;

pub use blink_task::{TaskPeriodicTimer, TaskTimerService};
pub use blink_timer::{IsrPeriodicTimer, IsrTimerService};
