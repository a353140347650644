//! Periodic timer ports
//!
//! A timer is created from [`TimerArgs`] and a [`TimerCallback`], then
//! started once with a fixed period. There is no stop transition.

use core::fmt;

/// Execution context the platform delivers timer callbacks on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMethod {
    /// Dedicated timer task
    Task,
    /// Directly from the timer interrupt
    Isr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerArgs {
    pub name: &'static str,
    pub dispatch: DispatchMethod,
}

/// Work done on every timer expiry.
///
/// Runs on the dispatch context, must not block.
pub trait TimerCallback {
    fn on_expiry(&mut self);
}

/// Platform timer service
pub trait TimerService<C: TimerCallback> {
    type Timer: PeriodicTimer<Error = Self::Error>;
    type Error: fmt::Debug;

    /// Registers `callback` and returns a timer in the created state
    fn create(&mut self, args: &TimerArgs, callback: C) -> Result<Self::Timer, Self::Error>;
}

/// Handle of a created timer
pub trait PeriodicTimer {
    type Error: fmt::Debug;

    /// Starts firing every `period_us` microseconds until the process ends
    fn start_periodic(&mut self, period_us: u64) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    #[default]
    Uninitialized,
    Created,
    Running {
        period_us: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStateError {
    /// Timer has not been created yet
    NotCreated,
    /// Timer has already been created
    AlreadyCreated,
    /// Timer is already running, the period cannot change
    AlreadyRunning,
    /// Period of zero microseconds
    ZeroPeriod,
}

impl fmt::Display for TimerStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotCreated => write!(f, "timer is not created"),
            Self::AlreadyCreated => write!(f, "timer is already created"),
            Self::AlreadyRunning => write!(f, "timer is already running"),
            Self::ZeroPeriod => write!(f, "timer period must be non-zero"),
        }
    }
}

impl TimerState {
    /// `Uninitialized -> Created`
    pub fn create(&mut self) -> Result<(), TimerStateError> {
        match self {
            Self::Uninitialized => {
                *self = Self::Created;
                Ok(())
            }
            Self::Created | Self::Running { .. } => Err(TimerStateError::AlreadyCreated),
        }
    }

    /// `Created -> Running`
    pub fn start(&mut self, period_us: u64) -> Result<(), TimerStateError> {
        match self {
            Self::Uninitialized => Err(TimerStateError::NotCreated),
            Self::Running { .. } => Err(TimerStateError::AlreadyRunning),
            Self::Created if period_us == 0 => Err(TimerStateError::ZeroPeriod),
            Self::Created => {
                *self = Self::Running { period_us };
                Ok(())
            }
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }
}
