//! In-memory platform used by the integration tests.
//!
//! Every platform call, pin write and log record is appended to a
//! thread-local journal so tests can assert on ordering.

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::fmt::Write as _;
use std::sync::Once;

use can_x2_blink_core::{
    PeriodicTimer, PinConfig, PinConfigurator, TimerArgs, TimerCallback, TimerService,
    TimerState,
};
use embedded_hal::digital::{ErrorType, OutputPin, PinState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Log { target: String, message: String },
    PinConfigured { pin: u8, initial: PinState },
    PinWrite(PinState),
    TimerCreated { name: &'static str },
    TimerStarted { period_us: u64 },
}

thread_local! {
    static JOURNAL: RefCell<Vec<Event>> = const { RefCell::new(Vec::new()) };
}

pub fn record(event: Event) {
    JOURNAL.with(|journal| journal.borrow_mut().push(event));
}

/// Installs the journal logger and clears the current thread's journal
pub fn reset_journal() {
    static LOGGER_INIT: Once = Once::new();
    LOGGER_INIT.call_once(|| {
        log::set_logger(&JournalLogger).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
    JOURNAL.with(|journal| journal.borrow_mut().clear());
}

pub fn journal() -> Vec<Event> {
    JOURNAL.with(|journal| journal.borrow().clone())
}

pub fn pin_writes() -> Vec<PinState> {
    journal()
        .into_iter()
        .filter_map(|event| match event {
            Event::PinWrite(level) => Some(level),
            _ => None,
        })
        .collect()
}

pub fn position(predicate: impl Fn(&Event) -> bool) -> Option<usize> {
    journal().iter().position(predicate)
}

struct JournalLogger;

impl log::Log for JournalLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, entry: &log::Record<'_>) {
        let mut message = String::new();
        let _ = write!(message, "{}", entry.args());
        record(Event::Log {
            target: entry.target().to_owned(),
            message,
        });
    }

    fn flush(&self) {}
}

// - pin ----------------------------------------------------------------------

pub struct FakePin {
    level: PinState,
}

impl FakePin {
    pub fn low() -> Self {
        Self {
            level: PinState::Low,
        }
    }

    pub fn level(&self) -> PinState {
        self.level
    }

    fn write(&mut self, level: PinState) {
        self.level = level;
        record(Event::PinWrite(level));
    }
}

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::High);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

pub struct FakeConfigurator {
    pub fail: bool,
}

impl PinConfigurator for FakeConfigurator {
    type Pin = FakePin;
    type Error = PinFault;

    fn configure(self, config: &PinConfig, initial: PinState) -> Result<FakePin, PinFault> {
        if self.fail {
            return Err(PinFault);
        }
        record(Event::PinConfigured {
            pin: config.pin,
            initial,
        });
        Ok(FakePin { level: initial })
    }
}

// - timer --------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerFault {
    Create,
    Start,
}

#[derive(Default)]
pub struct FakeTimerService {
    pub fail_create: bool,
    pub fail_start: bool,
    pub created: usize,
}

impl<C: TimerCallback> TimerService<C> for FakeTimerService {
    type Timer = FakeTimer<C>;
    type Error = TimerFault;

    fn create(&mut self, args: &TimerArgs, callback: C) -> Result<FakeTimer<C>, TimerFault> {
        self.created += 1;
        if self.fail_create {
            return Err(TimerFault::Create);
        }
        let mut state = TimerState::default();
        state.create().map_err(|_| TimerFault::Create)?;
        record(Event::TimerCreated { name: args.name });
        Ok(FakeTimer {
            callback,
            state,
            fail_start: self.fail_start,
        })
    }
}

pub struct FakeTimer<C> {
    pub callback: C,
    pub state: TimerState,
    pub fail_start: bool,
}

impl<C: TimerCallback> FakeTimer<C> {
    /// Simulates `periods` expiries of the running timer
    pub fn elapse(&mut self, periods: usize) {
        assert!(self.state.is_running(), "timer is not running");
        for _ in 0..periods {
            self.callback.on_expiry();
        }
    }
}

impl<C> PeriodicTimer for FakeTimer<C> {
    type Error = TimerFault;

    fn start_periodic(&mut self, period_us: u64) -> Result<(), TimerFault> {
        if self.fail_start {
            return Err(TimerFault::Start);
        }
        self.state.start(period_us).map_err(|_| TimerFault::Start)?;
        record(Event::TimerStarted { period_us });
        Ok(())
    }
}
