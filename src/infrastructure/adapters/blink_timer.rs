//! Blink timer dispatched from the hardware timer interrupt

use core::cell::RefCell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};
use esp_hal::{
    Blocking,
    handler,
    ram,
    time::Duration,
    timer::{PeriodicTimer as HalPeriodicTimer, Timer},
};

use can_x2_blink_core::{
    PeriodicTimer,
    TimerArgs,
    TimerCallback,
    TimerService,
    TimerState,
    TimerStateError,
};

use crate::infrastructure::types::{EspLedBlinker, TimerError};

/// Running hardware timer, owned by the interrupt handler
static LED_TIMER: Mutex<
    CriticalSectionRawMutex,
    RefCell<Option<HalPeriodicTimer<'static, Blocking>>>,
> = Mutex::new(RefCell::new(None));

/// Blink callback invoked on every expiry
static LED_BLINKER: Mutex<CriticalSectionRawMutex, RefCell<Option<EspLedBlinker>>> =
    Mutex::new(RefCell::new(None));

/// Creates the single interrupt-driven blink timer
pub struct IsrTimerService {
    timer: Option<HalPeriodicTimer<'static, Blocking>>,
}

impl IsrTimerService {
    pub fn new(timer: impl Timer + 'static) -> Self {
        Self {
            timer: Some(HalPeriodicTimer::new(timer)),
        }
    }
}

impl TimerService<EspLedBlinker> for IsrTimerService {
    type Timer = IsrPeriodicTimer;
    type Error = TimerError;

    fn create(
        &mut self,
        args: &TimerArgs,
        callback: EspLedBlinker,
    ) -> Result<IsrPeriodicTimer, TimerError> {
        let mut timer = self.timer.take().ok_or(TimerStateError::AlreadyCreated)?;
        let mut state = TimerState::default();
        state.create()?;

        timer.set_interrupt_handler(handle_led_timer);
        LED_BLINKER.lock(|cell| {
            cell.borrow_mut().replace(callback);
        });

        log::debug!("{}: created, isr dispatch", args.name);
        Ok(IsrPeriodicTimer {
            timer: Some(timer),
            state,
        })
    }
}

/// Handle of the interrupt-driven blink timer
pub struct IsrPeriodicTimer {
    timer: Option<HalPeriodicTimer<'static, Blocking>>,
    state: TimerState,
}

impl PeriodicTimer for IsrPeriodicTimer {
    type Error = TimerError;

    fn start_periodic(&mut self, period_us: u64) -> Result<(), TimerError> {
        let mut next = self.state;
        next.start(period_us)?;
        let timer = self.timer.take().ok_or(TimerStateError::AlreadyRunning)?;

        // The handler must find the timer in place on its first run
        let started = LED_TIMER.lock(|cell| {
            let mut cell = cell.borrow_mut();
            let timer = cell.insert(timer);
            match timer.start(Duration::from_micros(period_us)) {
                Ok(()) => {
                    timer.listen();
                    Ok(())
                }
                Err(err) => Err((err, cell.take())),
            }
        });
        if let Err((err, timer)) = started {
            // Still created, a later start may succeed
            self.timer = timer;
            return Err(TimerError::Hardware(err));
        }

        self.state = next;
        Ok(())
    }
}

#[handler]
#[ram]
fn handle_led_timer() {
    LED_TIMER.lock(|cell| {
        if let Some(timer) = cell.borrow_mut().as_mut() {
            timer.clear_interrupt();
        }
    });

    LED_BLINKER.lock(|cell| {
        if let Some(blinker) = cell.borrow_mut().as_mut() {
            blinker.on_expiry();
        }
    });
}
