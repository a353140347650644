//! Blink timer dispatched from a dedicated embassy task

use embassy_executor::Spawner;
use embassy_time::{Duration, Ticker};

use can_x2_blink_core::{
    PeriodicTimer,
    TimerArgs,
    TimerCallback,
    TimerService,
    TimerState,
    TimerStateError,
};

use crate::infrastructure::types::{EspLedBlinker, TimerError};

#[embassy_executor::task]
async fn led_timer_task(name: &'static str, mut blinker: EspLedBlinker, period: Duration) {
    log::debug!("{}: task started", name);
    let mut ticker = Ticker::every(period);
    loop {
        ticker.next().await;
        blinker.on_expiry();
    }
}

/// Creates blink timers backed by [`led_timer_task`]
pub struct TaskTimerService {
    spawner: Spawner,
}

impl TaskTimerService {
    pub fn new(spawner: Spawner) -> Self {
        Self { spawner }
    }
}

impl TimerService<EspLedBlinker> for TaskTimerService {
    type Timer = TaskPeriodicTimer;
    type Error = TimerError;

    fn create(
        &mut self,
        args: &TimerArgs,
        callback: EspLedBlinker,
    ) -> Result<TaskPeriodicTimer, TimerError> {
        let mut state = TimerState::default();
        state.create()?;

        log::debug!("{}: created, task dispatch", args.name);
        Ok(TaskPeriodicTimer {
            spawner: self.spawner,
            name: args.name,
            blinker: Some(callback),
            state,
        })
    }
}

/// Handle of a task-driven blink timer
pub struct TaskPeriodicTimer {
    spawner: Spawner,
    name: &'static str,
    blinker: Option<EspLedBlinker>,
    state: TimerState,
}

impl PeriodicTimer for TaskPeriodicTimer {
    type Error = TimerError;

    fn start_periodic(&mut self, period_us: u64) -> Result<(), TimerError> {
        let mut next = self.state;
        next.start(period_us)?;
        let blinker = self.blinker.take().ok_or(TimerStateError::AlreadyRunning)?;

        self.spawner
            .spawn(led_timer_task(
                self.name,
                blinker,
                Duration::from_micros(period_us),
            ))
            .map_err(|_| TimerError::Spawn)?;

        self.state = next;
        Ok(())
    }
}
