//! ESP32-CAN-X2 status LED firmware
//!
//! Configures the LED on IO2 and toggles it from a periodic timer.
//! Any startup failure halts the board through the panic handler.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::Duration;

use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};

use can_x2_blink::config::{BLINK, BUILD_VERSION};
use can_x2_blink::infrastructure::adapters::{IsrTimerService, TaskTimerService};
use can_x2_blink::infrastructure::drivers::EspPinConfigurator;
use can_x2_blink_core::{DispatchMethod, start_blinker};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    log::debug!(target: BLINK.log_tag, "firmware {}", BUILD_VERSION);

    let led_pin = EspPinConfigurator::new(peripherals.GPIO2);
    match BLINK.timer.dispatch {
        DispatchMethod::Task => {
            let mut timers = TaskTimerService::new(spawner);
            let _led_timer =
                start_blinker(&BLINK, led_pin, &mut timers).expect("Failed to start LED blinker");
        }
        DispatchMethod::Isr => {
            let timg1 = TimerGroup::new(peripherals.TIMG1);
            let mut timers = IsrTimerService::new(timg1.timer0);
            let _led_timer =
                start_blinker(&BLINK, led_pin, &mut timers).expect("Failed to start LED blinker");
        }
    }

    loop {
        embassy_time::Timer::after(Duration::from_secs(5)).await;
    }
}
