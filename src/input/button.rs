//! GPIO button input with async debouncing.
//!
//! One push button (active-low with internal pull-up). The task waits
//! for a GPIO edge, debounces it, logs the press, then waits for release
//! before repeating.

use crate::config::BUTTON_DEBOUNCE_MS;
use defmt::info;
use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_time::{Duration, Timer};

/// Run the button polling loop.
#[embassy_executor::task]
pub async fn button_task(pin: AnyPin) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            info!("button pressed");

            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
