//! knobview - rotary-encoder OLED demo for the Raspberry Pi Pico.
//!
//! Brings up an SSD1306 over I²C (after pulsing its reset line), draws a
//! static menu, then decodes a quadrature rotary encoder into a running
//! value shown on the last row. A push button is debounced and logged.
//!
//! Task layout:
//!
//! ```text
//!   encoder_task --(Step channel, FIFO)--> counter_task (owns display)
//!   button_task  --(log only)
//! ```

#![no_std]
#![no_main]

mod config;
mod error;
mod input;
mod ui;

use core::fmt::Write;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::config::{DISPLAY_RESET_PULSE_MS, STEP_QUEUE_DEPTH, VALUE_ROW};
use crate::input::Step;
use crate::ui::display::{self, Display};
use crate::ui::render::FontStyle;

type OledBus = I2c<'static, I2C1, i2c::Blocking>;

/// Steps flow encoder task -> counter task, in emission order.
static STEPS: Channel<CriticalSectionRawMutex, Step, STEP_QUEUE_DEPTH> = Channel::new();

/// Keeps the display reset line driven for the life of the firmware.
static RESET_LINE: StaticCell<Output<'static>> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("knobview starting...");

    let p = embassy_rp::init(Default::default());

    // Reset pulse before I²C bring-up; the panel latches its
    // configuration on the final rising edge.
    let mut reset = Output::new(p.PIN_27, Level::High);
    Timer::after_millis(DISPLAY_RESET_PULSE_MS).await;
    reset.set_low();
    Timer::after_millis(DISPLAY_RESET_PULSE_MS).await;
    reset.set_high();
    let _ = RESET_LINE.init(reset);

    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c::Config::default());
    let mut oled = match display::init(i2c) {
        Ok(d) => d,
        Err(e) => defmt::panic!("display bring-up failed: {}", e),
    };
    info!("OLED initialized");

    draw_boot_screen(&mut oled);

    spawner
        .spawn(input::encoder::encoder_task(
            p.PIN_20.degrade(),
            p.PIN_21.degrade(),
            STEPS.sender(),
        ))
        .unwrap();
    spawner
        .spawn(input::button::button_task(p.PIN_22.degrade()))
        .unwrap();
    spawner.spawn(counter_task(oled, STEPS.receiver())).unwrap();

    info!("all tasks spawned; turn the knob");
}

/// Startup screen: heading, two menu entries, the live value row.
///
/// A draw failure this early counts as an initialization failure.
fn draw_boot_screen(oled: &mut Display<OledBus>) {
    let lines: [(FontStyle, u8, &str); 4] = [
        (FontStyle::Heading, 0, "knobview"),
        (FontStyle::Body, 1, "* Menu Entry 1"),
        (FontStyle::Body, 2, "* Menu Entry 2"),
        (FontStyle::Body, VALUE_ROW, "Value: 0"),
    ];
    for (style, row, text) in lines {
        if let Err(e) = display::draw_line(oled, style, row, text) {
            defmt::panic!("boot screen draw failed: {}", e);
        }
    }
}

/// Consumer side of the step channel.
///
/// Owns the running value and the display exclusively; applies steps in
/// the order the decoder emitted them. A failed redraw is logged and
/// dropped, never retried.
#[embassy_executor::task]
async fn counter_task(
    mut oled: Display<OledBus>,
    rx: Receiver<'static, CriticalSectionRawMutex, Step, STEP_QUEUE_DEPTH>,
) -> ! {
    let mut value: i32 = 0;

    loop {
        let step = rx.receive().await;
        value += step.delta();
        info!("encoder value is now: {}", value);

        let mut text: heapless::String<20> = heapless::String::new();
        let _ = write!(text, "Value: {}", value);
        if let Err(e) = display::draw_line(&mut oled, FontStyle::Body, VALUE_ROW, text.as_str()) {
            warn!("value redraw failed: {}", e);
        }
    }
}
