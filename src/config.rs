//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments and timing parameters live here so they
//! can be tuned in one place.

// GPIO pin assignments (Raspberry Pi Pico defaults)
//
// These are logical names; actual `embassy_rp::peripherals::*` types are
// selected in `main.rs`.  Adjust for your wiring.
//
//   Encoder A       → GPIO 20
//   Encoder B       → GPIO 21
//   Push button     → GPIO 22
//   Display reset   → GPIO 27
//   I²C1 SDA        → GPIO 14
//   I²C1 SCL        → GPIO 15

/// GPIO line offset of encoder phase A.
pub const LINE_ENCODER_A: u8 = 20;

/// GPIO line offset of encoder phase B.
pub const LINE_ENCODER_B: u8 = 21;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Hold time for each phase of the display reset pulse (ms).
pub const DISPLAY_RESET_PULSE_MS: u64 = 100;

/// Depth of the step channel between the encoder and counter tasks.
///
/// The consumer is always faster than a human-driven knob; this bound is
/// never reached in practice.
pub const STEP_QUEUE_DEPTH: usize = 16;

/// Display row the live counter value is drawn on.
pub const VALUE_ROW: u8 = 3;
