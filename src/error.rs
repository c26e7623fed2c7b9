//! Unified error type for knobview.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! Transient decode errors are separate (`input::decoder::DecodeError`):
//! they never leave the encoder task.

use defmt::Format;

/// Top-level error type used across the application.
#[derive(Debug, Format)]
pub enum Error {
    /// SSD1306 bring-up failed (I²C probe or init command stream).
    /// Fatal: the firmware cannot start without its display.
    DisplayInit,

    /// I²C write to the display failed while blitting a line.
    /// Isolated to the drawing task; no retry.
    Render,
}
