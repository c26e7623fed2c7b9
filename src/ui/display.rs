//! SSD1306 OLED display wrapper.
//!
//! Thin layer over the `ssd1306` driver: bring-up, and blitting of
//! pre-rendered line strips. Rasterization itself is in `render.rs`.

use embedded_graphics::prelude::*;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::error::Error;
use crate::ui::render::{line_region, render_line, FontStyle};

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 and clear the screen.
///
/// Errors here are fatal to the caller; there is nothing to demo without
/// the panel.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::DisplayInit)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::DisplayInit)?;
    Ok(display)
}

/// Render `text` and blit it into `row`'s strip.
///
/// Only the strip `[row * 16, (row + 1) * 16)` is touched, so other rows
/// survive the redraw. Rows beyond the panel are clipped by the driver.
pub fn draw_line<I2C>(
    display: &mut Display<I2C>,
    style: FontStyle,
    row: u8,
    text: &str,
) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let bitmap = render_line(style, text);
    display
        .fill_contiguous(&line_region(row), bitmap.colors())
        .map_err(|_| Error::Render)?;
    display.flush().map_err(|_| Error::Render)
}
