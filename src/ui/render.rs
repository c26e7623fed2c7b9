//! Text-line rasterization for the 128x64 OLED.
//!
//! The panel is divided into four 128x16 strips, one per text row. A line
//! of text is rasterized into a [`LineBitmap`] covering exactly one strip;
//! blitting a strip can therefore never disturb a neighbouring row.
//!
//! Rendering is pure (no display access) so the host test suite can check
//! it bit for bit.

use embedded_graphics::mono_font::ascii::{FONT_8X13, FONT_8X13_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

/// Panel width in pixels.
pub const DISPLAY_WIDTH: u32 = 128;

/// Panel height in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// Height of one text strip.
pub const LINE_HEIGHT: u32 = 16;

/// Rows that fit the panel.
pub const MAX_ROWS: u8 = (DISPLAY_HEIGHT / LINE_HEIGHT) as u8;

/// Vertical inset centering the 13-px glyphs in a 16-px strip.
const TEXT_TOP_INSET: i32 = 1;

/// Typeface for a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontStyle {
    Heading,
    Body,
}

impl FontStyle {
    fn font(self) -> &'static MonoFont<'static> {
        match self {
            FontStyle::Heading => &FONT_8X13_BOLD,
            FontStyle::Body => &FONT_8X13,
        }
    }
}

/// Full panel rectangle.
pub fn bounds() -> Rectangle {
    Rectangle::new(Point::zero(), Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT))
}

/// The strip a row occupies: `[row * 16, (row + 1) * 16)` across the full
/// width. Strips of distinct rows are disjoint.
pub fn line_region(row: u8) -> Rectangle {
    Rectangle::new(
        Point::new(0, row as i32 * LINE_HEIGHT as i32),
        Size::new(DISPLAY_WIDTH, LINE_HEIGHT),
    )
}

/// One rendered 128x16 strip, 1 bit per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineBitmap {
    bits: [u8; (DISPLAY_WIDTH * LINE_HEIGHT / 8) as usize],
}

impl LineBitmap {
    fn new() -> Self {
        Self {
            bits: [0; (DISPLAY_WIDTH * LINE_HEIGHT / 8) as usize],
        }
    }

    fn set(&mut self, x: u32, y: u32, on: bool) {
        let idx = (y * DISPLAY_WIDTH + x) as usize;
        if on {
            self.bits[idx / 8] |= 1 << (idx % 8);
        } else {
            self.bits[idx / 8] &= !(1 << (idx % 8));
        }
    }

    /// Pixel at `(x, y)` within the strip.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        let idx = (y * DISPLAY_WIDTH + x) as usize;
        self.bits[idx / 8] & (1 << (idx % 8)) != 0
    }

    /// All pixels in row-major order, the layout `fill_contiguous`
    /// expects for the strip rectangle.
    pub fn colors(&self) -> impl Iterator<Item = BinaryColor> + '_ {
        (0..LINE_HEIGHT)
            .flat_map(move |y| (0..DISPLAY_WIDTH).map(move |x| BinaryColor::from(self.pixel(x, y))))
    }
}

impl OriginDimensions for LineBitmap {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH, LINE_HEIGHT)
    }
}

impl DrawTarget for LineBitmap {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<BinaryColor>>,
    {
        // Out-of-strip pixels are dropped, which is what clips overlong
        // text at the right edge.
        for Pixel(point, color) in pixels {
            if (0..DISPLAY_WIDTH as i32).contains(&point.x)
                && (0..LINE_HEIGHT as i32).contains(&point.y)
            {
                self.set(point.x as u32, point.y as u32, color.is_on());
            }
        }
        Ok(())
    }
}

fn text_style(style: FontStyle) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(style.font())
        .text_color(BinaryColor::On)
        .build()
}

/// Rasterize one line of text, left-aligned, clipped at the strip edge.
///
/// Deterministic: the same style and text always produce a bit-identical
/// bitmap.
pub fn render_line(style: FontStyle, text: &str) -> LineBitmap {
    let mut bitmap = LineBitmap::new();
    let _ = Text::with_baseline(
        text,
        Point::new(0, TEXT_TOP_INSET),
        text_style(style),
        Baseline::Top,
    )
    .draw(&mut bitmap);
    bitmap
}
