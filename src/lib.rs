//! Test-only library interface for knobview.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required): the quadrature decoder
//! and the line renderer.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

// Internal module paths for the actual implementations
#[path = "input/decoder.rs"]
mod input_decoder_impl;
#[path = "ui/render.rs"]
mod ui_render_impl;

pub mod input {
    pub mod decoder {
        pub use crate::input_decoder_impl::*;
    }

    pub use decoder::{DecodeError, Edge, EdgeKind, QuadratureDecoder, Step, StepMode};
}

pub mod ui {
    pub mod render {
        pub use crate::ui_render_impl::*;
    }

    pub use render::{FontStyle, LineBitmap};
}
