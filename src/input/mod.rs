//! Input subsystem - rotary encoder + push button.
//!
//! The encoder task turns raw GPIO edges into directional [`Step`]s via
//! the pure quadrature decoder; the button task debounces and logs
//! presses.
//!
//! ## Components
//!
//! - **Decoder**: Gray-code quadrature state machine (host-testable)
//! - **Encoder task**: interrupt-driven edge capture on two lines
//! - **Button task**: single debounced push button

pub mod button;
pub mod decoder;
pub mod encoder;

pub use decoder::Step;
