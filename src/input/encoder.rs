//! Rotary encoder edge capture.
//!
//! The task blocks on interrupt-driven edge delivery for either encoder
//! line (never busy-polls), stamps each transition, and feeds it through
//! the quadrature decoder. Accepted steps go into the step channel in
//! emission order; rejected edges are logged and change nothing.

use crate::config::{LINE_ENCODER_A, LINE_ENCODER_B, STEP_QUEUE_DEPTH};
use crate::input::decoder::{Edge, EdgeKind, QuadratureDecoder, Step, StepMode};
use defmt::{info, trace, warn};
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::Instant;

fn edge_on(line: u8, high: bool) -> Edge {
    Edge {
        line,
        kind: if high {
            EdgeKind::Rising
        } else {
            EdgeKind::Falling
        },
        timestamp_us: Instant::now().as_micros(),
    }
}

/// Run the encoder edge loop.
///
/// The decoder is seeded from the levels present at startup; that first
/// observation emits nothing.
#[embassy_executor::task]
pub async fn encoder_task(
    a: AnyPin,
    b: AnyPin,
    tx: Sender<'static, CriticalSectionRawMutex, Step, STEP_QUEUE_DEPTH>,
) -> ! {
    let mut pin_a = Input::new(a, Pull::Up);
    let mut pin_b = Input::new(b, Pull::Up);

    let mut decoder = QuadratureDecoder::new(
        LINE_ENCODER_A,
        LINE_ENCODER_B,
        pin_a.is_high(),
        pin_b.is_high(),
        StepMode::Detent,
    );
    info!("encoder task started");

    loop {
        let edge = match select(pin_a.wait_for_any_edge(), pin_b.wait_for_any_edge()).await {
            Either::First(()) => edge_on(LINE_ENCODER_A, pin_a.is_high()),
            Either::Second(()) => edge_on(LINE_ENCODER_B, pin_b.is_high()),
        };
        trace!(
            "edge: line={} kind={} t={}",
            edge.line,
            edge.kind,
            edge.timestamp_us
        );

        match decoder.on_edge(edge) {
            Ok(Some(step)) => tx.send(step).await,
            Ok(None) => {}
            Err(e) => warn!("edge rejected: {}", e),
        }
    }
}
