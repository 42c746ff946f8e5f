//! Fixed-length FIR filtering.
//!
//! A finite impulse response (FIR) filter computes each output sample as a
//! weighted sum of the most recent N input samples.  FIR filters are
//! feedforward based systems, meaning they can't become unstable regardless
//! of the input data.  This can be desireable when guaranteed system behavior
//! is important, which is why they show up so often on small embedded
//! targets: the whole filter is N multiplies and N adds over a window of the
//! last N samples, with no feedback state to diverge.
//!
//! This module keeps the window as a shift register: every new sample pushes
//! the window down one slot and the oldest sample falls off the end.  That
//! costs O(N) per sample instead of the O(1) of an index-rotating ring
//! buffer, but for the small compile-time N this crate targets the trivial
//! buffer wins on simplicity and produces identical output.
//!
//! The stateless building blocks live in [`fir`]; a stateful engine that
//! owns its taps and buffers lives in [`fir_engine`].

use core::fmt;

/// Errors from the hardened filter constructors and entry points.
///
/// The core operations (`initialize`, `run`, `feed`) are total and never
/// fail; this error only arises on the slice-based surface where a length
/// mismatch can be detected at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterError {
    /// A caller-supplied slice did not contain exactly the expected number
    /// of elements.
    InvalidLength { expected: usize, actual: usize },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FilterError::InvalidLength { expected, actual } => write!(
                f,
                "Filter error: expected {} elements, got {}",
                expected, actual
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FilterError {
    fn cause(&self) -> Option<&dyn std::error::Error> {
        None
    }
}

pub mod fir;
pub mod fir_engine;
