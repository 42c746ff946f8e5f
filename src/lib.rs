//! Fixed-length FIR filtering for memory-constrained embedded targets.
//!
//! The crate provides a single computational unit: a finite impulse response
//! (FIR) filter with a compile-time filter length. All storage is inline
//! fixed-size arrays, so the filter can live in a `static` and be placed in a
//! specific memory region with [`static_fir_engine!`]. No allocation happens
//! anywhere in the crate and the library builds without `std` when the
//! default `std` feature is disabled.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod filter;
pub mod prelude;

pub use crate::filter::fir_engine::FirEngine;
pub use crate::filter::FilterError;
