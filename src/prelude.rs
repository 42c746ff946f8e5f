//! This module provides an easy single import for those using this crate.

pub use crate::filter::fir::{batch_fir, fir};
pub use crate::filter::fir_engine::FirEngine;
pub use crate::filter::FilterError;
