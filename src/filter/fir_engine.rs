//! A stateful FIR engine with compile-time filter length.
//!
//! [`FirEngine`] bundles the taps, the sample window, and the output buffer
//! into one value with no heap storage, sized by a const generic `N`.  The
//! caller owns the engine; nothing in the crate holds hidden global state.
//! For bare-metal targets that need the working memory in a specific region,
//! [`static_fir_engine!`](crate::static_fir_engine) declares an engine as a
//! `static` placed in a named linker section.

use crate::filter::fir::{batch_fir, fir};
use crate::filter::FilterError;
use num_traits::Num;

/// A fixed-length FIR filter owning its taps, window, and output storage.
///
/// `N` is the filter length: the number of taps, the window size, and the
/// length of the signal processed per [`run`](FirEngine::run) are all exactly
/// `N`.  `N` must be at least 1.
///
/// Two processing modes are exposed:
///
/// * [`run`](FirEngine::run) zeroes the window, filters an `N`-sample signal
///   in one shot, and returns the output buffer by reference.  Consecutive
///   calls are independent; no state carries across them.
/// * [`feed`](FirEngine::feed) filters one sample at a time and never resets,
///   for continuous streaming use.
///
/// # Examples
///
/// ```
/// use fir_rs::FirEngine;
///
/// let mut engine = FirEngine::new([1i32, 1, 1]);
/// assert_eq!(engine.run(&[1, 2, 3]), &[1, 3, 6]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FirEngine<T, const N: usize> {
    taps: [T; N],
    state: [T; N],
    output: [T; N],
}

impl<T, const N: usize> FirEngine<T, N>
where
    T: Copy,
{
    /// Constructs a `FirEngine` with a user defined initial window.
    ///
    /// The window contents only matter to [`feed`](FirEngine::feed);
    /// [`run`](FirEngine::run) zeroes the window before processing.  This
    /// constructor is `const` so an engine can be built in a `static`
    /// initializer.
    pub const fn with_state(taps: [T; N], state: [T; N]) -> Self {
        FirEngine {
            taps,
            output: state,
            state,
        }
    }
}

impl<T, const N: usize> FirEngine<T, N>
where
    T: Num + Copy,
{
    /// Constructs a `FirEngine` with the window and output zeroed.
    pub fn new(taps: [T; N]) -> Self {
        Self::with_state(taps, [T::zero(); N])
    }

    /// Constructs a `FirEngine` from a tap slice, checking the length.
    ///
    /// The infallible constructors cover the fixed-size contract on their
    /// own; this checked form exists for callers whose coefficients arrive
    /// as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use fir_rs::{FilterError, FirEngine};
    ///
    /// let _engine: FirEngine<i32, 3> = FirEngine::from_taps(&[1, 1, 1]).unwrap();
    /// let err = FirEngine::<i32, 3>::from_taps(&[1, 1]).unwrap_err();
    /// assert_eq!(err, FilterError::InvalidLength { expected: 3, actual: 2 });
    /// ```
    pub fn from_taps(taps: &[T]) -> Result<Self, FilterError> {
        if taps.len() != N {
            return Err(FilterError::InvalidLength {
                expected: N,
                actual: taps.len(),
            });
        }
        let mut fixed = [T::zero(); N];
        fixed.copy_from_slice(taps);
        Ok(Self::new(fixed))
    }

    /// Sets every element of the window and the output buffer to zero.
    ///
    /// Idempotent and infallible; safe to call at any point regardless of
    /// prior engine state.
    pub fn initialize(&mut self) {
        for value in self.state.iter_mut() {
            *value = T::zero();
        }
        for value in self.output.iter_mut() {
            *value = T::zero();
        }
    }

    /// Filters an `N`-sample signal and returns the output buffer.
    ///
    /// The window is zeroed first, so each call restarts the convolution
    /// from scratch and early outputs see zero padding while the window
    /// fills.  The result is a reference into the engine's own output
    /// buffer; no copy is made.  Cost is O(N²): N samples, each paying an
    /// O(N) shift plus an O(N) dot product.  Use [`feed`](FirEngine::feed)
    /// to carry the window across calls instead.
    pub fn run(&mut self, signal: &[T; N]) -> &[T; N] {
        self.initialize();
        batch_fir(signal, &self.taps, &mut self.state, &mut self.output);
        &self.output
    }

    /// Filters a signal slice, checking that it holds exactly `N` samples.
    ///
    /// Identical to [`run`](FirEngine::run) apart from the length check.
    pub fn try_run(&mut self, signal: &[T]) -> Result<&[T; N], FilterError> {
        if signal.len() != N {
            return Err(FilterError::InvalidLength {
                expected: N,
                actual: signal.len(),
            });
        }
        self.initialize();
        batch_fir(signal, &self.taps, &mut self.state, &mut self.output);
        Ok(&self.output)
    }

    /// Filters a single sample, carrying the window across calls.
    ///
    /// Unlike [`run`](FirEngine::run) this never resets the window, so a
    /// stream of `feed` calls behaves as one continuous filter.  The output
    /// buffer is not touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use fir_rs::FirEngine;
    ///
    /// let mut engine = FirEngine::new([0i32, 1]);
    /// assert_eq!(engine.feed(4), 0);
    /// assert_eq!(engine.feed(7), 4);
    /// assert_eq!(engine.feed(0), 7);
    /// ```
    pub fn feed(&mut self, sample: T) -> T {
        fir(sample, &self.taps, &mut self.state)
    }

    /// Returns the filter taps.
    pub fn taps(&self) -> &[T; N] {
        &self.taps
    }

    /// Returns the output buffer populated by the last
    /// [`run`](FirEngine::run).
    pub fn output(&self) -> &[T; N] {
        &self.output
    }
}

/// Declares a `static mut` [`FirEngine`], optionally placed in a named
/// linker section.
///
/// This models the bare-metal layout where the filter's working memory lives
/// in a specific memory region (for example a RAM block shared with a
/// co-processor).  The window and output start zeroed.
///
/// Mutating a `static mut` requires `unsafe`: the caller asserts that the
/// engine is only touched from a single execution context with no
/// interrupt-driven reentry, which is the operating model this crate
/// targets.  The sample type must be a numeric primitive (the initializer
/// uses `0 as $t`).
///
/// # Examples
///
/// ```
/// use fir_rs::{static_fir_engine, FirEngine};
///
/// static_fir_engine!(static mut ENGINE: FirEngine<i32, 3> = [1, 1, 1], section = ".mprjram");
///
/// let engine = unsafe { &mut *core::ptr::addr_of_mut!(ENGINE) };
/// assert_eq!(engine.run(&[1, 2, 3]), &[1, 3, 6]);
/// ```
#[macro_export]
macro_rules! static_fir_engine {
    ($vis:vis static mut $name:ident: FirEngine<$t:ty, $n:literal> = $taps:expr, section = $sec:expr) => {
        #[link_section = $sec]
        $vis static mut $name: $crate::filter::fir_engine::FirEngine<$t, { $n }> =
            $crate::filter::fir_engine::FirEngine::with_state($taps, [0 as $t; $n]);
    };
    ($vis:vis static mut $name:ident: FirEngine<$t:ty, $n:literal> = $taps:expr) => {
        $vis static mut $name: $crate::filter::fir_engine::FirEngine<$t, { $n }> =
            $crate::filter::fir_engine::FirEngine::with_state($taps, [0 as $t; $n]);
    };
}
