//! Stateless implementation of a finite impulse response (FIR) filter.
//!
//! These functions operate entirely on caller-supplied buffers so they can be
//! used on targets where all storage is statically placed.  The filter state
//! is the window of the most recent samples, most-recent-first: each new
//! sample shifts the window one slot toward the tail, the oldest sample is
//! discarded, and the output is the dot product of the taps with the window.
//!
//! Assume initial state of 0's.  Works with any `Num + Copy` sample type:
//! integers, floats, or `Complex<T>`.  Arithmetic is a plain
//! multiply-accumulate in the sample type with no saturation or overflow
//! detection; use `core::num::Wrapping` samples when guaranteed wraparound
//! is required.

use num_traits::Num;

/// Filters a single sample, updating the window in place.
///
/// Shifts `state` one slot toward the tail, inserts `input` at the
/// most-recent slot, and returns the dot product of `taps` and `state`.
///
/// `taps` and `state` must have the same nonzero length; extra elements in
/// the longer of the two never contribute to the output.
///
/// # Arguments
///
/// * `input` - Input sample to be filtered.
/// * `taps` - FIR filter taps.
/// * `state` - FIR filter window, most-recent-first.
///
/// # Examples
///
/// ```
/// use fir_rs::filter::fir::fir;
///
/// let taps = [2i32, 1, 0, 0];
/// let mut state = [0i32; 4];
///
/// assert_eq!(fir(3, &taps, &mut state), 6);
/// assert_eq!(fir(4, &taps, &mut state), 11);
/// ```
pub fn fir<T>(input: T, taps: &[T], state: &mut [T]) -> T
where
    T: Num + Copy,
{
    state.rotate_right(1);
    state[0] = input;
    taps.iter()
        .zip(state.iter())
        .fold(T::zero(), |acc, (x, y)| acc + *x * *y)
}

/// Filters a batch of samples, writing one output per input sample.
///
/// Runs [`fir`] over `signal` in order, storing the results in `output`.
/// The window carries across samples within the batch (and across batches,
/// since the caller owns `state`).  `signal` and `output` should have the
/// same length; if they differ, only the shorter length is processed.
///
/// # Arguments
///
/// * `signal` - Input samples to be filtered.
/// * `taps` - FIR filter taps.
/// * `state` - FIR filter window, most-recent-first.
/// * `output` - Buffer receiving one filtered value per input sample.
///
/// # Examples
///
/// ```
/// use fir_rs::filter::fir::batch_fir;
///
/// let taps = [1i32, 1, 1];
/// let mut state = [0i32; 3];
/// let mut output = [0i32; 5];
///
/// batch_fir(&[1, 2, 3, 4, 5], &taps, &mut state, &mut output);
/// assert_eq!(output, [1, 3, 6, 9, 12]);
/// ```
pub fn batch_fir<T>(signal: &[T], taps: &[T], state: &mut [T], output: &mut [T])
where
    T: Num + Copy,
{
    for (sample, out) in signal.iter().zip(output.iter_mut()) {
        *out = fir(*sample, taps, state);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use num_complex::Complex;

    #[test]
    // An identity filter passes the signal through untouched.
    fn test_fir_identity() {
        let taps = [1i32, 0, 0, 0];
        let mut state = [0i32; 4];
        let signal = [5i32, -3, 0, 7, 2, 2, -9, 4];
        let mut output = [0i32; 8];

        batch_fir(&signal, &taps, &mut state, &mut output);
        assert_eq!(output, signal);
    }

    #[test]
    // A single off-center tap delays the signal by one sample.
    fn test_fir_pure_delay() {
        let taps = [0i32, 1, 0, 0];
        let mut state = [0i32; 4];
        let signal = [5i32, -3, 0, 7, 2, 2, -9, 4];
        let mut output = [0i32; 8];

        batch_fir(&signal, &taps, &mut state, &mut output);
        assert_eq!(output[0], 0);
        for i in 1..signal.len() {
            assert_eq!(output[i], signal[i - 1]);
        }
    }

    #[test]
    // Every output must match the direct convolution sum, including the
    // zero-padded ramp-up while the window is still filling.
    fn test_fir_matches_direct_convolution() {
        let taps = [3i32, -1, 4, 2];
        let mut state = [0i32; 4];
        let signal = [2i32, 7, 1, -8, 2, 8, -1, 8];
        let mut output = [0i32; 8];

        batch_fir(&signal, &taps, &mut state, &mut output);

        for i in 0..signal.len() {
            let mut expected = 0;
            for k in 0..taps.len() {
                if k <= i {
                    expected += taps[k] * signal[i - k];
                }
            }
            assert_eq!(output[i], expected);
        }
    }

    #[test]
    // Complex samples filter through the same dot product.
    fn test_fir_complex() {
        let taps = [
            Complex::new(9i16, 0),
            Complex::new(8, 7),
            Complex::new(6, 5),
            Complex::new(4, 3),
            Complex::new(2, 1),
        ];
        let signal = [
            Complex::new(1i16, 2),
            Complex::new(3, 4),
            Complex::new(5, 6),
            Complex::new(7, 8),
            Complex::new(9, 0),
            Complex::new(0, 0),
            Complex::new(0, 0),
            Complex::new(0, 0),
            Complex::new(0, 0),
            Complex::new(0, 0),
        ];
        let mut state = [Complex::new(0i16, 0); 5];
        let mut output = [Complex::new(0i16, 0); 10];

        batch_fir(&signal, &taps, &mut state, &mut output);
        assert_eq!(
            output,
            [
                Complex::new(9, 18),
                Complex::new(21, 59),
                Complex::new(37, 124),
                Complex::new(57, 205),
                Complex::new(81, 204),
                Complex::new(78, 196),
                Complex::new(62, 115),
                Complex::new(42, 50),
                Complex::new(18, 9),
                Complex::new(0, 0),
            ]
        );
    }

    #[test]
    fn test_fir_float() {
        let taps = [0.2f64, 0.6, 0.6, 0.2];
        let mut state = [0.0f64; 4];

        assert_approx_eq!(fir(1.0, &taps, &mut state), 0.2);
        assert_approx_eq!(fir(0.5, &taps, &mut state), 0.7);
        assert_approx_eq!(fir(0.25, &taps, &mut state), 0.95);
    }
}
