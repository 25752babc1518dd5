//! Discrete Fourier analysis and synthesis of a 2D point signal.
//!
//! The x and y channels of a control path are treated as one period of a
//! discrete signal; a truncated set of complex coefficients then rebuilds a
//! smoothed approximation of the path at any arc fraction, which is what
//! drives the "path drawing itself as a sum of circles" animation. Few terms
//! against many points produce visible ringing, which is expected.

use num_complex::Complex;
use num_traits::Float;

use super::*;

/// Per-channel complex spectrum of a point signal, plus the signal length
/// the coefficients were computed over.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSpectrum<T> {
    x: Vec<Complex<T>>,
    y: Vec<Complex<T>>,
    signal_len: usize,
}

impl<T> PathSpectrum<T>
where
    T: Float,
{
    /// Forward transform: `X_k = sum_j signal[j] * exp(-2*pi*i*k*j/N)` for
    /// `k` in `[0, terms)`, unnormalized, per channel. The signal must not
    /// be empty.
    pub fn analyze(signal: &[Point2<T>], terms: usize) -> Result<Self, CurveError> {
        if signal.is_empty() {
            return Err(CurveError::TooFewControlPoints {
                required: 1,
                actual: 0,
            });
        }

        let tau = T::from(core::f64::consts::TAU).unwrap();
        let n = T::from(signal.len()).unwrap();
        let mut x = Vec::with_capacity(terms);
        let mut y = Vec::with_capacity(terms);

        for k in 0..terms {
            let mut coeff_x = Complex::new(T::zero(), T::zero());
            let mut coeff_y = Complex::new(T::zero(), T::zero());
            for (j, point) in signal.iter().enumerate() {
                let angle = -(tau * T::from(k * j).unwrap()) / n;
                let rotation = Complex::from_polar(T::one(), angle);
                coeff_x = coeff_x + rotation * point.x;
                coeff_y = coeff_y + rotation * point.y;
            }
            x.push(coeff_x);
            y.push(coeff_y);
        }

        Ok(PathSpectrum { x, y, signal_len: signal.len() })
    }

    /// Number of coefficients held per channel.
    pub fn terms(&self) -> usize {
        self.x.len()
    }

    /// Length of the signal the spectrum was computed from.
    pub fn signal_len(&self) -> usize {
        self.signal_len
    }

    /// Inverse synthesis at `sample_count` positions evenly spaced over
    /// `[0, eval_fraction)` of the signal period:
    /// `q(h) = (1/N) * sum_k w_k * Re(X_k * exp(2*pi*i*k*h))`.
    ///
    /// Only one side of the spectrum is stored, so conjugate-paired bins
    /// contribute twice: `w_k = 2` except for the DC bin and, on even-length
    /// signals, the Nyquist bin (`2k == N`), which have no pair. Terms past
    /// the half spectrum would double-count pairs and are ignored; with the
    /// half spectrum fully covered the synthesis is the exact inverse at
    /// the original sample positions `h = j/N`.
    ///
    /// `eval_fraction` below 1 cuts the reconstruction short, revealing the
    /// approximated path progressively.
    pub fn synthesize(&self, eval_fraction: T, sample_count: usize) -> Vec<Point2<T>> {
        let tau = T::from(core::f64::consts::TAU).unwrap();
        let n = T::from(self.signal_len).unwrap();
        let used_terms = self.x.len().min(self.signal_len / 2 + 1);
        let two = T::from(2.0).unwrap();

        let mut points = Vec::with_capacity(sample_count);
        for i in 0..sample_count {
            let h = eval_fraction * T::from(i).unwrap() / T::from(sample_count).unwrap();
            let mut qx = T::zero();
            let mut qy = T::zero();
            for k in 0..used_terms {
                let weight = if k == 0 || 2 * k == self.signal_len {
                    T::one()
                } else {
                    two
                };
                let angle = tau * T::from(k).unwrap() * h;
                let rotation = Complex::from_polar(T::one(), angle);
                qx = qx + weight * (self.x[k] * rotation).re;
                qy = qy + weight * (self.y[k] * rotation).re;
            }
            points.push(Point2::new(qx / n, qy / n));
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    fn signal() -> Vec<Point2<f64>> {
        vec![
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 3.0),
            Point2::new(5.0, 1.0),
            Point2::new(4.0, -2.0),
            Point2::new(0.5, 0.0),
        ]
    }

    /// Straight two-sided inverse DFT over a full coefficient set,
    /// evaluated at the same continuous positions as `synthesize`.
    fn two_sided_inverse(signal: &[Point2<f64>], h: f64) -> Point2<f64> {
        let n = signal.len() as f64;
        let mut qx = Complex::new(0.0, 0.0);
        let mut qy = Complex::new(0.0, 0.0);
        for k in 0..signal.len() {
            let mut coeff_x = Complex::new(0.0, 0.0);
            let mut coeff_y = Complex::new(0.0, 0.0);
            for (j, point) in signal.iter().enumerate() {
                let angle = -core::f64::consts::TAU * (k * j) as f64 / n;
                let rotation = Complex::from_polar(1.0, angle);
                coeff_x = coeff_x + rotation * point.x;
                coeff_y = coeff_y + rotation * point.y;
            }
            // evaluate conjugate-symmetrically around the half spectrum so
            // continuous positions between samples stay real-valued
            let k_signed = if 2 * k > signal.len() {
                k as f64 - n
            } else {
                k as f64
            };
            let rotation = Complex::from_polar(1.0, core::f64::consts::TAU * k_signed * h);
            qx = qx + coeff_x * rotation;
            qy = qy + coeff_y * rotation;
        }
        Point2::new(qx.re / n, qy.re / n)
    }

    #[test]
    fn empty_signal_is_an_error() {
        let empty: [Point2<f64>; 0] = [];
        assert_eq!(
            PathSpectrum::analyze(&empty, 4).err(),
            Some(CurveError::TooFewControlPoints {
                required: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn dc_only_reconstruction_is_the_mean() {
        let signal = signal();
        let mean = signal.iter().fold(Point2::default(), |acc, p| acc + *p) * (1.0 / 5.0);

        let spectrum = PathSpectrum::analyze(&signal, 1).unwrap();
        for point in spectrum.synthesize(1.0, 16) {
            assert!(point.distance_squared(mean) < EPSILON);
        }
    }

    /// With the half spectrum fully covered the inverse is exact at the
    /// original sample positions, even though only one side is stored.
    #[test]
    fn full_half_spectrum_reconstructs_the_signal() {
        let signal = signal();
        let n = signal.len();
        let spectrum = PathSpectrum::analyze(&signal, 20).unwrap();

        let oversample = 4 * n;
        let points = spectrum.synthesize(1.0, oversample);
        for (j, original) in signal.iter().enumerate() {
            let reconstructed = points[j * oversample / n];
            assert!(reconstructed.distance_squared(*original) < 1e-18);
        }
    }

    #[test]
    fn even_length_signals_reconstruct_too() {
        let full = signal();
        let signal = &full[..4];
        let spectrum = PathSpectrum::analyze(signal, 3).unwrap();

        let points = spectrum.synthesize(1.0, 8);
        for (j, original) in signal.iter().enumerate() {
            assert!(points[j * 2].distance_squared(*original) < 1e-18);
        }
    }

    #[test]
    fn matches_a_two_sided_inverse_between_samples() {
        let signal = signal();
        let spectrum = PathSpectrum::analyze(&signal, 20).unwrap();

        let count = 40;
        let points = spectrum.synthesize(1.0, count);
        for (i, point) in points.iter().enumerate() {
            let h = i as f64 / count as f64;
            let reference = two_sided_inverse(&signal, h);
            assert!(point.distance_squared(reference) < 1e-16);
        }
    }

    #[test]
    fn partial_fraction_reveals_a_prefix() {
        let signal = signal();
        let spectrum = PathSpectrum::analyze(&signal, 20).unwrap();

        let full = spectrum.synthesize(1.0, 64);
        let half = spectrum.synthesize(0.5, 32);
        for (a, b) in half.iter().zip(full.iter()) {
            assert!(a.distance_squared(*b) < EPSILON);
        }
    }

    #[test]
    fn terms_and_signal_len_are_reported() {
        let signal = signal();
        let spectrum = PathSpectrum::analyze(&signal, 7).unwrap();
        assert_eq!(spectrum.terms(), 7);
        assert_eq!(spectrum.signal_len(), 5);
    }
}
