//! Error taxonomy for curve construction and evaluation.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// The control path is too short for the requested operation.
    /// Catmull-Rom sampling needs at least four points, Fourier analysis
    /// needs at least one point of signal.
    TooFewControlPoints { required: usize, actual: usize },
    /// Direct segment evaluation outside `[0, segment_count)`.
    SegmentOutOfRange {
        index: usize,
        segment_count: usize,
    },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::TooFewControlPoints { required, actual } => write!(
                f,
                "control path needs at least {} points, got {}",
                required, actual
            ),
            CurveError::SegmentOutOfRange {
                index,
                segment_count,
            } => write!(
                f,
                "segment index {} out of range for {} segments",
                index, segment_count
            ),
        }
    }
}

impl std::error::Error for CurveError {}
