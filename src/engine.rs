//! Engine façade: configuration, control-path ownership and cached spectra.

use super::*;

/// All tunables in one place, with defaults matching the demo scenes.
///
/// Nothing here is clamped: wilder tensions, offsets and term counts just
/// produce wilder geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Catmull-Rom tension; 0.5 is the classic matrix, lower sharpens,
    /// higher curls.
    pub tension: NativeFloat,
    /// Curve samples per spline segment.
    pub steps_per_segment: usize,
    /// Perpendicular half-width of the stroke ribbon.
    pub ribbon_offset: NativeFloat,
    /// Number of Fourier coefficients kept per channel.
    pub fourier_terms: usize,
    /// Number of points synthesized from the spectrum per reveal.
    pub fourier_samples: usize,
    /// Control points dropped from the head of the path before Fourier
    /// analysis, mirroring the spline's unreachable leading point.
    pub head_margin: usize,
    /// Control points dropped from the tail before Fourier analysis.
    pub tail_margin: usize,
    /// Reveal cycle driving progressive draw-in.
    pub reveal: RevealCycle<NativeFloat>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            tension: 0.5,
            steps_per_segment: 100,
            ribbon_offset: 0.1,
            fourier_terms: 20,
            fourier_samples: 256,
            head_margin: 1,
            tail_margin: 2,
            reveal: RevealCycle::default(),
        }
    }
}

/// Owns a validated control path plus the lazily computed spectrum, and
/// hands out the derived geometry the rendering layer consumes.
///
/// All geometry getters take `&self` and recompute from scratch; only the
/// Fourier spectrum is cached, and it is dropped whenever the control path
/// is replaced.
#[derive(Debug, Clone)]
pub struct CurveEngine {
    config: EngineConfig,
    control_points: Vec<Point2<NativeFloat>>,
    spectrum: Option<PathSpectrum<NativeFloat>>,
}

impl CurveEngine {
    /// Build an engine over `control_points`. At least four points are
    /// required so the spline has a segment to evaluate.
    pub fn new(
        config: EngineConfig,
        control_points: Vec<Point2<NativeFloat>>,
    ) -> Result<Self, CurveError> {
        if control_points.len() < 4 {
            return Err(CurveError::TooFewControlPoints {
                required: 4,
                actual: control_points.len(),
            });
        }
        Ok(CurveEngine {
            config,
            control_points,
            spectrum: None,
        })
    }

    pub fn with_defaults(control_points: Vec<Point2<NativeFloat>>) -> Result<Self, CurveError> {
        Self::new(EngineConfig::default(), control_points)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn control_points(&self) -> &[Point2<NativeFloat>] {
        &self.control_points
    }

    /// Swap in a new control path. The engine is left untouched when the
    /// path is too short; on success the cached spectrum is invalidated.
    pub fn replace_control_points(
        &mut self,
        control_points: Vec<Point2<NativeFloat>>,
    ) -> Result<(), CurveError> {
        if control_points.len() < 4 {
            return Err(CurveError::TooFewControlPoints {
                required: 4,
                actual: control_points.len(),
            });
        }
        self.control_points = control_points;
        self.spectrum = None;
        Ok(())
    }

    fn spline(&self) -> CatmullRomSpline<'_, NativeFloat> {
        // length was validated at construction/replacement
        CatmullRomSpline {
            control_points: &self.control_points,
            tension: self.config.tension,
        }
    }

    /// The spline revealed up to `reveal_fraction` in `[0, 1]`.
    pub fn spline_points(&self, reveal_fraction: NativeFloat) -> Vec<Point2<NativeFloat>> {
        self.spline()
            .samples(self.config.steps_per_segment, reveal_fraction)
            .collect()
    }

    /// Stroke rails around the revealed spline.
    pub fn ribbon(&self, reveal_fraction: NativeFloat) -> Ribbon<NativeFloat> {
        Ribbon::build(
            &self.spline_points(reveal_fraction),
            self.config.ribbon_offset,
        )
    }

    /// The Fourier spectrum of the interior control points, computed on
    /// first use and cached until the path changes.
    pub fn spectrum(&mut self) -> Result<&PathSpectrum<NativeFloat>, CurveError> {
        let spectrum = match self.spectrum.take() {
            Some(spectrum) => spectrum,
            None => PathSpectrum::analyze(self.interior_signal(), self.config.fourier_terms)?,
        };
        Ok(self.spectrum.insert(spectrum))
    }

    /// The Fourier approximation of the path, revealed up to
    /// `reveal_fraction` of its period.
    pub fn fourier_points(
        &mut self,
        reveal_fraction: NativeFloat,
    ) -> Result<Vec<Point2<NativeFloat>>, CurveError> {
        let sample_count = self.config.fourier_samples;
        let spectrum = self.spectrum()?;
        Ok(spectrum.synthesize(reveal_fraction, sample_count))
    }

    /// Smallest squared distance from `probe` to the raw control polygon.
    pub fn path_distance_squared(&self, probe: Point2<NativeFloat>) -> NativeFloat {
        polyline_distance_squared(probe, &self.control_points)
    }

    /// Smallest squared distance from `probe` to the revealed spline.
    pub fn curve_distance_squared(
        &self,
        probe: Point2<NativeFloat>,
        reveal_fraction: NativeFloat,
    ) -> NativeFloat {
        polyline_distance_squared(probe, &self.spline_points(reveal_fraction))
    }

    /// Reveal fraction for `time` seconds under the configured cycle.
    pub fn reveal_fraction(&self, time: NativeFloat) -> NativeFloat {
        self.config.reveal.fraction_at(time)
    }

    fn interior_signal(&self) -> &[Point2<NativeFloat>] {
        let len = self.control_points.len();
        let lo = self.config.head_margin.min(len);
        let hi = len.saturating_sub(self.config.tail_margin).max(lo);
        &self.control_points[lo..hi]
    }
}
