//! Tension-parameterized Catmull-Rom evaluation and sampling.

use num_traits::Float;

use super::*;

/// One cubic Catmull-Rom span through four consecutive control points.
///
/// The curve runs from `points[1]` at `t = 0` to `points[2]` at `t = 1`;
/// the outer two points only shape the tangents. The blending polynomials
/// are parameterized by a tension scalar: 0.5 reproduces the classic
/// Catmull-Rom matrix, smaller values sharpen corners, larger values curl
/// the line. Tension is not clamped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CatmullRomSegment<T> {
    points: [Point2<T>; 4],
    tension: T,
}

impl<T> CatmullRomSegment<T>
where
    T: Float,
{
    pub fn new(points: [Point2<T>; 4], tension: T) -> Self {
        CatmullRomSegment { points, tension }
    }

    pub fn tension(&self) -> T {
        self.tension
    }

    /// The on-curve start point (`t = 0`).
    pub fn start(&self) -> Point2<T> {
        self.points[1]
    }

    /// The on-curve end point (`t = 1`).
    pub fn end(&self) -> Point2<T> {
        self.points[2]
    }

    /// Evaluate the span at `t`. Values outside `[0, 1]` extrapolate the
    /// cubic, which is well-defined but leaves the intended span.
    pub fn eval(&self, t: T) -> Point2<T> {
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let [p0, p1, p2, p3] = self.points;
        let k = self.tension;

        let a = p0 * -k + p1 * (two - k) + p2 * (k - two) + p3 * k;
        let b = p0 * (two * k) + p1 * (k - three) + p2 * (three - two * k) - p3 * k;
        let c = (p2 - p0) * k;
        let d = p1;

        ((a * t + b) * t + c) * t + d
    }
}

/// A Catmull-Rom spline over a borrowed control-point slice.
///
/// The spline never mutates the slice; the caller keeps ownership and the
/// points must stay untouched for the lifetime of any sampling iterator.
/// With `n` control points there are `n - 3` evaluatable segments, so the
/// curve covers the interior points `points[1] ..= points[n - 2]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CatmullRomSpline<'a, T> {
    pub(crate) control_points: &'a [Point2<T>],
    pub(crate) tension: T,
}

impl<'a, T> CatmullRomSpline<'a, T>
where
    T: Float,
{
    /// Create a spline over `control_points`. Fails if fewer than four
    /// points are supplied, as no segment has a full point window then.
    pub fn new(control_points: &'a [Point2<T>], tension: T) -> Result<Self, CurveError> {
        if control_points.len() < 4 {
            return Err(CurveError::TooFewControlPoints {
                required: 4,
                actual: control_points.len(),
            });
        }
        Ok(CatmullRomSpline {
            control_points,
            tension,
        })
    }

    pub fn control_points(&self) -> &'a [Point2<T>] {
        self.control_points
    }

    pub fn tension(&self) -> T {
        self.tension
    }

    pub fn segment_count(&self) -> usize {
        self.control_points.len() - 3
    }

    /// Return the segment built from the window starting at `index`.
    pub fn segment(&self, index: usize) -> Result<CatmullRomSegment<T>, CurveError> {
        if index >= self.segment_count() {
            return Err(CurveError::SegmentOutOfRange {
                index,
                segment_count: self.segment_count(),
            });
        }
        let window = &self.control_points[index..index + 4];
        Ok(CatmullRomSegment::new(
            [window[0], window[1], window[2], window[3]],
            self.tension,
        ))
    }

    /// Evaluate segment `index` at local parameter `t`.
    pub fn eval_segment(&self, index: usize, t: T) -> Result<Point2<T>, CurveError> {
        Ok(self.segment(index)?.eval(t))
    }

    /// Lazily walk the curve from its start up to
    /// `reveal_fraction * segment_count` in steps of `1 / steps_per_segment`
    /// of a segment. The reveal boundary may land mid-segment, which is what
    /// makes progressive draw-in animation smooth. A fraction of 1.0 covers
    /// every segment and ends exactly on the last interior control point.
    ///
    /// `reveal_fraction` is clamped to `[0, 1]`; a zero step count is
    /// treated as one step per segment.
    pub fn samples(&self, steps_per_segment: usize, reveal_fraction: T) -> SplineSamples<'a, T> {
        let steps = steps_per_segment.max(1);
        let reveal = reveal_fraction.min(T::one()).max(T::zero());
        SplineSamples {
            spline: *self,
            steps,
            limit: reveal * T::from(self.segment_count()).unwrap(),
            cursor: 0,
        }
    }

    /// Collect the fully revealed curve.
    pub fn sample_all(&self, steps_per_segment: usize) -> Vec<Point2<T>> {
        self.samples(steps_per_segment, T::one()).collect()
    }
}

/// Iterator over curve points produced by [`CatmullRomSpline::samples`].
///
/// Walks a global parameter (whole part: segment index, fractional part:
/// local `t`) so that segment joins are emitted exactly once.
#[derive(Debug, Clone)]
pub struct SplineSamples<'a, T> {
    spline: CatmullRomSpline<'a, T>,
    steps: usize,
    limit: T,
    cursor: usize,
}

impl<'a, T> Iterator for SplineSamples<'a, T>
where
    T: Float,
{
    type Item = Point2<T>;

    fn next(&mut self) -> Option<Point2<T>> {
        let global = T::from(self.cursor).unwrap() / T::from(self.steps).unwrap();
        if global > self.limit + T::from(EPSILON).unwrap() {
            return None;
        }
        self.cursor += 1;

        let count = self.spline.segment_count();
        let mut index = global.floor().to_usize().unwrap_or(0);
        // the final sample of a full reveal lands on t = 1 of the last segment
        if index >= count {
            index = count - 1;
        }
        let local = global - T::from(index).unwrap();

        let window = &self.spline.control_points[index..index + 4];
        let segment = CatmullRomSegment::new(
            [window[0], window[1], window[2], window[3]],
            self.spline.tension,
        );
        Some(segment.eval(local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    fn fixture() -> [Point2<f64>; 4] {
        [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 3.0),
            Point2::new(5.0, 1.0),
        ]
    }

    fn path() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 3.0),
            Point2::new(5.0, 1.0),
            Point2::new(7.0, 8.0),
        ]
    }

    /// The classic fixed-matrix form, tension 0.5 baked in.
    fn classic_catmull_rom(points: [Point2<f64>; 4], t: f64) -> Point2<f64> {
        let [p0, p1, p2, p3] = points;
        let t2 = t * t;
        let t3 = t2 * t;
        (p1 * 2.0
            + (p2 - p0) * t
            + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
            + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * t3)
            * 0.5
    }

    #[test]
    fn eval_interpolates_endpoints_for_any_tension() {
        for tension in [0.0, 0.3, 0.5, 0.7, 1.0, 1.8, -0.4] {
            let segment = CatmullRomSegment::new(fixture(), tension);
            let start = segment.eval(0.0);
            let end = segment.eval(1.0);
            assert!(start.distance_squared(Point2::new(1.0, 1.0)) < EPSILON);
            assert!(end.distance_squared(Point2::new(2.0, 3.0)) < EPSILON);
        }
    }

    #[test]
    fn canonical_tension_matches_classic_matrix_form() {
        let segment = CatmullRomSegment::new(fixture(), 0.5);
        for t in [0.25, 0.5, 0.75] {
            let ours = segment.eval(t);
            let classic = classic_catmull_rom(fixture(), t);
            assert!(ours.distance_squared(classic) < EPSILON);
        }
    }

    /// Pinned evaluation of segment 0 at t = 0.5 with tension 0.7,
    /// precomputed by hand from the blending polynomials.
    #[test]
    fn tension_07_midpoint_fixture() {
        let points = path();
        let spline = CatmullRomSpline::new(&points, 0.7).unwrap();
        let mid = spline.eval_segment(0, 0.5).unwrap();
        assert!(mid.distance_squared(Point2::new(1.325, 2.2625)) < EPSILON);
    }

    #[test]
    fn too_few_control_points_is_an_error() {
        let short = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        let result = CatmullRomSpline::new(&short, 0.5);
        assert_eq!(
            result.err(),
            Some(CurveError::TooFewControlPoints {
                required: 4,
                actual: 2
            })
        );
    }

    #[test]
    fn segment_index_is_bounds_checked() {
        let points = path();
        let spline = CatmullRomSpline::new(&points, 0.5).unwrap();
        assert_eq!(spline.segment_count(), 2);
        assert!(spline.segment(0).is_ok());
        assert!(spline.segment(1).is_ok());
        assert_eq!(
            spline.segment(2).err(),
            Some(CurveError::SegmentOutOfRange {
                index: 2,
                segment_count: 2
            })
        );
    }

    #[test]
    fn full_reveal_covers_every_segment_once() {
        let points = path();
        let spline = CatmullRomSpline::new(&points, 0.5).unwrap();
        let samples = spline.sample_all(10);

        // steps * segments + the final on-curve point
        assert_eq!(samples.len(), 10 * 2 + 1);
        assert!(samples[0].distance_squared(points[1]) < EPSILON);
        assert!(samples[20].distance_squared(points[3]) < EPSILON);
    }

    #[test]
    fn partial_reveal_stops_mid_segment() {
        let points = path();
        let spline = CatmullRomSpline::new(&points, 0.5).unwrap();

        // limit = 0.25 * 2 segments = global 0.5, i.e. 6 of the 21 samples
        let partial: Vec<_> = spline.samples(10, 0.25).collect();
        assert_eq!(partial.len(), 6);

        // the revealed prefix matches the full sweep point for point
        let full = spline.sample_all(10);
        for (a, b) in partial.iter().zip(full.iter()) {
            assert!(a.distance_squared(*b) < EPSILON);
        }
    }

    #[test]
    fn reveal_fraction_is_clamped() {
        let points = path();
        let spline = CatmullRomSpline::new(&points, 0.5).unwrap();

        let none: Vec<_> = spline.samples(10, -1.0).collect();
        assert_eq!(none.len(), 1); // the start point is always revealed

        let all: Vec<_> = spline.samples(10, 7.5).collect();
        assert_eq!(all.len(), spline.sample_all(10).len());
    }
}
