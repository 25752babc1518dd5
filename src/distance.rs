//! Squared-distance queries against points, segments and sampled polylines.
//!
//! Everything here stays in squared space; callers take the root only when
//! an absolute distance is needed (e.g. for a proximity color band).

use num_traits::Float;

use super::*;

/// Squared distance between a probe and a single point.
pub fn point_distance_squared<T>(probe: Point2<T>, a: Point2<T>) -> T
where
    T: Float,
{
    probe.distance_squared(a)
}

/// Squared distance between a probe and the segment `[a, b]`.
///
/// Projects the probe onto the segment and clamps the projection parameter
/// to `[0, 1]`. A segment whose endpoints (nearly) coincide degenerates to
/// the point distance instead of dividing by zero.
pub fn segment_distance_squared<T>(probe: Point2<T>, a: Point2<T>, b: Point2<T>) -> T
where
    T: Float,
{
    let ab = b - a;
    let squared_len = ab.squared_length();
    if squared_len < T::from(EPSILON).unwrap() {
        return point_distance_squared(probe, a);
    }

    let t = ((probe - a).dot(ab) / squared_len)
        .min(T::one())
        .max(T::zero());
    let projection = a + ab * t;
    probe.distance_squared(projection)
}

/// Smallest squared distance from a probe to a polyline.
///
/// An empty polyline yields `infinity` as the "nothing is near" sentinel;
/// a single point falls back to the point distance. The result does not
/// depend on the polyline's traversal direction.
pub fn polyline_distance_squared<T>(probe: Point2<T>, polyline: &[Point2<T>]) -> T
where
    T: Float,
{
    match polyline {
        [] => T::infinity(),
        [single] => point_distance_squared(probe, *single),
        _ => polyline.windows(2).fold(T::infinity(), |nearest, pair| {
            nearest.min(segment_distance_squared(probe, pair[0], pair[1]))
        }),
    }
}

/// Length of a polyline as the sum of its segment lengths.
pub fn polyline_length<T>(polyline: &[Point2<T>]) -> T
where
    T: Float,
{
    let mut length = T::zero();
    for pair in polyline.windows(2) {
        length = length + pair[0].distance(pair[1]);
    }
    length
}

/// Axis-aligned bounds of a polyline as a (min, max) corner pair.
/// Returns `None` for an empty polyline.
pub fn polyline_bounds<T>(polyline: &[Point2<T>]) -> Option<(Point2<T>, Point2<T>)>
where
    T: Float,
{
    let first = *polyline.first()?;
    let mut min = first;
    let mut max = first;
    for point in &polyline[1..] {
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
    }
    Some((min, max))
}
