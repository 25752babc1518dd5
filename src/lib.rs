//! camber - a parametric 2D path-curve engine.
//!
//! Turns a sparse ordered list of control points into renderable geometry:
//! a tension-parameterized Catmull-Rom curve through the interior points,
//! squared-distance queries against the raw or sampled path, a constant-width
//! offset ribbon built from per-sample normals, and a truncated discrete
//! Fourier approximation of the same path. A pure reveal-fraction function
//! maps wall-clock time onto the progressive draw-in of both curve flavors.
//!
//! The crate is pure computation: no windowing, no GPU state, no I/O.
//! Rendering layers consume the point streams produced here.
//!
//! # Examples
//! ```rust
//! use camber::{CurveEngine, EngineConfig, Point2};
//!
//! let path = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(2.0, 3.0),
//!     Point2::new(5.0, 1.0),
//!     Point2::new(7.0, 8.0),
//! ];
//! let engine = CurveEngine::new(EngineConfig::default(), path).unwrap();
//!
//! // fully revealed curve, starts on the first interior control point
//! let curve = engine.spline_points(1.0);
//! assert_eq!(curve.first().copied(), Some(Point2::new(1.0, 1.0)));
//!
//! // constant-width stroke geometry around it
//! let ribbon = engine.ribbon(1.0);
//! assert_eq!(ribbon.left().len(), curve.len() - 2);
//! ```

pub mod catmull_rom;
pub mod distance;
pub mod engine;
pub mod errors;
pub mod fourier;
pub mod point2;
pub mod reveal;
pub mod ribbon;

pub use catmull_rom::{CatmullRomSegment, CatmullRomSpline, SplineSamples};
pub use distance::{
    point_distance_squared, polyline_bounds, polyline_distance_squared, polyline_length,
    segment_distance_squared,
};
pub use engine::{CurveEngine, EngineConfig};
pub use errors::CurveError;
pub use fourier::PathSpectrum;
pub use point2::Point2;
pub use reveal::{reveal_fraction, RevealCycle};
pub use ribbon::Ribbon;

/// The native floating point type used whenever a concrete scalar is needed.
pub type NativeFloat = f64;

/// Tolerance for comparisons against degenerate geometry and in tests.
pub const EPSILON: NativeFloat = 1e-10;
