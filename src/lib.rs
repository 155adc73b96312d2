//! Procedural 2D vector shapes built from cubic Bézier segments.
//!
//! Every generator is a pure function from a target `width`/`height` and a
//! handful of shape parameters to a closed [`Path`]. Bézier based shapes
//! (blob, polygon) are fitted using the tight bounding box of the actual
//! curves, not of their control polygon, so the emitted outline touches the
//! edges of the target rectangle exactly.
//!
//! ```
//! use contour::blob;
//!
//! let path = blob::generate(200.0, 120.0, 5, 5.0, 9);
//! let bounds = path.bounds();
//! assert!((bounds.max_x - 200.0).abs() < 1e-9);
//! assert!(path.to_string().ends_with('Z'));
//! ```
//!
//! The crate never touches a display: callers decide when the geometry is
//! stale and hand the serialized path to whatever renders it.

extern crate num_traits;
extern crate tinyvec;

pub(crate) use num_traits::Float;
pub(crate) use tinyvec::ArrayVec;

pub mod point2;
pub use point2::Point2;

pub mod roots;
pub use roots::solve_quadratic;

pub mod line;
pub use line::LineSegment;

pub mod cubic_bezier;
pub use cubic_bezier::CubicBezier;

pub mod bounds;
pub use bounds::{Bounds, Fit, FitTransform};

pub mod path;
pub use path::{Path, PathCommand, Segment};

pub mod random;
pub use random::SeededRandom;

pub mod error;
pub use error::{ColorParseError, ShapeError};

pub mod blob;
pub use blob::BlobParams;

pub mod polygon;
pub use polygon::PolygonParams;

pub mod squircle;
pub use squircle::{CornerParams, SquircleParams, SquircleRing};

pub mod superellipse;
pub use superellipse::SuperellipseParams;

pub mod shape;
pub use shape::Shape;

pub mod color;
pub use color::Rgba;

pub mod style;
pub use style::{LinearGradient, Shadow, ShadowFilter, ShadowKind};

/// The float type all shape generators compute in.
pub type NativeFloat = f64;

/// Tolerance used for geometric comparisons.
pub const EPSILON: NativeFloat = 1e-10;
