//!
//! # Cubic bezier curves
//!
//! `BezierCurve` is the trait implemented by anything that describes a cubic bezier curve by its
//! start point, two control points and end point. `Curve` is the default implementation.
//!
//! The `basis` function evaluates the curve directly, while `de_casteljau4` performs the
//! construction that the viewer draws as scaffolding between the control points.
//!

mod basis;
mod curve;
mod de_casteljau;

pub use self::basis::*;
pub use self::curve::*;
pub use self::de_casteljau::*;
