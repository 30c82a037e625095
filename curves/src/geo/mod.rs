//!
//! # Traits for basic geometric definitions
//!
//! The `Geo` trait can be implemented by any type that has a particular type of coordinate: for
//! example, implementations of `BezierCurve` implement `Geo` in order to describe what type they
//! use for their points.
//!

mod geo;

pub use self::geo::*;
pub use super::coordinate::*;
