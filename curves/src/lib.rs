//!
//! # Cubic bezier geometry
//!
//! Coordinates, cubic bezier curves and the De Casteljau construction used to
//! draw the scaffolding between a curve's control points.
//!
//! ```
//! # use bezier_geometry::*;
//! let curve   = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(10.0, 20.0), Coord2(30.0, 40.0)), Coord2(50.0, 50.0));
//! let mid     = curve.point_at_pos(0.5);
//!
//! assert!(mid == Coord2(21.25, 28.75));
//! ```
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

pub mod bezier;
pub mod arc;

pub mod coordinate;
pub use self::coordinate::*;

pub mod geo;
pub use self::geo::*;

pub use self::bezier::{BezierCurve, BezierCurveFactory};
