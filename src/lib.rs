//!
//! # Bezier curve viewer
//!
//! The document model, persistence and view controller for an editor that displays a single cubic
//! bezier curve along with its De Casteljau construction and a coordinate grid.
//!
//! Every value the user can change is a `flo_binding` binding: the view's drawing is computed from
//! the curve, the display settings and the viewport, so it's regenerated whenever any of them change.
//! The geometry lives in `bezier_geometry`, the drawing instructions in `bezier_canvas` and the pure
//! layout code in `bezier_layout`, all of which are re-exported here.
//!
//! ```
//! # use bezier_curves::*;
//! let curve       = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(10.0, 20.0), Coord2(30.0, 40.0)), Coord2(50.0, 50.0));
//! let document    = CurveDocument::with_curve(&curve);
//!
//! let json        = document.to_json().unwrap();
//! let loaded      = CurveDocument::from_json(&json).unwrap();
//!
//! assert!(loaded.curve().curve() == curve);
//! ```
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

extern crate serde_json;
extern crate flo_binding;

extern crate bezier_geometry;
extern crate bezier_canvas;
extern crate bezier_layout;

mod document;
mod fields;
mod view;

pub use self::document::*;
pub use self::fields::*;
pub use self::view::*;

pub use bezier_geometry::*;
pub use bezier_canvas::*;
pub use bezier_layout::*;
