//!
//! # View-space layout for a cubic bezier curve
//!
//! Everything in this crate is a pure function of its inputs: a curve (which may be missing), the
//! `DisplaySettings` for the document and the `Viewport` that is being drawn into. The output is
//! geometry in pixel coordinates, tagged with the line style it should be drawn in, which can be
//! turned into `Draw` instructions for any `GraphicsContext`.
//!
//! Model space is mapped to pixel space by scaling so that `display_bounds` logical units fit across
//! the viewport, then moving the logical origin to `origin_offset` (in logical units) from the
//! viewport's corner:
//!
//! ```
//! # use bezier_geometry::*;
//! # use bezier_layout::*;
//! let settings    = DisplaySettings { origin_offset: Coord2(1.0, 2.0), ..DisplaySettings::default() };
//! let viewport    = Viewport::new(400.0, 200.0);
//!
//! let pixel       = to_pixel_space(Coord2(1.0, 1.0), &settings, viewport).unwrap();
//! assert!(pixel == Coord2(80.0, 60.0));
//! ```
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

extern crate bezier_geometry as curves;
extern crate bezier_canvas as canvas;

mod error;
mod settings;
mod viewport;
mod transform;
mod grid;
mod path;
mod control_point;
mod construction;
mod view_layout;

pub use self::error::*;
pub use self::settings::*;
pub use self::viewport::*;
pub use self::transform::*;
pub use self::grid::*;
pub use self::path::*;
pub use self::control_point::*;
pub use self::construction::*;
pub use self::view_layout::*;
