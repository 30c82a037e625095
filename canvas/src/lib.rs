//!
//! An abstract representation of the drawing actions for a vector canvas
//!
//! Layout code describes what to draw as a list of `Draw` instructions (or by calling the
//! `GraphicsContext` methods on something that collects them). The host is responsible for
//! turning these into pixels.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

extern crate bezier_geometry as curves;

mod gc;
mod draw;
mod color;
mod transform2d;

pub use self::gc::*;
pub use self::draw::*;
pub use self::color::*;
pub use self::transform2d::*;
