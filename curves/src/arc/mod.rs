//!
//! # Describing circular arcs
//!
//! The `arc` module provides routines for describing circles and converting them to bezier
//! curves.
//!

mod circle;

pub use self::circle::*;
