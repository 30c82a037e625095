//!
//! The document holds the curve being edited and the settings it's displayed with
//!
//! Each coordinate is its own binding, so anything computed from the curve (the view's drawing,
//! for instance) is updated whenever a single value changes.
//!

mod point_model;
mod curve_model;
mod settings_model;
mod document_error;
mod file_format;
mod curve_document;

pub use self::point_model::*;
pub use self::curve_model::*;
pub use self::settings_model::*;
pub use self::document_error::*;
pub use self::file_format::*;
pub use self::curve_document::*;
