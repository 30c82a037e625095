mod curve_view;

pub use self::curve_view::*;
