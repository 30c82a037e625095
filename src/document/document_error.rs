use bezier_layout::*;

use serde_json;

use std::io;
use std::fmt;
use std::error::Error;

///
/// Errors that can occur while saving or loading a curve document
///
#[derive(Debug)]
pub enum DocumentError {
    /// The document could not be converted to or from JSON
    Serialization(serde_json::Error),

    /// The document could not be read or written
    Io(io::Error),

    /// The file was written by a version of the file format that this version can't read
    UnsupportedVersion(u32),

    /// One of the points of the curve is not a finite number
    InvalidCurve(ControlPoint)
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> DocumentError {
        DocumentError::Serialization(err)
    }
}

impl From<io::Error> for DocumentError {
    fn from(err: io::Error) -> DocumentError {
        DocumentError::Io(err)
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::DocumentError::*;

        match self {
            Serialization(err)          => write!(f, "The curve document is not in the expected format: {}", err),
            Io(err)                     => write!(f, "Could not access the curve document: {}", err),
            UnsupportedVersion(version) => write!(f, "Curve documents of version {} are not supported", version),
            InvalidCurve(point)         => write!(f, "Point {} of the curve is not a finite position", point)
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DocumentError::Serialization(err)   => Some(err),
            DocumentError::Io(err)              => Some(err),
            _                                   => None
        }
    }
}
