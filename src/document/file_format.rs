use super::document_error::*;

use bezier_geometry::*;
use bezier_layout::*;

///
/// The version of the file format written by this version of the library
///
pub const CURVE_FILE_VERSION: u32 = 1;

///
/// The serialized form of a curve document
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct CurveFile {
    /// Version of the file format
    pub version: u32,

    /// The curve itself
    pub curve: CurveData
}

///
/// The serialized form of a cubic bezier curve
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct CurveData {
    pub p0: Coord2,
    pub p1: Coord2,
    pub p2: Coord2,
    pub p3: Coord2
}

impl CurveData {
    ///
    /// Returns the serialized form of a curve
    ///
    pub fn from_curve(curve: &bezier::Curve<Coord2>) -> CurveData {
        let [p0, p1, p2, p3] = curve.all_points();

        CurveData { p0, p1, p2, p3 }
    }

    ///
    /// Converts back to a curve
    ///
    pub fn to_curve(&self) -> bezier::Curve<Coord2> {
        bezier::Curve::from_points(self.p0, (self.p1, self.p2), self.p3)
    }

    ///
    /// Fails with the first point that doesn't have finite coordinates
    ///
    /// JSON has no representation for infinity or NaN, so a curve containing them can't be saved.
    ///
    pub fn validate(&self) -> Result<(), DocumentError> {
        let curve = self.to_curve();

        match ControlPoint::ALL.iter().find(|point| !point.point_in(&curve).is_finite()) {
            Some(point) => Err(DocumentError::InvalidCurve(*point)),
            None        => Ok(())
        }
    }
}

impl CurveFile {
    ///
    /// Creates the file contents for a curve
    ///
    pub fn new(curve: &bezier::Curve<Coord2>) -> CurveFile {
        CurveFile {
            version:    CURVE_FILE_VERSION,
            curve:      CurveData::from_curve(curve)
        }
    }

    ///
    /// Checks that this file can be loaded
    ///
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.version != CURVE_FILE_VERSION {
            return Err(DocumentError::UnsupportedVersion(self.version));
        }

        self.curve.validate()
    }
}
