use super::file_format::*;
use super::curve_model::*;
use super::document_error::*;
use super::settings_model::*;

use bezier_geometry::*;
use serde_json;

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

///
/// A document containing a single cubic bezier curve and the settings used to display it
///
/// Cloning a document produces another reference to the same bindings: edits made through
/// one clone are visible through all of them.
///
#[derive(Clone)]
pub struct CurveDocument {
    curve:      CurveModel,
    settings:   SettingsModel
}

impl CurveDocument {
    ///
    /// Creates a new document with every point of the curve at the origin
    ///
    pub fn new() -> CurveDocument {
        CurveDocument::with_curve(&bezier::Curve::empty())
    }

    ///
    /// Creates a document containing a particular curve
    ///
    pub fn with_curve(curve: &bezier::Curve<Coord2>) -> CurveDocument {
        CurveDocument {
            curve:      CurveModel::new(curve),
            settings:   SettingsModel::new()
        }
    }

    ///
    /// The model for the curve in this document
    ///
    pub fn curve(&self) -> &CurveModel {
        &self.curve
    }

    ///
    /// The display settings for this document
    ///
    pub fn settings(&self) -> &SettingsModel {
        &self.settings
    }

    ///
    /// Serializes the curve in this document
    ///
    pub fn to_json(&self) -> Result<String, DocumentError> {
        let file = CurveFile::new(&self.curve.curve());
        file.validate()?;

        Ok(serde_json::to_string_pretty(&file)?)
    }

    ///
    /// Creates a new document from some serialized JSON
    ///
    pub fn from_json(json: &str) -> Result<CurveDocument, DocumentError> {
        let curve = Self::read_curve(json)?;

        Ok(CurveDocument::with_curve(&curve))
    }

    ///
    /// Writes this document to a stream
    ///
    pub fn save<Target: Write>(&self, target: &mut Target) -> Result<(), DocumentError> {
        let json = self.to_json()?;

        target.write_all(json.as_bytes())?;
        target.flush()?;

        Ok(())
    }

    ///
    /// Replaces the curve in this document with one read from a stream
    ///
    /// The points are updated in place, so views showing this document update to show the new curve.
    /// If the stream can't be read, the curve is left as it was.
    ///
    pub fn load<Source: Read>(&self, source: &mut Source) -> Result<(), DocumentError> {
        let mut json = String::new();
        source.read_to_string(&mut json)?;

        let curve = Self::read_curve(&json)?;
        self.curve.set_curve(&curve);

        debug!("Loaded curve {:?}", curve.all_points());
        Ok(())
    }

    ///
    /// Saves this document to a file
    ///
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), DocumentError> {
        let mut file = fs::File::create(path)?;
        self.save(&mut file)
    }

    ///
    /// Replaces the curve in this document with the one stored in a file
    ///
    pub fn load_from_path<P: AsRef<Path>>(&self, path: P) -> Result<(), DocumentError> {
        let mut file = fs::File::open(path)?;
        self.load(&mut file)
    }

    ///
    /// Decodes and checks the curve from a JSON document
    ///
    fn read_curve(json: &str) -> Result<bezier::Curve<Coord2>, DocumentError> {
        let file: CurveFile = serde_json::from_str(json)?;

        if let Err(err) = file.validate() {
            warn!("Could not load curve: {}", err);
            return Err(err);
        }

        Ok(file.curve.to_curve())
    }
}

impl Default for CurveDocument {
    fn default() -> CurveDocument {
        CurveDocument::new()
    }
}
