use super::document::*;

use bezier_geometry::*;
use bezier_layout::*;
use flo_binding::*;

use std::fmt;
use std::error::Error;

///
/// The fewest digits shown after the decimal point when formatting a field
///
const MIN_FRACTION_DIGITS: usize = 1;

///
/// The most digits shown after the decimal point when formatting a field
///
const MAX_FRACTION_DIGITS: usize = 5;

///
/// The editable numeric fields of a curve
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum CurveField {
    P0X, P0Y,
    P1X, P1Y,
    P2X, P2Y,
    P3X, P3Y,

    /// The parameter for the De Casteljau construction, which must be in the range 0-1
    T
}

///
/// The editable numeric fields of the display settings
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum SettingsField {
    /// Logical units across the width of the view
    DisplayWidth,

    /// Logical units across the height of the view
    DisplayHeight,

    /// Logical units from the left of the view to the origin
    OriginX,

    /// Logical units from the top of the view to the origin
    OriginY
}

///
/// Reasons a field edit can be rejected
///
#[derive(Clone, Debug, PartialEq)]
pub enum FieldError {
    /// The text entered for the field is not a finite number
    NotANumber(String),

    /// The value is outside of the range allowed for the field
    OutOfRange(f64),

    /// The value would make the display settings invalid
    InvalidSettings(ConfigurationError)
}

impl From<ConfigurationError> for FieldError {
    fn from(err: ConfigurationError) -> FieldError {
        FieldError::InvalidSettings(err)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldError::NotANumber(text)        => write!(f, "'{}' is not a number", text),
            FieldError::OutOfRange(value)       => write!(f, "{} must be between 0 and 1", value),
            FieldError::InvalidSettings(err)    => err.fmt(f)
        }
    }
}

impl Error for FieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FieldError::InvalidSettings(err)    => Some(err),
            _                                   => None
        }
    }
}

impl CurveField {
    pub const ALL: [CurveField; 9] = [
        CurveField::P0X, CurveField::P0Y,
        CurveField::P1X, CurveField::P1Y,
        CurveField::P2X, CurveField::P2Y,
        CurveField::P3X, CurveField::P3Y,
        CurveField::T
    ];

    ///
    /// The point and coordinate that this field edits, or `None` for the `T` field
    ///
    pub fn coordinate(&self) -> Option<(ControlPoint, Axis)> {
        use self::CurveField::*;

        match self {
            P0X => Some((ControlPoint::P0, Axis::X)),
            P0Y => Some((ControlPoint::P0, Axis::Y)),
            P1X => Some((ControlPoint::P1, Axis::X)),
            P1Y => Some((ControlPoint::P1, Axis::Y)),
            P2X => Some((ControlPoint::P2, Axis::X)),
            P2Y => Some((ControlPoint::P2, Axis::Y)),
            P3X => Some((ControlPoint::P3, Axis::X)),
            P3Y => Some((ControlPoint::P3, Axis::Y)),
            T   => None
        }
    }
}

impl SettingsField {
    pub const ALL: [SettingsField; 4] = [SettingsField::DisplayWidth, SettingsField::DisplayHeight, SettingsField::OriginX, SettingsField::OriginY];
}

///
/// Formats a field value for display, with between 1 and 5 digits after the decimal point
///
pub fn format_field_value(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }

    // Avoid displaying '-0.0'
    let value       = if value == 0.0 { 0.0 } else { value };
    let formatted   = format!("{:.*}", MAX_FRACTION_DIGITS, value);

    // Remove trailing zeros, down to the minimum number of fraction digits
    let point       = formatted.find('.').unwrap_or(formatted.len());
    let min_len     = point + 1 + MIN_FRACTION_DIGITS;
    let trimmed     = formatted.trim_end_matches('0');
    let trimmed     = if trimmed.len() < min_len { &formatted[0..min_len] } else { trimmed };

    // '-0.00000' can come out of rounding a small negative number
    if trimmed.starts_with('-') && trimmed[1..].chars().all(|c| c == '0' || c == '.') {
        trimmed[1..].to_string()
    } else {
        trimmed.to_string()
    }
}

///
/// Parses a value typed into a field
///
/// Parsing is lenient: surrounding whitespace and grouping commas are ignored. Only finite numbers are accepted.
///
pub fn parse_field_value(text: &str) -> Result<f64, FieldError> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite()  => Ok(value),
        _                               => Err(FieldError::NotANumber(text.to_string()))
    }
}

impl CurveModel {
    ///
    /// Reads the current value of a field
    ///
    pub fn read_field(&self, field: CurveField) -> f64 {
        match field.coordinate() {
            Some((point, Axis::X))  => self.point(point).x.get(),
            Some((point, Axis::Y))  => self.point(point).y.get(),
            None                    => self.t.get()
        }
    }

    ///
    /// Returns the text to display for a field
    ///
    pub fn format_field(&self, field: CurveField) -> String {
        format_field_value(self.read_field(field))
    }

    ///
    /// Sets a field to a new numeric value
    ///
    pub fn set_field(&self, field: CurveField, value: f64) -> Result<(), FieldError> {
        if !value.is_finite() {
            return Err(FieldError::NotANumber(format!("{}", value)));
        }

        match field.coordinate() {
            Some((point, Axis::X))  => self.point(point).x.set(value),
            Some((point, Axis::Y))  => self.point(point).y.set(value),
            None                    => {
                if value < 0.0 || value > 1.0 {
                    return Err(FieldError::OutOfRange(value));
                }

                self.t.set(value);
            }
        }

        Ok(())
    }

    ///
    /// Updates a field from the text that the user typed into it
    ///
    /// The model is left unchanged if the text is rejected.
    ///
    pub fn write_field(&self, field: CurveField, text: &str) -> Result<(), FieldError> {
        let result = parse_field_value(text).and_then(|value| self.set_field(field, value));

        if let Err(err) = &result {
            warn!("Rejected value for {:?}: {}", field, err);
        }

        result
    }
}

impl SettingsModel {
    ///
    /// Reads the current value of a settings field
    ///
    pub fn read_field(&self, field: SettingsField) -> f64 {
        let settings = self.get();

        match field {
            SettingsField::DisplayWidth     => settings.display_bounds.x(),
            SettingsField::DisplayHeight    => settings.display_bounds.y(),
            SettingsField::OriginX          => settings.origin_offset.x(),
            SettingsField::OriginY          => settings.origin_offset.y()
        }
    }

    ///
    /// Returns the text to display for a settings field
    ///
    pub fn format_field(&self, field: SettingsField) -> String {
        format_field_value(self.read_field(field))
    }

    ///
    /// Updates a settings field from the text that the user typed into it
    ///
    /// The settings are left unchanged if the text is rejected or the new settings would be invalid.
    ///
    pub fn write_field(&self, field: SettingsField, text: &str) -> Result<(), FieldError> {
        let value = parse_field_value(text)?;

        self.edit(|settings| {
            match field {
                SettingsField::DisplayWidth     => settings.display_bounds.0 = value,
                SettingsField::DisplayHeight    => settings.display_bounds.1 = value,
                SettingsField::OriginX          => settings.origin_offset.0 = value,
                SettingsField::OriginY          => settings.origin_offset.1 = value
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn format_whole_number() {
        assert!(format_field_value(10.0) == "10.0");
    }

    #[test]
    fn format_trims_trailing_zeros() {
        assert!(format_field_value(2.5) == "2.5");
        assert!(format_field_value(0.125) == "0.125");
    }

    #[test]
    fn format_rounds_to_five_digits() {
        assert!(format_field_value(1.0/3.0) == "0.33333");
        assert!(format_field_value(2.0/3.0) == "0.66667");
    }

    #[test]
    fn format_negative_zero() {
        assert!(format_field_value(-0.0) == "0.0");
        assert!(format_field_value(-0.000001) == "0.0");
    }

    #[test]
    fn format_negative() {
        assert!(format_field_value(-12.75) == "-12.75");
    }

    #[test]
    fn parse_with_whitespace_and_commas() {
        assert!(parse_field_value("  1,234.5 ") == Ok(1234.5));
    }

    #[test]
    fn parse_rejects_text() {
        assert!(parse_field_value("abc") == Err(FieldError::NotANumber("abc".to_string())));
        assert!(parse_field_value("") == Err(FieldError::NotANumber("".to_string())));
    }

    #[test]
    fn parse_rejects_non_finite() {
        assert!(parse_field_value("inf").is_err());
        assert!(parse_field_value("NaN").is_err());
        assert!(parse_field_value("1e400").is_err());
    }

    #[test]
    fn every_point_coordinate_has_a_field() {
        let coordinates: Vec<_> = CurveField::ALL.iter().filter_map(|field| field.coordinate()).collect();

        assert!(coordinates.len() == 8);
        for point in ControlPoint::ALL.iter() {
            assert!(coordinates.contains(&(*point, Axis::X)));
            assert!(coordinates.contains(&(*point, Axis::Y)));
        }
    }
}
