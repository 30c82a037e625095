use super::grid::*;
use super::error::*;

///
/// The size in pixels of the surface that a layout is being generated for
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Viewport {
    pub width:  f64,
    pub height: f64
}

impl Viewport {
    ///
    /// Creates a new viewport
    ///
    pub fn new(width: f64, height: f64) -> Viewport {
        Viewport { width, height }
    }

    ///
    /// The size of this viewport along a particular axis
    ///
    #[inline]
    pub fn size_along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height
        }
    }

    ///
    /// True if this viewport has a finite, non-zero area
    ///
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    ///
    /// Returns an error if this viewport can't be laid out (in particular, if either dimension is 0)
    ///
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.is_drawable() {
            Ok(())
        } else {
            Err(ConfigurationError::Viewport(*self))
        }
    }

    ///
    /// The width of this viewport divided by its height
    ///
    pub fn aspect_ratio(&self) -> Result<f64, ConfigurationError> {
        self.validate()?;

        Ok(self.width / self.height)
    }
}
