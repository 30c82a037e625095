use bezier_geometry::*;
use flo_binding::*;

///
/// A 2D point where each coordinate can be changed and observed independently
///
#[derive(Clone)]
pub struct PointModel {
    /// The x coordinate of this point
    pub x: Binding<f64>,

    /// The y coordinate of this point
    pub y: Binding<f64>
}

impl PointModel {
    ///
    /// Creates a new point model at the specified position
    ///
    pub fn new(point: Coord2) -> PointModel {
        PointModel {
            x: bind(point.x()),
            y: bind(point.y())
        }
    }

    ///
    /// Reads the current position of this point
    ///
    /// When called from within a computed binding, the binding will depend on both coordinates.
    ///
    pub fn get(&self) -> Coord2 {
        Coord2(self.x.get(), self.y.get())
    }

    ///
    /// Moves this point
    ///
    pub fn set(&self, point: Coord2) {
        self.x.set(point.x());
        self.y.set(point.y());
    }
}

impl Default for PointModel {
    fn default() -> PointModel {
        PointModel::new(Coord2::origin())
    }
}
