use super::point_model::*;

use bezier_geometry::*;
use bezier_layout::*;
use flo_binding::*;

///
/// The cubic bezier curve being edited, along with the parameter used to display its construction
///
#[derive(Clone)]
pub struct CurveModel {
    /// The start point
    pub p0: PointModel,

    /// The first control point
    pub p1: PointModel,

    /// The second control point
    pub p2: PointModel,

    /// The end point
    pub p3: PointModel,

    /// The position along the curve (0-1) that the De Casteljau construction is shown for
    pub t: Binding<f64>
}

impl CurveModel {
    ///
    /// Creates a curve model with every point at the origin
    ///
    pub fn empty() -> CurveModel {
        CurveModel::new(&bezier::Curve::empty())
    }

    ///
    /// Creates a curve model with the points from an existing curve
    ///
    pub fn new(curve: &bezier::Curve<Coord2>) -> CurveModel {
        let [p0, p1, p2, p3] = curve.all_points();

        CurveModel {
            p0: PointModel::new(p0),
            p1: PointModel::new(p1),
            p2: PointModel::new(p2),
            p3: PointModel::new(p3),
            t:  bind(0.5)
        }
    }

    ///
    /// Retrieves the model for one of the points of this curve
    ///
    pub fn point(&self, point: ControlPoint) -> &PointModel {
        match point {
            ControlPoint::P0 => &self.p0,
            ControlPoint::P1 => &self.p1,
            ControlPoint::P2 => &self.p2,
            ControlPoint::P3 => &self.p3
        }
    }

    ///
    /// Reads the current state of the curve
    ///
    pub fn curve(&self) -> bezier::Curve<Coord2> {
        bezier::Curve::from_points(self.p0.get(), (self.p1.get(), self.p2.get()), self.p3.get())
    }

    ///
    /// Replaces every point in this model with the points from another curve
    ///
    /// The existing bindings are updated, so anything observing this model sees the change.
    ///
    pub fn set_curve(&self, curve: &bezier::Curve<Coord2>) {
        for point in ControlPoint::ALL.iter() {
            self.point(*point).set(point.point_in(curve));
        }
    }

    ///
    /// Moves one of the points of this curve
    ///
    pub fn set_point(&self, point: ControlPoint, new_position: Coord2) {
        self.point(point).set(new_position);
    }

    ///
    /// Updates the construction parameter, clamping it to the range 0-1
    ///
    pub fn set_t(&self, t: f64) {
        let t = if t.is_nan() { 0.0 } else { t.max(0.0).min(1.0) };
        self.t.set(t);
    }

    ///
    /// The point on the curve at the current value of t
    ///
    pub fn point_at_t(&self) -> Coord2 {
        self.curve().point_at_pos(self.t.get())
    }
}

impl Default for CurveModel {
    fn default() -> CurveModel {
        CurveModel::empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_curve_is_at_origin() {
        let model = CurveModel::empty();

        assert!(model.curve().all_points() == [Coord2(0.0, 0.0); 4]);
        assert!(model.t.get() == 0.5);
    }

    #[test]
    fn set_curve_updates_existing_points() {
        let model   = CurveModel::empty();
        let p2      = model.p2.clone();
        let curve   = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(10.0, 20.0), Coord2(30.0, 40.0)), Coord2(50.0, 50.0));

        model.set_curve(&curve);

        assert!(model.curve() == curve);
        assert!(p2.get() == Coord2(30.0, 40.0));
    }

    #[test]
    fn t_is_clamped() {
        let model = CurveModel::empty();

        model.set_t(1.5);
        assert!(model.t.get() == 1.0);

        model.set_t(-0.25);
        assert!(model.t.get() == 0.0);

        model.set_t(0.25);
        assert!(model.t.get() == 0.25);
    }
}
