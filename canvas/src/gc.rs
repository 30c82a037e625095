use super::draw::*;
use super::color::*;

use curves::*;
use curves::arc;
use curves::bezier;
use curves::bezier::BezierCurve;

use std::iter;

///
/// A graphics context provides the basic set of graphics actions that can be performed
///
pub trait GraphicsContext {
    fn new_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn bezier_curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn line_width(&mut self, width: f32);
    fn fill_color(&mut self, col: Color);
    fn stroke_color(&mut self, col: Color);
    fn clear_canvas(&mut self, color: Color);

    fn draw(&mut self, d: Draw) {
        use self::Draw::*;

        match d {
            NewPath                                     => self.new_path(),
            Move(x, y)                                  => self.move_to(x, y),
            Line(x, y)                                  => self.line_to(x, y),
            BezierCurve((x1, y1), (x2, y2), (x3, y3))   => self.bezier_curve_to(x1, y1, x2, y2, x3, y3),
            ClosePath                                   => self.close_path(),
            Fill                                        => self.fill(),
            Stroke                                      => self.stroke(),
            LineWidth(width)                            => self.line_width(width),
            FillColor(col)                              => self.fill_color(col),
            StrokeColor(col)                            => self.stroke_color(col),
            ClearCanvas(color)                          => self.clear_canvas(color)
        }
    }
}

///
/// Returns the drawing commands for a circle
///
pub fn draw_circle(center_x: f32, center_y: f32, radius: f32) -> Vec<Draw> {
    use self::Draw::*;

    // Generate the circle and turn it into bezier curves
    let circle                                  = arc::Circle::new(Coord2(center_x as f64, center_y as f64), radius as f64);
    let curves: Vec<bezier::Curve<Coord2>>      = circle.to_curves();
    let start_point                             = curves[0].start_point();

    // Draw the curves
    let curves  = curves.iter().map(|curve| Draw::from(curve));

    // Complete the path
    let path    = iter::once(Move(start_point.x() as f32, start_point.y() as f32))
        .chain(curves)
        .chain(iter::once(ClosePath));

    path.collect()
}

impl<'a, Curve: BezierCurve> From<&'a Curve> for Draw
where Curve::Point: Coordinate2D {
    fn from(curve: &'a Curve) -> Draw {
        let end         = curve.end_point();
        let (cp1, cp2)  = curve.control_points();

        Draw::BezierCurve(
            (end.x() as f32, end.y() as f32),
            (cp1.x() as f32, cp1.y() as f32),
            (cp2.x() as f32, cp2.y() as f32))
    }
}

///
/// Draws the specified bezier curve in a graphics context (assuming we're already at the start position)
///
pub fn gc_draw_bezier<Gc: GraphicsContext+?Sized, Curve: BezierCurve>(gc: &mut Gc, curve: &Curve)
where Curve::Point: Coordinate2D {
    gc.draw(Draw::from(curve))
}

///
/// A Vec<Draw> can be treated as a target for graphics primitives (just pushing the appropriate draw instructions)
///
impl GraphicsContext for Vec<Draw> {
    #[inline] fn new_path(&mut self)                                                    { self.push(Draw::NewPath); }
    #[inline] fn move_to(&mut self, x: f32, y: f32)                                     { self.push(Draw::Move(x, y)); }
    #[inline] fn line_to(&mut self, x: f32, y: f32)                                     { self.push(Draw::Line(x, y)); }
    #[inline] fn bezier_curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) { self.push(Draw::BezierCurve((x1, y1), (x2, y2), (x3, y3))); }
    #[inline] fn close_path(&mut self)                                                  { self.push(Draw::ClosePath); }
    #[inline] fn fill(&mut self)                                                        { self.push(Draw::Fill); }
    #[inline] fn stroke(&mut self)                                                      { self.push(Draw::Stroke); }
    #[inline] fn line_width(&mut self, width: f32)                                      { self.push(Draw::LineWidth(width)); }
    #[inline] fn fill_color(&mut self, col: Color)                                      { self.push(Draw::FillColor(col)); }
    #[inline] fn stroke_color(&mut self, col: Color)                                    { self.push(Draw::StrokeColor(col)); }
    #[inline] fn clear_canvas(&mut self, color: Color)                                  { self.push(Draw::ClearCanvas(color)); }

    #[inline]
    fn draw(&mut self, d: Draw) {
        self.push(d);
    }
}
