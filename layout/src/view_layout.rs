use super::grid::*;
use super::path::*;
use super::error::*;
use super::settings::*;
use super::viewport::*;
use super::transform::*;
use super::construction::*;
use super::control_point::*;

use curves::*;
use curves::bezier;
use canvas::*;

///
/// Options for a layout pass that don't come from the document's display settings
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LayoutOptions {
    /// How the curve should be described to the renderer
    pub rendering: CurveRendering,

    /// Whether or not to draw handles at p0, p1, p2 and p3
    pub show_control_points: bool,

    /// Whether or not to draw the De Casteljau construction
    pub show_construction: bool,

    /// The value of t to show the construction for
    pub t: f64
}

impl Default for LayoutOptions {
    fn default() -> LayoutOptions {
        LayoutOptions {
            rendering:              CurveRendering::NativeCubic,
            show_control_points:    false,
            show_construction:      false,
            t:                      0.5
        }
    }
}

///
/// A set of lines that are all stroked in the same style
///
#[derive(Clone, PartialEq, Debug)]
pub struct StrokedLines {
    pub style:      LineStyle,
    pub segments:   Vec<LineSegment>
}

///
/// The curve path along with the style it's stroked in
///
#[derive(Clone, PartialEq, Debug)]
pub struct StrokedCurve {
    pub style:  LineStyle,
    pub path:   CurvePath
}

///
/// The scaffolding of the De Casteljau construction, with the style its lines are stroked in
///
#[derive(Clone, PartialEq, Debug)]
pub struct StrokedConstruction {
    pub style:          LineStyle,
    pub construction:   ConstructionLayout
}

///
/// A filled circle marking a point
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Handle {
    pub center:     Coord2,
    pub diameter:   f64,
    pub color:      Color
}

///
/// Everything that needs to be drawn for the view, in pixel coordinates
///
#[derive(Clone, PartialEq, Debug)]
pub struct ViewLayout {
    /// The transform used to generate this layout
    pub transform: ViewTransform,

    /// Colour to clear the canvas to
    pub background: Color,

    /// The grid lines
    pub grid: StrokedLines,

    /// The two axis lines
    pub axes: StrokedLines,

    /// The curve, if there's a model to draw
    pub curve: Option<StrokedCurve>,

    /// Pixel positions of p0, p1, p2 and p3, if there's a model to draw
    pub control_points: Option<[Coord2; 4]>,

    /// The De Casteljau construction, if it's being shown and there's a model to draw
    pub construction: Option<StrokedConstruction>,

    /// The handles to draw over everything else
    pub handles: Vec<Handle>
}

///
/// Lays out the view for a curve (or just the grid and axes if there's no curve)
///
pub fn layout_view(curve: Option<&bezier::Curve<Coord2>>, settings: &DisplaySettings, viewport: Viewport, options: &LayoutOptions) -> Result<ViewLayout, LayoutError> {
    settings.validate()?;

    let transform       = ViewTransform::new(settings, viewport)?;

    // The grid and axes don't depend on the model. A grid too dense to draw is left out
    let grid_segments   = match grid_lines(&transform) {
        Ok(segments)    => segments,
        Err(err)        => {
            warn!("Leaving the grid out of the view: {}", err);
            vec![]
        }
    };

    let grid            = StrokedLines { style: settings.grid_line, segments: grid_segments };
    let axes            = StrokedLines { style: settings.axis_line, segments: axis_lines(&transform) };

    // Everything else is left out if there's no curve
    let curve_layout    = curve.map(|curve| StrokedCurve { style: settings.curve_line, path: curve_path(&transform, curve, options.rendering) });
    let control_points  = curve.map(|curve| control_point_positions(&transform, curve));
    let construction    = curve
        .filter(|_| options.show_construction)
        .map(|curve| StrokedConstruction { style: settings.construction_line, construction: ConstructionLayout::new(&transform, curve, options.t) });

    // Handles go at the control points and the construction points
    let handle          = |center: Coord2| Handle { center: center, diameter: settings.control_point_size, color: settings.control_point_color };
    let mut handles     = vec![];

    if options.show_control_points {
        if let Some(control_points) = control_points.as_ref() {
            handles.extend(control_points.iter().map(|point| handle(*point)));
        }
    }

    if let Some(construction) = construction.as_ref() {
        handles.extend(construction.construction.construction_points().into_iter().map(|point| handle(point)));
    }

    if curve.is_none() {
        debug!("Laying out view without a curve");
    }

    debug!("Laid out {} grid lines and {} handles in a {}x{} viewport", grid.segments.len(), handles.len(), viewport.width, viewport.height);

    Ok(ViewLayout {
        transform:      transform,
        background:     settings.background,
        grid:           grid,
        axes:           axes,
        curve:          curve_layout,
        control_points: control_points,
        construction:   construction,
        handles:        handles
    })
}

impl StrokedLines {
    ///
    /// Strokes these lines as a single path
    ///
    pub fn draw<Gc: GraphicsContext+?Sized>(&self, gc: &mut Gc) {
        if self.segments.is_empty() {
            return;
        }

        gc.new_path();
        for segment in self.segments.iter() {
            gc.move_to(segment.start.x() as f32, segment.start.y() as f32);
            gc.line_to(segment.end.x() as f32, segment.end.y() as f32);
        }

        self.style.apply(gc);
        gc.stroke();
    }
}

impl StrokedCurve {
    ///
    /// Strokes the curve
    ///
    pub fn draw<Gc: GraphicsContext+?Sized>(&self, gc: &mut Gc) {
        gc.new_path();
        self.path.draw(gc);

        self.style.apply(gc);
        gc.stroke();
    }
}

impl StrokedConstruction {
    ///
    /// Strokes the lines between each level of the construction
    ///
    pub fn draw<Gc: GraphicsContext+?Sized>(&self, gc: &mut Gc) {
        gc.new_path();

        for line in self.construction.lines() {
            let mut points = line.into_iter();

            if let Some(first) = points.next() {
                gc.move_to(first.x() as f32, first.y() as f32);
                for point in points {
                    gc.line_to(point.x() as f32, point.y() as f32);
                }
            }
        }

        self.style.apply(gc);
        gc.stroke();
    }
}

impl Handle {
    ///
    /// Fills the circle for this handle
    ///
    pub fn draw<Gc: GraphicsContext+?Sized>(&self, gc: &mut Gc) {
        gc.new_path();
        for d in draw_circle(self.center.x() as f32, self.center.y() as f32, (self.diameter / 2.0) as f32) {
            gc.draw(d);
        }

        gc.fill_color(self.color);
        gc.fill();
    }
}

impl ViewLayout {
    ///
    /// Returns the curve part of this layout, or `MissingModel` if there was no curve to lay out
    ///
    pub fn require_curve(&self) -> Result<&StrokedCurve, LayoutError> {
        self.curve.as_ref().ok_or(LayoutError::MissingModel)
    }

    ///
    /// Finds the control point nearest to a pixel position, provided it's within `radius` pixels
    ///
    pub fn control_point_at(&self, pixel: Coord2, radius: f64) -> Option<ControlPoint> {
        let control_points = self.control_points.as_ref()?;

        ControlPoint::ALL.iter()
            .map(|point| (*point, control_points[point.index()].distance_to(&pixel)))
            .filter(|(_, distance)| *distance <= radius)
            .fold(None, |nearest: Option<(ControlPoint, f64)>, (point, distance)| {
                match nearest {
                    Some((_, nearest_distance)) if nearest_distance <= distance => nearest,
                    _                                                           => Some((point, distance))
                }
            })
            .map(|(point, _)| point)
    }

    ///
    /// Sends the drawing instructions for this layout to a graphics context
    ///
    /// The grid is drawn first, then the axes, the curve, the construction and finally the handles.
    ///
    pub fn draw<Gc: GraphicsContext+?Sized>(&self, gc: &mut Gc) {
        self.grid.draw(gc);
        self.axes.draw(gc);

        if let Some(curve) = self.curve.as_ref() {
            curve.draw(gc);
        }

        if let Some(construction) = self.construction.as_ref() {
            construction.draw(gc);
        }

        for handle in self.handles.iter() {
            handle.draw(gc);
        }
    }

    ///
    /// Returns the drawing instructions for this layout, starting by clearing the canvas
    ///
    pub fn to_drawing(&self) -> Vec<Draw> {
        let mut drawing: Vec<Draw> = vec![];

        drawing.clear_canvas(self.background);
        self.draw(&mut drawing);

        drawing
    }
}
