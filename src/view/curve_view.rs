use super::super::document::*;

use bezier_geometry::*;
use bezier_canvas::*;
use bezier_layout::*;
use flo_binding::*;

use std::sync::*;

///
/// Displays a curve document in a viewport
///
/// The drawing for the view is a computed binding that depends on every coordinate of the curve, the
/// document's display settings, the viewport and the visibility toggles. It updates whenever any
/// of these change, including when the document itself is replaced.
///
pub struct CurveView {
    /// The document being displayed (or None if no document is attached yet)
    document: Arc<Mutex<Option<CurveDocument>>>,

    /// Incremented whenever the document is replaced
    document_generation: Binding<u64>,

    /// The size of the surface being drawn on
    viewport: Binding<Viewport>,

    /// Whether or not handles are drawn at p0, p1, p2 and p3
    show_control_points: Binding<bool>,

    /// Whether or not the De Casteljau construction is drawn
    show_construction: Binding<bool>,

    /// How the curve is sent to the renderer
    rendering: Binding<CurveRendering>,

    /// Set until the first document shown in this view has had its display bounds fitted to the viewport
    needs_aspect_fit: bool,

    /// The drawing instructions for the view
    drawing: BindRef<Vec<Draw>>
}

impl CurveView {
    ///
    /// Creates a view with no document and an empty viewport
    ///
    pub fn new() -> CurveView {
        let document            = Arc::new(Mutex::new(None));
        let document_generation = bind(0);
        let viewport            = bind(Viewport::new(0.0, 0.0));
        let show_control_points = bind(false);
        let show_construction   = bind(false);
        let rendering           = bind(CurveRendering::NativeCubic);

        let drawing             = Self::drawing_binding(Arc::clone(&document), document_generation.clone(), viewport.clone(), show_control_points.clone(), show_construction.clone(), rendering.clone());

        CurveView {
            document,
            document_generation,
            viewport,
            show_control_points,
            show_construction,
            rendering,
            needs_aspect_fit:   true,
            drawing
        }
    }

    ///
    /// Creates the binding that lays out and draws the view
    ///
    fn drawing_binding(document: Arc<Mutex<Option<CurveDocument>>>, document_generation: Binding<u64>, viewport: Binding<Viewport>, show_control_points: Binding<bool>, show_construction: Binding<bool>, rendering: Binding<CurveRendering>) -> BindRef<Vec<Draw>> {
        BindRef::from(computed(move || {
            // Depend on the document being replaced
            document_generation.get();

            // Nothing to draw until the view has a size
            let viewport    = viewport.get();
            if !viewport.is_drawable() {
                return vec![];
            }

            let document    = Self::lock_document(&document);
            let options     = LayoutOptions {
                rendering:              rendering.get(),
                show_control_points:    show_control_points.get(),
                show_construction:      show_construction.get(),
                t:                      document.as_ref().map(|document| document.curve().t.get()).unwrap_or(0.5)
            };

            match Self::layout_document(document.as_ref(), viewport, &options) {
                Ok(layout)  => layout.to_drawing(),
                Err(err)    => {
                    warn!("Could not lay out curve view: {}", err);
                    vec![]
                }
            }
        }))
    }

    ///
    /// Retrieves a copy of the document reference
    ///
    fn lock_document(document: &Mutex<Option<CurveDocument>>) -> Option<CurveDocument> {
        match document.lock() {
            Ok(document)    => document.clone(),
            Err(poisoned)   => poisoned.into_inner().clone()
        }
    }

    ///
    /// Lays out a document (reading from its bindings)
    ///
    fn layout_document(document: Option<&CurveDocument>, viewport: Viewport, options: &LayoutOptions) -> Result<ViewLayout, LayoutError> {
        let settings    = document.map(|document| document.settings().get()).unwrap_or_default();
        let curve       = document.map(|document| document.curve().curve());

        layout_view(curve.as_ref(), &settings, viewport, options)
    }

    ///
    /// Shows a document in this view, replacing any document that was there before
    ///
    /// The display bounds of the first document shown in a view are stretched to match the aspect ratio of the
    /// viewport as soon as there's a viewport with an area to match. Documents shown after that keep their bounds.
    ///
    pub fn set_document(&mut self, document: CurveDocument) {
        match self.document.lock() {
            Ok(mut current)     => *current = Some(document),
            Err(poisoned)       => *poisoned.into_inner() = Some(document)
        }

        self.fit_aspect_ratio_if_needed();

        self.document_generation.set(self.document_generation.get() + 1);
    }

    ///
    /// The document that's being displayed, if there is one
    ///
    pub fn document(&self) -> Option<CurveDocument> {
        Self::lock_document(&self.document)
    }

    ///
    /// Returns the document or the `MissingModel` error
    ///
    fn require_document(&self) -> Result<CurveDocument, LayoutError> {
        self.document().ok_or(LayoutError::MissingModel)
    }

    ///
    /// Updates the size of the surface this view is drawn on
    ///
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport.set(viewport);
        self.fit_aspect_ratio_if_needed();
    }

    ///
    /// The size of the surface this view is drawn on
    ///
    pub fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    ///
    /// Stretches the display bounds of the first document shown in this view to the viewport
    ///
    fn fit_aspect_ratio_if_needed(&mut self) {
        if !self.needs_aspect_fit {
            return;
        }

        let viewport = self.viewport.get();
        if !viewport.is_drawable() {
            return;
        }

        let document = match self.document() {
            Some(document)  => document,
            None            => return
        };

        if let Err(err) = document.settings().fit_to_aspect_ratio(viewport) {
            warn!("Could not fit display bounds to the viewport: {}", err);
        }

        self.needs_aspect_fit = false;
    }

    ///
    /// The drawing instructions for this view
    ///
    /// These begin by clearing the canvas, and are regenerated whenever anything that affects the view changes.
    ///
    pub fn drawing(&self) -> BindRef<Vec<Draw>> {
        self.drawing.clone()
    }

    ///
    /// The options to lay out the view with, given the current state of the toggles
    ///
    fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            rendering:              self.rendering.get(),
            show_control_points:    self.show_control_points.get(),
            show_construction:      self.show_construction.get(),
            t:                      self.document().map(|document| document.curve().t.get()).unwrap_or(0.5)
        }
    }

    ///
    /// Lays out the view as it currently stands
    ///
    pub fn layout(&self) -> Result<ViewLayout, LayoutError> {
        let document = self.document();

        Self::layout_document(document.as_ref(), self.viewport.get(), &self.layout_options())
    }

    ///
    /// Finds the visible control point handle under a pixel position, if there is one
    ///
    /// Handles are hit anywhere within one handle diameter of their centre. Nothing is hit while the handles are hidden.
    ///
    pub fn hit_test(&self, pixel: Coord2) -> Option<ControlPoint> {
        if !self.show_control_points.get() {
            return None;
        }

        let radius = self.document()?.settings().get().control_point_size;

        self.layout().ok()?.control_point_at(pixel, radius)
    }

    ///
    /// Moves a control point so that it's under a pixel position, returning its new position in model space
    ///
    pub fn drag_control_point(&self, point: ControlPoint, pixel: Coord2) -> Result<Coord2, LayoutError> {
        let document    = self.require_document()?;
        let new_point   = to_model_space(pixel, &document.settings().get(), self.viewport.get())?;

        document.curve().set_point(point, new_point);

        Ok(new_point)
    }

    ///
    /// Sets how the curve is described to the renderer
    ///
    pub fn set_rendering(&self, rendering: CurveRendering) {
        self.rendering.set(rendering);
    }

    ///
    /// True if handles are being drawn at p0, p1, p2 and p3
    ///
    pub fn shows_control_points(&self) -> bool {
        self.show_control_points.get()
    }

    ///
    /// True if the De Casteljau construction is being drawn
    ///
    pub fn shows_construction(&self) -> bool {
        self.show_construction.get()
    }

    ///
    /// Shows or hides the handles at p0, p1, p2 and p3
    ///
    pub fn toggle_control_points(&self) {
        self.show_control_points.set(!self.show_control_points.get());
    }

    ///
    /// Shows or hides the De Casteljau construction
    ///
    pub fn toggle_construction(&self) {
        self.show_construction.set(!self.show_construction.get());
    }
}

impl Default for CurveView {
    fn default() -> CurveView {
        CurveView::new()
    }
}
