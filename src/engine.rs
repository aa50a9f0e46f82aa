use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::POPOVER_LIFT_PX;
use crate::coords::{ClientRect, CoordinateMapper, Point, PointerSample};
use crate::data::{Category, validate_categories};
use crate::drag::{self, DragContext, Transition};
use crate::error::ChartError;
use crate::geometry::ChartGeometry;
use crate::hit::{TextMeasurer, label_at_point};
use crate::input::{DragState, HoverChange, HoverReport, HoverState, next_hover};
use crate::options::{ChartOptions, resolve_device_pixel_ratio, validate_size};
use crate::render::{self, Fonts, Scene, SceneLayout};
use crate::sketch::{Jitter, SeededJitter};
use crate::surface::Surface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Cursor while a slice is being dragged.
pub const CURSOR_DRAGGING: &str = "grabbing";
/// Cursor otherwise.
pub const CURSOR_IDLE: &str = "crosshair";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The user dragged category `id` to `value`; the host should store it.
    ValueChanged { id: String, value: u8 },
    /// Show a popover for a label, or clear it with `None`.
    HoverChanged(Option<HoverReport>),
    SetCursor(&'static str),
    RenderNeeded,
}

/// Core chart state: all logic that does not touch the canvas element.
///
/// Separated from `Chart` so it can be tested without WASM/browser dependencies.
pub struct ChartCore {
    pub categories: Vec<Category>,
    pub options: ChartOptions,
    pub drag: DragState,
    pub hover: HoverState,
    fonts: Fonts,
}

impl Default for ChartCore {
    fn default() -> Self {
        Self::with_options(ChartOptions::default())
    }
}

impl ChartCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: ChartOptions) -> Self {
        let fonts = Fonts::new(&options.font_family);
        Self {
            categories: Vec::new(),
            options,
            drag: DragState::Idle,
            hover: HoverState::None,
            fonts,
        }
    }

    // --- Data inputs ---

    /// Replace the category snapshot with the host store's current list.
    ///
    /// # Errors
    ///
    /// Returns the validation error and keeps the previous snapshot.
    pub fn set_categories(&mut self, categories: Vec<Category>) -> Result<Vec<Action>, ChartError> {
        validate_categories(&categories)?;
        self.categories = categories;
        Ok(vec![Action::RenderNeeded])
    }

    /// Resize the chart.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` for non-finite or non-positive sizes.
    pub fn set_size(&mut self, size: f64) -> Result<Vec<Action>, ChartError> {
        validate_size(size)?;
        self.options.size = size;
        Ok(vec![Action::RenderNeeded])
    }

    /// Pin the device pixel ratio, or pass `None` to follow the display again.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` for non-finite or non-positive ratios.
    pub fn set_device_pixel_ratio(&mut self, dpr: Option<f64>) -> Result<Vec<Action>, ChartError> {
        if let Some(value) = dpr {
            validate_size(value)?;
        }
        self.options.device_pixel_ratio = dpr;
        Ok(vec![Action::RenderNeeded])
    }

    /// Toggle read-only mode. Entering it cancels an active drag.
    pub fn set_read_only(&mut self, read_only: bool) -> Vec<Action> {
        self.options.read_only = read_only;
        if read_only && self.drag != DragState::Idle {
            return self.finish_drag();
        }
        Vec::new()
    }

    // --- Queries ---

    /// Geometry of the current size and slice count.
    #[must_use]
    pub fn geometry(&self) -> ChartGeometry {
        ChartGeometry::new(self.options.size, self.categories.len())
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.options.size)
    }

    /// The slice currently being dragged, if any.
    #[must_use]
    pub fn active_slice(&self) -> Option<usize> {
        self.drag.active_index()
    }

    /// Ratio the next pass renders with, given the display's `detected` one.
    #[must_use]
    pub fn device_pixel_ratio(&self, detected: f64) -> f64 {
        resolve_device_pixel_ratio(self.options.device_pixel_ratio, detected)
    }

    #[must_use]
    pub fn fonts(&self) -> &Fonts {
        &self.fonts
    }

    /// Deterministic layout of the next pass.
    #[must_use]
    pub fn layout<M: TextMeasurer + ?Sized>(&self, measurer: &M) -> SceneLayout {
        let geometry = self.geometry();
        render::layout(&self.scene(&geometry), measurer)
    }

    // --- Input events ---

    /// Pointer-down or touch-start.
    pub fn on_pointer_down(&mut self, sample: &PointerSample, rect: &ClientRect) -> Vec<Action> {
        let point = self.mapper().to_logical(sample, rect);
        let geometry = self.geometry();
        let was_idle = self.drag == DragState::Idle;
        let transition = drag::press(self.drag, point, &self.drag_context(&geometry));
        let mut actions = self.apply(transition);
        if was_idle && self.drag != DragState::Idle {
            actions.push(Action::SetCursor(CURSOR_DRAGGING));
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Pointer-move: continues an active drag and refreshes the label hover.
    pub fn on_pointer_move<M: TextMeasurer + ?Sized>(
        &mut self,
        sample: &PointerSample,
        rect: &ClientRect,
        measurer: &M,
    ) -> Vec<Action> {
        let mut actions = self.on_drag_move(sample, rect);
        let point = self.mapper().to_logical(sample, rect);
        actions.extend(self.update_hover(point, rect, measurer));
        actions
    }

    /// Touch-move: continues an active drag. Touches never hover.
    pub fn on_touch_move(&mut self, sample: &PointerSample, rect: &ClientRect) -> Vec<Action> {
        self.on_drag_move(sample, rect)
    }

    /// Pointer-up or touch-end.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if self.drag == DragState::Idle {
            return Vec::new();
        }
        self.finish_drag()
    }

    /// Pointer-leave: ends the drag and clears the hover.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let mut actions = self.on_pointer_up();
        let (hover, change) = next_hover(&self.hover, None);
        self.hover = hover;
        if change.is_some() {
            actions.push(Action::HoverChanged(None));
        }
        actions
    }

    // --- Render ---

    /// Paint the current state onto `surface`. `detected_dpr` is the display's
    /// current ratio; an override in the options wins over it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any surface call fails.
    pub fn render<S, J>(&self, surface: &mut S, jitter: &mut J, detected_dpr: f64) -> Result<(), ChartError>
    where
        S: Surface + ?Sized,
        J: Jitter + ?Sized,
    {
        let geometry = self.geometry();
        let dpr = self.device_pixel_ratio(detected_dpr);
        render::draw(surface, jitter, &self.scene(&geometry), dpr)
    }

    // --- Internals ---

    fn scene<'a>(&'a self, geometry: &'a ChartGeometry) -> Scene<'a> {
        Scene {
            categories: &self.categories,
            active: self.active_slice(),
            geometry,
            label_padding: self.options.label_padding,
            fonts: &self.fonts,
        }
    }

    fn drag_context<'a>(&'a self, geometry: &'a ChartGeometry) -> DragContext<'a> {
        DragContext {
            categories: &self.categories,
            geometry,
            read_only: self.options.read_only,
        }
    }

    fn on_drag_move(&mut self, sample: &PointerSample, rect: &ClientRect) -> Vec<Action> {
        if self.drag == DragState::Idle {
            return Vec::new();
        }
        let point = self.mapper().to_logical(sample, rect);
        let geometry = self.geometry();
        let transition = drag::drag(self.drag, point, &self.drag_context(&geometry));
        self.apply(transition)
    }

    fn apply(&mut self, transition: Transition) -> Vec<Action> {
        self.drag = transition.state;
        transition
            .change
            .map(|c| Action::ValueChanged { id: c.id, value: c.value })
            .into_iter()
            .collect()
    }

    fn finish_drag(&mut self) -> Vec<Action> {
        self.drag = drag::release(self.drag);
        vec![Action::SetCursor(CURSOR_IDLE), Action::RenderNeeded]
    }

    fn update_hover<M: TextMeasurer + ?Sized>(
        &mut self,
        point: Option<Point>,
        rect: &ClientRect,
        measurer: &M,
    ) -> Vec<Action> {
        let Some(point) = point else {
            return Vec::new();
        };
        let geometry = self.geometry();
        let mapper = self.mapper();
        let found = label_at_point(
            point,
            &self.categories,
            &geometry,
            self.options.label_padding,
            measurer,
            &self.fonts.label,
        )
        .map(|(index, hit_box)| {
            let client = mapper.to_client(hit_box.anchor, rect);
            HoverReport {
                category_id: self.categories[index].id.clone(),
                anchor: Point::new(client.x, client.y - POPOVER_LIFT_PX),
            }
        });

        let (hover, change) = next_hover(&self.hover, found);
        self.hover = hover;
        match change {
            Some(HoverChange::Show(report)) => vec![Action::HoverChanged(Some(report))],
            Some(HoverChange::Clear) => vec![Action::HoverChanged(None)],
            None => Vec::new(),
        }
    }
}

/// The full chart. Wraps `ChartCore` and owns the browser canvas element.
pub struct Chart {
    canvas: HtmlCanvasElement,
    jitter: SeededJitter,
    pub core: ChartCore,
}

impl Chart {
    /// Create a chart bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, options: ChartOptions, seed: u64) -> Self {
        Self {
            canvas,
            jitter: SeededJitter::new(seed),
            core: ChartCore::with_options(options),
        }
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// On-screen bounding rectangle of the canvas.
    #[must_use]
    pub fn client_rect(&self) -> ClientRect {
        let rect = self.canvas.get_bounding_client_rect();
        ClientRect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, sample: &PointerSample) -> Vec<Action> {
        let rect = self.client_rect();
        self.core.on_pointer_down(sample, &rect)
    }

    pub fn on_pointer_move(&mut self, sample: &PointerSample) -> Vec<Action> {
        let rect = self.client_rect();
        match self.context() {
            Ok(ctx) => self.core.on_pointer_move(sample, &rect, &ctx),
            Err(e) => {
                tracing::debug!(code = e.error_code(), "hover skipped");
                self.core.on_touch_move(sample, &rect)
            }
        }
    }

    pub fn on_touch_move(&mut self, sample: &PointerSample) -> Vec<Action> {
        let rect = self.client_rect();
        self.core.on_touch_move(sample, &rect)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    // --- Render ---

    /// Size the backing store for the current size and DPR, then paint.
    ///
    /// # Errors
    ///
    /// Returns `SurfaceUnavailable` if no 2D context can be obtained, or the
    /// first failing canvas call.
    pub fn render(&mut self) -> Result<(), ChartError> {
        let mut ctx = self.context()?;
        let detected = detected_device_pixel_ratio();
        self.size_backing_store(self.core.device_pixel_ratio(detected))?;
        self.core.render(&mut ctx, &mut self.jitter, detected)
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, ChartError> {
        self.canvas
            .get_context("2d")
            .map_err(|_| ChartError::SurfaceUnavailable)?
            .ok_or(ChartError::SurfaceUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::SurfaceUnavailable)
    }

    fn size_backing_store(&self, dpr: f64) -> Result<(), ChartError> {
        let size = self.core.options.size;
        let backing = (size * dpr).round() as u32;
        if self.canvas.width() != backing {
            self.canvas.set_width(backing);
        }
        if self.canvas.height() != backing {
            self.canvas.set_height(backing);
        }
        let style = self.canvas.style();
        let css = format!("{size}px");
        style
            .set_property("width", &css)
            .map_err(|e| ChartError::Surface(format!("{e:?}")))?;
        style
            .set_property("height", &css)
            .map_err(|e| ChartError::Surface(format!("{e:?}")))
    }
}

/// `window.devicePixelRatio`, or 1 outside a window.
fn detected_device_pixel_ratio() -> f64 {
    web_sys::window().map_or(1.0, |w| w.device_pixel_ratio())
}
