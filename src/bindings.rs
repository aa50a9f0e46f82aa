//! JavaScript facade.
//!
//! `WheelChart` is the only type the host page touches. DOM events go in as
//! raw `MouseEvent`/`TouchEvent`s; engine [`Action`]s come out as calls to the
//! registered `onChange(id, value)` and `onHover(id, left, top)` / `onHover()`
//! callbacks, cursor updates, and redraws.

use std::io;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

use crate::coords::{Point, PointerSample};
use crate::data::{default_categories, parse_categories};
use crate::engine::{Action, Chart};
use crate::error::ChartError;
use crate::options::{ChartOptions, fit_chart_size};

fn to_js(err: ChartError) -> JsValue {
    JsValue::from_str(&format!("{}: {err}", err.error_code()))
}

/// Install a console-backed `tracing` subscriber. Safe to call more than once.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .without_time()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
    if let Err(err) = installed {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logging already initialized: {err}")));
    }
}

/// Largest square chart for the available area.
#[wasm_bindgen(js_name = fitChartSize)]
#[must_use]
pub fn fit_chart_size_js(available_width: f64, available_height: f64) -> f64 {
    fit_chart_size(available_width, available_height)
}

#[wasm_bindgen]
pub struct WheelChart {
    chart: Chart,
    on_change: Option<js_sys::Function>,
    on_hover: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl WheelChart {
    /// Bind to `canvas`. `options` is a JSON object; `None` takes all defaults.
    ///
    /// # Errors
    ///
    /// Rejects malformed or invalid options.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, options: Option<String>) -> Result<WheelChart, JsValue> {
        let options = match options {
            Some(json) => ChartOptions::from_json(&json).map_err(to_js)?,
            None => ChartOptions::default(),
        };
        if let Err(err) = canvas.style().set_property("touch-action", "none") {
            tracing::warn!(error = ?err, "could not disable touch scrolling");
        }
        let seed = (js_sys::Math::random() * f64::from(u32::MAX)) as u64 ^ (js_sys::Date::now() as u64);
        let mut chart = Chart::new(canvas, options, seed);
        chart
            .core
            .set_categories(default_categories())
            .map_err(to_js)?;
        let mut facade = WheelChart { chart, on_change: None, on_hover: None };
        facade.dispatch(vec![Action::SetCursor(crate::engine::CURSOR_IDLE), Action::RenderNeeded]);
        Ok(facade)
    }

    /// Replace the category list with a JSON array.
    ///
    /// # Errors
    ///
    /// Rejects malformed JSON, out-of-range values, and duplicate ids.
    #[wasm_bindgen(js_name = setCategories)]
    pub fn set_categories(&mut self, json: &str) -> Result<(), JsValue> {
        let categories = parse_categories(json).map_err(to_js)?;
        let actions = self.chart.core.set_categories(categories).map_err(to_js)?;
        self.dispatch(actions);
        Ok(())
    }

    /// # Errors
    ///
    /// Rejects non-finite or non-positive sizes.
    #[wasm_bindgen(js_name = setSize)]
    pub fn set_size(&mut self, size: f64) -> Result<(), JsValue> {
        let actions = self.chart.core.set_size(size).map_err(to_js)?;
        self.dispatch(actions);
        Ok(())
    }

    /// Pin the device pixel ratio; `undefined` follows `window.devicePixelRatio`.
    ///
    /// # Errors
    ///
    /// Rejects non-finite or non-positive ratios.
    #[wasm_bindgen(js_name = setDevicePixelRatio)]
    pub fn set_device_pixel_ratio(&mut self, dpr: Option<f64>) -> Result<(), JsValue> {
        let actions = self.chart.core.set_device_pixel_ratio(dpr).map_err(to_js)?;
        self.dispatch(actions);
        Ok(())
    }

    #[wasm_bindgen(js_name = setReadOnly)]
    pub fn set_read_only(&mut self, read_only: bool) {
        let actions = self.chart.core.set_read_only(read_only);
        self.dispatch(actions);
    }

    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&mut self, callback: js_sys::Function) {
        self.on_change = Some(callback);
    }

    #[wasm_bindgen(js_name = setOnHover)]
    pub fn set_on_hover(&mut self, callback: js_sys::Function) {
        self.on_hover = Some(callback);
    }

    #[wasm_bindgen(js_name = mouseDown)]
    pub fn mouse_down(&mut self, ev: &MouseEvent) {
        let actions = self.chart.on_pointer_down(&mouse_sample(ev));
        self.dispatch(actions);
    }

    #[wasm_bindgen(js_name = mouseMove)]
    pub fn mouse_move(&mut self, ev: &MouseEvent) {
        let actions = self.chart.on_pointer_move(&mouse_sample(ev));
        self.dispatch(actions);
    }

    #[wasm_bindgen(js_name = mouseUp)]
    pub fn mouse_up(&mut self) {
        let actions = self.chart.on_pointer_up();
        self.dispatch(actions);
    }

    #[wasm_bindgen(js_name = mouseLeave)]
    pub fn mouse_leave(&mut self) {
        let actions = self.chart.on_pointer_leave();
        self.dispatch(actions);
    }

    #[wasm_bindgen(js_name = touchStart)]
    pub fn touch_start(&mut self, ev: &TouchEvent) {
        let actions = self.chart.on_pointer_down(&touch_sample(ev));
        self.dispatch(actions);
    }

    #[wasm_bindgen(js_name = touchMove)]
    pub fn touch_move(&mut self, ev: &TouchEvent) {
        let actions = self.chart.on_touch_move(&touch_sample(ev));
        self.dispatch(actions);
    }

    #[wasm_bindgen(js_name = touchEnd)]
    pub fn touch_end(&mut self) {
        let actions = self.chart.on_pointer_up();
        self.dispatch(actions);
    }

    /// Redraw now. A missing context skips the frame.
    pub fn render(&mut self) {
        if let Err(err) = self.chart.render() {
            match err {
                ChartError::SurfaceUnavailable => tracing::debug!("no 2d context; frame skipped"),
                other => tracing::warn!(code = other.error_code(), error = %other, "render failed"),
            }
        }
    }
}

impl WheelChart {
    fn dispatch(&mut self, actions: Vec<Action>) {
        let mut render = false;
        for action in actions {
            match action {
                Action::ValueChanged { id, value } => self.notify_change(&id, value),
                Action::HoverChanged(report) => self.notify_hover(report.as_ref()),
                Action::SetCursor(cursor) => {
                    if let Err(err) = self.chart.canvas().style().set_property("cursor", cursor) {
                        tracing::warn!(error = ?err, "could not set cursor");
                    }
                }
                Action::RenderNeeded => render = true,
            }
        }
        if render {
            self.render();
        }
    }

    fn notify_change(&self, id: &str, value: u8) {
        let Some(callback) = &self.on_change else {
            return;
        };
        let result = callback.call2(&JsValue::NULL, &JsValue::from_str(id), &JsValue::from(value));
        if let Err(err) = result {
            tracing::warn!(error = ?err, id, value, "onChange threw");
        }
    }

    fn notify_hover(&self, report: Option<&crate::input::HoverReport>) {
        let Some(callback) = &self.on_hover else {
            return;
        };
        let result = match report {
            Some(r) => callback.call3(
                &JsValue::NULL,
                &JsValue::from_str(&r.category_id),
                &JsValue::from_f64(r.anchor.x),
                &JsValue::from_f64(r.anchor.y),
            ),
            None => callback.call0(&JsValue::NULL),
        };
        if let Err(err) = result {
            tracing::warn!(error = ?err, "onHover threw");
        }
    }
}

fn mouse_sample(ev: &MouseEvent) -> PointerSample {
    PointerSample::Mouse(Point::new(f64::from(ev.client_x()), f64::from(ev.client_y())))
}

fn touch_sample(ev: &TouchEvent) -> PointerSample {
    let touches = ev.touches();
    let points = (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect();
    PointerSample::Touches(points)
}

/// Buffers one formatted event and hands it to `console.log` when dropped.
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
    }
}
