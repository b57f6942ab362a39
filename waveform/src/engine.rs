//! Canvas-bound waveform engine.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::render;
use crate::style::TraceStyle;
use crate::trace;

/// A waveform renderer bound to one canvas element.
///
/// The engine resolves the 2D context once at construction and then turns
/// each frame of time-domain analyser bytes into a stroked polyline. All
/// math lives in [`crate::trace`] so the engine itself stays a thin shell
/// over the browser context.
pub struct WaveformEngine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    style: TraceStyle,
}

impl WaveformEngine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the element has no 2D context (already claimed with
    /// an incompatible context type, or a non-canvas element was passed in).
    pub fn new(canvas: HtmlCanvasElement, style: TraceStyle) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;
        Ok(Self { canvas, ctx, style })
    }

    /// Canvas width in CSS pixels (the `width` attribute).
    #[must_use]
    pub fn width(&self) -> f64 {
        f64::from(self.canvas.width())
    }

    /// Canvas height in CSS pixels (the `height` attribute).
    #[must_use]
    pub fn height(&self) -> f64 {
        f64::from(self.canvas.height())
    }

    /// Draw one frame of time-domain bytes.
    pub fn render(&self, samples: &[u8]) {
        let width = self.width();
        let height = self.height();
        let points = trace::sample_points(samples, width, height);
        render::draw(&self.ctx, &points, &self.style, width, height);
    }

    /// Draw the flat midline shown before any audio flows.
    pub fn render_idle(&self) {
        let width = self.width();
        let height = self.height();
        render::draw(&self.ctx, &trace::midline(width, height), &self.style, width, height);
    }
}
