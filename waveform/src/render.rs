//! Polyline stroking: draws a prepared trace to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives points already mapped
//! by [`crate::trace`] and produces pixels; it holds no state of its own.

use web_sys::CanvasRenderingContext2d;

use crate::style::TraceStyle;
use crate::trace::Point;

/// Clear the full canvas rect and stroke `points` as one open path.
///
/// The first point is a pen-down (`moveTo`); every following point extends
/// the path (`lineTo`). Callers re-invoke this once per animation frame, so
/// the previous frame is always erased before the next one is stroked.
pub fn draw(ctx: &CanvasRenderingContext2d, points: &[Point], style: &TraceStyle, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);

    ctx.set_line_width(style.line_width);
    ctx.set_stroke_style_str(style.stroke);

    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(point.x, point.y);
        } else {
            ctx.line_to(point.x, point.y);
        }
    }
    ctx.stroke();
}
