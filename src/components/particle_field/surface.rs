//! The 2D drawing primitives the renderer needs.
//!
//! Rendering is written against [`Surface`] so the browser canvas and the
//! recording surface used in tests share one code path.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::error::FieldError;

/// Minimal immediate-mode 2D drawing API.
pub trait Surface {
	/// Push the drawing state (alpha, colours, line width).
	fn save(&mut self);
	/// Pop the state pushed by the matching `save`.
	fn restore(&mut self);
	/// Erase a rectangle to transparent.
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
	/// Opacity applied to everything drawn next.
	fn set_global_alpha(&mut self, alpha: f64);
	/// CSS colour used by `fill`.
	fn set_fill_color(&mut self, css: &str);
	/// CSS colour used by `stroke`.
	fn set_stroke_color(&mut self, css: &str);
	/// Stroke width in pixels.
	fn set_line_width(&mut self, width: f64);
	/// Start a new, empty path.
	fn begin_path(&mut self);
	/// Add a full circle to the current path.
	fn arc(&mut self, x: f64, y: f64, radius: f64);
	/// Fill the current path.
	fn fill(&mut self);
	/// Begin a sub-path at a point.
	fn move_to(&mut self, x: f64, y: f64);
	/// Extend the sub-path with a straight line.
	fn line_to(&mut self, x: f64, y: f64);
	/// Stroke the current path.
	fn stroke(&mut self);
}

/// A browser canvas and its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wrap `canvas`, acquiring its 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, FieldError> {
		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
			.ok_or(FieldError::NoContext)?;
		Ok(Self { canvas, ctx })
	}

	/// Set the backing-store size in pixels.
	pub fn set_size(&self, width: f64, height: f64) {
		self.canvas.set_width(width.max(0.0) as u32);
		self.canvas.set_height(height.max(0.0) as u32);
	}
}

impl Surface for CanvasSurface {
	fn save(&mut self) {
		self.ctx.save();
	}

	fn restore(&mut self) {
		self.ctx.restore();
	}

	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		self.ctx.clear_rect(x, y, width, height);
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		self.ctx.set_global_alpha(alpha);
	}

	fn set_fill_color(&mut self, css: &str) {
		self.ctx.set_fill_style_str(css);
	}

	fn set_stroke_color(&mut self, css: &str) {
		self.ctx.set_stroke_style_str(css);
	}

	fn set_line_width(&mut self, width: f64) {
		self.ctx.set_line_width(width);
	}

	fn begin_path(&mut self) {
		self.ctx.begin_path();
	}

	fn arc(&mut self, x: f64, y: f64, radius: f64) {
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
	}

	fn fill(&mut self) {
		self.ctx.fill();
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.ctx.move_to(x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.ctx.line_to(x, y);
	}

	fn stroke(&mut self) {
		self.ctx.stroke();
	}
}
