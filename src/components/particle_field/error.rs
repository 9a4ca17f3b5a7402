//! Failures that keep the particle background from starting.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while building or attaching a particle field.
///
/// None of these are fatal to the page: callers log them and carry on without
/// the background effect.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
	/// Not running in a browser window.
	#[error("no global window")]
	NoWindow,
	/// The window has no document.
	#[error("window has no document")]
	NoDocument,
	/// No element carries the canvas id.
	#[error("no element with id `{0}`")]
	MissingCanvas(String),
	/// The element with the canvas id is something else.
	#[error("element `{0}` is not a canvas")]
	NotACanvas(String),
	/// The canvas refused a 2D context.
	#[error("canvas has no 2d rendering context")]
	NoContext,
	/// A palette entry is not a hex colour.
	#[error("invalid colour `{0}`")]
	InvalidColor(String),
	/// The options document could not be decoded.
	#[error("invalid particle options: {0}")]
	InvalidOptions(String),
}

impl From<FieldError> for JsValue {
	fn from(err: FieldError) -> Self {
		JsValue::from_str(&err.to_string())
	}
}
