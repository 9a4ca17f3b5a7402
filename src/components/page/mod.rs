//! Page chrome around the particle background.
//!
//! Small DOM behaviours every portfolio page shares: the header's scrolled
//! state, entrance animations, smooth in-page anchors and the contact form's
//! simulated submission.

mod anchors;
mod contact;
mod entrance;
mod header;

use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::components::particle_field::PageKind;

pub use anchors::anchor_target;
pub use contact::SubmitPhase;
pub use entrance::{Ease, Entrance, entrance_plan, reveal_content};
pub use header::{SCROLL_THRESHOLD, is_scrolled};

/// Failures while wiring page chrome. Logged, never fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
	/// Not running in a browser window.
	#[error("no global window")]
	NoWindow,
	/// The window has no document.
	#[error("window has no document")]
	NoDocument,
	/// A required element is absent.
	#[error("missing element `{0}`")]
	MissingElement(&'static str),
	/// A DOM call threw.
	#[error("dom call failed: {0}")]
	Dom(String),
}

impl From<JsValue> for PageError {
	fn from(value: JsValue) -> Self {
		PageError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

pub(crate) fn window_and_document() -> Result<(Window, Document), PageError> {
	let window = web_sys::window().ok_or(PageError::NoWindow)?;
	let document = window.document().ok_or(PageError::NoDocument)?;
	Ok((window, document))
}

/// Install every page behaviour for `page`.
///
/// Each behaviour fails independently; a failing entrance sequence falls back
/// to showing all content at once.
pub fn install(page: PageKind) {
	if let Err(e) = header::install() {
		warn!("page: header scroll state unavailable, {e}");
	}

	if entrance::prefers_reduced_motion() {
		info!("page: reduced motion requested, skipping entrances");
		reveal_content();
	} else if let Err(e) = entrance::play(page) {
		warn!("page: entrance animations failed, showing content, {e}");
		reveal_content();
	}

	if let Err(e) = anchors::install() {
		warn!("page: smooth scrolling unavailable, {e}");
	}

	if page == PageKind::Contact {
		if let Err(e) = contact::install() {
			warn!("page: contact form not wired, {e}");
		}
	}

	info!("page: `{}` ready", page.tag());
}
