//! Header styling that follows the scroll position.

use wasm_bindgen::prelude::*;

use super::{PageError, window_and_document};

/// Scroll offset (px) past which the header is considered scrolled.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Whether the header shows its scrolled style at `scroll_y`.
pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLL_THRESHOLD
}

/// Toggle `scrolled` on `#header` whenever the window scrolls.
pub(super) fn install() -> Result<(), PageError> {
	let (window, document) = window_and_document()?;
	let header = document
		.get_element_by_id("header")
		.ok_or(PageError::MissingElement("#header"))?;

	let on_scroll = Closure::<dyn FnMut()>::new(move || {
		let y = web_sys::window()
			.and_then(|w| w.scroll_y().ok())
			.unwrap_or(0.0);
		let _ = header.class_list().toggle_with_force("scrolled", is_scrolled(y));
	});
	window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
	on_scroll.forget();
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn threshold_is_exclusive() {
		assert!(!is_scrolled(0.0));
		assert!(!is_scrolled(50.0));
		assert!(is_scrolled(50.5));
		assert!(is_scrolled(1200.0));
	}
}
