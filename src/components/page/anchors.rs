//! Smooth scrolling for in-page `#anchor` links.

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{PageError, window_and_document};

/// Selector for a link's `href`, if it points at an element on this page.
///
/// A bare `#` names nothing and yields `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
	let href = href.trim();
	let id = href.strip_prefix('#')?;
	if id.is_empty() || id.contains(char::is_whitespace) {
		return None;
	}
	Some(href)
}

pub(super) fn install() -> Result<(), PageError> {
	let (_, document) = window_and_document()?;
	let links = document.query_selector_all(r##"a[href^="#"]"##)?;

	for i in 0..links.length() {
		let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
			continue;
		};
		let href = link.get_attribute("href").unwrap_or_default();
		let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
			ev.prevent_default();
			let Some(selector) = anchor_target(&href) else {
				return;
			};
			let target = web_sys::window()
				.and_then(|w| w.document())
				.and_then(|d| d.query_selector(selector).ok().flatten());
			if let Some(target) = target {
				let opts = ScrollIntoViewOptions::new();
				opts.set_behavior(ScrollBehavior::Smooth);
				opts.set_block(ScrollLogicalPosition::Start);
				target.scroll_into_view_with_scroll_into_view_options(&opts);
			}
		});
		link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
		on_click.forget();
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn targets_named_anchors() {
		assert_eq!(anchor_target("#about"), Some("#about"));
		assert_eq!(anchor_target(" #projects "), Some("#projects"));
	}

	#[test]
	fn ignores_bare_and_external_links() {
		assert_eq!(anchor_target("#"), None);
		assert_eq!(anchor_target(""), None);
		assert_eq!(anchor_target("/contacto.html"), None);
		assert_eq!(anchor_target("#a b"), None);
	}
}
