//! Entrance animations for page content.
//!
//! Each page has a fixed plan of fade/slide-up entrances. The plan is pure
//! data; [`play`] turns it into CSS transitions on the matching elements.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, CssStyleDeclaration, HtmlElement};

use super::{PageError, window_and_document};
use crate::components::particle_field::PageKind;

/// Timing curve of an entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
	/// Overshoots slightly before settling.
	BackOut,
	/// Quadratic ease-out.
	Power2Out,
}

impl Ease {
	/// Equivalent CSS timing function.
	pub fn to_css(self) -> &'static str {
		match self {
			Ease::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
			Ease::Power2Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
		}
	}
}

/// One group of elements that fades in while sliding vertically into place.
#[derive(Clone, Debug, PartialEq)]
pub struct Entrance {
	/// CSS selector of the elements to animate.
	pub selector: &'static str,
	/// Starting vertical offset in px (negative slides down from above).
	pub offset_y: f64,
	/// Seconds.
	pub duration: f64,
	/// Seconds before the first element starts.
	pub delay: f64,
	/// Extra seconds between consecutive matched elements.
	pub stagger: f64,
	/// Timing curve.
	pub ease: Ease,
}

impl Entrance {
	fn rise(selector: &'static str, offset_y: f64, delay: f64) -> Self {
		Self {
			selector,
			offset_y,
			duration: 1.0,
			delay,
			stagger: 0.0,
			ease: Ease::Power2Out,
		}
	}

	fn staggered(self, stagger: f64) -> Self {
		Self { stagger, ..self }
	}

	/// Start time of the `index`-th matched element.
	pub fn start_of(&self, index: usize) -> f64 {
		self.delay + self.stagger * index as f64
	}

	/// Inline `transition` value for the `index`-th matched element.
	pub fn transition(&self, index: usize) -> String {
		let (d, ease, start) = (self.duration, self.ease.to_css(), self.start_of(index));
		format!("opacity {d}s {ease} {start}s, transform {d}s {ease} {start}s")
	}
}

/// The logo drops in, then the nav links follow half a second before it lands.
fn header_timeline() -> Vec<Entrance> {
	let logo = Entrance {
		selector: ".logo",
		offset_y: -50.0,
		duration: 1.0,
		delay: 0.0,
		stagger: 0.0,
		ease: Ease::BackOut,
	};
	let nav = Entrance {
		selector: ".nav-links a",
		offset_y: -30.0,
		duration: 0.8,
		delay: logo.duration - 0.5,
		stagger: 0.1,
		ease: Ease::Power2Out,
	};
	vec![logo, nav]
}

fn page_titles() -> [Entrance; 2] {
	[
		Entrance::rise(".page-title h1", 50.0, 0.2),
		Entrance::rise(".page-title p", 30.0, 0.4),
	]
}

/// Complete entrance plan for `page`, header first.
pub fn entrance_plan(page: PageKind) -> Vec<Entrance> {
	let mut plan = header_timeline();
	match page {
		PageKind::Python => {
			plan.extend(page_titles());
			plan.push(Entrance::rise(".stats-section", 50.0, 0.6));
			plan.push(Entrance::rise(".project-card", 50.0, 0.8).staggered(0.1));
		}
		PageKind::Web => {
			plan.extend(page_titles());
			plan.push(Entrance::rise(".skills-section", 50.0, 0.6));
			plan.push(Entrance::rise(".project-card", 50.0, 0.8).staggered(0.15));
		}
		PageKind::Contact => {
			plan.extend(page_titles());
			plan.push(Entrance::rise(".contact-card, .contact-form", 50.0, 0.7).staggered(0.2));
		}
		PageKind::Projects => {
			plan.extend(page_titles());
			plan.push(Entrance::rise(".project-card", 50.0, 0.7).staggered(0.2));
		}
		PageKind::Home => {
			plan.push(Entrance::rise(".hero h1", 50.0, 0.3));
			plan.push(Entrance::rise(".hero p", 30.0, 0.5));
			plan.push(Entrance::rise(".buttons", 30.0, 0.7));
			plan.push(Entrance::rise(".about", 50.0, 0.9));
		}
	}
	plan
}

pub(super) fn prefers_reduced_motion() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
		.is_some_and(|mq| mq.matches())
}

fn matched(selector: &str) -> Result<Vec<HtmlElement>, PageError> {
	let (_, document) = window_and_document()?;
	let nodes = document.query_selector_all(selector)?;
	Ok((0..nodes.length())
		.filter_map(|i| nodes.item(i))
		.filter_map(|n| n.dyn_into::<HtmlElement>().ok())
		.collect())
}

fn clear_inline(style: &CssStyleDeclaration) {
	for prop in ["transition", "opacity", "transform"] {
		let _ = style.remove_property(prop);
	}
}

/// Items whose state was changed, undone on drop unless committed.
///
/// Elements hidden for an entrance must not stay hidden when sequencing
/// fails halfway through.
pub(super) struct Staged<T, F: FnMut(&T)> {
	items: Vec<T>,
	undo: F,
	committed: bool,
}

impl<T, F: FnMut(&T)> Staged<T, F> {
	pub(super) fn new(undo: F) -> Self {
		Self {
			items: Vec::new(),
			undo,
			committed: false,
		}
	}

	pub(super) fn push(&mut self, item: T) {
		self.items.push(item);
	}

	pub(super) fn items(&self) -> &[T] {
		&self.items
	}

	/// Keep the changes.
	pub(super) fn commit(mut self) {
		self.committed = true;
	}
}

impl<T, F: FnMut(&T)> Drop for Staged<T, F> {
	fn drop(&mut self) {
		if self.committed {
			return;
		}
		for item in &self.items {
			(self.undo)(item);
		}
	}
}

/// Play the entrance plan for `page`.
///
/// All elements are first moved to their hidden starting state, a single
/// reflow commits that state, then the transitions are armed. Inline styles
/// are removed again when each element's transition finishes, or right away
/// if any step fails.
pub fn play(page: PageKind) -> Result<(), PageError> {
	let (_, document) = window_and_document()?;
	let body = document.body().ok_or(PageError::MissingElement("body"))?;

	let mut staged = Staged::new(|el: &HtmlElement| clear_inline(&el.style()));
	let mut transitions = Vec::new();
	for entrance in entrance_plan(page) {
		let elements = matched(entrance.selector)?;
		debug!("page: entrance `{}` on {} elements", entrance.selector, elements.len());
		for (i, el) in elements.into_iter().enumerate() {
			let style = el.style();
			staged.push(el);
			style.set_property("transition", "none")?;
			style.set_property("opacity", "0")?;
			style.set_property("transform", &format!("translateY({}px)", entrance.offset_y))?;
			transitions.push(entrance.transition(i));
		}
	}

	// Reading layout flushes the hidden state before transitions start.
	let _ = body.offset_height();

	for (el, transition) in staged.items().iter().zip(&transitions) {
		let style = el.style();
		style.set_property("transition", transition)?;
		style.set_property("opacity", "1")?;
		style.set_property("transform", "none")?;

		let target = el.clone();
		let on_end = Closure::once_into_js(move || clear_inline(&target.style()));
		let opts = AddEventListenerOptions::new();
		opts.set_once(true);
		el.add_event_listener_with_callback_and_add_event_listener_options(
			"transitionend",
			on_end.unchecked_ref(),
			&opts,
		)?;
	}

	body.style().set_property("opacity", "1")?;
	staged.commit();
	Ok(())
}

/// Make all content visible immediately, with no animation.
pub fn reveal_content() {
	let Some(body) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
	else {
		return;
	};
	let _ = body.style().set_property("opacity", "1");
}
