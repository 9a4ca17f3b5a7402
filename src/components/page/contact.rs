//! Simulated contact form submission.
//!
//! Nothing is sent anywhere: submitting shows a sending state, then a
//! confirmation, then puts the form back the way it was.

use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, HtmlFormElement};

use super::{PageError, window_and_document};

/// Visible state of the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
	/// Original label, enabled.
	Idle,
	/// Spinner while the message is "sent".
	Sending,
	/// Confirmation on green.
	Sent,
}

impl SubmitPhase {
	/// Button markup for this phase; `None` restores the original markup.
	pub fn label_html(self) -> Option<&'static str> {
		match self {
			SubmitPhase::Idle => None,
			SubmitPhase::Sending => Some(r#"<i class="fas fa-spinner fa-spin"></i> Enviando..."#),
			SubmitPhase::Sent => Some(r#"<i class="fas fa-check"></i> ¡Mensaje enviado!"#),
		}
	}

	/// Whether the button is disabled.
	pub fn disabled(self) -> bool {
		self != SubmitPhase::Idle
	}

	/// Inline background colour; empty clears it.
	pub fn background(self) -> &'static str {
		match self {
			SubmitPhase::Sent => "#10b981",
			_ => "",
		}
	}

	/// The phase that follows, and how long (ms) this one is shown first.
	pub fn next(self) -> Option<(SubmitPhase, i32)> {
		match self {
			SubmitPhase::Idle => None,
			SubmitPhase::Sending => Some((SubmitPhase::Sent, 1500)),
			SubmitPhase::Sent => Some((SubmitPhase::Idle, 2000)),
		}
	}
}

/// Button and form under one submission.
#[derive(Clone)]
struct Submission {
	form: HtmlFormElement,
	button: HtmlElement,
	original_html: String,
}

impl Submission {
	fn show(&self, phase: SubmitPhase) {
		let html = match phase.label_html() {
			Some(html) => html,
			None => self.original_html.as_str(),
		};
		self.button.set_inner_html(html);
		let _ = self.button.toggle_attribute_with_force("disabled", phase.disabled());
		let _ = self.button.style().set_property("background", phase.background());
		if phase == SubmitPhase::Idle {
			self.form.reset();
		}
	}

	/// Show `phase`, then schedule whatever follows it.
	fn advance(self, phase: SubmitPhase) {
		self.show(phase);
		let Some((next, delay_ms)) = phase.next() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};
		let cb = Closure::once_into_js(move || self.advance(next));
		let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
	}
}

pub(super) fn install() -> Result<(), PageError> {
	let (_, document) = window_and_document()?;
	let form: HtmlFormElement = document
		.query_selector("form")?
		.and_then(|el| el.dyn_into().ok())
		.ok_or(PageError::MissingElement("form"))?;

	let form_submit = form.clone();
	let on_submit = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
		ev.prevent_default();
		let button = form_submit
			.query_selector(".submit-btn")
			.ok()
			.flatten()
			.and_then(|el| el.dyn_into::<HtmlElement>().ok());
		let Some(button) = button else {
			return;
		};
		if button.has_attribute("disabled") {
			return;
		}
		let submission = Submission {
			form: form_submit.clone(),
			original_html: button.inner_html(),
			button,
		};
		submission.advance(SubmitPhase::Sending);
	});
	form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
	on_submit.forget();
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn phases_cycle_back_to_idle() {
		let mut phase = SubmitPhase::Sending;
		let mut elapsed = 0;
		while let Some((next, ms)) = phase.next() {
			elapsed += ms;
			phase = next;
		}
		assert_eq!(phase, SubmitPhase::Idle);
		assert_eq!(elapsed, 3500);
	}

	#[test]
	fn button_state_per_phase() {
		assert!(SubmitPhase::Sending.disabled());
		assert!(SubmitPhase::Sent.disabled());
		assert!(!SubmitPhase::Idle.disabled());
		assert_eq!(SubmitPhase::Sent.background(), "#10b981");
		assert_eq!(SubmitPhase::Idle.background(), "");
		assert_eq!(SubmitPhase::Idle.label_html(), None);
		assert!(SubmitPhase::Sending.label_html().unwrap().contains("Enviando"));
	}
}
