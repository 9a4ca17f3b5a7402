//! portfolio-particles: animated background and page chrome for a portfolio site.
//!
//! This crate renders a field of drifting, pointer-attracted particles on a
//! full-viewport canvas and sequences the entrance animations and small
//! interactions shared by every page of the site.

// Pulled in only to enable its `js` backend for `rand` on wasm32.
use getrandom as _;
use leptos::prelude::*;
use log::{Level, info};
use wasm_bindgen::prelude::*;

pub mod components;

pub use components::page::PageError;
pub use components::particle_field::{
	FieldError, PageKind, ParticleBackground, ParticleField, ParticleOptions, StopSignal,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Start a particle field on an existing canvas from JavaScript.
///
/// `options` is a plain object `{ colors?: string[], particleCount?: number }`;
/// `undefined` or `null` selects the defaults.
#[wasm_bindgen(js_name = startParticles)]
pub fn start_particles(canvas_id: &str, options: JsValue) -> Result<(), JsValue> {
	let options = if options.is_undefined() || options.is_null() {
		ParticleOptions::default()
	} else {
		let json: String = js_sys::JSON::stringify(&options)?.into();
		ParticleOptions::from_json(&json)?
	};
	components::particle_field::start(canvas_id, &options)?;
	Ok(())
}

/// Main application component.
///
/// Renders the particle background with the page's preset and installs the
/// page chrome once mounted.
#[component]
pub fn App(
	/// The page being rendered, from `<body data-page>`.
	page: PageKind,
) -> impl IntoView {
	let preset = page.preset();

	Effect::new(move |_| {
		components::page::install(page);
	});

	view! { <ParticleBackground options=preset /> }
}
