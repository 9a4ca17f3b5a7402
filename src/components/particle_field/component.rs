//! Browser wiring for the particle field.
//!
//! [`start`] attaches a field to an existing canvas, subscribes to window
//! `resize`, `mousemove`, `pagehide` and `pageshow`, and drives the field
//! from `requestAnimationFrame` while the page is open. A page parked in the
//! back-forward cache pauses the loop and resumes it when shown again. [`ParticleBackground`]
//! is the Leptos component that renders that canvas and starts it.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, PageTransitionEvent, Window};

use super::driver::{FrameLoop, StopSignal};
use super::error::FieldError;
use super::particles::ParticleField;
use super::presets::ParticleOptions;
use super::surface::CanvasSurface;

/// Id of the canvas the background draws into.
pub const CANVAS_ID: &str = "particlesCanvas";

/// Field plus the surface it paints on, shared between event handlers.
struct FieldContext {
	field: ParticleField<SmallRng>,
	surface: CanvasSurface,
}

type AnimateSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Ask for the next display frame and remember the request id.
fn request_frame(animate: &AnimateSlot, frames: &RefCell<FrameLoop>) {
	if let (Some(cb), Some(win)) = (animate.borrow().as_ref(), web_sys::window()) {
		if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
			frames.borrow_mut().scheduled(id);
		}
	}
}

fn viewport(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dim(window.inner_width()), dim(window.inner_height()))
}

/// Attach a particle field to the canvas with id `canvas_id`.
///
/// The returned [`StopSignal`] ends the frame loop when raised; it is also
/// raised automatically when the page unloads.
pub fn start(canvas_id: &str, options: &ParticleOptions) -> Result<StopSignal, FieldError> {
	let window = web_sys::window().ok_or(FieldError::NoWindow)?;
	let document = window.document().ok_or(FieldError::NoDocument)?;
	let element = document
		.get_element_by_id(canvas_id)
		.ok_or_else(|| FieldError::MissingCanvas(canvas_id.to_string()))?;
	let canvas: HtmlCanvasElement = element
		.dyn_into()
		.map_err(|_| FieldError::NotACanvas(canvas_id.to_string()))?;

	let surface = CanvasSurface::new(canvas)?;
	let (w, h) = viewport(&window);
	surface.set_size(w, h);
	let field = ParticleField::new(options, w, h, SmallRng::from_entropy())?;
	info!(
		"particles: {} of {} on {}x{}",
		field.particles().len(),
		field.target_count(),
		w,
		h
	);

	let context = Rc::new(RefCell::new(FieldContext { field, surface }));
	let stop = StopSignal::new();

	// Page-lifetime listeners: the closures are leaked on purpose.
	let context_resize = context.clone();
	let on_resize = Closure::<dyn FnMut()>::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		let (nw, nh) = viewport(&win);
		let mut c = context_resize.borrow_mut();
		c.surface.set_size(nw, nh);
		c.field.resize(nw, nh);
	});
	let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
	on_resize.forget();

	let context_move = context.clone();
	let on_mousemove = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
		context_move
			.borrow_mut()
			.field
			.update_pointer(ev.client_x() as f64, ev.client_y() as f64);
	});
	let _ =
		window.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
	on_mousemove.forget();

	// The frame closure re-requests itself through this slot until stopped.
	let animate: AnimateSlot = Rc::new(RefCell::new(None));
	let frames = Rc::new(RefCell::new(FrameLoop::new(stop.clone())));

	let frames_hide = frames.clone();
	let on_pagehide = Closure::<dyn FnMut(PageTransitionEvent)>::new(move |ev: PageTransitionEvent| {
		let pending = frames_hide.borrow_mut().hide(ev.persisted());
		if let (Some(id), Some(win)) = (pending, web_sys::window()) {
			let _ = win.cancel_animation_frame(id);
		}
		if ev.persisted() {
			debug!("particles: frame loop suspended");
		}
	});
	let _ = window.add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref());
	on_pagehide.forget();

	let (animate_show, frames_show) = (animate.clone(), frames.clone());
	let on_pageshow = Closure::<dyn FnMut(PageTransitionEvent)>::new(move |ev: PageTransitionEvent| {
		let resume = frames_show.borrow_mut().show(ev.persisted());
		if resume {
			debug!("particles: frame loop resumed");
			request_frame(&animate_show, &frames_show);
		}
	});
	let _ = window.add_event_listener_with_callback("pageshow", on_pageshow.as_ref().unchecked_ref());
	on_pageshow.forget();

	let (animate_inner, frames_anim) = (animate.clone(), frames.clone());
	*animate.borrow_mut() = Some(Closure::new(move || {
		if !frames_anim.borrow_mut().begin_frame() {
			if frames_anim.borrow().is_stopped() {
				info!("particles: frame loop stopped");
			}
			return;
		}
		{
			let mut c = context.borrow_mut();
			let FieldContext { field, surface } = &mut *c;
			field.step(surface);
		}
		request_frame(&animate_inner, &frames_anim);
	}));
	request_frame(&animate, &frames);

	Ok(stop)
}

/// Full-viewport particle background.
///
/// Renders a fixed canvas behind the page content and starts the field once
/// the canvas is mounted. Failure to start is logged and leaves the page
/// without particles.
#[component]
pub fn ParticleBackground(
	/// Palette and particle count.
	#[prop(into)]
	options: ParticleOptions,
	/// Id given to the canvas element.
	#[prop(default = CANVAS_ID)]
	id: &'static str,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let started = StoredValue::new(false);

	Effect::new(move |_| {
		if canvas_ref.get().is_none() || started.get_value() {
			return;
		}
		started.set_value(true);
		if let Err(e) = start(id, &options) {
			warn!("particles: disabled, {e}");
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id=id
			class="particles-canvas"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none;"
		/>
	}
}
