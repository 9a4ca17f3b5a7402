//! Frame loop plumbing.
//!
//! In the browser frames come from `requestAnimationFrame` (see `component`).
//! [`ParticleField::run`] is the same loop with an injectable frame source,
//! used for headless rendering and tests.

use std::cell::Cell;
use std::rc::Rc;

use rand::Rng;

use super::particles::ParticleField;
use super::surface::Surface;

/// Supplies display frames to the loop.
pub trait FrameSource {
	/// Block until the next frame is due; `false` when no more frames will come.
	fn next_frame(&mut self) -> bool;
}

impl<F: FnMut() -> bool> FrameSource for F {
	fn next_frame(&mut self) -> bool {
		self()
	}
}

/// Yields a fixed number of frames, immediately.
#[derive(Clone, Debug)]
pub struct FrameBudget {
	remaining: u64,
}

impl FrameBudget {
	/// A source that yields `frames` frames and then ends.
	pub fn new(frames: u64) -> Self {
		Self { remaining: frames }
	}

	/// Frames not yet handed out.
	pub fn remaining(&self) -> u64 {
		self.remaining
	}
}

impl FrameSource for FrameBudget {
	fn next_frame(&mut self) -> bool {
		if self.remaining == 0 {
			return false;
		}
		self.remaining -= 1;
		true
	}
}

/// Shared flag that ends the frame loop.
///
/// Clones observe the same flag, so an event handler can hold one while the
/// loop holds another.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Rc<Cell<bool>>);

impl StopSignal {
	/// A signal that has not been raised.
	pub fn new() -> Self {
		Self::default()
	}

	/// Raise the signal; the loop ends before its next frame.
	pub fn stop(&self) {
		self.0.set(true);
	}

	/// Whether the signal has been raised.
	pub fn is_stopped(&self) -> bool {
		self.0.get()
	}
}

/// Bookkeeping for the browser's `requestAnimationFrame` chain.
///
/// A page unload ends the loop for good. A page entering the back-forward
/// cache only suspends it: the pending frame is cancelled and the chain is
/// restarted when the page is shown again.
#[derive(Debug)]
pub struct FrameLoop {
	stop: StopSignal,
	pending: Option<i32>,
	suspended: bool,
}

impl FrameLoop {
	/// Track a loop that ends when `stop` is raised.
	pub fn new(stop: StopSignal) -> Self {
		Self {
			stop,
			pending: None,
			suspended: false,
		}
	}

	/// Record the id of the frame request just made.
	pub fn scheduled(&mut self, id: i32) {
		self.pending = Some(id);
	}

	/// A requested frame fired; `true` if it should step and reschedule.
	pub fn begin_frame(&mut self) -> bool {
		self.pending = None;
		!self.suspended && !self.stop.is_stopped()
	}

	/// The page is being hidden. Returns the frame request to cancel.
	pub fn hide(&mut self, persisted: bool) -> Option<i32> {
		if persisted {
			self.suspended = true;
		} else {
			self.stop.stop();
		}
		self.pending.take()
	}

	/// The page is shown; `true` if the chain must be restarted.
	pub fn show(&mut self, persisted: bool) -> bool {
		if !persisted || !self.suspended {
			return false;
		}
		self.suspended = false;
		!self.stop.is_stopped() && self.pending.is_none()
	}

	/// Whether the loop has ended for good.
	pub fn is_stopped(&self) -> bool {
		self.stop.is_stopped()
	}
}

impl<R: Rng> ParticleField<R> {
	/// Step once per frame until `stop` is raised or `frames` runs dry.
	///
	/// Returns the number of frames rendered.
	pub fn run<S: Surface, F: FrameSource>(
		&mut self,
		surface: &mut S,
		frames: &mut F,
		stop: &StopSignal,
	) -> u64 {
		let mut rendered = 0;
		while !stop.is_stopped() && frames.next_frame() {
			self.step(surface);
			rendered += 1;
		}
		rendered
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::particle_field::presets::ParticleOptions;
	use crate::components::particle_field::surface::testing::{Op, Recorder};

	fn field() -> ParticleField<StdRng> {
		ParticleField::new(&ParticleOptions::new(&["#111111"], 10), 200.0, 400.0, StdRng::seed_from_u64(11))
			.unwrap()
	}

	#[test]
	fn runs_until_budget_is_spent() {
		let mut f = field();
		let mut rec = Recorder::default();
		let mut frames = FrameBudget::new(5);
		let n = f.run(&mut rec, &mut frames, &StopSignal::new());
		assert_eq!(n, 5);
		assert_eq!(frames.remaining(), 0);
		assert_eq!(rec.count(|op| matches!(op, Op::Clear(..))), 5);
		assert!(f.particles().iter().all(|p| (0.0..=200.0).contains(&p.x)));
	}

	#[test]
	fn stop_signal_ends_the_loop() {
		let mut f = field();
		let mut rec = Recorder::default();
		let stop = StopSignal::new();
		let handle = stop.clone();
		let mut seen = 0;
		let mut frames = || {
			seen += 1;
			if seen == 3 {
				handle.stop();
			}
			true
		};
		let n = f.run(&mut rec, &mut frames, &stop);
		assert_eq!(n, 3);
		assert!(stop.is_stopped());
	}

	#[test]
	fn back_forward_cache_suspends_then_resumes() {
		let stop = StopSignal::new();
		let mut frames = FrameLoop::new(stop.clone());
		frames.scheduled(7);

		assert_eq!(frames.hide(true), Some(7));
		assert!(!stop.is_stopped());
		assert!(!frames.begin_frame());

		assert!(frames.show(true));
		frames.scheduled(8);
		assert!(frames.begin_frame());
	}

	#[test]
	fn unload_ends_the_loop_for_good() {
		let stop = StopSignal::new();
		let mut frames = FrameLoop::new(stop.clone());
		frames.scheduled(3);

		assert_eq!(frames.hide(false), Some(3));
		assert!(stop.is_stopped());
		assert!(!frames.show(true));
		assert!(!frames.begin_frame());
	}

	#[test]
	fn show_without_suspend_does_not_double_schedule() {
		let mut frames = FrameLoop::new(StopSignal::new());
		frames.scheduled(1);
		assert!(!frames.show(false));
		assert!(!frames.show(true));
		assert!(frames.begin_frame());
	}

	#[test]
	fn explicit_stop_while_cached_stays_stopped() {
		let stop = StopSignal::new();
		let mut frames = FrameLoop::new(stop.clone());
		frames.hide(true);
		stop.stop();
		assert!(!frames.show(true));
		assert!(frames.is_stopped());
	}

	#[test]
	fn already_stopped_renders_nothing() {
		let mut f = field();
		let mut rec = Recorder::default();
		let stop = StopSignal::new();
		stop.stop();
		assert_eq!(f.run(&mut rec, &mut FrameBudget::new(10), &stop), 0);
		assert!(rec.ops.is_empty());
	}
}
