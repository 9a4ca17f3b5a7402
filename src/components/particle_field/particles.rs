//! Particle simulation for the page background.
//!
//! Particles drift, are pulled gently toward the pointer when it comes close,
//! and bounce off the canvas edges. They never collide with each other; the
//! only interaction between particles is visual (see `render`).

use rand::Rng;

use super::error::FieldError;
use super::presets::ParticleOptions;
use super::theme::{Color, Palette};

/// Horizontal pixels per particle; caps the count on narrow viewports.
pub const PIXELS_PER_PARTICLE: f64 = 20.0;
/// Pointer attraction only acts inside this radius.
pub const ATTRACT_RADIUS: f64 = 100.0;
/// Velocity gained per frame per pixel of offset toward the pointer.
pub const ATTRACT_STRENGTH: f64 = 2e-5;
/// Largest initial speed along either axis.
pub const MAX_INITIAL_SPEED: f64 = 0.25;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in canvas pixels.
	pub x: f64,
	/// Vertical position in canvas pixels.
	pub y: f64,
	/// Horizontal velocity, pixels per frame.
	pub vx: f64,
	/// Vertical velocity, pixels per frame.
	pub vy: f64,
	/// Radius in pixels, in `[1, 3)`.
	pub size: f64,
	/// Fill opacity, in `[0.2, 0.7)`.
	pub alpha: f64,
	/// Fill colour, drawn from the palette.
	pub color: Color,
}

/// Last known cursor position in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
}

/// Owns the particle set, the pointer and the canvas bounds.
///
/// Created once per page. Pointer and resize events are applied through
/// [`update_pointer`](Self::update_pointer) and [`resize`](Self::resize); the
/// frame loop calls [`update`](Self::update) and then renders.
pub struct ParticleField<R> {
	pub(super) particles: Vec<Particle>,
	pointer: Pointer,
	pub(super) width: f64,
	pub(super) height: f64,
	palette: Palette,
	target_count: usize,
	rng: R,
}

impl<R: Rng> ParticleField<R> {
	/// Build a field of `width` x `height` populated per `options`.
	///
	/// Fails only when a palette colour cannot be parsed.
	pub fn new(options: &ParticleOptions, width: f64, height: f64, rng: R) -> Result<Self, FieldError> {
		let palette = Palette::parse(options.colors.as_slice())?;
		let mut field = Self {
			particles: Vec::new(),
			pointer: Pointer::default(),
			width,
			height,
			palette,
			target_count: options.particle_count,
			rng,
		};
		field.populate();
		Ok(field)
	}

	/// Number of particles the current width allows.
	pub fn capacity(&self) -> usize {
		let by_width = (self.width / PIXELS_PER_PARTICLE).floor().max(0.0) as usize;
		self.target_count.min(by_width)
	}

	/// Replace the whole particle set with freshly randomised particles.
	fn populate(&mut self) {
		let count = self.capacity();
		let mut particles = Vec::with_capacity(count);
		for _ in 0..count {
			particles.push(self.spawn());
		}
		self.particles = particles;
	}

	fn spawn(&mut self) -> Particle {
		let rng = &mut self.rng;
		Particle {
			x: rng.r#gen::<f64>() * self.width,
			y: rng.r#gen::<f64>() * self.height,
			vx: rng.gen_range(-MAX_INITIAL_SPEED..MAX_INITIAL_SPEED),
			vy: rng.gen_range(-MAX_INITIAL_SPEED..MAX_INITIAL_SPEED),
			size: rng.gen_range(1.0..3.0),
			alpha: rng.gen_range(0.2..0.7),
			color: self.palette.get(rng.gen_range(0..self.palette.len())),
		}
	}

	/// Adopt a new canvas size and regenerate every particle.
	///
	/// Momentum is not carried over: the new set is independent of the old one.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.populate();
		log::debug!(
			"particles: resized to {}x{}, {} particles",
			width,
			height,
			self.particles.len()
		);
	}

	/// Record the raw pointer position; no bounds check.
	pub fn update_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Pointer { x, y };
	}

	/// Advance the simulation by one frame.
	pub fn update(&mut self) {
		let Pointer { x: px, y: py } = self.pointer;
		let (width, height) = (self.width, self.height);

		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			// No damping: velocity keeps growing while the pointer stays close.
			let (dx, dy) = (px - p.x, py - p.y);
			if (dx * dx + dy * dy).sqrt() < ATTRACT_RADIUS {
				p.vx += dx * ATTRACT_STRENGTH;
				p.vy += dy * ATTRACT_STRENGTH;
			}

			if p.x < 0.0 || p.x > width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > height {
				p.vy = -p.vy;
			}

			p.x = p.x.clamp(0.0, width.max(0.0));
			p.y = p.y.clamp(0.0, height.max(0.0));
		}
	}

	/// Current particle set.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Last recorded pointer position.
	pub fn pointer(&self) -> Pointer {
		self.pointer
	}

	/// Canvas `(width, height)`.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Requested particle count before the width cap.
	pub fn target_count(&self) -> usize {
		self.target_count
	}
}
