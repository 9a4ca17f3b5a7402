//! Per-frame drawing of the particle field.
//!
//! Two passes over a cleared surface:
//! 1. Each particle as a filled circle at its own opacity
//! 2. Connector lines between every pair closer than [`CONNECT_DISTANCE`]
//!
//! The connector pass is O(n²) and dominates frame cost.

use rand::Rng;

use super::particles::ParticleField;
use super::surface::Surface;
use super::theme::CONNECTOR_COLOR;

/// Pairs closer than this many pixels are joined by a line.
pub const CONNECT_DISTANCE: f64 = 120.0;
/// Connector opacity at zero distance.
pub const CONNECT_MAX_ALPHA: f64 = 0.1;

/// Opacity of the connector between two particles `distance` apart.
///
/// Falls off linearly to zero at [`CONNECT_DISTANCE`]; `None` at or beyond it.
pub fn connector_alpha(distance: f64) -> Option<f64> {
	(distance < CONNECT_DISTANCE).then(|| CONNECT_MAX_ALPHA * (1.0 - distance / CONNECT_DISTANCE))
}

/// Redraw the whole field onto `surface`.
pub fn render<R: Rng, S: Surface>(field: &ParticleField<R>, surface: &mut S) {
	surface.clear_rect(0.0, 0.0, field.width, field.height);
	draw_particles(field, surface);
	draw_connectors(field, surface);
}

fn draw_particles<R, S: Surface>(field: &ParticleField<R>, surface: &mut S) {
	for p in &field.particles {
		surface.save();
		surface.set_global_alpha(p.alpha);
		surface.begin_path();
		surface.arc(p.x, p.y, p.size);
		surface.set_fill_color(&p.color.to_css());
		surface.fill();
		surface.restore();
	}
}

fn draw_connectors<R, S: Surface>(field: &ParticleField<R>, surface: &mut S) {
	let stroke = CONNECTOR_COLOR.to_css();
	let particles = &field.particles;

	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let Some(alpha) = connector_alpha((dx * dx + dy * dy).sqrt()) else {
				continue;
			};

			surface.save();
			surface.set_global_alpha(alpha);
			surface.begin_path();
			surface.move_to(a.x, a.y);
			surface.line_to(b.x, b.y);
			surface.set_stroke_color(&stroke);
			surface.set_line_width(1.0);
			surface.stroke();
			surface.restore();
		}
	}
}

impl<R: Rng> ParticleField<R> {
	/// Redraw the field onto `surface`.
	pub fn render<S: Surface>(&self, surface: &mut S) {
		render(self, surface);
	}

	/// One frame: advance the simulation, then redraw.
	pub fn step<S: Surface>(&mut self, surface: &mut S) {
		self.update();
		self.render(surface);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::particle_field::particles::Particle;
	use crate::components::particle_field::presets::ParticleOptions;
	use crate::components::particle_field::surface::testing::{Op, Recorder};
	use crate::components::particle_field::theme::Color;

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 1.5,
			alpha: 0.4,
			color: Color::rgb(0x37, 0x76, 0xab),
		}
	}

	fn field_with(particles: Vec<Particle>) -> ParticleField<StdRng> {
		let mut field =
			ParticleField::new(&ParticleOptions::default(), 800.0, 600.0, StdRng::seed_from_u64(3)).unwrap();
		field.particles = particles;
		field
	}

	#[test]
	fn connector_alpha_falls_off_linearly() {
		assert_eq!(connector_alpha(0.0), Some(0.1));
		assert!((connector_alpha(60.0).unwrap() - 0.05).abs() < 1e-12);
		assert!(connector_alpha(119.999).unwrap() > 0.0);
		assert_eq!(connector_alpha(120.0), None);
		assert_eq!(connector_alpha(500.0), None);

		let mut prev = f64::INFINITY;
		for d in (0..120).map(f64::from) {
			let a = connector_alpha(d).unwrap();
			assert!(a < prev);
			prev = a;
		}
	}

	#[test]
	fn clears_the_full_surface_first() {
		let field = field_with(vec![]);
		let mut rec = Recorder::default();
		field.render(&mut rec);
		assert_eq!(rec.ops, vec![Op::Clear(0.0, 0.0, 800.0, 600.0)]);
	}

	#[test]
	fn draws_each_particle_as_a_circle() {
		let field = field_with(vec![at(10.0, 20.0)]);
		let mut rec = Recorder::default();
		field.render(&mut rec);
		assert_eq!(
			rec.ops,
			vec![
				Op::Clear(0.0, 0.0, 800.0, 600.0),
				Op::Save,
				Op::Alpha(0.4),
				Op::BeginPath,
				Op::Arc(10.0, 20.0, 1.5),
				Op::Fill("#3776ab".into()),
				Op::DoFill,
				Op::Restore,
			]
		);
	}

	#[test]
	fn connects_only_close_pairs() {
		// a-b are 60px apart, b-c 150px, a-c 210px.
		let field = field_with(vec![at(0.0, 0.0), at(60.0, 0.0), at(210.0, 0.0)]);
		let mut rec = Recorder::default();
		field.render(&mut rec);

		assert_eq!(rec.count(|op| matches!(op, Op::Arc(..))), 3);
		assert_eq!(rec.count(|op| *op == Op::DoStroke), 1);
		assert!(rec.ops.contains(&Op::MoveTo(0.0, 0.0)));
		assert!(rec.ops.contains(&Op::LineTo(60.0, 0.0)));
		assert!(rec.ops.contains(&Op::Stroke("#8b5cf6".into())));
		assert!(rec.ops.contains(&Op::LineWidth(1.0)));
		assert!(
			rec.ops
				.iter()
				.any(|op| matches!(op, Op::Alpha(a) if (a - 0.05).abs() < 1e-12))
		);
	}

	#[test]
	fn every_close_pair_is_connected_once() {
		let field = field_with(vec![at(0.0, 0.0), at(10.0, 0.0), at(0.0, 10.0), at(10.0, 10.0)]);
		let mut rec = Recorder::default();
		field.render(&mut rec);
		assert_eq!(rec.count(|op| *op == Op::DoStroke), 6);
		assert_eq!(
			rec.count(|op| *op == Op::Save),
			rec.count(|op| *op == Op::Restore)
		);
	}

	#[test]
	fn step_moves_then_draws() {
		let mut p = at(100.0, 100.0);
		p.vx = 1.0;
		let mut field = field_with(vec![p]);
		field.update_pointer(-500.0, -500.0);
		let mut rec = Recorder::default();
		field.step(&mut rec);
		assert!(rec.ops.contains(&Op::Arc(101.0, 100.0, 1.5)));
	}
}
