//! Animated particle background.
//!
//! A field of softly drifting particles drawn on a full-viewport canvas:
//! - Particles integrate their velocity each frame and bounce off the edges
//! - The pointer pulls nearby particles toward it
//! - Particles closer than 120px are joined by faint connector lines
//!
//! The simulation ([`ParticleField`]) knows nothing about the DOM; it draws
//! through the [`Surface`] trait and is driven either by
//! `requestAnimationFrame` ([`start`]) or by an explicit frame source
//! ([`ParticleField::run`]).
//!
//! # Example
//!
//! ```ignore
//! use portfolio_particles::{PageKind, ParticleBackground};
//!
//! view! { <ParticleBackground options=PageKind::Python.preset() /> }
//! ```

mod component;
mod driver;
mod error;
mod particles;
mod presets;
mod render;
mod surface;
pub mod theme;

pub use component::{CANVAS_ID, ParticleBackground, start};
pub use driver::{FrameBudget, FrameLoop, FrameSource, StopSignal};
pub use error::FieldError;
pub use particles::{Particle, ParticleField, Pointer};
pub use presets::{PageKind, ParticleOptions};
pub use render::{CONNECT_DISTANCE, connector_alpha};
pub use surface::{CanvasSurface, Surface};
