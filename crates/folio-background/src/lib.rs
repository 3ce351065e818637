//! Particle background rendering for the folio portfolio.
//!
//! [`ParticleField`] owns the simulation: randomly placed points drifting at
//! constant velocity and bouncing off the surface edges, stepped at ~30 fps.
//! [`ParticleBackground`] projects the field onto a terminal frame, treating
//! each cell as a fixed block of pixels.

mod chars;
mod color;
pub mod field;
mod state;

pub use chars::{PARTICLE_CHARS, glyph_for_radius};
pub use color::{particle_color, to_color};
pub use field::{Circle, Particle, ParticleField, Vec2};
pub use state::ParticleBackground;
