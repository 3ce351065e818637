//! Particle background settings.

use serde::{Deserialize, Serialize};

use crate::{Rgb, ValueRange};

/// Surfaces narrower than this (in pixels) get a reduced particle count.
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

/// Factor applied to the particle count below [`MOBILE_BREAKPOINT_PX`].
pub const MOBILE_COUNT_FACTOR: f32 = 0.6;

/// Upper bound on the particle count a field will generate.
pub const MAX_PARTICLE_COUNT: usize = 10_000;

/// Minimum time between two simulation steps (~30 fps).
pub const FRAME_INTERVAL_MS: u64 = 33;

/// Configuration tuple for the particle field.
///
/// Any change to these values regenerates the whole field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    /// Desired number of particles on a wide surface.
    pub count: usize,
    /// Colors particles are drawn from.
    pub palette: Vec<Rgb>,
    /// Velocity components are drawn from `[-speed/2, speed/2]`.
    pub speed: f32,
    /// Radius range in pixels.
    pub size: ValueRange,
    /// Opacity range (0.0-1.0).
    pub opacity: ValueRange,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: 380,
            palette: vec![
                Rgb::new(0x3b, 0x82, 0xf6),
                Rgb::new(0x8b, 0x5c, 0xf6),
                Rgb::new(0x06, 0xb6, 0xd4),
                Rgb::new(0x10, 0xb9, 0x81),
                Rgb::new(0xf5, 0x9e, 0x0b),
            ],
            speed: 1.5,
            size: ValueRange::new(1.0, 5.0),
            opacity: ValueRange::new(0.4, 0.7),
        }
    }
}

impl ParticleSettings {
    /// Number of particles to generate for a surface of the given width,
    /// never more than [`MAX_PARTICLE_COUNT`].
    pub fn count_for_width(&self, width: f32) -> usize {
        let count = self.count.min(MAX_PARTICLE_COUNT);
        if width < MOBILE_BREAKPOINT_PX {
            (count as f32 * MOBILE_COUNT_FACTOR).floor() as usize
        } else {
            count
        }
    }
}
