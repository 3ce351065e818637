//! Particle field simulation (stateful).

use folio_core::{FRAME_INTERVAL_MS, ParticleSettings, Rgb, Surface};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// A 2D vector in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// State for a single particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Identity, unique across every regeneration of the owning field.
    pub id: u64,
    /// Current position, kept within the surface.
    pub position: Vec2,
    /// Per-step displacement. Only edge reflection changes it.
    pub velocity: Vec2,
    /// Radius in pixels.
    pub radius: f32,
    /// Palette color.
    pub color: Rgb,
    /// Opacity (0.0-1.0).
    pub opacity: f32,
}

/// Renderable description of a particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgb,
    pub opacity: f32,
}

/// A set of particles bouncing inside a surface.
///
/// The set is regenerated from scratch whenever the settings or the surface
/// change. Positions advance in fixed steps, at most one per
/// [`FRAME_INTERVAL_MS`].
#[derive(Debug)]
pub struct ParticleField {
    settings: ParticleSettings,
    surface: Surface,
    particles: Vec<Particle>,
    /// Next particle id to hand out.
    next_id: u64,
    /// Time of the last step, `None` until the first tick after a regeneration.
    last_update_ms: Option<u64>,
    rng: StdRng,
}

impl ParticleField {
    /// Create an empty field seeded from the system clock.
    ///
    /// Particles are generated once a usable surface is set with [`resize`](Self::resize).
    pub fn new(settings: ParticleSettings) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::with_seed(settings, seed)
    }

    /// Create an empty field with a deterministic random sequence.
    pub fn with_seed(settings: ParticleSettings, seed: u64) -> Self {
        Self {
            settings,
            surface: Surface::default(),
            particles: Vec::new(),
            next_id: 0,
            last_update_ms: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn settings(&self) -> &ParticleSettings {
        &self.settings
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Replace the settings. Regenerates and returns true if they differ.
    pub fn configure(&mut self, settings: ParticleSettings) -> bool {
        if settings == self.settings {
            return false;
        }
        self.settings = settings;
        self.regenerate();
        true
    }

    /// Set the surface dimensions. Regenerates and returns true if they differ.
    pub fn resize(&mut self, surface: Surface) -> bool {
        if surface == self.surface {
            return false;
        }
        self.surface = surface;
        self.regenerate();
        true
    }

    /// Discard every particle and generate a fresh set.
    ///
    /// Generation is deferred (the field stays empty) while the surface has a
    /// zero dimension or the palette is empty.
    pub fn regenerate(&mut self) {
        self.particles.clear();
        self.last_update_ms = None;

        if !self.surface.is_usable() {
            log::debug!("particle generation deferred: surface {:?}", self.surface);
            return;
        }
        if self.settings.palette.is_empty() {
            log::debug!("particle generation deferred: empty palette");
            return;
        }

        let count = self.settings.count_for_width(self.surface.width);
        self.particles.reserve(count);
        for _ in 0..count {
            let id = self.next_id;
            self.next_id += 1;
            if let Some(particle) = spawn(&mut self.rng, &self.settings, self.surface, id) {
                self.particles.push(particle);
            }
        }
        log::debug!(
            "generated {} particles for {}x{} surface",
            self.particles.len(),
            self.surface.width,
            self.surface.height
        );
    }

    /// Advance the simulation if at least [`FRAME_INTERVAL_MS`] passed since
    /// the last step. Returns true if particles moved.
    ///
    /// The first tick after a regeneration only records the time.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.particles.is_empty() {
            return false;
        }

        match self.last_update_ms {
            None => {
                self.last_update_ms = Some(now_ms);
                false
            }
            Some(last) if now_ms.saturating_sub(last) < FRAME_INTERVAL_MS => false,
            Some(_) => {
                self.step();
                self.last_update_ms = Some(now_ms);
                true
            }
        }
    }

    /// Move every particle by its velocity, reflecting off the surface edges.
    pub fn step(&mut self) {
        let Surface { width, height } = self.surface;
        for p in &mut self.particles {
            (p.position.x, p.velocity.x) = reflect(p.position.x, p.velocity.x, width);
            (p.position.y, p.velocity.y) = reflect(p.position.y, p.velocity.y, height);
        }
    }

    /// Renderable descriptors for the current particles.
    pub fn circles(&self) -> impl Iterator<Item = Circle> + '_ {
        self.particles.iter().map(|p| Circle {
            x: p.position.x,
            y: p.position.y,
            radius: p.radius,
            color: p.color,
            opacity: p.opacity,
        })
    }
}

/// Advance one axis. Leaving `[0, limit]` clamps the coordinate and flips the
/// velocity.
fn reflect(position: f32, velocity: f32, limit: f32) -> (f32, f32) {
    let next = position + velocity;
    if next < 0.0 || next > limit {
        (next.clamp(0.0, limit), -velocity)
    } else {
        (next, velocity)
    }
}

fn spawn(rng: &mut StdRng, settings: &ParticleSettings, surface: Surface, id: u64) -> Option<Particle> {
    let color = *settings.palette.choose(rng)?;
    let half_speed = settings.speed.abs() / 2.0;
    let size = settings.size.ordered();
    let opacity = settings.opacity.ordered();

    Some(Particle {
        id,
        position: Vec2::new(
            rng.gen_range(0.0..=surface.width),
            rng.gen_range(0.0..=surface.height),
        ),
        velocity: Vec2::new(
            rng.gen_range(-half_speed..=half_speed),
            rng.gen_range(-half_speed..=half_speed),
        ),
        radius: rng.gen_range(size.min..=size.max),
        color,
        opacity: rng.gen_range(opacity.min..=opacity.max),
    })
}
