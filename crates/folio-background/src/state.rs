//! Particle background state management.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{CELL_HEIGHT_PX, CELL_WIDTH_PX, EventSource, Rgb, Subscription, Surface};
use ratatui::{buffer::Buffer, layout::Rect};

use crate::chars::glyph_for_radius;
use crate::color::particle_color;
use crate::field::ParticleField;

/// Particle field projected onto the terminal.
#[derive(Debug)]
pub struct ParticleBackground {
    /// The simulation.
    field: ParticleField,
    /// Page background the particle opacity is blended against.
    backdrop: Rgb,
    /// Whether the background is drawn and stepped.
    enabled: bool,
}

impl ParticleBackground {
    /// Create a new background state.
    pub fn new(field: ParticleField, backdrop: Rgb) -> Self {
        Self {
            field,
            backdrop,
            enabled: true,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Keep the field sized from `source` until the returned subscription is
    /// detached.
    pub fn track_resize(
        background: &Rc<RefCell<ParticleBackground>>,
        source: &EventSource<Surface>,
    ) -> Subscription {
        let background = Rc::clone(background);
        source.subscribe(move |surface: &Surface| {
            if let Ok(mut bg) = background.try_borrow_mut() {
                bg.field.resize(*surface);
            }
        })
    }

    /// Step the simulation at `now_ms`. Returns true if anything needs
    /// redrawing.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.enabled && self.field.tick(now_ms)
    }

    /// Paint every particle into its cell of `area`.
    pub fn render(&self, buf: &mut Buffer, area: Rect) {
        if !self.enabled || area.is_empty() {
            return;
        }

        let size = self.field.settings().size;
        for circle in self.field.circles() {
            let col = ((circle.x / CELL_WIDTH_PX) as u16).min(area.width - 1);
            let row = ((circle.y / CELL_HEIGHT_PX) as u16).min(area.height - 1);

            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_char(glyph_for_radius(circle.radius, size))
                    .set_fg(particle_color(circle.color, circle.opacity, self.backdrop));
            }
        }
    }
}
