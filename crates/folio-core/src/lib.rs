//! Core types shared by the folio crates.
//!
//! This crate holds the configuration vocabulary for the particle background,
//! the section identifiers of the page, the explicit subscription mechanism
//! used to wire scroll and resize notifications, and the scroll-spy that
//! decides which section is currently in view.

mod color;
pub mod events;
mod range;
pub mod scroll_spy;
mod section;
mod settings;
mod surface;

pub use color::{ColorParseError, Rgb};
pub use events::{EventSource, Subscription};
pub use range::ValueRange;
pub use scroll_spy::{DEFAULT_LOOKAHEAD_MARGIN, ScrollEvent, ScrollSpy, SectionLayout};
pub use section::SectionId;
pub use settings::{
    FRAME_INTERVAL_MS, MAX_PARTICLE_COUNT, MOBILE_BREAKPOINT_PX, MOBILE_COUNT_FACTOR,
    ParticleSettings,
};
pub use surface::{CELL_HEIGHT_PX, CELL_WIDTH_PX, Surface};
