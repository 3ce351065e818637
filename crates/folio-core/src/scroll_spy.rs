//! Scroll-position section tracking.
//!
//! The active section is the last section (in page order) whose top offset is
//! at or above the scroll offset plus a lookahead margin. Scanning from the
//! bottom of the page upwards makes the section closest to the current
//! position win when several qualify.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::events::{EventSource, Subscription};
use crate::SectionId;

/// Default lookahead margin in pixels.
pub const DEFAULT_LOOKAHEAD_MARGIN: f32 = 100.0;

/// Answers where a section starts on the page.
pub trait SectionLayout {
    /// Top offset of the section in pixels, or `None` if it is not laid out.
    fn top_offset(&self, id: &SectionId) -> Option<f32>;
}

impl SectionLayout for [(SectionId, f32)] {
    fn top_offset(&self, id: &SectionId) -> Option<f32> {
        self.iter().find(|(sid, _)| sid == id).map(|(_, top)| *top)
    }
}

impl SectionLayout for Vec<(SectionId, f32)> {
    fn top_offset(&self, id: &SectionId) -> Option<f32> {
        self.as_slice().top_offset(id)
    }
}

/// A scroll notification: the new offset and the layout it applies to.
#[derive(Clone)]
pub struct ScrollEvent {
    pub offset: f32,
    pub layout: Rc<dyn SectionLayout>,
}

impl fmt::Debug for ScrollEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollEvent")
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

/// Tracks which section is currently in view.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    /// Section ids in page order.
    sections: Vec<SectionId>,
    /// Added to the scroll offset before comparing against section tops.
    margin: f32,
    /// Current active section, if any has qualified yet.
    active: Option<SectionId>,
}

impl ScrollSpy {
    /// Create a tracker over `sections` (in page order) with the default margin.
    pub fn new(sections: impl IntoIterator<Item = SectionId>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
            margin: DEFAULT_LOOKAHEAD_MARGIN,
            active: None,
        }
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_ref().is_some_and(|active| active == id)
    }

    /// Recompute the active section for `offset`. Returns true if it changed.
    ///
    /// Sections missing from `layout` are skipped. When no section qualifies
    /// the previous value is kept.
    pub fn update(&mut self, offset: f32, layout: &dyn SectionLayout) -> bool {
        let effective = offset + self.margin;
        let found = self
            .sections
            .iter()
            .rev()
            .find(|id| layout.top_offset(id).is_some_and(|top| top <= effective));

        match found {
            Some(id) if self.active.as_ref() != Some(id) => {
                log::debug!("active section: {} (offset {})", id, offset);
                self.active = Some(id.clone());
                true
            }
            _ => false,
        }
    }

    /// Apply `initial` and keep `spy` updated from `source` until the returned
    /// subscription is detached.
    pub fn track(
        spy: &Rc<RefCell<ScrollSpy>>,
        source: &EventSource<ScrollEvent>,
        initial: &ScrollEvent,
    ) -> Subscription {
        spy.borrow_mut()
            .update(initial.offset, initial.layout.as_ref());

        let spy = Rc::clone(spy);
        source.subscribe(move |event: &ScrollEvent| match spy.try_borrow_mut() {
            Ok(mut spy) => {
                spy.update(event.offset, event.layout.as_ref());
            }
            Err(_) => log::warn!("scroll spy busy, skipped offset {}", event.offset),
        })
    }
}
