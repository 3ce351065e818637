//! Scroll state of the page and the notifications it emits.

use std::rc::Rc;

use folio_core::{CELL_HEIGHT_PX, EventSource, ScrollEvent, SectionLayout, Surface};

/// An animated jump between two offsets.
#[derive(Debug, Clone, Copy)]
struct SmoothScroll {
    from: f32,
    to: f32,
    start_ms: u64,
    duration_ms: u64,
}

impl SmoothScroll {
    /// Offset at `now_ms` (ease-out cubic) and whether the animation is over.
    fn sample(&self, now_ms: u64) -> (f32, bool) {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            return (self.to, true);
        }
        let t = elapsed as f32 / self.duration_ms as f32;
        let eased = 1.0 - (1.0 - t).powi(3);
        (self.from + (self.to - self.from) * eased, false)
    }
}

/// The visible window onto the page.
///
/// Offsets are in pixels ([`CELL_HEIGHT_PX`] per row) so the scroll-spy
/// margin and navbar threshold keep their page units. Every change of offset
/// is published on [`scroll_events`](Self::scroll_events), every terminal
/// resize on [`resize_events`](Self::resize_events).
pub struct Viewport {
    /// Current scroll offset in pixels.
    offset: f32,
    /// Rows of page visible at once.
    rows: u16,
    /// Total rows of page content.
    content_rows: u16,
    /// Section offsets of the current page.
    layout: Rc<dyn SectionLayout>,
    animation: Option<SmoothScroll>,
    scroll_events: EventSource<ScrollEvent>,
    resize_events: EventSource<Surface>,
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("offset", &self.offset)
            .field("rows", &self.rows)
            .field("content_rows", &self.content_rows)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}

impl Viewport {
    pub fn new(layout: Rc<dyn SectionLayout>, content_rows: u16) -> Self {
        Self {
            offset: 0.0,
            rows: 0,
            content_rows,
            layout,
            animation: None,
            scroll_events: EventSource::new(),
            resize_events: EventSource::new(),
        }
    }

    pub fn scroll_events(&self) -> &EventSource<ScrollEvent> {
        &self.scroll_events
    }

    pub fn resize_events(&self) -> &EventSource<Surface> {
        &self.resize_events
    }

    /// Current offset in pixels.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Current offset in whole rows, for rendering.
    pub fn offset_rows(&self) -> u16 {
        (self.offset / CELL_HEIGHT_PX).round() as u16
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Largest reachable offset.
    pub fn max_offset(&self) -> f32 {
        self.content_rows.saturating_sub(self.rows) as f32 * CELL_HEIGHT_PX
    }

    /// Whether the page is scrolled past `threshold` pixels.
    pub fn is_scrolled(&self, threshold: f32) -> bool {
        self.offset > threshold
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// The current position as a scroll notification.
    pub fn scroll_event(&self) -> ScrollEvent {
        ScrollEvent {
            offset: self.offset,
            layout: Rc::clone(&self.layout),
        }
    }

    /// Record a terminal of `columns`x`rows` cells showing `page_rows` rows
    /// of a page laid out as `layout`, `content_rows` tall.
    ///
    /// The offset is clamped against the new page only, and listeners see a
    /// single scroll event for it.
    pub fn resize(
        &mut self,
        columns: u16,
        rows: u16,
        page_rows: u16,
        layout: Rc<dyn SectionLayout>,
        content_rows: u16,
    ) {
        self.rows = page_rows;
        self.resize_events.emit(&Surface::from_cells(columns, rows));
        self.set_layout(layout, content_rows);
    }

    /// Replace the page layout. Always notifies, since section offsets moved.
    pub fn set_layout(&mut self, layout: Rc<dyn SectionLayout>, content_rows: u16) {
        self.layout = layout;
        self.content_rows = content_rows;
        let max = self.max_offset();
        if let Some(animation) = &mut self.animation {
            animation.to = animation.to.clamp(0.0, max);
        }
        self.offset = self.offset.clamp(0.0, max);
        self.scroll_events.emit(&self.scroll_event());
    }

    /// Scroll by whole rows (negative is up). Cancels any animation.
    pub fn scroll_rows(&mut self, delta: i32) -> bool {
        self.animation = None;
        self.apply(self.offset + delta as f32 * CELL_HEIGHT_PX)
    }

    /// Scroll by one screen (negative is up).
    pub fn scroll_pages(&mut self, delta: i32) -> bool {
        let page = self.rows.saturating_sub(1).max(1) as i32;
        self.scroll_rows(delta * page)
    }

    /// Jump to `target` pixels immediately.
    pub fn jump_to(&mut self, target: f32) -> bool {
        self.animation = None;
        self.apply(target)
    }

    /// Move to `target` pixels over `duration_ms`, starting at `now_ms`.
    pub fn scroll_to(&mut self, target: f32, now_ms: u64, duration_ms: u64) -> bool {
        if duration_ms == 0 {
            return self.jump_to(target);
        }
        self.animation = Some(SmoothScroll {
            from: self.offset,
            to: target.clamp(0.0, self.max_offset()),
            start_ms: now_ms,
            duration_ms,
        });
        self.tick(now_ms)
    }

    /// Advance a running animation. Returns true if the offset changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        let (offset, done) = animation.sample(now_ms);
        if done {
            self.animation = None;
        }
        self.apply(offset)
    }

    /// Clamp and store `offset`, notifying listeners if it changed.
    fn apply(&mut self, offset: f32) -> bool {
        let offset = offset.clamp(0.0, self.max_offset());
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        self.scroll_events.emit(&self.scroll_event());
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use folio_core::SectionId;

    use super::*;

    fn layout() -> Rc<dyn SectionLayout> {
        Rc::new(vec![
            (SectionId::from("home"), 0.0),
            (SectionId::from("about"), 800.0),
        ])
    }

    fn viewport() -> Viewport {
        let mut viewport = Viewport::new(layout(), 100);
        viewport.resize(80, 24, 20, layout(), 100);
        viewport
    }

    fn record(viewport: &Viewport) -> (Rc<RefCell<Vec<f32>>>, folio_core::Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sub = {
            let seen = Rc::clone(&seen);
            viewport
                .scroll_events()
                .subscribe(move |e: &ScrollEvent| seen.borrow_mut().push(e.offset))
        };
        (seen, sub)
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut v = viewport();
        assert!(!v.scroll_rows(-5));
        assert_eq!(v.offset(), 0.0);

        assert!(v.scroll_rows(1_000));
        assert_eq!(v.offset(), 80.0 * CELL_HEIGHT_PX);
        assert_eq!(v.offset(), v.max_offset());
        assert_eq!(v.offset_rows(), 80);
    }

    #[test]
    fn test_emits_only_on_change() {
        let mut v = viewport();
        let (seen, sub) = record(&v);

        v.scroll_rows(2);
        v.scroll_rows(-10);
        v.scroll_rows(-1);

        assert_eq!(*seen.borrow(), vec![2.0 * CELL_HEIGHT_PX, 0.0]);
        sub.detach();
    }

    #[test]
    fn test_resize_publishes_surface() {
        let mut v = Viewport::new(layout(), 100);
        let seen = Rc::new(RefCell::new(None));
        let sub = {
            let seen = Rc::clone(&seen);
            v.resize_events()
                .subscribe(move |s: &Surface| *seen.borrow_mut() = Some(*s))
        };

        v.resize(120, 40, 37, layout(), 100);
        assert_eq!(*seen.borrow(), Some(Surface::new(960.0, 640.0)));
        assert_eq!(v.rows(), 37);
        sub.detach();
    }

    #[test]
    fn test_shrinking_content_reclamps() {
        let mut v = viewport();
        v.scroll_rows(50);
        v.set_layout(layout(), 30);
        assert_eq!(v.offset(), 10.0 * CELL_HEIGHT_PX);
    }

    #[test]
    fn test_growing_terminal_keeps_bottom_offset() {
        let mut v = Viewport::new(layout(), 40);
        v.resize(80, 22, 20, layout(), 40);
        v.jump_to(v.max_offset());
        assert_eq!(v.offset(), 20.0 * CELL_HEIGHT_PX);

        let (seen, sub) = record(&v);
        v.resize(80, 32, 30, layout(), 50);
        assert_eq!(v.max_offset(), 20.0 * CELL_HEIGHT_PX);
        assert_eq!(v.offset(), 20.0 * CELL_HEIGHT_PX);
        assert_eq!(*seen.borrow(), vec![20.0 * CELL_HEIGHT_PX]);
        sub.detach();
    }

    #[test]
    fn test_layout_change_clamps_animation_target() {
        let mut v = viewport();
        v.scroll_to(80.0 * CELL_HEIGHT_PX, 0, 300);
        v.set_layout(layout(), 30);
        assert!(v.tick(300));
        assert_eq!(v.offset(), 10.0 * CELL_HEIGHT_PX);
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut v = viewport();
        let (seen, sub) = record(&v);

        assert!(!v.scroll_to(800.0, 1_000, 300));
        assert!(v.is_animating());

        assert!(v.tick(1_150));
        let midway = v.offset();
        assert!(midway > 0.0 && midway < 800.0);

        assert!(v.tick(1_300));
        assert_eq!(v.offset(), 800.0);
        assert!(!v.is_animating());
        assert!(!v.tick(1_400));

        assert_eq!(seen.borrow().last(), Some(&800.0));
        sub.detach();
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let mut v = viewport();
        v.scroll_to(800.0, 0, 300);
        v.scroll_rows(1);
        assert!(!v.is_animating());
        assert_eq!(v.offset(), CELL_HEIGHT_PX);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut v = viewport();
        assert!(v.scroll_to(800.0, 0, 0));
        assert_eq!(v.offset(), 800.0);
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut v = viewport();
        assert!(!v.is_scrolled(50.0));
        // 3 rows is 48 px, still under the threshold
        v.scroll_rows(3);
        assert!(!v.is_scrolled(50.0));
        v.scroll_rows(1);
        assert!(v.is_scrolled(50.0));
    }
}
