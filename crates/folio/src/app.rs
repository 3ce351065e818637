use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use folio_background::{ParticleBackground, ParticleField};
use folio_config::Config;
use folio_core::{FRAME_INTERVAL_MS, ScrollSpy, SectionLayout, Subscription};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};

use crate::footer::Footer;
use crate::navbar::{NAVBAR_HEIGHT, Navbar};
use crate::page::Page;
use crate::viewport::Viewport;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    page: Page,
    viewport: Viewport,
    /// Active section, kept current from the viewport's scroll events.
    spy: Rc<RefCell<ScrollSpy>>,
    /// Particle field, kept sized from the viewport's resize events.
    background: Rc<RefCell<ParticleBackground>>,
    /// Listener registrations, detached on shutdown.
    subscriptions: Vec<Subscription>,
    /// Start of the animation clock.
    started: Instant,
    /// Something changed since the last frame.
    needs_redraw: bool,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, field: ParticleField, particles_enabled: bool) -> Self {
        let mut page = Page::new(config.sections.clone());
        if config.footer.enabled {
            page = page.with_footer(Footer::new(&config.navbar.brand, config.footer.clone()));
        }
        let layout = page.layout(0);
        let content_rows = layout.total_rows();
        let layout: Rc<dyn SectionLayout> = Rc::new(layout);
        let viewport = Viewport::new(layout, content_rows);

        let spy = Rc::new(RefCell::new(
            ScrollSpy::new(page.section_ids()).with_margin(config.scroll.lookahead_margin),
        ));
        let mut background = ParticleBackground::new(field, config.page.background);
        background.set_enabled(particles_enabled);
        let background = Rc::new(RefCell::new(background));

        let subscriptions = vec![
            ScrollSpy::track(&spy, viewport.scroll_events(), &viewport.scroll_event()),
            ParticleBackground::track_resize(&background, viewport.resize_events()),
        ];

        Self {
            running: false,
            config,
            page,
            viewport,
            spy,
            background,
            subscriptions,
            started: Instant::now(),
            needs_redraw: true,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let size = terminal.size()?;
        self.on_resize(size.width, size.height);
        log::info!("started with {} sections", self.page.sections().len());

        while self.running {
            if self.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }
            self.handle_crossterm_events()?;
            self.on_tick();
        }

        self.shutdown();
        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [nav_area, page_area, help_area] = Layout::vertical([
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        // Particles first so the page draws on top of them
        self.background.borrow().render(frame.buffer_mut(), area);

        self.page.render(
            frame.buffer_mut(),
            page_area,
            self.viewport.offset_rows(),
            &self.config.page,
        );

        let spy = self.spy.borrow();
        let navbar = Navbar {
            brand: &self.config.navbar.brand,
            sections: self.page.sections(),
            active: spy.active(),
            scrolled: self.viewport.is_scrolled(self.config.scroll.scrolled_threshold),
            colors: &self.config.page,
        };
        frame.render_widget(navbar, nav_area);

        let help = Line::from(vec![
            "q".bold(),
            " quit  ".dark_gray(),
            "j/k".bold(),
            " scroll  ".dark_gray(),
            "1-9".bold(),
            " jump  ".dark_gray(),
            "p".bold(),
            " particles".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, help_area);
    }

    /// Step animations and mark the frame dirty if anything moved.
    fn on_tick(&mut self) {
        let now = self.now_ms();
        if self.background.borrow_mut().tick(now) {
            self.needs_redraw = true;
        }
        if self.viewport.tick(now) {
            self.needs_redraw = true;
        }
    }

    /// Re-layout the page for a terminal of `columns`x`rows` cells.
    fn on_resize(&mut self, columns: u16, rows: u16) {
        let page_rows = rows.saturating_sub(NAVBAR_HEIGHT + 1);
        let layout = self.page.layout(page_rows);
        let content_rows = layout.total_rows();
        self.viewport
            .resize(columns, rows, page_rows, Rc::new(layout), content_rows);

        log::debug!("resized to {}x{} ({} page rows)", columns, rows, page_rows);
        self.needs_redraw = true;
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the frame interval as timeout so animations keep running.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(FRAME_INTERVAL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(columns, rows) => self.on_resize(columns, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        let moved = match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => {
                self.quit();
                false
            }
            (_, KeyCode::Char('j') | KeyCode::Down) => self.viewport.scroll_rows(1),
            (_, KeyCode::Char('k') | KeyCode::Up) => self.viewport.scroll_rows(-1),
            (_, KeyCode::PageDown | KeyCode::Char(' ')) => self.viewport.scroll_pages(1),
            (_, KeyCode::PageUp) => self.viewport.scroll_pages(-1),
            (_, KeyCode::Char('g') | KeyCode::Home) => self.viewport.jump_to(0.0),
            (_, KeyCode::Char('G') | KeyCode::End) => {
                let bottom = self.viewport.max_offset();
                self.viewport.jump_to(bottom)
            }
            (_, KeyCode::Char('p')) => {
                self.background.borrow_mut().toggle();
                true
            }
            (_, KeyCode::Char(c @ '1'..='9')) => {
                let index = c as usize - '1' as usize;
                self.jump_to_section(index)
            }
            _ => false,
        };
        if moved {
            self.needs_redraw = true;
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let lines = self.config.scroll.wheel_lines as i32;
        let moved = match mouse.kind {
            MouseEventKind::ScrollDown => self.viewport.scroll_rows(lines),
            MouseEventKind::ScrollUp => self.viewport.scroll_rows(-lines),
            _ => false,
        };
        if moved {
            self.needs_redraw = true;
        }
    }

    /// Smooth-scroll to the section at `index` in page order.
    fn jump_to_section(&mut self, index: usize) -> bool {
        let Some(section) = self.page.sections().get(index) else {
            return false;
        };
        let layout = self.page.layout(self.viewport.rows());
        let Some(top) = layout.top_offset(&section.id) else {
            return false;
        };
        log::debug!(
            "jump to section {} at {} (from {})",
            section.id,
            top,
            self.viewport.offset()
        );
        let now = self.now_ms();
        self.viewport
            .scroll_to(top, now, self.config.scroll.smooth_scroll_ms);
        true
    }

    /// Detach every listener registration.
    fn shutdown(&mut self) {
        for subscription in self.subscriptions.drain(..) {
            subscription.detach();
        }
        log::info!("shut down");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
