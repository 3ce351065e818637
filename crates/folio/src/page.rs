//! Vertical layout and rendering of the page sections.

use folio_background::to_color;
use folio_config::{PageSettings, SectionConfig};
use folio_core::{CELL_HEIGHT_PX, SectionId, SectionLayout};

use crate::footer::Footer;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Blank lines above and below every section.
const SECTION_PADDING: u16 = 2;

/// Where each section starts, in pixels from the top of the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    tops: Vec<(SectionId, f32)>,
    total_rows: u16,
}

impl PageLayout {
    pub fn total_rows(&self) -> u16 {
        self.total_rows
    }

    #[cfg(test)]
    pub fn tops(&self) -> &[(SectionId, f32)] {
        &self.tops
    }
}

impl SectionLayout for PageLayout {
    fn top_offset(&self, id: &SectionId) -> Option<f32> {
        self.tops.top_offset(id)
    }
}

/// The stacked sections of the portfolio, with an optional footer.
#[derive(Debug, Clone)]
pub struct Page {
    sections: Vec<SectionConfig>,
    footer: Option<Footer>,
}

impl Page {
    pub fn new(sections: Vec<SectionConfig>) -> Self {
        Self {
            sections,
            footer: None,
        }
    }

    pub fn with_footer(mut self, footer: Footer) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn sections(&self) -> &[SectionConfig] {
        &self.sections
    }

    pub fn section_ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections.iter().map(|s| s.id.clone())
    }

    /// Rows taken by `section` when the viewport is `viewport_rows` tall.
    fn section_rows(section: &SectionConfig, viewport_rows: u16) -> u16 {
        // title + rule + blank line before the body
        let body = u16::try_from(section.body.len()).unwrap_or(u16::MAX);
        let natural = (SECTION_PADDING * 2 + 3).saturating_add(body);
        // The hero fills the whole screen.
        if section.id == "home" {
            natural.max(viewport_rows)
        } else {
            natural
        }
    }

    /// Compute section offsets for a viewport of `viewport_rows` rows.
    pub fn layout(&self, viewport_rows: u16) -> PageLayout {
        let mut row: u16 = 0;
        let mut tops = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            tops.push((section.id.clone(), row as f32 * CELL_HEIGHT_PX));
            row = row.saturating_add(Self::section_rows(section, viewport_rows));
        }
        if let Some(footer) = &self.footer {
            row = row.saturating_add(footer.rows(&self.sections));
        }
        PageLayout {
            tops,
            total_rows: row,
        }
    }

    /// Build every line of the page.
    fn lines(&self, viewport_rows: u16, colors: &PageSettings) -> Vec<Line<'static>> {
        let accent = to_color(colors.accent);
        let muted = to_color(colors.muted);
        let text = to_color(colors.foreground);

        let mut lines = Vec::new();
        for section in &self.sections {
            let start = lines.len();
            lines.extend((0..SECTION_PADDING).map(|_| Line::default()));
            lines.push(Line::styled(section.title.clone(), Style::new().fg(accent).bold()));
            lines.push(Line::styled(
                "─".repeat(section.title.chars().count().max(1)),
                Style::new().fg(muted),
            ));
            lines.push(Line::default());
            lines.extend(
                section
                    .body
                    .iter()
                    .map(|body| Line::styled(body.clone(), Style::new().fg(text))),
            );

            let rows = Self::section_rows(section, viewport_rows) as usize;
            while lines.len() - start < rows {
                lines.push(Line::default());
            }
        }
        if let Some(footer) = &self.footer {
            lines.extend(footer.lines(&self.sections, colors));
        }
        lines
    }

    /// Render the page into `area`, scrolled down by `offset_rows`.
    pub fn render(&self, buf: &mut Buffer, area: Rect, offset_rows: u16, colors: &PageSettings) {
        if area.is_empty() {
            return;
        }
        // Leave a small gutter on the left.
        let inner = Rect {
            x: area.x.saturating_add(2).min(area.right()),
            width: area.width.saturating_sub(2),
            ..area
        };
        Paragraph::new(self.lines(area.height, colors))
            .scroll((offset_rows, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use folio_config::FooterSettings;

    use super::*;

    fn page() -> Page {
        Page::new(vec![
            SectionConfig::new("home", "Home", &["hello"]),
            SectionConfig::new("about", "About", &["one", "two", "three"]),
            SectionConfig::new("contact", "Contact", &[]),
        ])
    }

    #[test]
    fn test_layout_accumulates_heights() {
        let layout = page().layout(10);
        // home: max(4 + 3 + 1, 10) = 10; about: 4 + 3 + 3 = 10; contact: 7
        assert_eq!(
            layout.tops(),
            &[
                (SectionId::from("home"), 0.0),
                (SectionId::from("about"), 10.0 * CELL_HEIGHT_PX),
                (SectionId::from("contact"), 20.0 * CELL_HEIGHT_PX),
            ]
        );
        assert_eq!(layout.total_rows(), 27);
    }

    #[test]
    fn test_home_fills_viewport() {
        let small = page().layout(5);
        let tall = page().layout(40);
        assert_eq!(small.top_offset(&SectionId::from("about")), Some(8.0 * CELL_HEIGHT_PX));
        assert_eq!(tall.top_offset(&SectionId::from("about")), Some(40.0 * CELL_HEIGHT_PX));
    }

    #[test]
    fn test_unknown_section_has_no_offset() {
        assert_eq!(page().layout(10).top_offset(&SectionId::from("blog")), None);
    }

    #[test]
    fn test_lines_match_layout() {
        let page = page();
        let lines = page.lines(10, &PageSettings::default());
        assert_eq!(lines.len(), page.layout(10).total_rows() as usize);
        assert_eq!(lines[SECTION_PADDING as usize].to_string(), "Home");
        assert_eq!(lines[10 + SECTION_PADDING as usize].to_string(), "About");
    }

    #[test]
    fn test_footer_follows_last_section() {
        let footer = Footer::new("Jane Doe", FooterSettings::default());
        let rows = footer.rows(page().sections());
        let page = page().with_footer(footer);

        let layout = page.layout(10);
        assert_eq!(layout.total_rows(), 27 + rows);
        // The footer is not a section
        assert_eq!(layout.tops().len(), 3);

        let lines = page.lines(10, &PageSettings::default());
        assert_eq!(lines.len(), layout.total_rows() as usize);
        assert_eq!(lines[27 + 3].to_string(), "Jane Doe");
    }

    #[test]
    fn test_huge_body_saturates() {
        let body = vec!["line".to_string(); 70_000];
        let page = Page::new(vec![SectionConfig {
            body,
            ..SectionConfig::new("about", "About", &[])
        }]);
        assert_eq!(page.layout(10).total_rows(), u16::MAX);
    }

    #[test]
    fn test_render_scrolls() {
        let page = page();
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        // Scroll so the "About" title is on the first row
        let about = page
            .layout(area.height)
            .top_offset(&SectionId::from("about"))
            .unwrap();
        let offset = (about / CELL_HEIGHT_PX) as u16 + SECTION_PADDING;
        page.render(&mut buf, area, offset, &PageSettings::default());

        let first_row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert_eq!(first_row.trim(), "About");
    }
}
