//! Navigation bar with active-section highlighting.

use folio_background::to_color;
use folio_config::{PageSettings, SectionConfig};
use folio_core::SectionId;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

/// Rows taken by the navbar: the item row and its bottom border.
pub const NAVBAR_HEIGHT: u16 = 2;

/// Navbar widget for one frame.
#[derive(Debug)]
pub struct Navbar<'a> {
    pub brand: &'a str,
    pub sections: &'a [SectionConfig],
    pub active: Option<&'a SectionId>,
    /// Page is scrolled past the threshold: draw an opaque bar with a border.
    pub scrolled: bool,
    pub colors: &'a PageSettings,
}

impl Navbar<'_> {
    /// `<FirstLast />`, spaces removed.
    fn logo(&self) -> String {
        let name: String = self.brand.split_whitespace().collect();
        format!("<{} />", name)
    }

    fn item_style(&self, is_active: bool) -> Style {
        if is_active {
            Style::new()
                .fg(to_color(self.colors.accent))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::new().fg(to_color(self.colors.muted))
        }
    }

    /// One span per section: `1 Home`, `2 About`, ...
    fn full_items(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, section) in self.sections.iter().enumerate() {
            let is_active = self.active == Some(&section.id);
            spans.push(Span::styled(
                format!(" {} {} ", i + 1, section.title),
                self.item_style(is_active),
            ));
        }
        spans
    }

    /// Collapsed form for narrow terminals: only the active item.
    fn compact_items(&self) -> Vec<Span<'static>> {
        let position = self
            .active
            .and_then(|active| self.sections.iter().position(|s| &s.id == active));
        match position {
            Some(i) => vec![Span::styled(
                format!(" {}/{} {} ", i + 1, self.sections.len(), self.sections[i].title),
                self.item_style(true),
            )],
            None => Vec::new(),
        }
    }
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        if self.scrolled {
            Clear.render(area, buf);
            Block::new()
                .borders(Borders::BOTTOM)
                .border_style(Style::new().fg(to_color(self.colors.muted)))
                .style(Style::new().bg(to_color(self.colors.background)))
                .render(area, buf);
        }

        let row = Rect { height: 1, ..area };
        let logo = self.logo();
        Line::from(logo.clone().bold().fg(to_color(self.colors.accent))).render(row, buf);

        let logo_width = logo.chars().count().saturating_add(2);
        let mut items = self.full_items();
        let items_width: usize = items.iter().map(|s| s.width()).sum();
        if items_width.saturating_add(logo_width) > usize::from(area.width) {
            items = self.compact_items();
        }
        Line::from(items).right_aligned().render(row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionConfig> {
        vec![
            SectionConfig::new("home", "Home", &[]),
            SectionConfig::new("about", "About", &[]),
            SectionConfig::new("contact", "Contact", &[]),
        ]
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_logo_strips_spaces() {
        let colors = PageSettings::default();
        let sections = sections();
        let nav = Navbar {
            brand: "Jane  Q Doe",
            sections: &sections,
            active: None,
            scrolled: false,
            colors: &colors,
        };
        assert_eq!(nav.logo(), "<JaneQDoe />");
    }

    #[test]
    fn test_active_item_is_highlighted() {
        let colors = PageSettings::default();
        let sections = sections();
        let active = SectionId::from("about");
        let area = Rect::new(0, 0, 60, NAVBAR_HEIGHT);
        let mut buf = Buffer::empty(area);

        Navbar {
            brand: "Jane Doe",
            sections: &sections,
            active: Some(&active),
            scrolled: false,
            colors: &colors,
        }
        .render(area, &mut buf);

        let text = row_text(&buf, 0);
        assert!(text.starts_with("<JaneDoe />"));
        assert!(text.contains("1 Home"));
        assert!(text.contains("2 About"));

        let about_x = text.find("2 About").unwrap() as u16;
        let home_x = text.find("1 Home").unwrap() as u16;
        assert!(buf[(about_x, 0)].modifier.contains(Modifier::UNDERLINED));
        assert!(!buf[(home_x, 0)].modifier.contains(Modifier::UNDERLINED));
        // Transparent until scrolled
        assert_eq!(row_text(&buf, 1).trim(), "");
    }

    #[test]
    fn test_scrolled_draws_border() {
        let colors = PageSettings::default();
        let sections = sections();
        let area = Rect::new(0, 0, 60, NAVBAR_HEIGHT);
        let mut buf = Buffer::empty(area);

        Navbar {
            brand: "Jane Doe",
            sections: &sections,
            active: None,
            scrolled: true,
            colors: &colors,
        }
        .render(area, &mut buf);

        assert!(row_text(&buf, 1).chars().all(|c| c == '─'));
    }

    #[test]
    fn test_long_brand_collapses_items() {
        let colors = PageSettings::default();
        let sections = sections();
        let active = SectionId::from("about");
        // `<` + brand + ` />` is exactly 65536 characters
        let brand = "x".repeat(65_532);
        let area = Rect::new(0, 0, 60, NAVBAR_HEIGHT);
        let mut buf = Buffer::empty(area);

        Navbar {
            brand: &brand,
            sections: &sections,
            active: Some(&active),
            scrolled: false,
            colors: &colors,
        }
        .render(area, &mut buf);

        let text = row_text(&buf, 0);
        assert!(text.contains("2/3 About"));
        assert!(!text.contains("1 Home"));
    }

    #[test]
    fn test_narrow_bar_shows_only_active() {
        let colors = PageSettings::default();
        let sections = sections();
        let active = SectionId::from("contact");
        let area = Rect::new(0, 0, 30, NAVBAR_HEIGHT);
        let mut buf = Buffer::empty(area);

        Navbar {
            brand: "Jane Doe",
            sections: &sections,
            active: Some(&active),
            scrolled: false,
            colors: &colors,
        }
        .render(area, &mut buf);

        let text = row_text(&buf, 0);
        assert!(text.contains("3/3 Contact"));
        assert!(!text.contains("Home"));
    }
}
