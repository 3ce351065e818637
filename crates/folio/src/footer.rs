//! Closing block under the last section.

use folio_background::to_color;
use folio_config::{FooterSettings, PageSettings, SectionConfig};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Width of the rule that separates the footer from the page.
const RULE_WIDTH: usize = 40;

#[derive(Debug, Clone)]
pub struct Footer {
    brand: String,
    settings: FooterSettings,
}

impl Footer {
    pub fn new(brand: &str, settings: FooterSettings) -> Self {
        Self {
            brand: brand.to_string(),
            settings,
        }
    }

    /// Rows taken by the footer.
    pub fn rows(&self, sections: &[SectionConfig]) -> u16 {
        let lines = self.lines(sections, &PageSettings::default()).len();
        u16::try_from(lines).unwrap_or(u16::MAX)
    }

    /// Brand, description, quick links back to every section, contact lines
    /// and a back-to-top hint.
    pub fn lines(&self, sections: &[SectionConfig], colors: &PageSettings) -> Vec<Line<'static>> {
        let accent = to_color(colors.accent);
        let muted = Style::new().fg(to_color(colors.muted));
        let text = Style::new().fg(to_color(colors.foreground));

        let mut lines = vec![
            Line::default(),
            Line::styled("─".repeat(RULE_WIDTH), muted),
            Line::default(),
            Line::styled(self.brand.clone(), Style::new().fg(accent).bold()),
        ];
        if !self.settings.description.is_empty() {
            lines.push(Line::styled(self.settings.description.clone(), muted));
        }
        lines.push(Line::default());

        if !sections.is_empty() {
            let mut links = vec![Span::styled("Quick links  ", text)];
            for (i, section) in sections.iter().enumerate() {
                if i > 0 {
                    links.push(Span::styled(" · ", muted));
                }
                links.push(Span::styled(format!("{} {}", i + 1, section.title), muted));
            }
            lines.push(Line::from(links));
        }
        if !self.settings.email.is_empty() {
            lines.push(Line::styled(format!("Email     {}", self.settings.email), muted));
        }
        if !self.settings.location.is_empty() {
            lines.push(Line::styled(
                format!("Location  {}", self.settings.location),
                muted,
            ));
        }

        lines.push(Line::default());
        lines.push(Line::styled(
            format!("© {}  ·  g back to top ↑", self.brand),
            muted,
        ));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionConfig> {
        vec![
            SectionConfig::new("home", "Home", &[]),
            SectionConfig::new("about", "About", &[]),
        ]
    }

    fn text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_links_back_to_sections() {
        let footer = Footer::new("Jane Doe", FooterSettings::default());
        let lines = text(&footer.lines(&sections(), &PageSettings::default()));

        assert!(lines.contains(&"Jane Doe".to_string()));
        assert!(lines.contains(&"Quick links  1 Home · 2 About".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("© Jane Doe  ·  g back to top ↑"));
    }

    #[test]
    fn test_empty_fields_are_skipped() {
        let settings = FooterSettings {
            description: String::new(),
            ..Default::default()
        };
        let bare = Footer::new("Jane Doe", settings.clone());
        let full = Footer::new(
            "Jane Doe",
            FooterSettings {
                email: "jane@example.com".to_string(),
                location: "Lisbon".to_string(),
                ..settings
            },
        );

        assert_eq!(full.rows(&sections()), bare.rows(&sections()) + 2);
        let lines = text(&full.lines(&sections(), &PageSettings::default()));
        assert!(lines.contains(&"Email     jane@example.com".to_string()));
        assert!(lines.contains(&"Location  Lisbon".to_string()));
    }
}
