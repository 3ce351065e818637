use folio_core::{DEFAULT_LOOKAHEAD_MARGIN, Rgb, SectionId};
use serde::{Deserialize, Serialize};

/// Scroll behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    /// Pixels added to the scroll offset before picking the active section.
    pub lookahead_margin: f32,
    /// Offset in pixels past which the navbar switches to its scrolled style.
    pub scrolled_threshold: f32,
    /// Duration of animated jumps to a section, in milliseconds. 0 jumps instantly.
    pub smooth_scroll_ms: u64,
    /// Lines scrolled per mouse wheel notch.
    pub wheel_lines: u16,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            lookahead_margin: DEFAULT_LOOKAHEAD_MARGIN,
            scrolled_threshold: 50.0,
            smooth_scroll_ms: 300,
            wheel_lines: 3,
        }
    }
}

/// Page colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Background the particles are blended against.
    pub background: Rgb,
    /// Body text.
    pub foreground: Rgb,
    /// Titles and the active navbar item.
    pub accent: Rgb,
    /// Inactive navbar items and rules.
    pub muted: Rgb,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            background: Rgb::new(0x0a, 0x0a, 0x0a),
            foreground: Rgb::new(0xf5, 0xf5, 0xf5),
            accent: Rgb::new(0x60, 0xa5, 0xfa),
            muted: Rgb::new(0xa3, 0xa3, 0xa3),
        }
    }
}

/// Navigation bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarSettings {
    /// Name shown as `<Name />` on the left of the bar.
    pub brand: String,
}

impl Default for NavbarSettings {
    fn default() -> Self {
        Self {
            brand: "Your Name".to_string(),
        }
    }
}

/// Closing block below the last section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterSettings {
    /// Draw the footer at all.
    pub enabled: bool,
    /// One-line summary under the brand.
    pub description: String,
    pub email: String,
    pub location: String,
}

impl Default for FooterSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            description: "Building things for the web and the terminal.".to_string(),
            email: String::new(),
            location: String::new(),
        }
    }
}

/// One section of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: SectionId,
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
}

impl SectionConfig {
    pub fn new(id: &str, title: &str, body: &[&str]) -> Self {
        Self {
            id: SectionId::new(id),
            title: title.to_string(),
            body: body.iter().map(|line| line.to_string()).collect(),
        }
    }

    /// The sections of a standard portfolio page.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "home",
                "Home",
                &[
                    "Software Engineer",
                    "",
                    "Edit the [[sections]] tables of your config.toml to make this page yours.",
                ],
            ),
            Self::new(
                "about",
                "About",
                &["A few paragraphs about who you are and what you care about."],
            ),
            Self::new(
                "skills",
                "Skills",
                &["Languages, frameworks and tools you work with."],
            ),
            Self::new(
                "projects",
                "Projects",
                &["Things you have built, with a line on each."],
            ),
            Self::new(
                "experience",
                "Experience",
                &["Where you have worked and what you did there."],
            ),
            Self::new(
                "research",
                "Research",
                &["Papers and publications."],
            ),
            Self::new(
                "contact",
                "Contact",
                &["How to reach you."],
            ),
        ]
    }
}
