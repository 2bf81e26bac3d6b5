//! Portfolio data shapes.

use serde::{Deserialize, Serialize};

/// Icon shown next to a portfolio link.
///
/// Stored as a plain string in data files. Markup starting with `<svg` is
/// treated as inline SVG; anything else is an emoji (or other short glyph).
/// The two representations render differently but behave identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Icon {
    /// A short emoji or glyph string, e.g. "🔗".
    Emoji(String),
    /// Inline SVG markup.
    Svg(String),
}

impl Icon {
    /// The raw string as it appears in the data file.
    pub fn as_str(&self) -> &str {
        match self {
            Icon::Emoji(s) | Icon::Svg(s) => s,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().trim().is_empty()
    }

    pub fn is_svg(&self) -> bool {
        matches!(self, Icon::Svg(_))
    }
}

impl From<String> for Icon {
    fn from(raw: String) -> Self {
        if raw.trim_start().starts_with("<svg") {
            Icon::Svg(raw)
        } else {
            Icon::Emoji(raw)
        }
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        match icon {
            Icon::Emoji(s) | Icon::Svg(s) => s,
        }
    }
}

/// One external link shown on the portfolio page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioLink {
    /// Display label
    pub label: String,

    /// Target URL
    pub url: String,

    /// Icon shown next to the label
    pub icon: Icon,

    /// Optional secondary link to a live demo
    #[serde(default, alias = "demoUrl", skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
}

/// The data a portfolio page renderer consumes.
///
/// `links` order is meaningful: it is the display order on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    /// Display name
    pub name: String,

    /// Avatar image URL or relative path
    #[serde(alias = "avatarUrl")]
    pub avatar_url: String,

    /// Biography text
    pub bio: String,

    /// Ordered list of external links; may be empty
    #[serde(default)]
    pub links: Vec<PortfolioLink>,
}
