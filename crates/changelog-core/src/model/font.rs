//! Font descriptors and the resolved font set
//!
//! A [`FontTiers`] value lists, per tier, the font to try for each logical
//! [`FontRole`]. Resolution (see `crate::fonts`) turns it into a
//! [`FontSet`] that records which concrete font won for every role.

use serde::{Deserialize, Serialize};

/// Concrete font descriptor understood by the host
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

impl std::fmt::Display for FontName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// Logical font role used by the builders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Regular,
    Medium,
    SemiBold,
    Bold,
}

impl FontRole {
    pub const ALL: [FontRole; 4] = [
        FontRole::Regular,
        FontRole::Medium,
        FontRole::SemiBold,
        FontRole::Bold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontRole::Regular => "regular",
            FontRole::Medium => "medium",
            FontRole::SemiBold => "semiBold",
            FontRole::Bold => "bold",
        }
    }
}

/// Preference tier a font was resolved from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontTier {
    Primary,
    Fallback,
    System,
}

impl FontTier {
    /// Tiers in the order they are attempted
    pub const ORDER: [FontTier; 3] = [FontTier::Primary, FontTier::Fallback, FontTier::System];
}

/// One font per logical role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontCollection {
    pub regular: FontName,
    pub medium: FontName,
    pub semi_bold: FontName,
    pub bold: FontName,
}

impl FontCollection {
    /// Collection where every role uses `family` with the conventional style names
    pub fn family(family: &str, semi_bold_style: &str) -> Self {
        Self {
            regular: FontName::new(family, "Regular"),
            medium: FontName::new(family, "Medium"),
            semi_bold: FontName::new(family, semi_bold_style),
            bold: FontName::new(family, "Bold"),
        }
    }

    pub fn get(&self, role: FontRole) -> &FontName {
        match role {
            FontRole::Regular => &self.regular,
            FontRole::Medium => &self.medium,
            FontRole::SemiBold => &self.semi_bold,
            FontRole::Bold => &self.bold,
        }
    }
}

/// Ordered preference list: primary, then fallback, then system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontTiers {
    pub primary: FontCollection,
    pub fallback: FontCollection,
    pub system: FontCollection,
}

impl FontTiers {
    pub fn get(&self, tier: FontTier) -> &FontCollection {
        match tier {
            FontTier::Primary => &self.primary,
            FontTier::Fallback => &self.fallback,
            FontTier::System => &self.system,
        }
    }
}

impl Default for FontTiers {
    fn default() -> Self {
        Self {
            primary: FontCollection::family("Inter", "SemiBold"),
            fallback: FontCollection::family("SF Pro Text", "Semibold"),
            // Arial ships without Medium/SemiBold faces
            system: FontCollection {
                regular: FontName::new("Arial", "Regular"),
                medium: FontName::new("Arial", "Regular"),
                semi_bold: FontName::new("Arial", "Bold"),
                bold: FontName::new("Arial", "Bold"),
            },
        }
    }
}

/// A font that loaded successfully, with the tier it came from
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFont {
    pub font: FontName,
    pub tier: FontTier,
}

/// Complete role → font mapping for one build operation
///
/// Only constructed when every role resolved; there is no partial set.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSet {
    pub regular: ResolvedFont,
    pub medium: ResolvedFont,
    pub semi_bold: ResolvedFont,
    pub bold: ResolvedFont,
}

impl FontSet {
    pub fn resolved(&self, role: FontRole) -> &ResolvedFont {
        match role {
            FontRole::Regular => &self.regular,
            FontRole::Medium => &self.medium,
            FontRole::SemiBold => &self.semi_bold,
            FontRole::Bold => &self.bold,
        }
    }

    pub fn get(&self, role: FontRole) -> &FontName {
        &self.resolved(role).font
    }

    pub fn tier(&self, role: FontRole) -> FontTier {
        self.resolved(role).tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tiers_match_role_styles() {
        let tiers = FontTiers::default();
        assert_eq!(tiers.primary.get(FontRole::SemiBold).style, "SemiBold");
        assert_eq!(tiers.fallback.get(FontRole::SemiBold).style, "Semibold");
        assert_eq!(tiers.system.get(FontRole::Medium).style, "Regular");
        assert_eq!(tiers.system.get(FontRole::SemiBold).style, "Bold");
    }

    #[test]
    fn test_font_name_display() {
        assert_eq!(FontName::new("Inter", "Bold").to_string(), "Inter Bold");
    }

    #[test]
    fn test_tier_order() {
        assert_eq!(FontTier::ORDER[0], FontTier::Primary);
        assert_eq!(FontTier::ORDER[2], FontTier::System);
    }
}
