use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::style::{self, BadgeColors};

/// Category of a change, shown as a colored badge
///
/// Unknown labels are kept verbatim in `Other` so that any string the form
/// sends can still be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChangeType {
    NewFeature,
    Update,
    BugFix,
    Removed,
    Refactoring,
    Improvement,
    Deprecation,
    LayoutAdjustment,
    Other(String),
}

impl ChangeType {
    pub const KNOWN: [ChangeType; 8] = [
        ChangeType::NewFeature,
        ChangeType::Update,
        ChangeType::BugFix,
        ChangeType::Removed,
        ChangeType::Refactoring,
        ChangeType::Improvement,
        ChangeType::Deprecation,
        ChangeType::LayoutAdjustment,
    ];

    pub fn parse(label: &str) -> Self {
        match label {
            "New Feature" => ChangeType::NewFeature,
            "Update" => ChangeType::Update,
            "Bug Fix" => ChangeType::BugFix,
            "Removed" => ChangeType::Removed,
            "Refactoring" => ChangeType::Refactoring,
            "Improvement" => ChangeType::Improvement,
            "Deprecation" => ChangeType::Deprecation,
            "Layout Adjustment" => ChangeType::LayoutAdjustment,
            other => ChangeType::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ChangeType::NewFeature => "New Feature",
            ChangeType::Update => "Update",
            ChangeType::BugFix => "Bug Fix",
            ChangeType::Removed => "Removed",
            ChangeType::Refactoring => "Refactoring",
            ChangeType::Improvement => "Improvement",
            ChangeType::Deprecation => "Deprecation",
            ChangeType::LayoutAdjustment => "Layout Adjustment",
            ChangeType::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ChangeType::Other(_))
    }

    /// Badge colors; unrecognized categories use the "Update" pair
    pub fn badge_colors(&self) -> BadgeColors {
        style::badge_colors(self)
    }
}

impl From<String> for ChangeType {
    fn from(label: String) -> Self {
        ChangeType::parse(&label)
    }
}

impl From<ChangeType> for String {
    fn from(change_type: ChangeType) -> Self {
        change_type.label().to_string()
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Author of an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    /// Absolute URL or inline-encoded image
    pub photo_url: Option<String>,
}

impl UserInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            photo_url: None,
        }
    }

    pub fn with_photo(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }
}

/// One changelog record, immutable once submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub change_type: ChangeType,
    pub link_url: Option<String>,
    pub link_label: Option<String>,
    /// Inline-encoded image payload
    pub image_data: Option<String>,
    pub user: UserInfo,
    /// Wall clock at submission; not monotonic across submissions
    pub timestamp: DateTime<Utc>,
}

impl ChangelogEntry {
    /// Create an entry with a fresh UUID v7 id stamped with the current time
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        change_type: ChangeType,
        user: UserInfo,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            title: title.into(),
            description: description.into(),
            change_type,
            link_url: None,
            link_label: None,
            image_data: None,
            user,
            timestamp: Utc::now(),
        }
    }

    pub fn with_link(mut self, url: Option<String>, label: Option<String>) -> Self {
        self.link_url = url;
        self.link_label = label;
        self
    }

    pub fn with_image(mut self, image_data: impl Into<String>) -> Self {
        self.image_data = Some(image_data.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Link URL, ignoring blank values
    pub fn link_url(&self) -> Option<&str> {
        non_blank(self.link_url.as_deref())
    }

    /// Link label, ignoring blank values
    pub fn link_label(&self) -> Option<&str> {
        non_blank(self.link_label.as_deref())
    }

    /// Image payload, ignoring blank values
    pub fn image_data(&self) -> Option<&str> {
        non_blank(self.image_data.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
