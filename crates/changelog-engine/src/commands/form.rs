//! Form payload validation and entry assembly

use changelog_core::host::CurrentUser;
use changelog_core::model::{ChangeType, ChangelogEntry, UserInfo};
use changelog_core::{ChangelogConfig, ChangelogError};
use serde::{Deserialize, Serialize};

/// Raw form fields as sent by the UI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub change_type: Option<String>,
    pub link_url: Option<String>,
    pub link_label: Option<String>,
    pub image_data: Option<String>,
    /// Photo prepared by the UI; wins over the platform photo
    pub user_photo_data: Option<String>,
}

impl FormData {
    /// Check required fields
    ///
    /// # Errors
    /// `InvalidForm` naming the first missing or blank required field.
    /// `description` must be present but may be empty.
    pub fn validate(&self) -> Result<(), ChangelogError> {
        require_non_blank("title", self.title.as_deref())?;
        if self.description.is_none() {
            return Err(invalid("description", "is required"));
        }
        require_non_blank("changeType", self.change_type.as_deref())?;
        Ok(())
    }

    /// Validate and build the entry for `user`
    ///
    /// # Errors
    /// See [`FormData::validate`].
    pub fn into_entry(
        self,
        user: Option<&CurrentUser>,
        config: &ChangelogConfig,
    ) -> Result<ChangelogEntry, ChangelogError> {
        self.validate()?;

        let name = user
            .map(|u| u.name.as_str())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(config.default_user_name.as_str());
        let photo = self
            .user_photo_data
            .filter(|p| !p.trim().is_empty())
            .or_else(|| user.and_then(|u| u.photo_url.clone()))
            .filter(|p| !p.trim().is_empty());
        let mut author = UserInfo::new(name);
        if let Some(photo) = photo {
            author = author.with_photo(photo);
        }

        let mut entry = ChangelogEntry::new(
            self.title.unwrap_or_default(),
            self.description.unwrap_or_default(),
            ChangeType::parse(self.change_type.as_deref().unwrap_or_default().trim()),
            author,
        )
        .with_link(self.link_url, self.link_label);
        if let Some(image) = self.image_data {
            entry = entry.with_image(image);
        }
        Ok(entry)
    }
}

fn require_non_blank(field: &str, value: Option<&str>) -> Result<(), ChangelogError> {
    match value {
        None => Err(invalid(field, "is required")),
        Some(v) if v.trim().is_empty() => Err(invalid(field, "must not be blank")),
        Some(_) => Ok(()),
    }
}

fn invalid(field: &str, reason: &str) -> ChangelogError {
    ChangelogError::InvalidForm {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
