//! Wire messages exchanged with the UI
//!
//! Both directions are JSON objects tagged by `type` with kebab-case tags
//! and camelCase fields.

use serde::{Deserialize, Serialize};

use super::form::FormData;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiRequest {
    ListPages,
    #[serde(rename_all = "camelCase")]
    CheckContainer {
        page_id: String,
    },
    NavigateToContainer,
    CreateEntry {
        #[serde(default)]
        data: Option<FormData>,
    },
    /// Like `CreateEntry`, but the page must already have a changelog
    AddEntry {
        #[serde(default)]
        data: Option<FormData>,
    },
    FetchUserInfo,
    #[serde(rename_all = "camelCase")]
    ProcessRemoteImage {
        #[serde(default)]
        photo_url: Option<String>,
    },
    /// Submission without counts or follow-up message
    SubmitForm {
        #[serde(default)]
        data: Option<FormData>,
    },
}

impl UiRequest {
    /// Wire tag, used as the log operation name
    pub fn kind(&self) -> &'static str {
        match self {
            UiRequest::ListPages => "list-pages",
            UiRequest::CheckContainer { .. } => "check-container",
            UiRequest::NavigateToContainer => "navigate-to-container",
            UiRequest::CreateEntry { .. } => "create-entry",
            UiRequest::AddEntry { .. } => "add-entry",
            UiRequest::FetchUserInfo => "fetch-user-info",
            UiRequest::ProcessRemoteImage { .. } => "process-remote-image",
            UiRequest::SubmitForm { .. } => "submit-form",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub page_id: String,
    pub page_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiResponse {
    Pages {
        pages: Vec<PageSummary>,
    },
    #[serde(rename_all = "camelCase")]
    ContainerStatus {
        exists: bool,
        entry_count: usize,
        active_page_id: String,
    },
    #[serde(rename_all = "camelCase")]
    Success {
        entry_count: usize,
        active_page_id: String,
    },
    /// Sent after a delay following `Success`
    #[serde(rename_all = "camelCase")]
    NavigateHome {
        entry_count: usize,
        active_page_id: String,
    },
    #[serde(rename_all = "camelCase")]
    UserInfo {
        name: String,
        photo_url: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    ImageProcessed {
        image_data: String,
    },
    #[serde(rename_all = "camelCase")]
    ImageBytes {
        image_bytes: Vec<u8>,
        format: String,
    },
    ImageError {
        error: String,
    },
    SubmitSuccess,
    Error {
        message: String,
    },
}

impl UiResponse {
    pub fn error(message: impl Into<String>) -> Self {
        UiResponse::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, UiResponse::Error { .. } | UiResponse::ImageError { .. })
    }
}
