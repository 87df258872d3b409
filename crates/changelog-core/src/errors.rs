use changelog_core_types::RequestId;
use thiserror::Error;

use crate::host::HostError;

/// Result type alias using ChangelogError
pub type Result<T> = std::result::Result<T, ChangelogError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in log events and in the
/// error responses the router sends back to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    MissingField,

    // Lookup
    NotFound,

    // Reconciliation
    FontUnavailable,
    ContainerCreation,
    InsertionFailed,
    Locked,

    // Integration
    ExternalService,
    Config,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::FontUnavailable => "ERR_FONT_UNAVAILABLE",
            ExErrorKind::ContainerCreation => "ERR_CONTAINER_CREATION",
            ExErrorKind::InsertionFailed => "ERR_INSERTION_FAILED",
            ExErrorKind::Locked => "ERR_LOCKED",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus optional context for log events and
/// user-facing error messages.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (page, node or entry id)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors that abort a changelog operation
///
/// Recoverable conditions (bad image, bad link, missing content region) are
/// never represented here; they are substituted where they occur.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChangelogError {
    /// No tier could supply a font for a role
    #[error("No font available for role {role} (tried: {})", attempted.join(", "))]
    FontUnavailable { role: String, attempted: Vec<String> },

    /// Request carried no form payload
    #[error("Form data not provided")]
    FormDataMissing,

    /// A required form field is missing or blank
    #[error("Invalid form field '{field}': {reason}")]
    InvalidForm { field: String, reason: String },

    #[error("Page not found: {page_id}")]
    PageNotFound { page_id: String },

    /// Host reports no active page
    #[error("No active page")]
    NoActivePage,

    #[error("No changelog found on page {page_id}")]
    ContainerNotFound { page_id: String },

    /// Host rejected the container skeleton; nothing was attached
    #[error("Could not create the changelog container on page {page_id}: {reason}")]
    ContainerCreation { page_id: String, reason: String },

    /// The entry could not be attached under the container
    #[error("Could not insert entry into container {container_id}: {reason}")]
    EntryInsertion { container_id: String, reason: String },

    #[error("Host error: {0}")]
    Host(#[from] HostError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<ChangelogError> for ExError {
    fn from(err: ChangelogError) -> Self {
        let message = err.to_string();
        match err {
            ChangelogError::FontUnavailable { role, .. } => {
                ExError::new(ExErrorKind::FontUnavailable)
                    .with_op("resolve_fonts")
                    .with_entity_id(role)
                    .with_message(message)
            }
            ChangelogError::FormDataMissing => {
                ExError::new(ExErrorKind::MissingField).with_message(message)
            }
            ChangelogError::InvalidForm { field, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_id(field)
                .with_message(message),
            ChangelogError::PageNotFound { page_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(page_id)
                .with_message(message),
            ChangelogError::NoActivePage => {
                ExError::new(ExErrorKind::NotFound).with_message(message)
            }
            ChangelogError::ContainerNotFound { page_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(page_id)
                .with_message(message),
            ChangelogError::ContainerCreation { page_id, .. } => {
                ExError::new(ExErrorKind::ContainerCreation)
                    .with_op("locate_or_create")
                    .with_entity_id(page_id)
                    .with_message(message)
            }
            ChangelogError::EntryInsertion { container_id, .. } => {
                ExError::new(ExErrorKind::InsertionFailed)
                    .with_op("insert_entry")
                    .with_entity_id(container_id)
                    .with_message(message)
            }
            ChangelogError::Host(host_err) => {
                let kind = match &host_err {
                    HostError::NodeNotFound { .. } | HostError::PageNotFound { .. } => {
                        ExErrorKind::NotFound
                    }
                    HostError::Locked { .. } => ExErrorKind::Locked,
                    HostError::FontUnavailable { .. } => ExErrorKind::FontUnavailable,
                    _ => ExErrorKind::ExternalService,
                };
                ExError::new(kind).with_message(message)
            }
            ChangelogError::Config { .. } => {
                ExError::new(ExErrorKind::Config).with_message(message)
            }
            ChangelogError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            ChangelogError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_unavailable_message_lists_attempts() {
        let err = ChangelogError::FontUnavailable {
            role: "bold".to_string(),
            attempted: vec!["Inter Bold".to_string(), "Arial Bold".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "No font available for role bold (tried: Inter Bold, Arial Bold)"
        );
    }

    #[test]
    fn test_ex_error_display() {
        let ex = ExError::new(ExErrorKind::NotFound)
            .with_op("check_container")
            .with_entity_id("0:7")
            .with_message("Page not found");
        assert_eq!(
            ex.to_string(),
            "[ERR_NOT_FOUND] in operation 'check_container': Page not found (entity_id: 0:7)"
        );
    }
}
