//! Changelog Core - reconciliation of changelog panels on a design canvas
//!
//! This crate provides:
//! - The entry and scene-graph value model
//! - The `Host` abstraction over the canvas, with an in-memory implementation
//! - Font resolution with tiered fallback
//! - Avatar synthesis and entry subtree construction
//! - Container location/creation and the entry reconciler
//! - Structured errors, logging facility and configuration

pub mod avatar;
pub mod config;
pub mod container;
pub mod entry_builder;
pub mod errors;
pub mod fonts;
pub mod host;
pub mod image;
pub mod logging_facility;
pub mod model;
pub mod reconcile;
pub mod render;
pub mod style;
pub mod visual;

// Macros refer to schema constants through this path
pub use changelog_core_types;

// Re-export commonly used types
pub use config::ChangelogConfig;
pub use container::{locate, locate_or_create, ContainerRefs, ContainerStatus, Located};
pub use errors::{ChangelogError, ExError, ExErrorKind, Result};
pub use host::{CurrentUser, Host, HostError, HostResult, MemoryHost, NodeRef, PageInfo};
pub use model::{ChangeType, ChangelogEntry, FontSet, Node, NodeId, UserInfo};
pub use reconcile::{append_entry, submit_entry, Placement, SubmitMode, SubmitOutcome};
pub use visual::Rendered;
