//! Changelog Engine - request handling layer
//!
//! Turns typed UI requests into reconciler calls against a host and
//! produces the responses (immediate or delayed) the UI expects.

pub mod commands;
pub mod errors;
pub mod runtime;

pub use commands::form::FormData;
pub use commands::messages::{PageSummary, UiRequest, UiResponse};
pub use commands::router::{Outbound, Router};
pub use errors::{EngineError, Result};
pub use runtime::{run, spawn};
