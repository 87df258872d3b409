pub mod check;
pub mod page;
pub mod pages;
pub mod render;
pub mod submit;

use std::path::PathBuf;

use changelog_core::model::NodeId;
use changelog_core::{ChangelogConfig, Host, MemoryHost};
use changelog_engine::Router;

pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Options shared by every command
#[derive(Debug)]
pub struct Context {
    pub document: PathBuf,
    pub config: Option<PathBuf>,
}

impl Context {
    pub fn load_config(&self) -> CliResult<ChangelogConfig> {
        match &self.config {
            Some(path) => Ok(ChangelogConfig::load(path)?),
            None => Ok(ChangelogConfig::default()),
        }
    }

    pub fn router(&self) -> CliResult<Router<MemoryHost>> {
        Ok(Router::new(
            crate::document::load(&self.document)?,
            self.load_config()?,
        ))
    }

    pub fn save(&self, host: &MemoryHost) -> CliResult<()> {
        crate::document::save(&self.document, host)
    }
}

/// Explicit page id, or the current page of the document
pub fn resolve_page(host: &MemoryHost, page: Option<&str>) -> CliResult<NodeId> {
    match page {
        Some(id) => Ok(NodeId::from(id)),
        None => host
            .current_page()
            .ok_or_else(|| "document has no pages".into()),
    }
}

pub fn runtime() -> CliResult<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
