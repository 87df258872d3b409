//! On-disk document

use std::path::Path;

use changelog_core::MemoryHost;

pub const DEFAULT_DOCUMENT_PATH: &str = ".changelog/document.json";

pub const DEFAULT_PAGE_NAME: &str = "Page 1";

/// Load the document at `path`, or a fresh one-page document if absent
pub fn load(path: &Path) -> Result<MemoryHost, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Ok(MemoryHost::new().with_page(DEFAULT_PAGE_NAME));
    }
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

pub fn save(path: &Path, host: &MemoryHost) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(host)?)?;
    Ok(())
}
