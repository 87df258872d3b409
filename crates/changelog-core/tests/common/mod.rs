use changelog_core::host::{Host, MemoryHost};
use changelog_core::model::{ChangeType, ChangelogEntry, Node, NodeId, UserInfo};
use chrono::{TimeZone, Utc};

/// 1×1 transparent PNG as an inline payload
#[allow(dead_code)]
pub const PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Document with a single empty page
#[allow(dead_code)]
pub fn host_with_page() -> (MemoryHost, NodeId) {
    let mut host = MemoryHost::new();
    let page = host.add_page("Page 1");
    (host, page)
}

/// Entry with a fixed timestamp and no link or image
#[allow(dead_code)]
pub fn sample_entry(title: &str, change_type: ChangeType) -> ChangelogEntry {
    ChangelogEntry::new(
        title,
        format!("Description of {}", title),
        change_type,
        UserInfo::new("Ana Souza"),
    )
    .with_timestamp(Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap())
}

/// Names of the direct children of `parent`, in order
#[allow(dead_code)]
pub fn child_names(host: &MemoryHost, parent: &NodeId) -> Vec<String> {
    host.children(parent)
        .unwrap()
        .into_iter()
        .map(|child| child.name)
        .collect()
}

/// Id of the direct child of `parent` named `name`
#[allow(dead_code)]
pub fn child_named(host: &MemoryHost, parent: &NodeId, name: &str) -> NodeId {
    host.children(parent)
        .unwrap()
        .into_iter()
        .find(|child| child.name == name)
        .unwrap_or_else(|| panic!("no child named {name}"))
        .id
}

/// Snapshot of the whole page, for before/after comparisons
#[allow(dead_code)]
pub fn page_snapshot(host: &MemoryHost, page: &NodeId) -> Node {
    host.snapshot(page).unwrap()
}
