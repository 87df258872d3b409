//! Host platform abstraction
//!
//! The design canvas owns the document, fonts and image decoding. Everything
//! the reconciler needs from it goes through the [`Host`] trait. Font
//! loading, image decoding and page switching are the only suspension
//! points; scene-graph reads and writes are synchronous.

pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{FontName, ImageHash, Node, NodeId, NodeKind};

pub use memory::MemoryHost;

pub type HostResult<T> = std::result::Result<T, HostError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    #[error("Node not found: {node_id}")]
    NodeNotFound { node_id: String },

    #[error("Page not found: {page_id}")]
    PageNotFound { page_id: String },

    /// Mutation under an edit-protected node
    #[error("Node {node_id} is locked")]
    Locked { node_id: String },

    #[error("Host rejected operation: {reason}")]
    Rejected { reason: String },

    #[error("Font unavailable: {font}")]
    FontUnavailable { font: String },

    #[error("Image decode failed: {reason}")]
    ImageDecode { reason: String },

    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },
}

/// Shallow view of a node as seen by locators
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRef {
    pub id: NodeId,
    pub kind: NodeKind,
    pub name: String,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub id: NodeId,
    pub name: String,
}

/// Acting user as reported by the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub photo_url: Option<String>,
}

#[async_trait]
pub trait Host: Send {
    // ----- pages -----

    /// Pages in document order
    fn pages(&self) -> Vec<PageInfo>;

    fn current_page(&self) -> Option<NodeId>;

    /// Switch the active page
    ///
    /// # Errors
    /// `PageNotFound` if `page_id` is not a page of the document.
    async fn set_current_page(&mut self, page_id: &NodeId) -> HostResult<()>;

    // ----- scene graph -----

    fn node(&self, id: &NodeId) -> HostResult<NodeRef>;

    /// Direct children of a page or node, in order
    fn children(&self, parent: &NodeId) -> HostResult<Vec<NodeRef>>;

    /// Read a subtree back as a value
    fn snapshot(&self, id: &NodeId) -> HostResult<Node>;

    /// Attach `node` (with its whole subtree) at `index` under `parent`
    ///
    /// Either the whole subtree is attached or nothing is.
    ///
    /// # Errors
    /// `Locked` when `parent` is edit-protected, `Rejected` when the host
    /// refuses node creation or `index` is out of range.
    fn insert_child(&mut self, parent: &NodeId, index: usize, node: Node) -> HostResult<NodeId>;

    fn append_child(&mut self, parent: &NodeId, node: Node) -> HostResult<NodeId> {
        let index = self.children(parent)?.len();
        self.insert_child(parent, index, node)
    }

    /// Detach and drop a node with its subtree
    fn remove_node(&mut self, id: &NodeId) -> HostResult<()>;

    fn set_locked(&mut self, id: &NodeId, locked: bool) -> HostResult<()>;

    // ----- fonts and images -----

    async fn load_font(&mut self, font: &FontName) -> HostResult<()>;

    fn base64_decode(&self, data: &str) -> HostResult<Vec<u8>>;

    /// Decode image bytes and register them with the document
    async fn create_image(&mut self, bytes: &[u8]) -> HostResult<ImageHash>;

    /// Download a remote image and return its bytes
    async fn fetch_image(&mut self, url: &str) -> HostResult<Vec<u8>>;

    // ----- environment -----

    fn current_user(&self) -> Option<CurrentUser>;

    /// Scroll and zoom the viewport so that `id` is visible
    fn scroll_into_view(&mut self, id: &NodeId) -> HostResult<()>;

    /// Show a transient notice to the user
    fn notify(&mut self, message: &str, is_error: bool);
}
