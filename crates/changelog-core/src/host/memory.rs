//! In-memory host
//!
//! A complete [`Host`] over an arena of nodes. Used by the test suites and by
//! the CLI, which persists it as JSON. Like a real canvas it refuses to add
//! children under a locked node, so lock toggling around insertion is
//! exercised for real.
//!
//! Fault injection (unavailable fonts, rejected node creation, remote image
//! table) lets tests drive every fallback path.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest, Sha256};

use super::{CurrentUser, Host, HostError, HostResult, NodeRef, PageInfo};
use crate::model::{FontName, ImageHash, Node, NodeId, NodeKind, NodeStyle, Paint, TextProps};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredNode {
    kind: NodeKind,
    name: String,
    locked: bool,
    parent: Option<NodeId>,
    style: NodeStyle,
    text: Option<TextProps>,
    children: Vec<NodeId>,
}

/// Notice shown through [`Host::notify`]
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

/// Only images referenced by some node are written out; decoded images
/// that never got attached are dropped on save.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemoryHost {
    pages: Vec<NodeId>,
    current_page: Option<NodeId>,
    nodes: BTreeMap<NodeId, StoredNode>,
    next_id: u64,
    #[serde(default)]
    user: Option<CurrentUser>,
    #[serde(default)]
    images: BTreeMap<ImageHash, Vec<u8>>,
    #[serde(skip)]
    unavailable_families: BTreeSet<String>,
    #[serde(skip)]
    unavailable_fonts: BTreeSet<FontName>,
    #[serde(skip)]
    reject_creation: bool,
    #[serde(skip)]
    insertion_budget: Option<usize>,
    #[serde(skip)]
    remote_images: BTreeMap<String, Vec<u8>>,
    #[serde(skip)]
    font_attempts: Vec<FontName>,
    #[serde(skip)]
    notices: Vec<Notice>,
    #[serde(skip)]
    viewport_focus: Option<NodeId>,
}

impl MemoryHost {
    /// Create an empty document with no pages
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a page (the first page added becomes current)
    pub fn with_page(mut self, name: &str) -> Self {
        self.add_page(name);
        self
    }

    pub fn with_user(mut self, user: CurrentUser) -> Self {
        self.user = Some(user);
        self
    }

    pub fn set_user(&mut self, user: Option<CurrentUser>) {
        self.user = user;
    }

    /// Add a page at the end of the document and return its id
    pub fn add_page(&mut self, name: &str) -> NodeId {
        let id = NodeId::new(format!("0:{}", self.pages.len() + 1));
        self.nodes.insert(
            id.clone(),
            StoredNode {
                kind: NodeKind::Page,
                name: name.to_string(),
                locked: false,
                parent: None,
                style: NodeStyle::default(),
                text: None,
                children: Vec::new(),
            },
        );
        self.pages.push(id.clone());
        if self.current_page.is_none() {
            self.current_page = Some(id.clone());
        }
        id
    }

    /// Make every style of `family` fail to load
    pub fn make_family_unavailable(&mut self, family: &str) {
        self.unavailable_families.insert(family.to_string());
    }

    /// Make one concrete font fail to load
    pub fn make_font_unavailable(&mut self, font: FontName) {
        self.unavailable_fonts.insert(font);
    }

    /// Refuse every subsequent `insert_child`
    pub fn reject_node_creation(&mut self, reject: bool) {
        self.reject_creation = reject;
    }

    /// Accept `count` more insertions, then refuse every later one
    pub fn reject_node_creation_after(&mut self, count: usize) {
        self.insertion_budget = Some(count);
    }

    /// Serve `bytes` for `url` from `fetch_image`
    pub fn register_remote_image(&mut self, url: &str, bytes: Vec<u8>) {
        self.remote_images.insert(url.to_string(), bytes);
    }

    /// Fonts passed to `load_font`, in call order
    pub fn font_attempts(&self) -> &[FontName] {
        &self.font_attempts
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn viewport_focus(&self) -> Option<&NodeId> {
        self.viewport_focus.as_ref()
    }

    pub fn image_bytes(&self, hash: &ImageHash) -> Option<&[u8]> {
        self.images.get(hash).map(Vec::as_slice)
    }

    /// Total number of nodes, pages included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn stored(&self, id: &NodeId) -> HostResult<&StoredNode> {
        self.nodes.get(id).ok_or_else(|| HostError::NodeNotFound {
            node_id: id.to_string(),
        })
    }

    fn stored_mut(&mut self, id: &NodeId) -> HostResult<&mut StoredNode> {
        self.nodes.get_mut(id).ok_or_else(|| HostError::NodeNotFound {
            node_id: id.to_string(),
        })
    }

    fn node_ref(id: &NodeId, stored: &StoredNode) -> NodeRef {
        NodeRef {
            id: id.clone(),
            kind: stored.kind,
            name: stored.name.clone(),
            locked: stored.locked,
        }
    }

    fn allocate_id(&mut self) -> NodeId {
        self.next_id += 1;
        NodeId::new(format!("1:{}", self.next_id))
    }

    /// Flatten `node` into the arena, returning the id of its root
    fn materialize(&mut self, parent: &NodeId, node: Node) -> NodeId {
        let id = self.allocate_id();
        let Node {
            kind,
            name,
            locked,
            style,
            text,
            children,
        } = node;
        self.nodes.insert(
            id.clone(),
            StoredNode {
                kind,
                name,
                locked,
                parent: Some(parent.clone()),
                style,
                text,
                children: Vec::new(),
            },
        );
        let child_ids: Vec<NodeId> = children
            .into_iter()
            .map(|child| self.materialize(&id, child))
            .collect();
        if let Some(stored) = self.nodes.get_mut(&id) {
            stored.children = child_ids;
        }
        id
    }

    fn drop_subtree(&mut self, id: &NodeId) {
        if let Some(stored) = self.nodes.remove(id) {
            for child in stored.children {
                self.drop_subtree(&child);
            }
        }
    }
}

#[derive(Serialize)]
struct PersistedDocument<'a> {
    pages: &'a [NodeId],
    current_page: &'a Option<NodeId>,
    nodes: &'a BTreeMap<NodeId, StoredNode>,
    next_id: u64,
    user: &'a Option<CurrentUser>,
    images: BTreeMap<&'a ImageHash, &'a Vec<u8>>,
}

impl MemoryHost {
    fn referenced_images(&self) -> BTreeSet<&ImageHash> {
        self.nodes
            .values()
            .flat_map(|node| node.style.fills.iter().chain(node.style.strokes.iter()))
            .filter_map(|paint| match paint {
                Paint::Image { image_hash } => Some(image_hash),
                Paint::Solid { .. } => None,
            })
            .collect()
    }
}

impl Serialize for MemoryHost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let referenced = self.referenced_images();
        PersistedDocument {
            pages: &self.pages,
            current_page: &self.current_page,
            nodes: &self.nodes,
            next_id: self.next_id,
            user: &self.user,
            images: self
                .images
                .iter()
                .filter(|(hash, _)| referenced.contains(hash))
                .collect(),
        }
        .serialize(serializer)
    }
}

/// Recognize the container formats a canvas can decode
fn sniff_image(bytes: &[u8]) -> HostResult<&'static str> {
    if bytes.is_empty() {
        return Err(HostError::ImageDecode {
            reason: "empty image payload".to_string(),
        });
    }
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        Ok("PNG")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Ok("JPEG")
    } else if bytes.starts_with(b"GIF8") {
        Ok("GIF")
    } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        Ok("WEBP")
    } else {
        Err(HostError::ImageDecode {
            reason: "unrecognized image format".to_string(),
        })
    }
}

#[async_trait]
impl Host for MemoryHost {
    fn pages(&self) -> Vec<PageInfo> {
        self.pages
            .iter()
            .filter_map(|id| {
                self.nodes.get(id).map(|page| PageInfo {
                    id: id.clone(),
                    name: page.name.clone(),
                })
            })
            .collect()
    }

    fn current_page(&self) -> Option<NodeId> {
        self.current_page.clone()
    }

    async fn set_current_page(&mut self, page_id: &NodeId) -> HostResult<()> {
        if !self.pages.contains(page_id) {
            return Err(HostError::PageNotFound {
                page_id: page_id.to_string(),
            });
        }
        self.current_page = Some(page_id.clone());
        Ok(())
    }

    fn node(&self, id: &NodeId) -> HostResult<NodeRef> {
        self.stored(id).map(|stored| Self::node_ref(id, stored))
    }

    fn children(&self, parent: &NodeId) -> HostResult<Vec<NodeRef>> {
        let stored = self.stored(parent)?;
        Ok(stored
            .children
            .iter()
            .filter_map(|id| self.nodes.get(id).map(|child| Self::node_ref(id, child)))
            .collect())
    }

    fn snapshot(&self, id: &NodeId) -> HostResult<Node> {
        let stored = self.stored(id)?;
        let children = stored
            .children
            .iter()
            .map(|child| self.snapshot(child))
            .collect::<HostResult<Vec<_>>>()?;
        Ok(Node {
            kind: stored.kind,
            name: stored.name.clone(),
            locked: stored.locked,
            style: stored.style.clone(),
            text: stored.text.clone(),
            children,
        })
    }

    fn insert_child(&mut self, parent: &NodeId, index: usize, node: Node) -> HostResult<NodeId> {
        let parent_node = self.stored(parent)?;
        if parent_node.locked {
            return Err(HostError::Locked {
                node_id: parent.to_string(),
            });
        }
        if !matches!(parent_node.kind, NodeKind::Page | NodeKind::Frame) {
            return Err(HostError::Rejected {
                reason: format!("{} nodes cannot have children", parent_node.kind.as_str()),
            });
        }
        if index > parent_node.children.len() {
            return Err(HostError::Rejected {
                reason: format!(
                    "index {} out of range for {} children",
                    index,
                    parent_node.children.len()
                ),
            });
        }
        if self.reject_creation || self.insertion_budget == Some(0) {
            return Err(HostError::Rejected {
                reason: "node creation disabled".to_string(),
            });
        }
        if node.kind == NodeKind::Page {
            return Err(HostError::Rejected {
                reason: "pages cannot be nested".to_string(),
            });
        }

        if let Some(budget) = self.insertion_budget.as_mut() {
            *budget -= 1;
        }
        let id = self.materialize(parent, node);
        self.stored_mut(parent)?.children.insert(index, id.clone());
        Ok(id)
    }

    fn remove_node(&mut self, id: &NodeId) -> HostResult<()> {
        let parent = self.stored(id)?.parent.clone().ok_or_else(|| HostError::Rejected {
            reason: format!("page {} cannot be removed", id),
        })?;
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.retain(|child| child != id);
        }
        self.drop_subtree(id);
        if self.viewport_focus.as_ref() == Some(id) {
            self.viewport_focus = None;
        }
        Ok(())
    }

    fn set_locked(&mut self, id: &NodeId, locked: bool) -> HostResult<()> {
        let stored = self.stored_mut(id)?;
        if stored.kind == NodeKind::Page {
            return Err(HostError::Rejected {
                reason: "pages cannot be locked".to_string(),
            });
        }
        stored.locked = locked;
        Ok(())
    }

    async fn load_font(&mut self, font: &FontName) -> HostResult<()> {
        self.font_attempts.push(font.clone());
        if self.unavailable_families.contains(&font.family) || self.unavailable_fonts.contains(font)
        {
            return Err(HostError::FontUnavailable {
                font: font.to_string(),
            });
        }
        Ok(())
    }

    fn base64_decode(&self, data: &str) -> HostResult<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(data.trim())
            .map_err(|e| HostError::ImageDecode {
                reason: format!("invalid base64: {}", e),
            })
    }

    async fn create_image(&mut self, bytes: &[u8]) -> HostResult<ImageHash> {
        sniff_image(bytes)?;
        let hash = ImageHash::new(hex::encode(Sha256::digest(bytes)));
        self.images.insert(hash.clone(), bytes.to_vec());
        Ok(hash)
    }

    async fn fetch_image(&mut self, url: &str) -> HostResult<Vec<u8>> {
        let bytes = self
            .remote_images
            .get(url)
            .cloned()
            .ok_or_else(|| HostError::Fetch {
                url: url.to_string(),
                reason: "unreachable".to_string(),
            })?;
        let hash = self.create_image(&bytes).await?;
        self.image_bytes(&hash)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| HostError::Fetch {
                url: url.to_string(),
                reason: "image hash missing after decode".to_string(),
            })
    }

    fn current_user(&self) -> Option<CurrentUser> {
        self.user.clone()
    }

    fn scroll_into_view(&mut self, id: &NodeId) -> HostResult<()> {
        self.stored(id)?;
        self.viewport_focus = Some(id.clone());
        Ok(())
    }

    fn notify(&mut self, message: &str, is_error: bool) {
        self.notices.push(Notice {
            message: message.to_string(),
            is_error,
        });
    }
}
