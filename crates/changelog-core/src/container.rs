//! Container location and construction
//!
//! A page holds at most one changelog container: a frame with the reserved
//! name directly under the page. Its regions are its direct children named
//! `header`, `content` and `footer`.

use std::time::Instant;

use crate::config::ChangelogConfig;
use crate::errors::{ChangelogError, Result};
use crate::host::{Host, HostError, NodeRef};
use crate::model::{
    AutoLayout, CornerRadii, FontRole, FontSet, Node, NodeId, NodeKind, Padding, SizingMode,
    TextProps,
};
use crate::style::{self, colors};
use crate::{log_op_end, log_op_error, log_op_start};

pub const HEADER_NAME: &str = "header";
pub const CONTENT_NAME: &str = "content";
pub const FOOTER_NAME: &str = "footer";

/// Typed references to a container and whichever regions it has
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerRefs {
    pub container: NodeId,
    pub header: Option<NodeId>,
    pub content: Option<NodeId>,
    pub footer: Option<NodeId>,
}

impl ContainerRefs {
    pub fn is_complete(&self) -> bool {
        self.header.is_some() && self.content.is_some() && self.footer.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerStatus {
    pub refs: ContainerRefs,
    /// Children of `content`, or 0 when `content` is missing
    pub entry_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Located {
    pub status: ContainerStatus,
    pub was_created: bool,
}

fn page_children<H: Host + ?Sized>(host: &H, page: &NodeId) -> Result<Vec<NodeRef>> {
    host.children(page).map_err(|err| match err {
        HostError::NodeNotFound { .. } | HostError::PageNotFound { .. } => {
            ChangelogError::PageNotFound {
                page_id: page.to_string(),
            }
        }
        other => ChangelogError::Host(other),
    })
}

/// Find the container on `page` without modifying anything
///
/// Missing regions are reported as `None` in the refs, never as errors.
///
/// # Errors
/// `PageNotFound` for an unknown page id.
pub fn locate<H: Host + ?Sized>(
    host: &H,
    page: &NodeId,
    config: &ChangelogConfig,
) -> Result<Option<ContainerStatus>> {
    let container = page_children(host, page)?
        .into_iter()
        .find(|child| child.kind == NodeKind::Frame && child.name == config.container_name);
    let Some(container) = container else {
        return Ok(None);
    };

    let regions = host.children(&container.id)?;
    let region = |name: &str| {
        regions
            .iter()
            .find(|child| child.kind == NodeKind::Frame && child.name == name)
            .map(|child| child.id.clone())
    };
    let refs = ContainerRefs {
        container: container.id.clone(),
        header: region(HEADER_NAME),
        content: region(CONTENT_NAME),
        footer: region(FOOTER_NAME),
    };
    let entry_count = match &refs.content {
        Some(content) => host.children(content)?.len(),
        None => 0,
    };

    Ok(Some(ContainerStatus { refs, entry_count }))
}

/// Find the container on `page`, creating the skeleton when absent
///
/// The skeleton is attached in one insertion; if the host rejects it the
/// page is unchanged.
///
/// # Errors
/// `PageNotFound` for an unknown page, `ContainerCreation` when the host
/// refuses the skeleton.
pub fn locate_or_create<H: Host + ?Sized>(
    host: &mut H,
    page: &NodeId,
    fonts: &FontSet,
    config: &ChangelogConfig,
) -> Result<Located> {
    if let Some(status) = locate(&*host, page, config)? {
        return Ok(Located {
            status,
            was_created: false,
        });
    }

    let start = Instant::now();
    log_op_start!("create_container", page_id = page.as_str());

    let container = match host.append_child(page, container_skeleton(fonts, config)) {
        Ok(id) => id,
        Err(err) => {
            let err = ChangelogError::ContainerCreation {
                page_id: page.to_string(),
                reason: err.to_string(),
            };
            log_op_error!(
                "create_container",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                page_id = page.as_str()
            );
            return Err(err);
        }
    };

    let status = match locate(&*host, page, config)? {
        Some(status) if status.refs.container == container => status,
        _ => {
            return Err(ChangelogError::Internal {
                message: format!("container {} not found after creation", container),
            })
        }
    };

    log_op_end!(
        "create_container",
        duration_ms = start.elapsed().as_millis() as u64,
        page_id = page.as_str(),
        container_id = container.as_str()
    );
    Ok(Located {
        status,
        was_created: true,
    })
}

/// The empty container: header, content and footer regions
pub fn container_skeleton(fonts: &FontSet, config: &ChangelogConfig) -> Node {
    let header = Node::frame(HEADER_NAME)
        .with_layout(
            AutoLayout::horizontal()
                .with_padding(style::HEADER_PADDING)
                .with_sizing(SizingMode::Fixed, SizingMode::Fixed),
        )
        .with_size(config.max_width, style::HEADER_HEIGHT)
        .with_solid_fill(colors::BACKGROUND)
        .with_corner_radii(CornerRadii::top(style::HEADER_RADIUS))
        .stretched()
        .with_child(Node::text(
            "header-title",
            TextProps::new(
                config.header_title.as_str(),
                fonts.get(FontRole::Bold),
                style::HEADER_TITLE_SIZE,
                colors::TITLE,
            ),
        ));

    let content = Node::frame(CONTENT_NAME)
        .with_layout(
            AutoLayout::vertical()
                .with_padding(style::CONTENT_PADDING)
                .with_spacing(style::CONTENT_GAP)
                .with_sizing(SizingMode::Auto, SizingMode::Fixed),
        )
        .with_width(config.max_width)
        .stretched();

    let footer = Node::frame(FOOTER_NAME)
        .with_layout(
            AutoLayout::horizontal()
                .with_padding(style::FOOTER_PADDING)
                .with_spacing(style::FOOTER_GAP)
                .with_sizing(SizingMode::Fixed, SizingMode::Fixed)
                .centered(),
        )
        .with_size(config.max_width, style::FOOTER_HEIGHT)
        .with_solid_fill(colors::BACKGROUND)
        .with_corner_radii(CornerRadii::bottom(style::CONTAINER_RADIUS))
        .stretched()
        .with_child(Node::text(
            "footer-text",
            TextProps::new(
                config.footer_text.as_str(),
                fonts.get(FontRole::Regular),
                style::FOOTER_TEXT_SIZE,
                colors::FOOTER,
            ),
        ));

    Node::frame(config.container_name.as_str())
        .with_layout(
            AutoLayout::vertical()
                .with_padding(Padding::ZERO)
                .with_sizing(SizingMode::Auto, SizingMode::Fixed),
        )
        .with_width(config.max_width)
        .with_solid_fill(colors::BACKGROUND)
        .with_stroke(colors::BORDER, 1.0)
        .with_corner_radii(CornerRadii::uniform(style::CONTAINER_RADIUS))
        .with_effect(style::container_shadow())
        .with_children([header, content, footer])
}
