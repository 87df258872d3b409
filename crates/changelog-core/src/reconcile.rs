//! Entry reconciliation
//!
//! Drives one submission from entry data to an attached, locked entry node:
//!
//! 1. resolve fonts (abort leaves the document untouched)
//! 2. build the entry subtree as a value
//! 3. locate or create the container
//! 4. lock the entry subtree root
//! 5. insert it, temporarily unlocking the target parent
//! 6. lock `header` and `footer` of a freshly created container
//!
//! A failure after step 3 created the container removes it again, so a
//! failed submission never leaves an empty container behind.

use std::time::Instant;

use crate::config::ChangelogConfig;
use crate::container::{self, ContainerRefs, Located};
use crate::entry_builder::build_entry_node;
use crate::errors::{ChangelogError, Result};
use crate::fonts::resolve_fonts;
use crate::host::{Host, HostResult};
use crate::model::{ChangelogEntry, Node, NodeId};
use crate::{log_op_end, log_op_error, log_op_fallback, log_op_start};

/// Where the entry ended up inside the container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// First child of `content`
    ContentHead,
    /// Directly after `header`; `content` was missing
    AfterHeader,
    /// First child of the container; `content` and `header` were missing
    ContainerHead,
}

impl Placement {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, Placement::ContentHead)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub container_id: NodeId,
    pub entry_node_id: NodeId,
    /// Children of `content` after insertion
    pub entry_count: usize,
    pub was_created: bool,
    pub placement: Placement,
}

/// Whether a missing container may be created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    CreateIfMissing,
    RequireExisting,
}

/// Add `entry` to the changelog on `page`, creating the container if needed
///
/// # Errors
/// `FontUnavailable`, `PageNotFound`, `ContainerCreation` or
/// `EntryInsertion`; the document is unchanged in every case.
pub async fn submit_entry<H: Host + ?Sized>(
    host: &mut H,
    page: &NodeId,
    entry: &ChangelogEntry,
    config: &ChangelogConfig,
) -> Result<SubmitOutcome> {
    reconcile(host, page, entry, config, SubmitMode::CreateIfMissing).await
}

/// Add `entry` to an existing changelog on `page`
///
/// # Errors
/// `ContainerNotFound` when the page has no changelog, otherwise as
/// [`submit_entry`].
pub async fn append_entry<H: Host + ?Sized>(
    host: &mut H,
    page: &NodeId,
    entry: &ChangelogEntry,
    config: &ChangelogConfig,
) -> Result<SubmitOutcome> {
    reconcile(host, page, entry, config, SubmitMode::RequireExisting).await
}

pub async fn reconcile<H: Host + ?Sized>(
    host: &mut H,
    page: &NodeId,
    entry: &ChangelogEntry,
    config: &ChangelogConfig,
    mode: SubmitMode,
) -> Result<SubmitOutcome> {
    let start = Instant::now();
    log_op_start!(
        "submit_entry",
        page_id = page.as_str(),
        entry_id = entry.id.as_str()
    );

    match run(host, page, entry, config, mode).await {
        Ok(outcome) => {
            log_op_end!(
                "submit_entry",
                duration_ms = start.elapsed().as_millis() as u64,
                page_id = page.as_str(),
                entry_id = entry.id.as_str(),
                container_id = outcome.container_id.as_str(),
                entry_count = outcome.entry_count as u64,
                was_created = outcome.was_created
            );
            Ok(outcome)
        }
        Err(err) => {
            log_op_error!(
                "submit_entry",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                page_id = page.as_str(),
                entry_id = entry.id.as_str()
            );
            Err(err)
        }
    }
}

async fn run<H: Host + ?Sized>(
    host: &mut H,
    page: &NodeId,
    entry: &ChangelogEntry,
    config: &ChangelogConfig,
    mode: SubmitMode,
) -> Result<SubmitOutcome> {
    if mode == SubmitMode::RequireExisting
        && container::locate(&*host, page, config)?.is_none()
    {
        return Err(ChangelogError::ContainerNotFound {
            page_id: page.to_string(),
        });
    }

    let fonts = resolve_fonts(host, &config.fonts).await?;
    let entry_node = build_entry_node(host, entry, &fonts, config).await.locked();

    let Located {
        status,
        was_created,
    } = container::locate_or_create(host, page, &fonts, config)?;
    let refs = status.refs;

    match attach(host, page, &refs, entry_node, was_created, config) {
        Ok(outcome) => Ok(outcome),
        Err(err) => {
            if was_created {
                rollback(host, &refs.container);
            }
            Err(err)
        }
    }
}

fn attach<H: Host + ?Sized>(
    host: &mut H,
    page: &NodeId,
    refs: &ContainerRefs,
    entry_node: Node,
    was_created: bool,
    config: &ChangelogConfig,
) -> Result<SubmitOutcome> {
    let (entry_node_id, placement) = insert_entry(host, refs, entry_node)?;

    if was_created {
        for region in [&refs.header, &refs.footer].into_iter().flatten() {
            host.set_locked(region, true)?;
        }
    }

    let entry_count = container::locate(&*host, page, config)?
        .map(|status| status.entry_count)
        .unwrap_or_default();

    Ok(SubmitOutcome {
        container_id: refs.container.clone(),
        entry_node_id,
        entry_count,
        was_created,
        placement,
    })
}

fn insert_entry<H: Host + ?Sized>(
    host: &mut H,
    refs: &ContainerRefs,
    entry_node: Node,
) -> Result<(NodeId, Placement)> {
    let insertion_error = |err: crate::host::HostError| ChangelogError::EntryInsertion {
        container_id: refs.container.to_string(),
        reason: err.to_string(),
    };

    if let Some(content) = &refs.content {
        let id = with_unlocked(host, content, |host| {
            host.insert_child(content, 0, entry_node)
        })
        .map_err(insertion_error)?;
        return Ok((id, Placement::ContentHead));
    }

    let (index, placement) = match &refs.header {
        Some(header) => {
            let position = host
                .children(&refs.container)?
                .iter()
                .position(|child| &child.id == header)
                .map_or(0, |i| i + 1);
            (position, Placement::AfterHeader)
        }
        None => (0, Placement::ContainerHead),
    };
    log_op_fallback!(
        "insert_entry",
        reason = "container has no content region",
        container_id = refs.container.as_str()
    );

    let id = with_unlocked(host, &refs.container, |host| {
        host.insert_child(&refs.container, index, entry_node)
    })
    .map_err(insertion_error)?;
    Ok((id, placement))
}

/// Run `f` with `id` unlocked, restoring its previous lock state afterwards
///
/// The lock is restored whether or not `f` succeeds. When `f` succeeded but
/// the restore fails, the restore error is returned; the effects of `f` are
/// kept. When both fail, the error of `f` wins and the restore failure is
/// logged.
pub fn with_unlocked<H, T, F>(host: &mut H, id: &NodeId, f: F) -> HostResult<T>
where
    H: Host + ?Sized,
    F: FnOnce(&mut H) -> HostResult<T>,
{
    let was_locked = host.node(id)?.locked;
    if !was_locked {
        return f(host);
    }

    host.set_locked(id, false)?;
    let result = f(host);
    let restored = host.set_locked(id, true);

    match (result, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(restore_err)) => Err(restore_err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(restore_err)) => {
            tracing::error!(
                component = module_path!(),
                op = "restore_lock",
                node_id = id.as_str(),
                error = %restore_err,
            );
            Err(err)
        }
    }
}

fn rollback<H: Host + ?Sized>(host: &mut H, container: &NodeId) {
    match host.remove_node(container) {
        Ok(()) => {
            log_op_fallback!(
                "submit_entry",
                reason = "removed container created by failed submission",
                container_id = container.as_str()
            );
        }
        Err(err) => tracing::error!(
            component = module_path!(),
            op = "rollback_container",
            container_id = container.as_str(),
            error = %err,
        ),
    }
}
