//! Font resolution
//!
//! Each logical role is resolved independently, trying the primary,
//! fallback and system tiers in order. Nothing is cached between calls.

use std::time::Instant;

use crate::errors::{ChangelogError, Result};
use crate::host::Host;
use crate::model::{FontRole, FontSet, FontTier, FontTiers, ResolvedFont};
use crate::{log_op_end, log_op_error, log_op_fallback, log_op_start};

/// Resolve every role to a font the host could load
///
/// # Errors
/// `FontUnavailable` for the first role where every tier failed. No partial
/// set is ever returned.
pub async fn resolve_fonts<H: Host + ?Sized>(host: &mut H, tiers: &FontTiers) -> Result<FontSet> {
    let start = Instant::now();
    log_op_start!("resolve_fonts");

    match resolve_all(host, tiers).await {
        Ok(fonts) => {
            log_op_end!(
                "resolve_fonts",
                duration_ms = start.elapsed().as_millis() as u64
            );
            Ok(fonts)
        }
        Err(err) => {
            log_op_error!(
                "resolve_fonts",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

async fn resolve_all<H: Host + ?Sized>(host: &mut H, tiers: &FontTiers) -> Result<FontSet> {
    Ok(FontSet {
        regular: resolve_role(host, tiers, FontRole::Regular).await?,
        medium: resolve_role(host, tiers, FontRole::Medium).await?,
        semi_bold: resolve_role(host, tiers, FontRole::SemiBold).await?,
        bold: resolve_role(host, tiers, FontRole::Bold).await?,
    })
}

async fn resolve_role<H: Host + ?Sized>(
    host: &mut H,
    tiers: &FontTiers,
    role: FontRole,
) -> Result<ResolvedFont> {
    let mut attempted = Vec::new();
    for tier in FontTier::ORDER {
        let font = tiers.get(tier).get(role);
        match host.load_font(font).await {
            Ok(()) => {
                return Ok(ResolvedFont {
                    font: font.clone(),
                    tier,
                })
            }
            Err(err) => {
                log_op_fallback!(
                    "resolve_fonts",
                    reason = err,
                    role = role.as_str(),
                    font = %font
                );
                attempted.push(font.to_string());
            }
        }
    }
    Err(ChangelogError::FontUnavailable {
        role: role.as_str().to_string(),
        attempted,
    })
}
