//! Inline image payload handling
//!
//! An inline-encoded image looks like `data:image/<fmt>;base64,<payload>`.

use crate::host::{Host, HostError, HostResult};
use crate::model::ImageHash;

const INLINE_PREFIX: &str = "data:image/";

/// Header and payload halves of an inline image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage<'a> {
    pub mime_type: &'a str,
    pub data: &'a str,
}

pub fn is_inline_image(payload: &str) -> bool {
    payload.trim_start().starts_with(INLINE_PREFIX)
}

/// Split an inline payload at its first comma
///
/// Returns `None` when there is no comma. A header without a mime type
/// defaults to `image/png`.
pub fn parse_inline_image(payload: &str) -> Option<InlineImage<'_>> {
    let (header, data) = payload.trim().split_once(',')?;
    let mime_type = header
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .filter(|m| !m.is_empty())
        .unwrap_or("image/png");
    Some(InlineImage { mime_type, data })
}

/// Decode an inline payload and register it with the host
///
/// # Errors
/// `ImageDecode` for a payload without data, invalid base64 or empty bytes;
/// whatever `create_image` reports otherwise.
pub async fn decode_inline_image<H: Host + ?Sized>(
    host: &mut H,
    payload: &str,
) -> HostResult<ImageHash> {
    let image = parse_inline_image(payload).ok_or_else(|| HostError::ImageDecode {
        reason: "payload has no data section".to_string(),
    })?;
    if image.data.trim().is_empty() {
        return Err(HostError::ImageDecode {
            reason: "payload data is empty".to_string(),
        });
    }
    let bytes = host.base64_decode(image.data)?;
    if bytes.is_empty() {
        return Err(HostError::ImageDecode {
            reason: "decoded image is empty".to_string(),
        });
    }
    host.create_image(&bytes).await
}
