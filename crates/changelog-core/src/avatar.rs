//! Avatar synthesis
//!
//! An inline photo becomes an image fill. Anything else (no photo, a remote
//! URL, a payload that fails to decode) falls back to a colored disc with the
//! user's initials. The color is a pure function of the name.

use changelog_core_types::Sensitive;

use crate::host::Host;
use crate::image::{decode_inline_image, is_inline_image};
use crate::log_op_fallback;
use crate::model::{ImageHash, Rgb};
use crate::visual::Rendered;

const SATURATION: f32 = 0.6;
const VALUE: f32 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub enum AvatarVisual {
    Photo { image_hash: ImageHash },
    Initials { color: Rgb, initials: String },
}

/// Pick the avatar for `user_name`
///
/// Never fails; every photo problem degrades to initials. `user_name` is
/// expected to be already defaulted by the caller.
pub async fn synthesize<H: Host + ?Sized>(
    host: &mut H,
    user_name: &str,
    photo: Option<&str>,
) -> Rendered<AvatarVisual> {
    let photo = photo.map(str::trim).filter(|p| !p.is_empty());
    let reason = match photo {
        Some(payload) if is_inline_image(payload) => {
            match decode_inline_image(host, payload).await {
                Ok(image_hash) => return Rendered::Primary(AvatarVisual::Photo { image_hash }),
                Err(err) => format!("photo could not be decoded: {}", err),
            }
        }
        Some(_) => "remote photos are not embedded".to_string(),
        None => "no photo".to_string(),
    };

    log_op_fallback!(
        "synthesize_avatar",
        reason = reason,
        photo = %Sensitive::new(photo.unwrap_or_default()).presence()
    );
    Rendered::fallback(initials_visual(user_name), reason)
}

pub fn initials_visual(user_name: &str) -> AvatarVisual {
    AvatarVisual::Initials {
        color: avatar_color(user_name),
        initials: initials(user_name),
    }
}

/// Deterministic avatar color
///
/// Hue is the sum of the name's UTF-16 code units modulo 360, taken as a
/// fraction of the color wheel.
pub fn avatar_color(name: &str) -> Rgb {
    let sum: u32 = name.encode_utf16().map(u32::from).sum();
    let hue = (sum % 360) as f32 / 360.0;
    hsv_to_rgb(hue, SATURATION, VALUE)
}

/// First letter of the first two whitespace-separated tokens, uppercased
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// HSV to RGB, all components in `[0, 1]`
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match (sector as i32).rem_euclid(6) {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        _ => Rgb::new(v, p, q),
    }
}
