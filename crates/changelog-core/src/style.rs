//! Palette and layout constants of the changelog panel

use crate::model::{ChangeType, DropShadow, Effect, Padding, Rgb};

pub mod colors {
    use crate::model::Rgb;

    pub const BACKGROUND: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BORDER: Rgb = Rgb::new(0.91, 0.91, 0.91);
    pub const TITLE: Rgb = Rgb::new(0.05, 0.1, 0.2);
    pub const ENTRY_TITLE: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const DESCRIPTION: Rgb = Rgb::new(0.38, 0.35, 0.35);
    pub const USER_NAME: Rgb = Rgb::new(0.33, 0.33, 0.33);
    pub const DATE: Rgb = Rgb::new(0.53, 0.53, 0.53);
    pub const SEPARATOR: Rgb = Rgb::new(0.8, 0.8, 0.8);
    pub const FOOTER: Rgb = Rgb::new(0.51, 0.51, 0.51);
    pub const LINK: Rgb = Rgb::new(0.87, 0.44, 0.05);
    pub const LINK_ERROR: Rgb = Rgb::new(0.8, 0.2, 0.2);
    pub const PLACEHOLDER: Rgb = Rgb::new(0.9, 0.9, 0.9);
    pub const INITIALS: Rgb = Rgb::new(1.0, 1.0, 1.0);
}

/// Background/text pair of a category badge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeColors {
    pub background: Rgb,
    pub text: Rgb,
}

const fn badge(background: Rgb, text: Rgb) -> BadgeColors {
    BadgeColors { background, text }
}

const UPDATE_BADGE: BadgeColors = badge(Rgb::new(0.93, 0.97, 1.0), Rgb::new(0.06, 0.47, 0.75));

pub fn badge_colors(change_type: &ChangeType) -> BadgeColors {
    match change_type {
        ChangeType::NewFeature => badge(Rgb::new(0.94, 0.99, 0.95), Rgb::new(0.08, 0.53, 0.25)),
        ChangeType::Update => UPDATE_BADGE,
        ChangeType::BugFix => badge(Rgb::new(1.0, 0.97, 0.91), Rgb::new(0.8, 0.53, 0.12)),
        ChangeType::Removed => badge(Rgb::new(1.0, 0.89, 0.89), Rgb::new(0.86, 0.15, 0.15)),
        ChangeType::Refactoring => badge(Rgb::new(0.96, 0.94, 1.0), Rgb::new(0.46, 0.3, 0.84)),
        ChangeType::Improvement => badge(Rgb::new(0.91, 0.97, 0.99), Rgb::new(0.15, 0.58, 0.73)),
        ChangeType::Deprecation => badge(Rgb::new(1.0, 0.9, 0.94), Rgb::new(0.75, 0.19, 0.37)),
        ChangeType::LayoutAdjustment => {
            badge(Rgb::new(0.94, 0.94, 0.94), Rgb::new(0.4, 0.4, 0.4))
        }
        ChangeType::Other(_) => UPDATE_BADGE,
    }
}

// Container
pub const CONTAINER_RADIUS: f32 = 8.0;
pub const HEADER_PADDING: Padding = Padding::new(31.0, 16.0, 40.0, 40.0);
pub const HEADER_HEIGHT: f32 = 109.0;
pub const HEADER_RADIUS: f32 = 4.0;
pub const HEADER_TITLE_SIZE: f32 = 24.0;
pub const CONTENT_PADDING: Padding = Padding::new(32.0, 32.0, 0.0, 0.0);
pub const CONTENT_GAP: f32 = 16.0;
pub const FOOTER_PADDING: Padding = Padding::new(31.0, 16.0, 18.0, 18.0);
pub const FOOTER_HEIGHT: f32 = 48.0;
pub const FOOTER_GAP: f32 = 8.0;
pub const FOOTER_TEXT_SIZE: f32 = 10.0;

// Entry
pub const ENTRY_CARD_PADDING: Padding = Padding::new(0.0, 0.0, 24.0, 24.0);
pub const ENTRY_CARD_GAP: f32 = 16.0;
pub const USER_INFO_GAP: f32 = 16.0;
pub const USER_META_GAP: f32 = 8.0;
pub const META_TEXT_SIZE: f32 = 16.0;
pub const AVATAR_SIZE: f32 = 32.0;
pub const INITIALS_TEXT_SIZE: f32 = 14.0;
pub const BADGE_PADDING: Padding = Padding::new(8.0, 8.0, 4.0, 4.0);
pub const BADGE_RADIUS: f32 = 4.0;
pub const BADGE_TEXT_SIZE: f32 = 10.0;
pub const TITLE_TEXT_SIZE: f32 = 20.0;
pub const DESCRIPTION_TEXT_SIZE: f32 = 14.0;
pub const DESCRIPTION_LINE_HEIGHT: f32 = 20.0;
pub const ADDITIONAL_GAP: f32 = 16.0;
pub const LINK_TEXT_SIZE: f32 = 14.0;
pub const LINK_ERROR_TEXT_SIZE: f32 = 12.0;
pub const IMAGE_WIDTH: f32 = 536.0;
pub const IMAGE_HEIGHT: f32 = 320.0;
pub const IMAGE_RADIUS: f32 = 8.0;

pub const SEPARATOR_GLYPH: &str = "•";
pub const LINK_ARROW_GLYPH: &str = "↗";

pub fn container_shadow() -> Effect {
    Effect::DropShadow(DropShadow {
        color: Rgb::BLACK.with_alpha(0.1),
        offset_x: 0.0,
        offset_y: 12.0,
        radius: 24.0,
        spread: 0.0,
    })
}

pub fn entry_card_shadow() -> Effect {
    Effect::DropShadow(DropShadow {
        color: Rgb::BLACK.with_alpha(0.05),
        offset_x: 0.0,
        offset_y: 2.0,
        radius: 8.0,
        spread: 0.0,
    })
}
