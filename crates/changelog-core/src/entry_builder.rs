//! Entry subtree construction
//!
//! Builds the `changelog-entry-{id}` subtree for one entry as a [`Node`]
//! value. Nothing is attached to the document here; decoding images does
//! register them with the host, which has no visible effect on the page.
//!
//! Layout, top to bottom inside the `content-container` card:
//!
//! ```text
//! user-info      avatar, name • date • time
//! type-badge     uppercase category label
//! title
//! description
//! additional     link-text | link-error, image | image-placeholder (optional)
//! ```

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::avatar::{self, AvatarVisual};
use crate::config::ChangelogConfig;
use crate::host::Host;
use crate::image::decode_inline_image;
use crate::log_op_fallback;
use crate::model::{
    AutoLayout, ChangelogEntry, CornerRadii, FontRole, FontSet, Node, Paint, SizingMode,
    TextProps,
};
use crate::style::{self, colors};
use crate::visual::Rendered;

pub const ENTRY_NAME_PREFIX: &str = "changelog-entry-";

/// Date and time fragments shown in the meta row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTimestamp {
    /// `DD/MM/YYYY`
    pub date: String,
    /// `HHhMM`, 24-hour
    pub time: String,
}

pub fn format_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> EntryTimestamp
where
    Tz::Offset: std::fmt::Display,
{
    EntryTimestamp {
        date: timestamp.format("%d/%m/%Y").to_string(),
        time: timestamp.format("%Hh%M").to_string(),
    }
}

/// Format in the local time zone of the process
pub fn format_local(timestamp: &DateTime<Utc>) -> EntryTimestamp {
    format_timestamp(&timestamp.with_timezone(&Local))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLink {
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkIssue {
    InvalidScheme { url: String },
    MissingLabel,
    MissingUrl,
}

impl LinkIssue {
    /// Text of the inline notice rendered in place of the link
    pub fn notice(&self) -> &'static str {
        match self {
            LinkIssue::InvalidScheme { .. } => "Link not added: invalid URL",
            LinkIssue::MissingLabel => "Link not added: missing label",
            LinkIssue::MissingUrl => "Link not added: missing URL",
        }
    }
}

/// Decide how the link section renders
///
/// `None` when neither half is present. Only `http://` and `https://` URLs
/// with a label become hyperlinks.
pub fn classify_link(
    url: Option<&str>,
    label: Option<&str>,
) -> Option<Result<ValidLink, LinkIssue>> {
    let url = url.map(str::trim).filter(|u| !u.is_empty());
    let label = label.filter(|l| !l.trim().is_empty());
    match (url, label) {
        (None, None) => None,
        (Some(_), None) => Some(Err(LinkIssue::MissingLabel)),
        (None, Some(_)) => Some(Err(LinkIssue::MissingUrl)),
        (Some(url), Some(label)) => {
            if url.starts_with("http://") || url.starts_with("https://") {
                Some(Ok(ValidLink {
                    url: url.to_string(),
                    label: label.to_string(),
                }))
            } else {
                Some(Err(LinkIssue::InvalidScheme {
                    url: url.to_string(),
                }))
            }
        }
    }
}

/// Build the complete entry subtree
///
/// Never fails: photo, image and link problems are rendered as fallbacks.
pub async fn build_entry_node<H: Host + ?Sized>(
    host: &mut H,
    entry: &ChangelogEntry,
    fonts: &FontSet,
    config: &ChangelogConfig,
) -> Node {
    let user_name = config.display_name(&entry.user.name).to_string();
    let avatar = avatar::synthesize(host, &user_name, entry.user.photo_url.as_deref()).await;
    let additional = build_additional(host, entry, fonts).await;

    let mut card = Node::frame("content-container")
        .with_layout(
            AutoLayout::vertical()
                .with_padding(style::ENTRY_CARD_PADDING)
                .with_spacing(style::ENTRY_CARD_GAP)
                .with_sizing(SizingMode::Auto, SizingMode::Fixed),
        )
        .with_solid_fill(colors::BACKGROUND)
        .with_corner_radii(CornerRadii::uniform(style::CONTAINER_RADIUS))
        .with_effect(style::entry_card_shadow())
        .stretched()
        .with_child(user_info(&user_name, avatar.value(), &format_local(&entry.timestamp), fonts))
        .with_child(type_badge(entry, fonts))
        .with_child(
            Node::text(
                "title",
                TextProps::new(
                    entry.title.as_str(),
                    fonts.get(FontRole::SemiBold),
                    style::TITLE_TEXT_SIZE,
                    colors::ENTRY_TITLE,
                ),
            )
            .stretched(),
        )
        .with_child(
            Node::text(
                "description",
                TextProps::new(
                    entry.description.as_str(),
                    fonts.get(FontRole::Regular),
                    style::DESCRIPTION_TEXT_SIZE,
                    colors::DESCRIPTION,
                )
                .with_line_height(style::DESCRIPTION_LINE_HEIGHT),
            )
            .stretched(),
        );
    if let Some(additional) = additional {
        card = card.with_child(additional);
    }

    Node::frame(format!("{}{}", ENTRY_NAME_PREFIX, entry.id))
        .with_layout(AutoLayout::vertical().with_sizing(SizingMode::Auto, SizingMode::Fixed))
        .with_width(config.max_width)
        .stretched()
        .with_child(card)
}

fn user_info(
    user_name: &str,
    avatar: &AvatarVisual,
    timestamp: &EntryTimestamp,
    fonts: &FontSet,
) -> Node {
    let meta_text = |name: &str, characters: &str, role: FontRole, color| {
        Node::text(
            name,
            TextProps::new(characters, fonts.get(role), style::META_TEXT_SIZE, color),
        )
    };
    let separator =
        || meta_text("separator", style::SEPARATOR_GLYPH, FontRole::Medium, colors::SEPARATOR);

    let meta = Node::frame("user-meta")
        .with_layout(
            AutoLayout::horizontal()
                .with_spacing(style::USER_META_GAP)
                .centered(),
        )
        .with_child(meta_text("user-name", user_name, FontRole::SemiBold, colors::USER_NAME))
        .with_child(separator())
        .with_child(meta_text("date", &timestamp.date, FontRole::Medium, colors::DATE))
        .with_child(separator())
        .with_child(meta_text("time", &timestamp.time, FontRole::Medium, colors::DATE));

    Node::frame("user-info")
        .with_layout(
            AutoLayout::horizontal()
                .with_spacing(style::USER_INFO_GAP)
                .centered(),
        )
        .stretched()
        .with_child(avatar_node(avatar, fonts))
        .with_child(meta)
}

fn avatar_node(avatar: &AvatarVisual, fonts: &FontSet) -> Node {
    let frame = Node::frame("avatar")
        .with_size(style::AVATAR_SIZE, style::AVATAR_SIZE)
        .with_corner_radii(CornerRadii::uniform(style::AVATAR_SIZE / 2.0));
    match avatar {
        AvatarVisual::Photo { image_hash } => frame.with_fill(Paint::Image {
            image_hash: image_hash.clone(),
        }),
        AvatarVisual::Initials { color, initials } => frame
            .with_layout(
                AutoLayout::horizontal()
                    .with_sizing(SizingMode::Fixed, SizingMode::Fixed)
                    .centered(),
            )
            .with_solid_fill(*color)
            .with_child(Node::text(
                "avatar-initials",
                TextProps::new(
                    initials.as_str(),
                    fonts.get(FontRole::Medium),
                    style::INITIALS_TEXT_SIZE,
                    colors::INITIALS,
                ),
            )),
    }
}

fn type_badge(entry: &ChangelogEntry, fonts: &FontSet) -> Node {
    let badge = entry.change_type.badge_colors();
    Node::frame("type-badge")
        .with_layout(AutoLayout::horizontal().with_padding(style::BADGE_PADDING))
        .with_corner_radii(CornerRadii::uniform(style::BADGE_RADIUS))
        .with_solid_fill(badge.background)
        .with_child(Node::text(
            "type-label",
            TextProps::new(
                entry.change_type.label().to_uppercase(),
                fonts.get(FontRole::Bold),
                style::BADGE_TEXT_SIZE,
                badge.text,
            ),
        ))
}

async fn build_additional<H: Host + ?Sized>(
    host: &mut H,
    entry: &ChangelogEntry,
    fonts: &FontSet,
) -> Option<Node> {
    let mut children = Vec::new();

    match classify_link(entry.link_url(), entry.link_label()) {
        Some(Ok(link)) => children.push(Node::text(
            "link-text",
            TextProps::new(
                format!("{} {}", link.label, style::LINK_ARROW_GLYPH),
                fonts.get(FontRole::Regular),
                style::LINK_TEXT_SIZE,
                colors::LINK,
            )
            .with_hyperlink(link.url),
        )),
        Some(Err(issue)) => {
            log_op_fallback!(
                "build_entry",
                reason = issue.notice(),
                entry_id = entry.id.as_str()
            );
            children.push(Node::text(
                "link-error",
                TextProps::new(
                    issue.notice(),
                    fonts.get(FontRole::Regular),
                    style::LINK_ERROR_TEXT_SIZE,
                    colors::LINK_ERROR,
                ),
            ));
        }
        None => {}
    }

    if let Some(payload) = entry.image_data() {
        let image = match decode_inline_image(host, payload).await {
            Ok(image_hash) => Rendered::Primary(
                image_rectangle("image").with_fill(Paint::Image { image_hash }),
            ),
            Err(err) => Rendered::fallback(
                image_rectangle("image-placeholder").with_solid_fill(colors::PLACEHOLDER),
                err.to_string(),
            ),
        };
        if let Some(reason) = image.reason() {
            log_op_fallback!(
                "build_entry",
                reason = reason,
                entry_id = entry.id.as_str()
            );
        }
        children.push(image.into_inner());
    }

    if children.is_empty() {
        return None;
    }
    Some(
        Node::frame("additional")
            .with_layout(AutoLayout::vertical().with_spacing(style::ADDITIONAL_GAP))
            .stretched()
            .with_children(children),
    )
}

fn image_rectangle(name: &str) -> Node {
    Node::rectangle(name, style::IMAGE_WIDTH, style::IMAGE_HEIGHT)
        .with_corner_radii(CornerRadii::uniform(style::IMAGE_RADIUS))
}
