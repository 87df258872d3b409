//! Submit command
//!
//! Usage: changelog submit --title <TITLE> --change-type <TYPE> [OPTIONS]

use std::path::PathBuf;

use base64::Engine;
use changelog_core::host::CurrentUser;
use changelog_core::Host;
use changelog_engine::{FormData, UiRequest, UiResponse};
use clap::Args;

use super::{runtime, CliResult, Context};

#[derive(Debug, Args)]
pub struct SubmitArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Category label, e.g. "New Feature" or "Bug Fix"
    #[arg(long)]
    pub change_type: String,

    #[arg(long)]
    pub link_url: Option<String>,

    #[arg(long)]
    pub link_label: Option<String>,

    /// Image file to embed in the entry
    #[arg(long)]
    pub image_file: Option<PathBuf>,

    /// Author name (default: the document's user)
    #[arg(long)]
    pub user: Option<String>,

    /// Target page; becomes the current page (default: current page)
    #[arg(short, long)]
    pub page: Option<String>,
}

pub fn execute(ctx: &Context, args: SubmitArgs) -> CliResult<()> {
    let mut router = ctx.router()?;
    let rt = runtime()?;

    if let Some(page) = &args.page {
        rt.block_on(router.host_mut().set_current_page(&page.as_str().into()))?;
    }
    if let Some(name) = args.user {
        router.host_mut().set_user(Some(CurrentUser {
            name,
            photo_url: None,
        }));
    }

    let image_data = args.image_file.as_deref().map(encode_image).transpose()?;
    let data = FormData {
        title: Some(args.title),
        description: Some(args.description),
        change_type: Some(args.change_type),
        link_url: args.link_url,
        link_label: args.link_label,
        image_data,
        user_photo_data: None,
    };

    let responses = rt.block_on(router.dispatch(UiRequest::CreateEntry { data: Some(data) }));
    for outbound in responses {
        match outbound.message {
            UiResponse::Success {
                entry_count,
                active_page_id,
            } => println!(
                "✓ Entry added to page {} ({} entries)",
                active_page_id, entry_count
            ),
            UiResponse::Error { message } => return Err(message.into()),
            _ => {}
        }
    }

    ctx.save(router.host())
}

/// Read an image file as an inline payload
fn encode_image(path: &std::path::Path) -> CliResult<String> {
    let bytes = std::fs::read(path)?;
    let mime = match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/png",
    };
    Ok(format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    ))
}
