//! Check command
//!
//! Usage: changelog check [--page <PAGE_ID>]

use clap::Args;

use changelog_engine::{UiRequest, UiResponse};

use super::{resolve_page, runtime, CliResult, Context};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Page to inspect; becomes the current page (default: current page)
    #[arg(short, long)]
    pub page: Option<String>,
}

pub fn execute(ctx: &Context, args: CheckArgs) -> CliResult<()> {
    let mut router = ctx.router()?;
    let page = resolve_page(router.host(), args.page.as_deref())?;

    let responses = runtime()?.block_on(router.dispatch(UiRequest::CheckContainer {
        page_id: page.to_string(),
    }));

    for outbound in responses {
        match outbound.message {
            UiResponse::ContainerStatus {
                exists,
                entry_count,
                active_page_id,
            } => {
                if exists {
                    println!("Page {}: changelog with {} entries", active_page_id, entry_count);
                } else {
                    println!("Page {}: no changelog", active_page_id);
                }
            }
            UiResponse::Error { message } => return Err(message.into()),
            _ => {}
        }
    }

    ctx.save(router.host())
}
