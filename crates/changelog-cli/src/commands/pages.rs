//! Pages command
//!
//! Usage: changelog pages

use changelog_core::Host;
use changelog_engine::{UiRequest, UiResponse};

use super::{runtime, CliResult, Context};

pub fn execute(ctx: &Context) -> CliResult<()> {
    let mut router = ctx.router()?;
    let current = router.host().current_page();

    let responses = runtime()?.block_on(router.dispatch(UiRequest::ListPages));
    for outbound in responses {
        if let UiResponse::Pages { pages } = outbound.message {
            for page in pages {
                let is_current = current
                    .as_ref()
                    .is_some_and(|c| c.as_str() == page.page_id);
                let marker = if is_current { "*" } else { " " };
                println!("{} {}\t{}", marker, page.page_id, page.page_name);
            }
        }
    }
    Ok(())
}
