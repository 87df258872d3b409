//! Render command
//!
//! Usage: changelog render [--page <PAGE_ID>] [--output <FILE>]

use clap::Args;
use std::path::PathBuf;

use changelog_core::container::locate;
use changelog_core::render::render_outline;

use super::{resolve_page, CliResult, Context};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Page to render (default: current page)
    #[arg(short, long)]
    pub page: Option<String>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(ctx: &Context, args: RenderArgs) -> CliResult<()> {
    let host = crate::document::load(&ctx.document)?;
    let config = ctx.load_config()?;
    let page = resolve_page(&host, args.page.as_deref())?;

    let Some(status) = locate(&host, &page, &config)? else {
        println!("No changelog on page {}", page);
        return Ok(());
    };
    let outline = render_outline(&host, &status.refs.container)?;

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, outline)?;
        println!("✓ Rendered to {}", output_path.display());
    } else {
        print!("{}", outline);
    }
    Ok(())
}
