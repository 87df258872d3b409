//! Page command
//!
//! Usage: changelog page add <NAME>

use clap::{Args, Subcommand};

use super::{CliResult, Context};

#[derive(Debug, Args)]
pub struct PageArgs {
    #[command(subcommand)]
    pub command: PageCommand,
}

#[derive(Debug, Subcommand)]
pub enum PageCommand {
    /// Append a page to the document
    Add {
        /// Page name
        name: String,
    },
}

pub fn execute(ctx: &Context, args: PageArgs) -> CliResult<()> {
    match args.command {
        PageCommand::Add { name } => {
            let mut host = crate::document::load(&ctx.document)?;
            let id = host.add_page(&name);
            ctx.save(&host)?;
            println!("✓ Added page {} ({})", name, id);
            Ok(())
        }
    }
}
