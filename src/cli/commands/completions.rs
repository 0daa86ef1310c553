//! Completions command - generate shell completion scripts

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::StyleCacheResult;
use clap::CommandFactory;
use clap_complete::generate;

/// Execute the completions command
pub fn execute(args: CompletionsArgs) -> StyleCacheResult<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "stylecache", &mut std::io::stdout());
    Ok(())
}
