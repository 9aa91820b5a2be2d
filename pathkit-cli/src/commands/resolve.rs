//! Command to resolve a path to its absolute canonical form.

use crate::error::CliError;
use crate::utils::{expand_tilde, GlobalOptions};
use clap::Args;
use pathkit::PathResolver;

/// Resolve a path, following symlinks where it exists.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to resolve (relative paths use the working directory)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Print the resolution as JSON, including how the target was classified
    #[arg(long)]
    pub json: bool,
}

impl ResolveCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = expand_tilde(&self.path)?;
        let resolved = PathResolver::new().resolve(&path)?;

        if self.json {
            let json = serde_json::to_string_pretty(&resolved).map_err(std::io::Error::from)?;
            println!("{json}");
        } else {
            println!("{resolved}");
        }
        Ok(())
    }
}
