//! Command to lexically normalize a path.

use crate::error::CliError;
use crate::utils::{expand_tilde, GlobalOptions};
use clap::Args;

/// Lexically normalize a path without touching the filesystem.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl NormalizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = expand_tilde(&self.path)?;
        println!("{}", pathkit::normalize(&path));
        Ok(())
    }
}
