//! Command to compute a relative path.

use crate::error::CliError;
use crate::utils::{expand_tilde, GlobalOptions};
use clap::Args;

/// Print the path leading from FROM to TO.
#[derive(Args)]
pub struct RelativeCommand {
    /// Absolute starting path
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Absolute target path
    #[arg(value_name = "TO")]
    pub to: String,
}

impl RelativeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let from = expand_tilde(&self.from)?;
        let to = expand_tilde(&self.to)?;
        println!("{}", pathkit::relative(&from, &to)?);
        Ok(())
    }
}
