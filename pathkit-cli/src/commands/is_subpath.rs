//! Command to test path containment.

use crate::error::CliError;
use crate::utils::{expand_tilde, GlobalOptions};
use clap::Args;

/// Test whether CHILD is PARENT or lies below it.
///
/// The answer is the exit status: 0 when contained, 1 otherwise.
#[derive(Args)]
pub struct IsSubpathCommand {
    /// Candidate ancestor
    #[arg(value_name = "PARENT")]
    pub parent: String,

    /// Candidate descendant
    #[arg(value_name = "CHILD")]
    pub child: String,

    /// Also print `true` or `false`
    #[arg(long)]
    pub print: bool,
}

impl IsSubpathCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let parent = expand_tilde(&self.parent)?;
        let child = expand_tilde(&self.child)?;
        let contained = pathkit::is_subpath(&parent, &child);

        if self.print {
            println!("{contained}");
        }

        if contained {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{child} is not inside {parent}"
            )))
        }
    }
}
