//! Command to classify how two paths relate.

use crate::error::CliError;
use crate::utils::{expand_tilde, GlobalOptions};
use clap::Args;
use pathkit::PathRelationship;
use serde::Serialize;

/// Describe how the first path relates to the second.
#[derive(Args)]
pub struct RelationshipCommand {
    /// First path
    #[arg(value_name = "A")]
    pub first: String,

    /// Second path
    #[arg(value_name = "B")]
    pub second: String,

    /// Print a full sentence instead of a single word
    #[arg(long, conflicts_with = "json")]
    pub describe: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct RelationshipReport<'a> {
    first: &'a str,
    second: &'a str,
    relationship: String,
}

impl RelationshipCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let first = expand_tilde(&self.first)?;
        let second = expand_tilde(&self.second)?;
        let relationship = PathRelationship::between(&first, &second);

        if self.json {
            let report = RelationshipReport {
                first: &first,
                second: &second,
                relationship: relationship.to_string(),
            };
            let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
            println!("{json}");
        } else if self.describe {
            println!("{}", relationship.description(&first, &second));
        } else {
            println!("{relationship}");
        }
        Ok(())
    }
}
