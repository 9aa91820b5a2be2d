//! Command to find the nearest project root.

use crate::error::CliError;
use crate::utils::{expand_optional, load_configuration, GlobalOptions};
use clap::Args;
use pathkit::ProjectRootLocator;

/// Walk up from START to the nearest directory holding a project marker.
#[derive(Args)]
pub struct ProjectRootCommand {
    /// Where to start (defaults to the working directory)
    #[arg(value_name = "START")]
    pub start: Option<String>,

    /// Marker name to look for instead of the configured set (repeatable)
    #[arg(long = "marker", value_name = "NAME")]
    pub markers: Vec<String>,

    /// Also print the marker that identified the root
    #[arg(long)]
    pub show_marker: bool,

    /// Print the result as JSON
    #[arg(long, conflicts_with = "show_marker")]
    pub json: bool,
}

impl ProjectRootCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, &self.markers)?;
        let start = expand_optional(self.start.as_deref())?;

        let locator = ProjectRootLocator::new(config.marker_set());
        let root = locator.find_with_marker(start.as_deref())?;

        if self.json {
            let json = serde_json::to_string_pretty(&root).map_err(std::io::Error::from)?;
            println!("{json}");
        } else if self.show_marker {
            println!("{}\t{}", root.path, root.marker);
        } else {
            println!("{}", root.path);
        }
        Ok(())
    }
}
