use clap::ArgMatches;
use tracing::info;

use super::json_types::ProjectSummary;
use super::{load, warn_dropped};
use crate::table;

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.list_started", json_output = json_output);

    let loaded = load(matches)?;
    warn_dropped(&loaded);

    let projects = &loaded.projects.projects;
    if json_output {
        let summaries: Vec<ProjectSummary> = projects.iter().map(ProjectSummary::from).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else if projects.is_empty() {
        println!("No layouts saved in {}.", loaded.path.display());
    } else {
        table::print_projects_table(projects);
    }

    info!(event = "cli.list_completed", count = projects.len());
    Ok(())
}
