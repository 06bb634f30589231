use std::path::PathBuf;

use clap::ArgMatches;
use tracing::error;

use deskset_core::events;
use deskset_core::store::{self, LoadedProjects};

mod json_types;
mod list;
mod prune;
mod remove;
mod schema;
mod show;
mod validate;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches),
        Some(("show", sub_matches)) => show::handle_show_command(sub_matches),
        Some(("validate", sub_matches)) => validate::handle_validate_command(sub_matches),
        Some(("prune", sub_matches)) => prune::handle_prune_command(sub_matches),
        Some(("remove", sub_matches)) => remove::handle_remove_command(sub_matches),
        Some(("schema", sub_matches)) => schema::handle_schema_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// `--file` if given, otherwise the store's default location.
fn projects_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("file")
        .map(PathBuf::from)
        .unwrap_or_else(store::projects_file_path)
}

/// Load the projects file, printing the failure for the user.
fn load(matches: &ArgMatches) -> Result<LoadedProjects, Box<dyn std::error::Error>> {
    let path = projects_path(matches);
    store::load_projects_from(&path).map_err(|e| {
        eprintln!("{}", crate::color::error(&format!("Failed to load layouts: {}", e)));
        events::log_app_error(&e);
        e.into()
    })
}

/// Warn on stderr when the listing is missing entries that failed to decode.
fn warn_dropped(loaded: &LoadedProjects) {
    if !loaded.report.is_clean() {
        eprintln!(
            "{}",
            crate::color::warning(&format!(
                "{} malformed entr{} skipped; run `deskset validate` for details.",
                loaded.report.dropped_count(),
                if loaded.report.dropped_count() == 1 { "y" } else { "ies" }
            ))
        );
    }
}
