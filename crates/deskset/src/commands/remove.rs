use clap::ArgMatches;
use tracing::{error, info};

use deskset_core::events;
use deskset_core::store;

use super::{load, warn_dropped};
use crate::color;

pub(crate) fn handle_remove_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let id = matches.get_one::<String>("id").ok_or("Layout id is required")?;
    let force = matches.get_flag("force");
    info!(event = "cli.remove_started", id = id, force = force);

    let mut loaded = load(matches)?;

    // Saving writes only what decoded, so skipped entries would be lost too
    if !loaded.report.is_clean() && !force {
        let count = loaded.report.dropped_count();
        eprintln!(
            "{}",
            color::error(&format!(
                "Not saving: {} malformed entr{} would be deleted along with '{}'.",
                count,
                if count == 1 { "y" } else { "ies" },
                id
            ))
        );
        eprintln!("Run `deskset validate` to see them, then fix the file or `deskset prune` it.");
        eprintln!("Pass --force to remove anyway.");
        error!(
            event = "cli.remove_failed",
            id = id,
            reason = "malformed_entries",
            dropped = count
        );
        return Err("File has malformed entries".into());
    }
    warn_dropped(&loaded);

    let Some(removed) = loaded.projects.remove(id) else {
        eprintln!("{}", color::error(&format!("No layout with id '{}'", id)));
        error!(event = "cli.remove_failed", id = id, reason = "not_found");
        return Err(format!("Layout '{}' not found", id).into());
    };

    if let Err(e) = store::save_projects_to(&loaded.path, &loaded.projects) {
        eprintln!("{}", color::error(&format!("Failed to save layouts: {}", e)));
        error!(event = "cli.remove_failed", id = id, error = %e);
        events::log_app_error(&e);
        return Err(e.into());
    }

    println!("Removed {} {}", color::bold(&removed.name), color::accent(&removed.id));
    info!(
        event = "cli.remove_completed",
        id = id,
        remaining = loaded.projects.len()
    );
    Ok(())
}
