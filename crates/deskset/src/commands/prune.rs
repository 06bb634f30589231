use clap::ArgMatches;
use tracing::{error, info};

use deskset_core::events;
use deskset_core::store;

use super::load;
use crate::color;

pub(crate) fn handle_prune_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let dry_run = matches.get_flag("dry-run");
    info!(event = "cli.prune_started", dry_run = dry_run);

    let loaded = load(matches)?;
    if loaded.report.is_clean() {
        println!("{}", color::ok("Nothing to prune."));
        info!(event = "cli.prune_completed", removed = 0);
        return Ok(());
    }

    let verb = if dry_run { "Would remove" } else { "Removing" };
    let count = loaded.report.dropped_count();
    println!(
        "{} {} malformed entr{}:",
        verb,
        count,
        if count == 1 { "y" } else { "ies" }
    );
    for dropped in &loaded.report.dropped {
        println!("  {} {}", color::dropped(&dropped.path), dropped.error);
    }

    if dry_run {
        info!(
            event = "cli.prune_completed",
            dry_run = true,
            removed = loaded.report.dropped_count()
        );
        return Ok(());
    }

    if let Err(e) = store::save_projects_to(&loaded.path, &loaded.projects) {
        eprintln!("{}", color::error(&format!("Failed to save layouts: {}", e)));
        error!(event = "cli.prune_failed", error = %e);
        events::log_app_error(&e);
        return Err(e.into());
    }

    println!(
        "Saved {} layout(s) to {}",
        loaded.projects.len(),
        color::accent(&loaded.path.display().to_string())
    );
    info!(
        event = "cli.prune_completed",
        dry_run = false,
        removed = loaded.report.dropped_count(),
        kept = loaded.projects.len()
    );
    Ok(())
}
