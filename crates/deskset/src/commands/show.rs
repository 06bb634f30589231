use clap::ArgMatches;
use tracing::{error, info, warn};

use deskset_core::JsonCodec;

use super::{load, warn_dropped};
use crate::{color, table};

pub(crate) fn handle_show_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let id = matches.get_one::<String>("id").ok_or("Layout id is required")?;
    let json_output = matches.get_flag("json");
    info!(event = "cli.show_started", id = id, json_output = json_output);

    let loaded = load(matches)?;
    warn_dropped(&loaded);

    let Some(project) = loaded.projects.find(id) else {
        eprintln!("{}", color::error(&format!("No layout with id '{}'", id)));
        error!(event = "cli.show_failed", id = id, reason = "not_found");
        return Err(format!("Layout '{}' not found", id).into());
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&project.to_json())?);
        info!(event = "cli.show_completed", id = id);
        return Ok(());
    }

    println!("{} {}", color::bold(&project.name), color::accent(&project.id));
    let created = project
        .creation_datetime()
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "-".to_string());
    let launched = project
        .last_launched_datetime()
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "never".to_string());
    println!("  {} {}", color::muted("created:"), created);
    println!("  {} {}", color::muted("last launched:"), launched);
    println!(
        "  {} {}",
        color::muted("shortcut:"),
        if project.is_shortcut_needed { "yes" } else { "no" }
    );

    println!("\nMonitors:");
    if project.monitors.is_empty() {
        println!("  {}", color::muted("none"));
    } else {
        table::print_monitors_table(&project.monitors);
    }

    println!("\nApplications:");
    if project.apps.is_empty() {
        println!("  {}", color::muted("none"));
    } else {
        table::print_apps_table(&project.apps);
    }

    let dangling = project.validate();
    for entry in &dangling {
        warn!(
            event = "cli.show_dangling_monitor",
            id = id,
            app_index = entry.app_index,
            monitor = entry.monitor
        );
        eprintln!(
            "{}",
            color::warning(&format!(
                "Application #{} refers to monitor {}, which is not in this layout",
                entry.app_index, entry.monitor
            ))
        );
    }

    info!(
        event = "cli.show_completed",
        id = id,
        monitors = project.monitors.len(),
        apps = project.apps.len(),
        dangling = dangling.len()
    );
    Ok(())
}
