use clap::ArgMatches;
use tracing::{info, warn};

use deskset_core::LoadedProjects;
use deskset_core::layout::unknown_field_paths;

use super::json_types::{DanglingMonitorEntry, DroppedEntry, ValidationOutput};
use super::load;
use crate::color;

pub(crate) fn handle_validate_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.validate_started", json_output = json_output);

    let loaded = load(matches)?;
    let output = ValidationOutput {
        path: loaded.path.display().to_string(),
        projects: loaded.projects.len(),
        dropped: loaded.report.dropped.iter().map(DroppedEntry::from).collect(),
        dangling_monitor_refs: dangling_refs(&loaded),
        unknown_fields: loaded
            .document
            .as_ref()
            .map(unknown_field_paths)
            .unwrap_or_default(),
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&output);
    }

    info!(
        event = "cli.validate_completed",
        projects = output.projects,
        dropped = output.dropped.len(),
        dangling = output.dangling_monitor_refs.len(),
        unknown_fields = output.unknown_fields.len()
    );

    if output.dropped.is_empty() {
        Ok(())
    } else {
        warn!(event = "cli.validate_failed", dropped = output.dropped.len());
        Err(format!(
            "{} entr{} could not be loaded",
            output.dropped.len(),
            if output.dropped.len() == 1 { "y" } else { "ies" }
        )
        .into())
    }
}

fn dangling_refs(loaded: &LoadedProjects) -> Vec<DanglingMonitorEntry> {
    loaded
        .projects
        .projects
        .iter()
        .flat_map(|project| {
            project
                .validate()
                .into_iter()
                .map(|entry| DanglingMonitorEntry {
                    project_id: project.id.clone(),
                    app_index: entry.app_index,
                    monitor: entry.monitor,
                })
        })
        .collect()
}

fn print_report(output: &ValidationOutput) {
    println!("{} {}", color::bold("Checked"), color::accent(&output.path));
    println!("  {} layout(s) loaded", output.projects);

    if output.dropped.is_empty() {
        println!("  {}", color::ok("No malformed entries."));
    } else {
        println!("\nSkipped on load:");
        for entry in &output.dropped {
            println!(
                "  {} {} {}",
                color::dropped(&entry.path),
                color::muted(&format!("[{}]", entry.error_code)),
                entry.message
            );
        }
    }

    if !output.dangling_monitor_refs.is_empty() {
        println!("\nApplications on a missing monitor:");
        for entry in &output.dangling_monitor_refs {
            println!(
                "  {} application #{} -> monitor {}",
                color::accent(&entry.project_id),
                entry.app_index,
                entry.monitor
            );
        }
    }

    if !output.unknown_fields.is_empty() {
        println!("\nUnrecognized fields (dropped on the next save):");
        for path in &output.unknown_fields {
            println!("  {}", color::muted(path));
        }
    }
}
