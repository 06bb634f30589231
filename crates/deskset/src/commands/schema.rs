use clap::ArgMatches;
use tracing::info;

use deskset_core::layout::schema;

use crate::{color, table};

pub(crate) fn handle_schema_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.schema_started", json_output = json_output);

    if json_output {
        println!("{}", serde_json::to_string_pretty(schema::ALL)?);
    } else {
        for (idx, entity) in schema::ALL.iter().enumerate() {
            if idx > 0 {
                println!();
            }
            println!("{}", color::bold(entity.entity));
            table::print_schema_table(entity);
        }
    }

    info!(event = "cli.schema_completed", entities = schema::ALL.len());
    Ok(())
}
