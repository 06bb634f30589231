use clap::{Arg, ArgAction, ArgMatches, Command};

pub fn build_cli() -> Command {
    Command::new("deskset")
        .about("Inspect and repair saved desktop layouts")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Projects file to use (defaults to $DESKSET_PROJECTS_FILE or ~/Desktop/projects.json)")
                .global(true)
                .value_name("PATH"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("list")
                .about("List saved layouts")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("show")
                .about("Show the monitors and applications of one layout")
                .arg(
                    Arg::new("id")
                        .help("Layout id")
                        .required(true)
                        .index(1),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("validate")
                .about("Report entries that cannot be loaded")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("prune")
                .about("Rewrite the file keeping only entries that load cleanly")
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Show what would be removed without writing")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("remove")
                .about("Delete a layout")
                .arg(
                    Arg::new("id")
                        .help("Layout id")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help("Save even if malformed entries would be lost")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("schema")
                .about("Print the fields of every entity in the projects file")
                .arg(json_flag()),
        )
}

/// A global flag, whether it was given before or after the subcommand.
pub fn global_flag(matches: &ArgMatches, id: &str) -> bool {
    matches.get_flag(id)
        || matches
            .subcommand()
            .is_some_and(|(_, sub)| sub.get_flag(id))
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_cli_list_json() {
        let matches = build_cli()
            .try_get_matches_from(vec!["deskset", "list", "--json"])
            .unwrap();
        let sub = matches.subcommand_matches("list").unwrap();
        assert!(sub.get_flag("json"));
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_global_file_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(vec!["deskset", "validate", "--file", "/tmp/p.json", "-v"])
            .unwrap();
        let sub = matches.subcommand_matches("validate").unwrap();
        assert_eq!(
            sub.get_one::<String>("file").map(String::as_str),
            Some("/tmp/p.json")
        );
        assert!(sub.get_flag("verbose"));
        assert!(global_flag(&matches, "verbose"));
    }

    #[test]
    fn test_cli_show_requires_id() {
        let result = build_cli().try_get_matches_from(vec!["deskset", "show"]);
        assert!(result.is_err());

        let matches = build_cli()
            .try_get_matches_from(vec!["deskset", "show", "abc"])
            .unwrap();
        let sub = matches.subcommand_matches("show").unwrap();
        assert_eq!(sub.get_one::<String>("id").map(String::as_str), Some("abc"));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let result = build_cli().try_get_matches_from(vec!["deskset", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_remove_force() {
        let matches = build_cli()
            .try_get_matches_from(vec!["deskset", "remove", "abc", "--force"])
            .unwrap();
        let sub = matches.subcommand_matches("remove").unwrap();
        assert!(sub.get_flag("force"));
    }

    #[test]
    fn test_cli_prune_dry_run() {
        let matches = build_cli()
            .try_get_matches_from(vec!["deskset", "prune", "--dry-run"])
            .unwrap();
        assert!(matches.subcommand_matches("prune").unwrap().get_flag("dry-run"));
    }
}
