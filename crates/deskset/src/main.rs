use deskset_core::init_logging;

mod app;
mod color;
mod commands;
mod table;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Default (no flag) = quiet mode, -v/--verbose = verbose mode
    let verbose = app::global_flag(&matches, "verbose");
    init_logging(!verbose);

    if app::global_flag(&matches, "no-color") {
        color::set_no_color();
    }

    commands::run_command(&matches)?;

    Ok(())
}
