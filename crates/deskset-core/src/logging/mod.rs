use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Environment variable selecting the log output format (`json` or `text`).
pub const LOG_FORMAT_ENV: &str = "DESKSET_LOG_FORMAT";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Without it, quiet mode only shows warnings
/// and errors. Logs go to stderr so command output on stdout stays clean.
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));

    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // try_init: a second call (tests, embedding) keeps the first subscriber
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

fn default_directive(quiet: bool) -> &'static str {
    if quiet {
        "deskset=warn,deskset_core=warn"
    } else {
        "deskset=info,deskset_core=info"
    }
}
