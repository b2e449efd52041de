use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr so stdout stays reserved for the rendered list.
/// `json` switches the compact format for JSON lines.
pub fn init_logger(verbose: bool, json: bool) {
    let default_directive = if verbose {
        "doctor_finder=debug,info"
    } else {
        "doctor_finder=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer.compact()).init();
    }
}
