use anyhow::Result;
use textbayes::ui::cli::drivers::InquireDriver;
use textbayes::ui::cli::session::run_session;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    tracing::info!("textbayes v{} starting", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_session(&InquireDriver, &mut out)
}
