use tache::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    let filter = if std::env::var("TACHE_DEBUG").is_ok() {
        EnvFilter::new("tache=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    Cli::menu()
}
