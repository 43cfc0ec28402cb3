use dayrep::commands::Cli;
use dayrep::libs::messages::macros::is_debug_mode;

fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")))
            .with_target(false)
            .init();
    }

    Cli::menu()
}
