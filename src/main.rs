use std::process::ExitCode;
use todolist::commands::Cli;
use todolist::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    // TODOLIST_DATABASE_PATH may come from a .env file
    dotenv::dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todolist=debug")))
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    Cli::menu()
}
