use todolist::commands::Cli;
use todolist::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TODOLIST_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if is_debug_mode() { "todolist=debug,warn" } else { "todolist=warn" })
    });

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    Cli::menu().await
}
