use cir_axum::start_server;
use cir_server::{AppConfig, Cli, Commands, impls::CirApp, import_file, provision_store};
use cir_sqlite::Db;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;

    // Create config with proper layering of CLI args
    let AppConfig {
        server,
        database,
        seed,
    } = AppConfig::load(&cli)?;

    // One store handle for the lifetime of the process
    let db = Db::open(&database).await?;

    match cli.command() {
        Commands::Serve => {
            provision_store(&db, &seed).await?;
            start_server(server, CirApp { db }).await?;
        }
        Commands::Import { file, skip } => {
            import_file(&db, &file, skip, seed.pace).await?;
        }
    }

    Ok(())
}
