use clap::Parser;
use migration::{Migrator, MigratorTrait};

mod cli;
mod render;
mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = cli::Cli::parse();
    let settings = settings::Settings::new(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "poorband={level},engine={level}",
            level = settings.app.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let url = cli
        .database_url
        .clone()
        .unwrap_or_else(|| settings.database.url());
    tracing::info!("opening database {url}");
    let db = connect_database(&url).await?;

    let engine = match engine::Engine::builder()
        .database(db)
        .calendar_days(settings.statistics.calendar_days)
        .build()
        .await
    {
        Ok(engine) => engine,
        Err(err) => {
            tracing::error!("failed to build engine from database: {err}");
            return Err(err.into());
        }
    };

    match cli::run(&engine, cli.command).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            tracing::error!("command failed: {err}");
            Err(err.into())
        }
    }
}

async fn connect_database(
    url: &str,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
