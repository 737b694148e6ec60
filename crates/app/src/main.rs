use migration::{Migrator, MigratorTrait};

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "scholarquest={level},server={level},engine={level},tower_http={level}",
            level = settings.app.level
        ))
        .init();

    let db = connect_database(&settings.sqlite.path).await?;

    let engine = engine::Engine::builder().database(db.clone()).build().await?;

    let bind = settings
        .server
        .bind
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("ScholarQuest API server running on {addr}");
    tracing::info!("Database initialized at: {}", settings.sqlite.path);

    tokio::select! {
        result = server::run_with_listener(engine, listener, &settings.server.static_dir) => {
            if let Err(err) = result {
                tracing::error!("server failed: {err}");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down server...");
        }
    }

    db.close().await?;
    tracing::info!("Database connection closed");

    Ok(())
}

async fn connect_database(
    path: &str,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let url = format!("sqlite:{path}?mode=rwc");
    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
