use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use nestruntime::{DefinitionRegistry, DefinitionStore, ExtensionConfig};
use nestserver::AppState;
use std::path::PathBuf;
use tracing::info;

/// Resolve the extension install directory for the standalone server:
/// an explicit override, otherwise the directory holding the binary.
fn ext_path() -> anyhow::Result<PathBuf> {
    if let Some(path) = std::env::var_os("NESTED_NODES_HOME") {
        return Ok(PathBuf::from(path));
    }
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".")))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let ext_path = ext_path()?;
    let config = ExtensionConfig::load_or_default(&ext_path);
    let store = DefinitionStore::from_config(&config, &ext_path);

    info!("Serving nested node definitions from {}", store.dir().display());

    let app_state = web::Data::new(AppState {
        registry: DefinitionRegistry::new(store),
    });

    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    info!("Server starting on http://{}", bind_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(app_state.clone())
            .wrap(cors)
            .wrap(actix_web::middleware::Logger::default())
            .configure(nestserver::configure)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
