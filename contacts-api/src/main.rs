use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

use contacts_api::config::ApiConfig;
use contacts_api::helpers;
use contacts_api::routes::{self, Router};
use contacts_api::store::{ContactStore, SqliteContactStore};

#[get("/health")]
async fn health(router: web::Data<Router>) -> impl Responder {
    match router.store().count().await {
        Ok(count) => HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "database": "connected",
            "contacts": count
        })),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "status": "unhealthy",
                "database": "disconnected"
            }))
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = args.log_file_path {
        let log_path = std::path::Path::new(&log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("contacts-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter.clone())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Load config
    let (config, config_path) = ApiConfig::load(args.config.as_deref())
        .map_err(|e| std::io::Error::other(format!("Failed to load config: {e}")))?;
    tracing::info!("Loaded config from {:?}", config_path);

    // Initialize database
    let storage = config.storage();
    let (db, db_path) = helpers::database::initialize_database(&storage)
        .map_err(|e| std::io::Error::other(format!("Failed to initialize database: {e}")))?;
    tracing::info!("Database initialized at: {:?}", db_path);

    let store: Arc<dyn ContactStore> = Arc::new(SqliteContactStore::new(db));

    if storage.seed_demo_contacts {
        if let Err(e) = helpers::seed::seed_demo_contacts(store.as_ref()).await {
            tracing::warn!("Failed to seed demo contacts: {}", e);
        }
    }

    let router = Router::new(store);

    let server_config = config.server();
    let (host, port) = (server_config.host, server_config.port);
    tracing::info!("Server will listen on {}:{}", host, port);

    let cors_config = config.cors.clone();
    let server = HttpServer::new(move || {
        // Configure CORS
        let cors = if let Some(cors_config) = &cors_config {
            let mut cors_builder = Cors::default();
            for origin in &cors_config.allowed_origins {
                cors_builder = cors_builder.allowed_origin(origin);
            }
            cors_builder
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec!["Accept", "Content-Type"])
                .max_age(3600)
        } else {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec!["Accept", "Content-Type"])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .wrap(actix_web::middleware::Logger::default())
            .app_data(web::Data::new(router.clone()))
            .service(health)
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run();

    let handle = server.handle();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }

        tracing::info!("Ctrl+C received, shutting down...");
        handle.stop(true).await;
    });

    server.await
}
