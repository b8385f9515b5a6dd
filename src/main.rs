use axum::Router;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use boxoffice_server::config::Config;
use boxoffice_server::routes::create_routes;
use boxoffice_server::{store, MIGRATOR};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();

    let pool = store::connect(&config.database_url, 5)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Successfully connected to database");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    tracing::info!("Migrations run successfully");

    store::admin::seed(&pool, &config.admin_username, &config.admin_password)
        .await
        .expect("Failed to seed admin account");

    let app: Router = create_routes(pool, config.session_key());

    tracing::info!("🎟️ Server running at http://{}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
