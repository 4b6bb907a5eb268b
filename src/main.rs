use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{info, warn};

use mergington_activities::services::EnrollmentService;
use mergington_activities::store::CatalogStore;
use mergington_activities::web::{self, AppState};

#[tokio::main]
async fn main() {
    // Load .env file
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();
    info!(
        build_id = env!("ACTIVITIES_BUILD_ID"),
        "starting activities service"
    );

    // 2. Build the in-memory catalog and the service that guards it
    let store = Arc::new(CatalogStore::new());
    let state = AppState {
        enrollment: EnrollmentService::new(store),
    };

    // 3. Assemble the whole application
    let app = web::app(state);

    // 4. Start the server (with fallback port)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("invalid HOST/PORT");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            warn!(
                "could not bind {}: {}. trying fallback {}:{}",
                addr,
                e,
                host,
                port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("invalid fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("could not bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    info!("activities site running on http://{}", bound_addr);
    info!("signup page at http://{}/static/index.html", bound_addr);

    axum::serve(listener, app).await.unwrap();
}
