use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::errors::bind_context;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(self) -> Result<()> {
        info!(
            "Uploads in {}, static files from {}",
            self.config.server.upload_dir.display(),
            self.config.server.static_dir.display()
        );

        // One ladder for the whole process lifetime
        let state = Arc::new(AppState::new(self.config)?);

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| bind_context(&addr))?;
        info!("Server listening on {}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
