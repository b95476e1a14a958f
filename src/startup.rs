//! Application Startup
//!
//! Application building and server initialization. All collaborators are
//! constructed once here and handed to the layers that need them; nothing
//! is wired up per request.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{UserService, UserServiceImpl};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::PgUserRepository;
use crate::presentation::http::routes;
use crate::presentation::http::handlers::health;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub db: PgPool,
    pub settings: Arc<Settings>,
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        // Create database pool
        let db = database::create_pool(&settings.database)?;
        tracing::info!("Database connection pool created");

        // Apply the configured schema-management mode
        database::ensure_schema(&settings.database, &db).await?;

        // Compose the layers: repository -> service -> state
        let repo = Arc::new(PgUserRepository::new(db.clone()));
        let users: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(repo));

        let state = AppState {
            users,
            db,
            settings: Arc::new(settings.clone()),
        };

        health::init_server_start();

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to address
        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
