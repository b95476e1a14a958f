//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::get,
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Sub-path of the users resource under the configured base path
pub const USERS_PATH: &str = "/users";

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest(&state.settings.server.base_path, api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// Routes nested under the base path
fn api_routes() -> Router<AppState> {
    Router::new().nest(USERS_PATH, user_routes())
}

/// User resource routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::user::list_users)
                .post(handlers::user::save_user)
                .delete(handlers::user::delete_user),
        )
        .route("/email/{email}", get(handlers::user::get_user_by_email))
        .route("/{user_id}", get(handlers::user::get_user))
}
