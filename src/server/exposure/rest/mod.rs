//! REST API exposure
//!
//! The REST exposure consumes a `ServerHost` and produces an Axum `Router`
//! with the health routes, the entity CRUD routes and the login check.

use super::super::handlers;
use super::super::host::ServerHost;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;

/// Service name reported by the health routes
pub const SERVICE_NAME: &str = "registrar-rs";

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Entity CRUD routes
    /// - `GET /api/user/checkuser`
    /// - Custom routes
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let health_routes = Self::health_routes();
        let entity_routes = host.entity_registry.build_routes();
        let login_routes = Router::new()
            .route("/api/user/checkuser", get(handlers::check_user))
            .with_state(host.resolver.clone());

        let app = custom_routes.into_iter().fold(
            health_routes.merge(entity_routes).merge(login_routes),
            |app, routes| app.merge(routes),
        );

        Ok(app)
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": SERVICE_NAME
        }))
    }
}
