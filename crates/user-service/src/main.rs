//! # User Service
//!
//! A minimal service exposing a greeting endpoint and a CRUD endpoint set for
//! a single `User` entity, backed by a message-driven persistence context.
//!
//! The entry point wires up tracing, starts the [`AppSystem`], exercises each
//! operation once with structured log output, and shuts down cleanly. See the
//! `tests/` directory for the full behavioral coverage.

use store_framework::tracing::setup_tracing;
use tracing::{info, warn, Instrument};
use user_service::controllers::ApiResponse;
use user_service::lifecycle::AppSystem;
use user_service::model::User;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting user service");

    let system = AppSystem::new();

    info!(greeting = system.hello.get(), "Greeting endpoint ready");

    let span = tracing::info_span!("user_crud_demo");
    async {
        // Create a user with a caller-assigned id
        let alice = User::new(1, "Alice", "alice@example.com");
        let outcome = system
            .users
            .create(alice)
            .await
            .map_err(|e| e.to_string())?;
        info!(status = outcome.status_code(), "Create handled");

        // Read it back
        match system.users.get(1).await.map_err(|e| e.to_string())? {
            ApiResponse::Ok(user) => info!(name = %user.name, email = %user.email, "Fetched user"),
            other => warn!(status = other.status_code(), "Unexpected outcome"),
        }

        // Full replace
        let outcome = system
            .users
            .replace(1, User::new(1, "Alice Liddell", "alice@example.com"))
            .await
            .map_err(|e| e.to_string())?;
        info!(status = outcome.status_code(), "Replace handled");

        // Enumerate
        if let ApiResponse::Ok(users) = system.users.list().await.map_err(|e| e.to_string())? {
            info!(count = users.len(), "Listed users");
        }

        // Delete
        let outcome = system.users.delete(1).await.map_err(|e| e.to_string())?;
        info!(status = outcome.status_code(), "Delete handled");

        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
