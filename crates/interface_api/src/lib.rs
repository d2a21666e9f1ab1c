//! HTTP API Layer
//!
//! This crate provides the REST API for the cash ledger using Axum. It is
//! the orchestration boundary the domain core trusts: request validation,
//! existence checks, and the account/transaction currency comparison all
//! happen here, before any aggregate is mutated.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers per feature (accounts, transactions,
//!   categories, users, auth)
//! - **DTOs**: Request/response data transfer objects and the response
//!   envelope carrying the stable error codes
//! - **Error Handling**: One mapping from domain errors to HTTP statuses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::in_memory());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod password;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_ledger::{AccountStore, CategoryStore};
use domain_user::UserStore;
use infra_mem::{MemoryAccountStore, MemoryCategoryStore, MemoryUserStore};

use crate::handlers::{accounts, auth, categories, health, transactions, users};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountStore>,
    pub categories: Arc<dyn CategoryStore>,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    /// Creates state over explicit store implementations
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        categories: Arc<dyn CategoryStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            accounts,
            categories,
            users,
        }
    }

    /// Creates state backed by fresh in-memory stores
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryAccountStore::new()),
            Arc::new(MemoryCategoryStore::new()),
            Arc::new(MemoryUserStore::new()),
        )
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let account_routes = Router::new()
        .route(
            "/",
            post(accounts::create_account).get(accounts::list_accounts),
        )
        .route(
            "/:id",
            get(accounts::get_account).delete(accounts::delete_account),
        )
        .route("/:id/transactions", post(transactions::create_transaction));

    Router::new()
        .route("/", get(health::health_check))
        .nest("/accounts", account_routes)
        .route("/categories", post(categories::create_category))
        .route("/users", post(users::create_user))
        .route("/auth/login", post(auth::login))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
