use axum::{routing::get, Router};

use super::handlers;

/// Creates the autocomplete router
///
/// # Routes
/// - `GET /api/suggestions/companies?q=` - Company names, augmented remotely when sparse
/// - `GET /api/suggestions/roles?q=` - Job roles with abbreviation expansion
pub fn suggestions_routes() -> Router {
    Router::new()
        .route("/api/suggestions/companies", get(handlers::suggest_companies))
        .route("/api/suggestions/roles", get(handlers::suggest_roles))
}
