//! # Auth Module
//!
//! Bearer-token session handling:
//! - `AuthedUser` extractor for protected routes (with the dev-mode bypass)
//! - current-user and logout endpoints

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;


pub use extractors::AuthedUser;
pub use routes::auth_routes;
