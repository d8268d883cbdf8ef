// src/applications/mod.rs

pub mod handlers;
pub mod lifecycle;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod submitter;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::applications_routes;
