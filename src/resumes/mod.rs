// src/resumes/mod.rs

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::resumes_routes;
pub use services::ResumesService;
