// src/templates/mod.rs

pub mod handlers;
pub mod models;
pub mod prompt;
pub mod render;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::templates_routes;
pub use services::TemplatesService;
