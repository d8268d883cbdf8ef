// src/admin/mod.rs

pub mod handlers;
pub mod models;
pub mod routes;
mod seed;
pub mod services;
pub mod validators;


pub use routes::admin_routes;
