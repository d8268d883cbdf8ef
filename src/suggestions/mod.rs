//! # Suggestions Module
//!
//! Autocomplete for the company and role target fields. A fast local
//! catalog is matched first; the remote company lookup is only consulted
//! when the local matches are sparse, and its failures never reach the caller.

pub mod catalog;
// Caller-side helper for keystroke-driven clients; the HTTP handlers are one-shot
#[allow(dead_code)]
pub mod debounce;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod remote;
pub mod roles;
pub mod routes;
pub mod validators;


pub use remote::{ClearbitLookup, RemoteLookup};
pub use routes::suggestions_routes;
