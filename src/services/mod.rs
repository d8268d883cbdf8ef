// src/services/mod.rs
//
// Adapters for external collaborators shared across domain modules

pub mod llm;
pub mod storage;

pub use llm::{LlmError, LlmService};
pub use storage::ResumeStorage;
