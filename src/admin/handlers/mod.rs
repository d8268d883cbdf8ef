// src/admin/handlers/mod.rs

pub mod dashboard;
pub mod job_boards;
