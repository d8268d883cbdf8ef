// src/applications/tests/mod.rs

mod submitter_tests;
