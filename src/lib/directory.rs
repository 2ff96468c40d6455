//! Administrative client for the teaching-staff directory backend.
pub mod api;
pub mod backend;
pub mod helpers;
pub mod models;
pub mod nav;
pub mod prompt;
pub mod run_tool;
pub mod views;
