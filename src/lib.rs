// ABOUTME: Library crate for Alert-Box exposing the alert provider and TUI pieces for testing and reuse

pub mod alerts;
pub mod app;
pub mod components;
pub mod config;
pub mod models;
