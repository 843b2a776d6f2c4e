// Core composition engine
pub mod block;
pub mod catalog;
pub mod render;
pub mod template;
pub mod variables;

// Shared infrastructure
pub mod config;
pub mod error;
pub mod metrics;

// Application layer
pub mod api;
pub mod server;
