// Domain layer: views, principals, menu entries and the services that combine them.
// Pure Rust, no framework dependencies.
pub mod models;
pub mod services;
