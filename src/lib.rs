// Public API exports (shared between client and server)
pub mod config;
pub mod domain;
pub mod shared;
pub mod server_fns;

// App is always available in fullstack mode
pub mod app;
