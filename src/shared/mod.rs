pub mod errors;
pub mod logging;
pub mod state;

// Available in fullstack mode (both client and server)
pub mod hooks;
