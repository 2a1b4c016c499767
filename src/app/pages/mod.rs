pub mod placeholder;
pub mod routes;

pub use routes::{App, Route};
