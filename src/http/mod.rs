//! HTTP listener: binding and serving the router.
//!
//! Plain HTTP only; TLS, if any, is terminated in front of the service.

mod server;

pub use server::{bind, serve, start_server, ServerError};
