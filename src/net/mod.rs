//! Everything that talks to the backend: wire types, the bearer-token
//! transport, the typed endpoint surface, and session-expiry signaling.

pub mod api;
pub mod expiry;
pub mod http;
pub mod types;
