//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - reqwest HTTP client for the PetApi port
//! - JSON file for the Session port
//! - Mock HTTP server for testing

pub mod file_session;
pub mod http;

#[cfg(test)]
pub mod mock_server;
