//! babel-library: a deterministic library of every possible book
//!
//! - [`babel_core`]: alphabet, geometry, addresses and the generator
//! - [`babel_server`]: HTTP boundary
//! - [`babel_client`]: HTTP client

pub use babel_client;
pub use babel_core;
pub use babel_server;
