//! Mural backend library modules.
//!
//! A small HTTP backend over three file-backed stores: uploaded PDF
//! documents, the singleton action plan document, and the shared photo
//! gallery with its metadata index.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod server;
pub mod store;

/// Tracing middleware attaching a per-request trace identifier.
pub use middleware::Trace;
