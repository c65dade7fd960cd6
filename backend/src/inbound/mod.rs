//! Inbound adapters translating transport requests into store operations.

pub mod http;
