//! Inbound adapters that translate external requests into generator calls
//! while keeping framework details at the edge.

pub mod http;
