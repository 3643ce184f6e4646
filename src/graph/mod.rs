//! Graph topology operations
//!
//! Default-chain synthesis for unwired graphs and deterministic
//! processing-order resolution.

mod autowire;
mod order;

pub use autowire::{auto_connect_nodes, DEFAULT_INPUT_PORT, DEFAULT_OUTPUT_PORT};
pub use order::{processing_order, strict_processing_order, OrderError};
