//! Data model
//!
//! The in-memory shapes exchanged with the template-construction and
//! execution subsystems. All types are plain serde-friendly values; the
//! core never mutates them in place.

mod connection;
mod graph;
mod node;
mod project;

pub use connection::DspConnection;
pub use graph::DspGraph;
pub use node::{DspNode, Parameter};
pub use project::{PluginProject, UiComponent};
