//! Plugin Forge core
//!
//! Assembles and normalizes a plugin project's DSP graph and its bound
//! UI controls. The external template subsystem builds a [`PluginProject`],
//! hands it to [`enhance_template_project`], and passes the result on to the
//! UI and export layers; the execution/preview engine calls
//! [`processing_order`] once a graph is finalized.
//!
//! Everything in this crate is a pure, synchronous function over owned data:
//! no I/O, no shared mutable state, no in-place mutation of inputs.

pub mod binding;
pub mod enhance;
pub mod graph;
pub mod idgen;
pub mod model;

pub use binding::{bind_components_to_parameters, normalize_name};
pub use enhance::enhance_template_project;
pub use graph::{
    auto_connect_nodes, processing_order, strict_processing_order, OrderError,
    DEFAULT_INPUT_PORT, DEFAULT_OUTPUT_PORT,
};
pub use idgen::{ConnectionIdGen, CountingIdGen, IdFn, SerialIdGen};
pub use model::{DspConnection, DspGraph, DspNode, Parameter, PluginProject, UiComponent};
