//! UI-to-parameter binding
//!
//! Resolves each widget's declared logical parameter name to a concrete
//! parameter on some graph node, using loose string matching.

mod binder;
mod normalize;

pub use binder::bind_components_to_parameters;
pub use normalize::normalize_name;
