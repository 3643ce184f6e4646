//! Fuzzy first-match binding of UI widgets to DSP parameters.

use serde_json::Value;
use tracing::trace;

use crate::model::{DspNode, Parameter, UiComponent};

use super::normalize_name;

/// Binds each widget to the first parameter whose name loosely matches the
/// widget's declared `properties["parameter"]` string.
///
/// The scan is linear: nodes in their given order, parameters within each
/// node in their given order, first satisfied predicate wins. This is a
/// deliberate simplicity tradeoff: there is no best-match scoring, and ties
/// are broken purely by iteration order. Callers that need a smarter matcher
/// must add it as a new operation rather than changing this one.
///
/// Widgets with no usable query string, and widgets whose query matches
/// nothing, pass through unchanged.
pub fn bind_components_to_parameters(
    components: &[UiComponent],
    nodes: &[DspNode],
) -> Vec<UiComponent> {
    components
        .iter()
        .map(|component| bind_component(component, nodes))
        .collect()
}

fn bind_component(component: &UiComponent, nodes: &[DspNode]) -> UiComponent {
    let Some(query) = component.parameter_query() else {
        return component.clone();
    };
    // The search string is lowercased verbatim; only declared parameter
    // names go through whitespace normalization.
    let query = query.to_lowercase();

    for node in nodes {
        for parameter in &node.parameters {
            if name_matches(&normalize_name(&parameter.name), &query) {
                trace!(
                    "bind: widget '{}' -> parameter '{}' on node '{}'",
                    component.id, parameter.id, node.id
                );
                return apply_binding(component, parameter);
            }
        }
    }

    trace!("bind: no parameter match for widget '{}'", component.id);
    component.clone()
}

/// Exact equality, or substring containment in either direction.
fn name_matches(candidate: &str, query: &str) -> bool {
    candidate == query || candidate.contains(query) || query.contains(candidate)
}

fn apply_binding(component: &UiComponent, parameter: &Parameter) -> UiComponent {
    let mut bound = component.clone();
    bound.parameter_id = Some(parameter.id.clone());

    // Only attributes the parameter actually declares overwrite the widget's
    // own values. A declared 0.0 still counts as declared.
    if let Some(min) = parameter.min {
        bound.properties.insert("min".to_string(), Value::from(min));
    }
    if let Some(max) = parameter.max {
        bound.properties.insert("max".to_string(), Value::from(max));
    }
    if let Some(value) = parameter.value {
        bound
            .properties
            .insert("value".to_string(), Value::from(value));
    }

    bound
}
