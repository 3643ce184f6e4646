//! Project and UI widget shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DspGraph;

/// A UI widget in the plugin's control surface.
///
/// `properties` is a free-form map owned by the UI layer. The binder reads
/// the `"parameter"` key as the logical parameter name to bind to and may
/// overwrite the `"min"`, `"max"`, and `"value"` keys from the matched
/// parameter; every other key passes through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiComponent {
    /// Unique identifier for this widget.
    pub id: String,
    /// Free-form widget properties.
    #[serde(default)]
    pub properties: Map<String, Value>,
    /// Resolved DSP parameter ID, set by the binder on a successful match.
    #[serde(
        default,
        rename = "parameterId",
        skip_serializing_if = "Option::is_none"
    )]
    pub parameter_id: Option<String>,
}

impl UiComponent {
    /// Creates a widget with no properties.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: Map::new(),
            parameter_id: None,
        }
    }

    /// Sets a property value.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Returns the declared logical parameter name, if usable.
    ///
    /// Missing keys, non-string values, and empty strings all count as
    /// "nothing to bind"; an empty search string would substring-match
    /// every parameter.
    pub fn parameter_query(&self) -> Option<&str> {
        self.properties
            .get("parameter")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }
}

/// A plugin project: the DSP graph plus its UI widgets.
///
/// Constructed by the external template subsystem (without an identifier)
/// and handed to the enhancer; the enhancer returns a new value and never
/// mutates the original.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginProject {
    /// Project identifier, assigned by the persistence layer if at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable project name.
    #[serde(default)]
    pub name: String,
    /// The DSP graph.
    #[serde(default)]
    pub graph: DspGraph,
    /// UI widgets, in display order.
    #[serde(default)]
    pub ui_components: Vec<UiComponent>,
}

impl PluginProject {
    /// Creates an empty project with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            graph: DspGraph::new(),
            ui_components: Vec::new(),
        }
    }
}
