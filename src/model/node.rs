//! Node and parameter descriptors for the DSP graph.

use serde::{Deserialize, Serialize};

/// A controllable value on a DSP node (a knob, slider, or switch target).
///
/// `min`, `max`, and `value` are optional: a parameter may declare any subset
/// of them. A declared value of `0.0` is still a declared value, so consumers
/// must test presence, never numeric truthiness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Unique identifier for this parameter within its node.
    pub id: String,
    /// Human-readable name displayed in the UI (e.g. "Cutoff Freq").
    pub name: String,
    /// Minimum value, if the parameter declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Maximum value, if the parameter declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Default/current value, if the parameter declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl Parameter {
    /// Creates a parameter with no declared range or value.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            min: None,
            max: None,
            value: None,
        }
    }

    /// Sets the declared range.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Sets the declared default/current value.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

/// A single processing unit in the DSP graph.
///
/// Port lists are ordered; the first entry of each list is the default
/// wiring target when a chain is synthesized. The parameter list order is
/// the scan order for UI binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DspNode {
    /// Unique identifier for this node within the graph.
    pub id: String,
    /// Named input port labels, in declaration order.
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Named output port labels, in declaration order.
    #[serde(default)]
    pub outputs: Vec<String>,
    /// Parameter descriptors, in declaration order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl DspNode {
    /// Creates a node with no ports and no parameters.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Sets the port labels.
    pub fn with_ports(
        mut self,
        inputs: impl IntoIterator<Item = impl Into<String>>,
        outputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.inputs = inputs.into_iter().map(Into::into).collect();
        self.outputs = outputs.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a parameter descriptor.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}
