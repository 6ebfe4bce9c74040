//! Admin-form field definitions.
//!
//! A field definition is an open JSON object consumed by the host's form
//! renderer. Well-known keys are `label`, `inputType` and the nested `eval`
//! object holding validation options such as `eval.rgxp`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const INPUT_TYPE: &str = "inputType";
pub const EVAL: &str = "eval";

/// Rendering and validation descriptor of an attribute in the admin form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldDefinition(Map<String, Value>);

impl FieldDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn input_type(&self) -> Option<&str> {
        self.0.get(INPUT_TYPE).and_then(Value::as_str)
    }

    pub fn set_input_type(&mut self, input_type: &str) {
        self.set(INPUT_TYPE, input_type);
    }

    /// Read a key of the nested `eval` object.
    pub fn eval(&self, key: &str) -> Option<&Value> {
        self.0.get(EVAL).and_then(|eval| eval.get(key))
    }

    /// Set a key of the nested `eval` object, replacing `eval` if it is not an object.
    pub fn set_eval(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let eval = self
            .0
            .entry(EVAL)
            .or_insert_with(|| Value::Object(Map::new()));
        if !eval.is_object() {
            *eval = Value::Object(Map::new());
        }
        if let Value::Object(map) = eval {
            map.insert(key.into(), value.into());
        }
    }

    /// Merge `overrides` over this definition.
    ///
    /// Nested objects merge key by key; any other value replaces the existing one.
    pub fn merge(&mut self, overrides: &Map<String, Value>) {
        merge_objects(&mut self.0, overrides);
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for FieldDefinition {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn merge_objects(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        match (target.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_objects(existing, incoming)
            }
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}
