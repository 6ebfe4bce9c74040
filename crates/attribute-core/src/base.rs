//! Shared implementation for simple (single column) attributes.
//!
//! Concrete attribute types hold a [`BaseSimple`] and build on its defaults:
//! they extend [`BaseSimple::setting_names`] with their own keys and post-process
//! [`BaseSimple::field_definition`].

use crate::field::FieldDefinition;
use crate::identifier::Identifier;
use crate::settings::SettingNames;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Setting keys every attribute understands.
pub const BASE_SETTING_NAMES: &[&str] = &[
    "id",
    "pid",
    "sorting",
    "tstamp",
    "name",
    "description",
    "type",
    "colname",
    "isunique",
];

/// Settings copied into the `eval` section: (setting key, eval key).
const EVAL_SETTINGS: &[(&str, &str)] = &[
    ("mandatory", "mandatory"),
    ("isunique", "unique"),
    ("tl_class", "tl_class"),
    ("maxlength", "maxlength"),
];

/// Settings raising a top-level flag: (setting key, field definition key).
const FLAG_SETTINGS: &[(&str, &str)] = &[
    ("filterable", "filter"),
    ("searchable", "search"),
    ("sortable", "sorting"),
];

/// Configured metadata of one attribute instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeMeta {
    /// Backing column
    pub col_name: Identifier,

    /// Human readable name, used as form label
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Per-instance setting values keyed by setting name
    #[serde(default)]
    pub settings: Map<String, Value>,
}

impl AttributeMeta {
    pub fn new(col_name: Identifier) -> Self {
        Self {
            col_name,
            name: String::new(),
            description: String::new(),
            settings: Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.name = name.into();
        self.description = description.into();
        self
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// A setting's value, or `None` when unset, null, false, zero or empty.
    pub fn enabled_setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key).filter(|v| is_enabled(v))
    }
}

fn is_enabled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Generic defaults of a single column attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseSimple {
    meta: AttributeMeta,
}

impl BaseSimple {
    pub fn new(meta: AttributeMeta) -> Self {
        Self { meta }
    }

    pub fn col_name(&self) -> &Identifier {
        &self.meta.col_name
    }

    pub fn setting_names(&self) -> SettingNames {
        BASE_SETTING_NAMES.iter().copied().collect()
    }

    /// Default field definition.
    ///
    /// `setting_names` is the full list of the concrete attribute type; only
    /// settings it recognizes are carried into the definition. `overrides` are
    /// merged last.
    pub fn field_definition(
        &self,
        setting_names: &SettingNames,
        overrides: &Map<String, Value>,
    ) -> FieldDefinition {
        let mut def = FieldDefinition::new();
        def.set(
            "label",
            vec![self.meta.name.clone(), self.meta.description.clone()],
        );
        def.set(crate::field::EVAL, Map::new());

        for (setting, eval_key) in EVAL_SETTINGS {
            if !setting_names.contains(setting) {
                continue;
            }
            if let Some(value) = self.meta.enabled_setting(setting) {
                def.set_eval(*eval_key, value.clone());
            }
        }

        for (setting, key) in FLAG_SETTINGS {
            if setting_names.contains(setting) && self.meta.enabled_setting(setting).is_some() {
                def.set(*key, true);
            }
        }

        // sort flag is a mode number, not a boolean
        if setting_names.contains("flag") {
            if let Some(flag) = self.meta.enabled_setting("flag") {
                def.set("flag", flag.clone());
            }
        }

        def.merge(overrides);
        def
    }
}
