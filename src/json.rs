use std::borrow::Cow;
use crate::{Context, DataContext, Error, Result};
pub use serde_json::Value as JsonValue;


impl Context for JsonValue {
    fn value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).and_then(scalar_text)
    }
}

fn scalar_text(value: &JsonValue) -> Option<Cow<'_, str>> {
    match value {
        JsonValue::String(s) => Some(Cow::Borrowed(s.as_str())),
        JsonValue::Number(n) => Some(Cow::Owned(n.to_string())),
        JsonValue::Bool(b) => Some(Cow::Owned(b.to_string())),
        JsonValue::Null => Some(Cow::Borrowed("")),
        _ => None
    }
}


impl DataContext {
    /// Flattens a JSON object into placeholder keys.
    ///
    /// Nested objects join their keys with `_`, array items are numbered
    /// from 1: `{"coadquirentes": [{"nome": "Ana"}]}` gives
    /// `coadquirentes1_nome`.
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Object(obj) => {
                let mut context = DataContext::new();
                for (key, value) in obj {
                    flatten(&mut context, key, value);
                }
                Ok(context)
            },
            other => Err(Error::InvalidContext(
                format!("expected a JSON object, found {}", kind(other))
            ))
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value = serde_json::from_str::<JsonValue>(text)?;
        Self::from_json(&value)
    }
}

fn flatten(context: &mut DataContext, key: &str, value: &JsonValue) {
    match value {
        JsonValue::Object(obj) => {
            for (field, value) in obj {
                flatten(context, &format!("{}_{}", key, field), value);
            }
        },
        JsonValue::Array(seq) => {
            for (index, value) in seq.iter().enumerate() {
                flatten(context, &format!("{}{}", key, index + 1), value);
            }
        },
        scalar => {
            if let Some(text) = scalar_text(scalar) {
                context.insert(key, text);
            }
        }
    }
}

fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object"
    }
}
