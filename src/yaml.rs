use std::borrow::Cow;
use crate::Context;
pub use serde_yaml::Value as YamlValue;


impl Context for YamlValue {
    fn value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).and_then(scalar_text)
    }
}

fn scalar_text(value: &YamlValue) -> Option<Cow<'_, str>> {
    match value {
        YamlValue::String(s) => Some(Cow::Borrowed(s.as_str())),
        YamlValue::Number(n) => Some(Cow::Owned(n.to_string())),
        YamlValue::Bool(b) => Some(Cow::Owned(b.to_string())),
        YamlValue::Null => Some(Cow::Borrowed("")),
        YamlValue::Tagged(tagged) => scalar_text(&tagged.value),
        _ => None
    }
}
