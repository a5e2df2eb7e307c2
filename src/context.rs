use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use serde::{Deserialize, Serialize};


/// Source of placeholder values.
///
/// A key with no value in the context renders as empty text.
pub trait Context {
    fn value(&self, key: &str) -> Option<Cow<'_, str>>;
}

pub type ContextRef<'a> = &'a dyn Context;


impl<K, V, S> Context for HashMap<K, V, S>
where K: Borrow<str> + Hash + Eq, V: AsRef<str>, S: BuildHasher {
    fn value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|value| Cow::Borrowed(value.as_ref()))
    }
}

impl<K, V> Context for BTreeMap<K, V>
where K: Borrow<str> + Ord, V: AsRef<str> {
    fn value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|value| Cow::Borrowed(value.as_ref()))
    }
}


/// Flat, ordered key to value mapping handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataContext {
    entries: BTreeMap<String, String>
}

impl DataContext {
    pub fn new() -> Self {
        DataContext { entries: BTreeMap::new() }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Context for DataContext {
    fn value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(Cow::Borrowed)
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for DataContext {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DataContext {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut context = DataContext::new();
        context.extend(iter);
        context
    }
}

impl IntoIterator for DataContext {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
