//! Keyed handle values.

use serde::{Deserialize, Serialize};

/// Mapping from semantic key to handle value, in declared key order.
///
/// Keys are unique. Iteration yields keys in the order they were first
/// inserted, which is the order reconciliation binds sorted values to.
///
/// Serializes as a list of `[key, value]` pairs so the declared order
/// survives formats with unordered maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(String, f64)>", into = "Vec<(String, f64)>")]
pub struct SliderValues {
    entries: Vec<(String, f64)>,
}

impl SliderValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or update a key. Updating keeps the key's declared position.
    /// Returns the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> Option<f64> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => Some(std::mem::replace(&mut entry.1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    pub fn remove(&mut self, key: &str) -> Option<f64> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in declared order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in declared (not sorted) order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Values in ascending order.
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self.values().collect();
        values.sort_by(f64::total_cmp);
        values
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for SliderValues {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut values = SliderValues::new();
        for (key, value) in iter {
            values.insert(key, value);
        }
        values
    }
}

impl From<Vec<(String, f64)>> for SliderValues {
    fn from(entries: Vec<(String, f64)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<SliderValues> for Vec<(String, f64)> {
    fn from(values: SliderValues) -> Self {
        values.entries
    }
}
