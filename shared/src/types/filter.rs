//! Exact-match filter maps for repository queries

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::page::Page;

/// Field name reserved for the pagination window inside a filter map
///
/// Callers of `get`/`count`-style operations supply the window as a
/// two-element `[skip, take]` array under this key; it is never forwarded to
/// the backend as a filter field.
pub const LIMIT_FIELD: &str = "limit";

/// A mapping of field name to exact-match value
///
/// All provided fields combine with logical AND; an empty map means no
/// filtering. Field names are forwarded verbatim to the storage backend and
/// must match its known column/relation names; unknown names are a
/// backend-defined error, not validated here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filters(BTreeMap<String, Value>);

impl Filters {
    /// Create an empty filter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exact-match condition, builder style
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Add an exact-match condition in place
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Remove a condition, returning its value
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Look up a condition value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Check whether any conditions are present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of conditions
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over conditions in field-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(field, value)| (field.as_str(), value))
    }

    /// Extract the pagination window from the reserved `limit` entry
    ///
    /// Removes the entry regardless of shape. Returns `None` when the entry
    /// is absent or is not a two-element `[skip, take]` array of non-negative
    /// integers; callers that require the window treat that as a failed
    /// precondition.
    pub fn take_limit(&mut self) -> Option<Page> {
        let value = self.0.remove(LIMIT_FIELD)?;
        match value {
            Value::Array(parts) if parts.len() == 2 => {
                let skip = parts[0].as_u64()?;
                let take = parts[1].as_u64()?;
                Some(Page::window(skip, take))
            }
            _ => None,
        }
    }
}

impl FromIterator<(String, Value)> for Filters {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_accumulates_conditions() {
        let filters = Filters::new().eq("edificio", "A").eq("nid_interconsulta", 7);
        assert_eq!(filters.len(), 2);
        assert_eq!(filters.get("edificio"), Some(&json!("A")));
        assert_eq!(filters.get("nid_interconsulta"), Some(&json!(7)));
    }

    #[test]
    fn take_limit_extracts_window_and_strips_entry() {
        let mut filters = Filters::new().eq("edificio", "A").eq(LIMIT_FIELD, json!([0, 10]));

        let page = filters.take_limit().unwrap();
        assert_eq!(page, Page::window(0, 10));
        assert_eq!(filters.len(), 1);
        assert!(filters.get(LIMIT_FIELD).is_none());
    }

    #[test]
    fn take_limit_absent_is_none() {
        let mut filters = Filters::new().eq("edificio", "A");
        assert_eq!(filters.take_limit(), None);
        assert_eq!(filters.len(), 1);
    }

    #[test]
    fn take_limit_rejects_malformed_shapes() {
        for malformed in [json!("0,10"), json!([0]), json!([0, 10, 20]), json!([0, -1]), json!({"skip": 0})] {
            let mut filters = Filters::new().eq(LIMIT_FIELD, malformed);
            assert_eq!(filters.take_limit(), None);
            // the malformed entry must still be consumed
            assert!(filters.is_empty());
        }
    }
}
