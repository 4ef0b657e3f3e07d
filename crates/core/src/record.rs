// crates/core/src/record.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One flat data item read from a fixture document.
///
/// Field order is preserved as it appeared in the source JSON (serde_json's
/// `preserve_order` feature); output column order is still driven by the
/// entity's field list, never by the record itself. Records are read-only
/// once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Look up a field's raw value by its JSON name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_lookup() {
        let record: Record = serde_json::from_value(json!({"Id": "C001", "Name": "Beach"})).unwrap();
        assert_eq!(record.field("Id"), Some(&json!("C001")));
        assert_eq!(record.field("Missing"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_collect_from_pairs() {
        let record: Record = [
            ("Id".to_string(), json!("L001")),
            ("Name".to_string(), json!("Hue")),
        ]
        .into_iter()
        .collect();
        assert_eq!(record.field("Name"), Some(&json!("Hue")));
    }

    #[test]
    fn test_empty_record() {
        let record = Record::new();
        assert!(record.is_empty());
        assert_eq!(record.field("Id"), None);
    }
}
