//! Serde helpers for order-preserving string maps.
//!
//! `serde_json` sorts object keys unless built with `preserve_order`, so
//! ordered mappings are held as a `Vec` of pairs and (de)serialized as a
//! JSON object in document order.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Form {
//!     #[serde(with = "crate::domain::assessment::ordered")]
//!     options: Vec<(String, String)>,
//! }
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserializer, Serializer};

/// Serializes pairs as a map, keeping their order.
pub fn serialize<S>(entries: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

/// Deserializes a map into pairs in document order.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PairsVisitor;

    impl<'de> Visitor<'de> for PairsVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of strings to strings")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, String>()? {
                entries.push((key, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(PairsVisitor)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "crate::domain::assessment::ordered")]
        entries: Vec<(String, String)>,
    }

    #[test]
    fn deserialize_keeps_document_order() {
        let json = r#"{"entries": {"C": "third", "A": "first", "B": "second"}}"#;
        let holder: Holder = serde_json::from_str(json).unwrap();

        let keys: Vec<&str> = holder.entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["C", "A", "B"]);
    }

    #[test]
    fn serialize_writes_entries_in_order() {
        let holder = Holder {
            entries: vec![
                ("zeta".to_string(), "1".to_string()),
                ("alpha".to_string(), "2".to_string()),
            ],
        };

        let json = serde_json::to_string(&holder).unwrap();
        assert_eq!(json, r#"{"entries":{"zeta":"1","alpha":"2"}}"#);
    }

    #[test]
    fn deserialize_rejects_non_string_values() {
        let json = r#"{"entries": {"A": 1}}"#;
        assert!(serde_json::from_str::<Holder>(json).is_err());
    }
}
