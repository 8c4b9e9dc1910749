use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::Deserializer;

/// Accepts either a sequence of strings (JSON seeds, drafts) or a single
/// `;`-separated cell (CSV imports).
pub(crate) fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ListVisitor)
}

struct ListVisitor;

impl<'de> Visitor<'de> for ListVisitor {
    type Value = Vec<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of strings or a ';'-separated string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(split_cell(value))
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(vec![value.to_string()])
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(vec![value.to_string()])
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(vec![value.to_string()])
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(vec![value.to_string()])
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Vec::new())
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Vec::new())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<String>()? {
            let value = value.trim();
            if !value.is_empty() {
                values.push(value.to_string());
            }
        }
        Ok(values)
    }
}

fn split_cell(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "list")]
        tags: Vec<String>,
    }

    #[test]
    fn accepts_json_arrays_and_joined_strings() {
        let from_array: Holder =
            serde_json::from_str(r#"{"tags": ["AI", " Fintech ", ""]}"#).expect("array parses");
        assert_eq!(from_array.tags, vec!["AI", "Fintech"]);

        let from_cell: Holder =
            serde_json::from_str(r#"{"tags": "AI; Fintech;;"}"#).expect("cell parses");
        assert_eq!(from_cell.tags, vec!["AI", "Fintech"]);

        let from_null: Holder = serde_json::from_str(r#"{"tags": null}"#).expect("null parses");
        assert!(from_null.tags.is_empty());

        let missing: Holder = serde_json::from_str("{}").expect("missing parses");
        assert!(missing.tags.is_empty());
    }
}
