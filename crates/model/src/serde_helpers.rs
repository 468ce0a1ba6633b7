use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default, so `"items": null` reads as an empty list.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Holder {
        #[serde(deserialize_with = "null_as_default")]
        items: Vec<String>,
    }

    #[test]
    fn test_null_reads_as_default() {
        let holder: Holder = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(holder.items.is_empty());
    }

    #[test]
    fn test_missing_reads_as_default() {
        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.items.is_empty());
    }

    #[test]
    fn test_values_pass_through() {
        let holder: Holder = serde_json::from_str(r#"{"items": ["a", "b"]}"#).unwrap();
        assert_eq!(holder.items, vec!["a", "b"]);
    }
}
