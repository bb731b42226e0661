// Ids GraphQL `ID`: llegan como string o como entero según el servicio

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Id numérico aceptando `1` o `"1"`
pub fn int_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| serde::de::Error::custom(format!("id inválido: {}", n))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("id inválido: {:?}", s))),
        other => Err(serde::de::Error::custom(format!("id inválido: {}", other))),
    }
}

/// Como `int_id` pero opcional (`null` o ausente → None)
pub fn opt_int_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapped(#[serde(deserialize_with = "int_id")] i64);

    Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(id)| id))
}

/// Id textual aceptando `"abc"` o `42`
pub fn string_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("id inválido: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(deserialize_with = "int_id")]
        id: i64,
        #[serde(default, deserialize_with = "opt_int_id")]
        parent: Option<i64>,
    }

    #[test]
    fn numeric_ids_accept_strings_and_numbers() {
        let a: Row = serde_json::from_str(r#"{"id":"7","parent":3}"#).unwrap();
        assert_eq!((a.id, a.parent), (7, Some(3)));
        let b: Row = serde_json::from_str(r#"{"id":7,"parent":null}"#).unwrap();
        assert_eq!((b.id, b.parent), (7, None));
        let c: Row = serde_json::from_str(r#"{"id":"8"}"#).unwrap();
        assert_eq!(c.parent, None);
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(serde_json::from_str::<Row>(r#"{"id":"x1"}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"id":true}"#).is_err());
    }
}
