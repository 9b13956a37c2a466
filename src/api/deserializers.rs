use serde::de::{self, Visitor};
use serde::Deserializer;
use std::fmt;

/// Deserialize a field that can be a string, a number, a boolean or null into a `String`.
///
/// The API is loose about scalar types in error bodies: `value` is often a
/// number and `field` is null for method-level errors. Null becomes `""`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientString;

    impl<'de> Visitor<'de> for LenientString {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("string, number, boolean or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(LenientString)
}

/// Deserialize an integer that may arrive quoted, e.g. `"count": "12"`. Null becomes 0.
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientU64;

    impl<'de> Visitor<'de> for LenientU64 {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("non-negative integer, numeric string or null")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u64::try_from(value).map_err(|_| E::custom(format!("negative count: {value}")))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("not a number: {value}")))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(0)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(0)
        }
    }

    deserializer.deserialize_any(LenientU64)
}

/// Deserialize a signed integer that may arrive quoted. Null becomes 0.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientI64;

    impl<'de> Visitor<'de> for LenientI64 {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("integer, numeric string or null")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(|_| E::custom(format!("integer out of range: {value}")))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("not a number: {value}")))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(0)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(0)
        }
    }

    deserializer.deserialize_any(LenientI64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json;

    #[derive(Debug, Deserialize)]
    struct Container {
        #[serde(default, deserialize_with = "lenient_string")]
        value: String,
        #[serde(default, deserialize_with = "lenient_u64")]
        count: u64,
        #[serde(default, deserialize_with = "lenient_i64")]
        code: i64,
    }

    #[test]
    fn test_lenient_string_accepts_scalars() {
        let c: Container = serde_json::from_str(r#"{"value": 1001}"#).unwrap();
        assert_eq!(c.value, "1001");

        let c: Container = serde_json::from_str(r#"{"value": "abc"}"#).unwrap();
        assert_eq!(c.value, "abc");

        let c: Container = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(c.value, "");

        let c: Container = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(c.value, "");
    }

    #[test]
    fn test_lenient_u64() {
        let c: Container = serde_json::from_str(r#"{"count": "12"}"#).unwrap();
        assert_eq!(c.count, 12);

        let c: Container = serde_json::from_str(r#"{"count": null}"#).unwrap();
        assert_eq!(c.count, 0);

        assert!(serde_json::from_str::<Container>(r#"{"count": -1}"#).is_err());
        assert!(serde_json::from_str::<Container>(r#"{"count": [1]}"#).is_err());
    }

    #[test]
    fn test_lenient_i64() {
        let c: Container = serde_json::from_str(r#"{"code": -3}"#).unwrap();
        assert_eq!(c.code, -3);

        let c: Container = serde_json::from_str(r#"{"code": "402"}"#).unwrap();
        assert_eq!(c.code, 402);

        let c: Container = serde_json::from_str(r#"{"code": null}"#).unwrap();
        assert_eq!(c.code, 0);

        assert!(serde_json::from_str::<Container>(r#"{"code": "x"}"#).is_err());
    }
}
