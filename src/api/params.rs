use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WgApiError};

/// Query parameter value, stringified the way the API expects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    /// Sent as `1` / `0`
    Bool(bool),
    /// Sent comma-joined
    List(Vec<String>),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => f.write_str(if *b { "1" } else { "0" }),
            Self::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_int_param {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_int_param!(i8, i16, i32, i64, u8, u16, u32);

// Account and clan ids can exceed i64
impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Str(value.to_string())
    }
}

impl<T: ToString> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&[T]> for ParamValue {
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().map(ToString::to_string).collect())
    }
}

/// A single key/value query parameter. Keys are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub key: String,
    pub value: ParamValue,
}

impl Parameter {
    pub fn new(key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<ParamValue>> From<(K, V)> for Parameter {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Raw `key=value` adapter for boundaries such as the command line.
/// Everything after the first `=` is kept as a string value.
impl FromStr for Parameter {
    type Err = WgApiError;

    fn from_str(raw: &str) -> Result<Self> {
        let (key, value) = raw.split_once('=').ok_or_else(|| {
            WgApiError::configuration(format!("Parameter must look like key=value: {raw}"))
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(WgApiError::configuration(format!(
                "Parameter key is empty: {raw}"
            )));
        }
        Ok(Self::new(key, value.trim()))
    }
}

/// Parameters with override-by-key semantics.
///
/// Position is fixed by the first insertion of a key, so serialization is
/// deterministic; a later write only replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<Parameter>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, parameter: Parameter) {
        match self.entries.iter_mut().find(|p| p.key == parameter.key) {
            Some(existing) => existing.value = parameter.value,
            None => self.entries.push(parameter),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|p| p.key == key).map(|p| &p.value)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|p| p.key == key)?;
        Some(self.entries.remove(index).value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.entries.iter()
    }

    /// Stringified `(key, value)` pairs in serialization order
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|p| (p.key.clone(), p.value.to_string()))
            .collect()
    }
}

impl<P: Into<Parameter>> FromIterator<P> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<P: Into<Parameter>> Extend<P> for ParameterSet {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for parameter in iter {
            self.set(parameter.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_stringification() {
        assert_eq!(ParamValue::from(true).to_string(), "1");
        assert_eq!(ParamValue::from(false).to_string(), "0");
        assert_eq!(ParamValue::from(-42i64).to_string(), "-42");
        assert_eq!(ParamValue::from("Ivan").to_string(), "Ivan");
        assert_eq!(ParamValue::from(vec![1, 2, 3]).to_string(), "1,2,3");
        assert_eq!(ParamValue::from(Vec::<String>::new()).to_string(), "");
    }

    #[test]
    fn test_last_write_wins() {
        let mut set = ParameterSet::new();
        set.set(Parameter::new("a", 1));
        set.set(Parameter::new("b", "x"));
        set.set(Parameter::new("a", 2));

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("a"), Some(&ParamValue::Int(2)));
        assert_eq!(
            set.pairs(),
            vec![
                ("a".to_string(), "2".to_string()),
                ("b".to_string(), "x".to_string())
            ]
        );
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let set: ParameterSet = [("limit", 1), ("LIMIT", 2)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut set: ParameterSet = [("a", 1)].into_iter().collect();
        assert_eq!(set.remove("a"), Some(ParamValue::Int(1)));
        assert!(set.is_empty());
        assert_eq!(set.remove("a"), None);
    }

    #[test]
    fn test_parse_raw_parameter() {
        let p: Parameter = "search=Ivan".parse().unwrap();
        assert_eq!(p, Parameter::new("search", "Ivan"));

        let p: Parameter = "fields=a=b".parse().unwrap();
        assert_eq!(p.value, ParamValue::Str("a=b".to_string()));

        assert!("no_separator".parse::<Parameter>().is_err());
        assert!("=value".parse::<Parameter>().is_err());
    }
}
