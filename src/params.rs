//! # Named Parameters
//!
//! A handler call arrives as a positional argument list. [`NamedParameters`] pairs those
//! arguments with the handler's declared parameter names so templates can refer to them
//! by name.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;

/// Insertion-ordered mapping from parameter name to the argument supplied at call time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NamedParameters {
    values: IndexMap<String, Value>,
}

impl NamedParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs declared names with actual arguments by position.
    ///
    /// Arity is not checked: names without an argument bind `Null`, surplus arguments
    /// are dropped.
    pub fn bind<N, A>(names: N, args: A) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        A: IntoIterator<Item = Value>,
    {
        let mut args = args.into_iter();
        let values = names
            .into_iter()
            .map(|name| (name.into(), args.next().unwrap_or(Value::Null)))
            .collect();
        Self { values }
    }

    /// Builder-style insert, mostly for tests and hand-built invocations.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// The first pair in iteration order.
    pub fn first(&self) -> Option<(&str, &Value)> {
        self.values.first().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Text form of an argument value; `Null` counts as undefined.
    pub fn text(value: &Value) -> Option<Cow<'_, str>> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for NamedParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bind_pairs_by_position() {
        let params = NamedParameters::bind(["id", "qty"], vec![json!("5"), json!(3)]);
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("id", &json!("5")), ("qty", &json!(3))]);
    }

    #[test]
    fn test_bind_missing_argument_is_null() {
        let params = NamedParameters::bind(["id", "qty"], vec![json!("5")]);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("qty"), Some(&Value::Null));
    }

    #[test]
    fn test_bind_surplus_arguments_are_dropped() {
        let params = NamedParameters::bind(["id"], vec![json!(1), json!(2), json!(3)]);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id"), Some(&json!(1)));
    }

    #[test]
    fn test_first_follows_insertion_order() {
        let params = NamedParameters::new().with("zeta", "z").with("alpha", "a");
        assert_eq!(params.first(), Some(("zeta", &json!("z"))));
    }

    #[test]
    fn test_text_rendering() {
        assert_eq!(NamedParameters::text(&json!("abc")).as_deref(), Some("abc"));
        assert_eq!(NamedParameters::text(&json!(42)).as_deref(), Some("42"));
        assert_eq!(NamedParameters::text(&json!(true)).as_deref(), Some("true"));
        assert_eq!(NamedParameters::text(&Value::Null), None);
    }
}
