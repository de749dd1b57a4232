//! Wire-level helpers used while decoding a configuration.

use serde::Deserialize;

/// Optional wrapper for a single configuration entry as it appears on the wire.
///
/// - An explicit unit or `null` means the field was not provided.
/// - A plain value means it was provided.
/// - An `Option<T>` (RON `Some(..)`/`None`) passes through.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Maybe<T> {
    Unit(()),
    Value(T),
    Opt(Option<T>),
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Unit(())
    }
}

impl<T> Maybe<T> {
    pub(crate) fn into_option(self) -> Option<T> {
        match self {
            Self::Unit(()) => None,
            Self::Value(v) => Some(v),
            Self::Opt(o) => o,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn null_and_unit_mean_absent() {
        let m: Maybe<Value> = serde_json::from_str("null").unwrap();
        assert!(m.into_option().is_none());
        let m: Maybe<Value> = ron::from_str("()").unwrap();
        assert!(m.into_option().is_none());
        let m: Maybe<Value> = ron::from_str("Some(\"x\")").unwrap();
        assert_eq!(m.into_option(), Some(Value::from("x")));
    }
}
