//! Sequence matchers

use akin::{
    CallRepr, ConstructError, Descriptor, IntoMatcherRef, Match, MatchFailure, MatcherRef,
    Pattern, Value,
};

/// Membership: the value contains the given item.
///
/// - a list contains an equal element,
/// - a string contains a substring,
/// - a map contains a key.
///
/// Anything without elements is a domain failure — recognized, and
/// reported as "not equal" at the comparison boundary.
///
/// # Example
///
/// ```
/// use akin::{Pattern, Value};
/// use akin_matchers::Contains;
///
/// let has_one = Pattern::from(Contains::new(1));
/// assert!(has_one == Value::list([1, 2, 3]));
/// assert!(has_one != Value::list([2, 3]));
/// // An int has no elements: recognized failure, not a crash.
/// assert!(has_one != Value::from(7));
/// ```
pub struct Contains {
    item: Value,
}

impl Contains {
    /// Match containers holding `item`.
    pub fn new(item: impl Into<Value>) -> Self {
        Self { item: item.into() }
    }
}

impl Match for Contains {
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
        match value {
            Value::List(items) => Ok(items.contains(&self.item)),
            Value::Str(s) => match self.item.as_str() {
                Some(needle) => Ok(s.contains(needle)),
                None => Err(MatchFailure::OutOfDomain {
                    reason: format!(
                        "cannot search a string for {}",
                        self.item.type_name()
                    ),
                }),
            },
            Value::Map(entries) => match self.item.as_str() {
                Some(key) => Ok(entries.contains_key(key)),
                None => Err(MatchFailure::OutOfDomain {
                    reason: format!("map keys are strings, got {}", self.item.type_name()),
                }),
            },
            other => Err(MatchFailure::OutOfDomain {
                reason: format!("{} has no elements", other.type_name()),
            }),
        }
    }

    fn signature(&self) -> CallRepr {
        CallRepr::new("Contains").arg(&self.item)
    }
}

/// Type-level handle for [`Contains`] — always fails construction.
pub const CONTAINS: Descriptor = Descriptor::new("Contains", || {
    Err(ConstructError::MissingArguments { matcher: "Contains" })
});

/// Matches list values, optionally with a fixed length and/or per-element
/// matcher references.
///
/// Elements mix literals and matchers through
/// [`IntoMatcherRef`](akin::IntoMatcherRef):
///
/// ```
/// use akin::{IntoMatcherRef, Pattern, Value, ANYTHING};
/// use akin_matchers::IsList;
///
/// let triple = Pattern::from(IsList::new().items([
///     ANYTHING.into_matcher_ref(),
///     Value::from(2).into_matcher_ref(),
///     Value::from(3).into_matcher_ref(),
/// ]));
/// assert!(triple == Value::list([1, 2, 3]));
/// assert!(triple != Value::list([1, 2, 4]));
/// ```
#[derive(Default)]
pub struct IsList {
    length: Option<usize>,
    items: Option<Vec<MatcherRef>>,
}

impl IsList {
    /// Match any list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require exactly `n` elements.
    #[must_use]
    pub fn length(mut self, n: usize) -> Self {
        self.length = Some(n);
        self
    }

    /// Require the elements to match the given references, in order.
    #[must_use]
    pub fn items<R: IntoMatcherRef>(mut self, items: impl IntoIterator<Item = R>) -> Self {
        self.items = Some(items.into_iter().map(IntoMatcherRef::into_matcher_ref).collect());
        self
    }
}

impl Match for IsList {
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
        let actual = value.as_list().ok_or(MatchFailure::TypeMismatch)?;

        if self.length.is_some_and(|n| actual.len() != n) {
            return Ok(false);
        }

        if let Some(expected) = &self.items {
            if actual.len() != expected.len() {
                return Ok(false);
            }
            return Ok(expected
                .iter()
                .zip(actual)
                .all(|(child, v)| child.compare_eq(v)));
        }

        Ok(true)
    }

    fn signature(&self) -> CallRepr {
        let mut repr = CallRepr::new("IsList");
        if let Some(items) = &self.items {
            repr = repr.args(items.iter());
        }
        repr.kwarg("length", &self.length, &None)
    }
}

/// Type-level handle for [`IsList`].
pub const IS_LIST: Descriptor = Descriptor::new("IsList", || Ok(Pattern::new(IsList::new())));

#[cfg(test)]
mod tests {
    use super::*;
    use akin::IsOneOf;

    #[test]
    fn test_contains_list() {
        let m = Contains::new(1);
        assert_eq!(m.matches(&Value::list([1, 2, 3])), Ok(true));
        assert_eq!(m.matches(&Value::list([2, 3])), Ok(false));
        assert_eq!(m.matches(&Value::list(Vec::<Value>::new())), Ok(false));
    }

    #[test]
    fn test_contains_substring() {
        let m = Contains::new("err");
        assert_eq!(m.matches(&"an error occurred".into()), Ok(true));
        assert_eq!(m.matches(&"all good".into()), Ok(false));
    }

    #[test]
    fn test_contains_map_key() {
        let m = Contains::new("a");
        assert_eq!(m.matches(&Value::map([("a", 1)])), Ok(true));
        assert_eq!(m.matches(&Value::map([("b", 1)])), Ok(false));
    }

    #[test]
    fn test_contains_unsized_value_is_domain_failure() {
        let m = Contains::new(1);
        assert!(matches!(
            m.matches(&Value::Int(7)),
            Err(MatchFailure::OutOfDomain { .. })
        ));
        // Substring search needs a string needle.
        let m = Contains::new(1);
        assert!(matches!(
            m.matches(&"123".into()),
            Err(MatchFailure::OutOfDomain { .. })
        ));
    }

    #[test]
    fn test_is_list_length() {
        let m = IsList::new().length(2);
        assert_eq!(m.matches(&Value::list([1, 2])), Ok(true));
        assert_eq!(m.matches(&Value::list([1])), Ok(false));
        assert_eq!(m.matches(&Value::Int(1)), Err(MatchFailure::TypeMismatch));
    }

    #[test]
    fn test_is_list_items_mix_literals_and_matchers() {
        let m = IsList::new().items([
            IsOneOf::new([1, 2]).into_matcher_ref(),
            Value::from(9).into_matcher_ref(),
        ]);
        assert_eq!(m.matches(&Value::list([2, 9])), Ok(true));
        assert_eq!(m.matches(&Value::list([3, 9])), Ok(false));
        assert_eq!(m.matches(&Value::list([2, 9, 9])), Ok(false));
    }

    #[test]
    fn test_rendering() {
        assert_eq!(IsList::new().signature().to_string(), "IsList()");
        assert_eq!(
            IsList::new().length(3).signature().to_string(),
            "IsList(length=3)"
        );
        let m = IsList::new().items([Value::from(1), Value::from(2)]);
        assert_eq!(m.signature().to_string(), "IsList(1, 2)");
        assert_eq!(Contains::new("x").signature().to_string(), "Contains(\"x\")");
    }

    #[test]
    fn test_descriptors() {
        assert!(Value::list([1]) == IS_LIST);
        assert!(!(Value::Int(1) == IS_LIST));
        assert!(Value::list([1]) != CONTAINS);
    }
}
