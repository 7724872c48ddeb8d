//! Mapping matchers

use akin::{CallRepr, Descriptor, IntoMatcherRef, Match, MatchFailure, MatcherRef, Pattern, Value};

/// Matches map values entry by entry.
///
/// Each expected entry pairs a key with a matcher reference, so literals,
/// descriptors, instances and negations mix freely across fields. By
/// default the key sets must coincide exactly; `partial()` tolerates extra
/// keys in the actual value.
///
/// # Example
///
/// ```
/// use akin::{Pattern, Value, ANYTHING};
/// use akin_matchers::{IsDict, IS_POSITIVE};
///
/// let shape = Pattern::from(
///     IsDict::new()
///         .entry("id", IS_POSITIVE)
///         .entry("name", "widget")
///         .entry("meta", ANYTHING),
/// );
/// let actual = Value::map([
///     ("id", Value::from(17)),
///     ("name", Value::from("widget")),
///     ("meta", Value::Null),
/// ]);
/// assert!(shape == actual);
/// ```
#[derive(Default)]
pub struct IsDict {
    entries: Vec<(String, MatcherRef)>,
    partial: bool,
}

impl IsDict {
    /// Match the empty map; add expectations with `entry`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect `key` to be present and its value to match.
    #[must_use]
    pub fn entry(mut self, key: impl Into<String>, value: impl IntoMatcherRef) -> Self {
        self.entries.push((key.into(), value.into_matcher_ref()));
        self
    }

    /// Tolerate keys beyond the expected entries.
    #[must_use]
    pub fn partial(mut self) -> Self {
        self.partial = true;
        self
    }
}

impl Match for IsDict {
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
        let actual = value.as_map().ok_or(MatchFailure::TypeMismatch)?;

        for (key, child) in &self.entries {
            match actual.get(key) {
                Some(v) if child.compare_eq(v) => {}
                _ => return Ok(false),
            }
        }

        if !self.partial {
            // No unexpected keys.
            if !actual
                .keys()
                .all(|k| self.entries.iter().any(|(key, _)| key == k))
            {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn signature(&self) -> CallRepr {
        let mut repr = CallRepr::new("IsDict");
        for (key, child) in &self.entries {
            repr = repr.kwarg_entry(key.as_str(), child);
        }
        repr.kwarg("partial", &self.partial, &false)
    }
}

/// Type-level handle for [`IsDict`]; the zero-argument form matches only
/// the empty map.
pub const IS_DICT: Descriptor = Descriptor::new("IsDict", || Ok(Pattern::new(IsDict::new())));

#[cfg(test)]
mod tests {
    use super::*;
    use akin::IsOneOf;

    fn sample() -> Value {
        Value::map([("a", 1), ("b", 2)])
    }

    #[test]
    fn test_exact_entries() {
        let m = IsDict::new().entry("a", 1).entry("b", 2);
        assert_eq!(m.matches(&sample()), Ok(true));

        let wrong_value = IsDict::new().entry("a", 1).entry("b", 3);
        assert_eq!(wrong_value.matches(&sample()), Ok(false));

        let missing_key = IsDict::new().entry("a", 1);
        assert_eq!(missing_key.matches(&sample()), Ok(false));
    }

    #[test]
    fn test_partial_tolerates_extra_keys() {
        let m = IsDict::new().entry("a", 1).partial();
        assert_eq!(m.matches(&sample()), Ok(true));
    }

    #[test]
    fn test_matcher_valued_entries() {
        let m = IsDict::new()
            .entry("a", IsOneOf::new([1, 10]))
            .entry("b", 2);
        assert_eq!(m.matches(&sample()), Ok(true));
    }

    #[test]
    fn test_non_map_is_type_mismatch() {
        let m = IsDict::new();
        assert_eq!(
            m.matches(&Value::Int(1)),
            Err(MatchFailure::TypeMismatch)
        );
    }

    #[test]
    fn test_zero_argument_form_matches_empty_map() {
        assert!(Value::map(Vec::<(String, Value)>::new()) == IS_DICT);
        assert!(!(sample() == IS_DICT));
    }

    #[test]
    fn test_rendering() {
        let m = IsDict::new().entry("a", 1).entry("b", IsOneOf::new([2]));
        assert_eq!(
            m.signature().to_string(),
            "IsDict(a=1, b=IsOneOf(2))"
        );
        let m = IsDict::new().entry("a", 1).partial();
        assert_eq!(m.signature().to_string(), "IsDict(a=1, partial=true)");
    }
}
