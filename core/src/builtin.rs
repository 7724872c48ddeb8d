//! Generic leaf matchers the core itself provides
//!
//! Most leaves live in the concrete matcher library; these three are part
//! of the core because the engine needs them: [`Anything`] as the universal
//! wildcard, [`IsOneOf`] for enumerated alternatives, and [`EqualTo`] as
//! the implicit wrapper that embeds plain literals in pattern positions.

use crate::{CallRepr, ConstructError, Descriptor, Lit, Match, MatchFailure, Pattern, Value};

/// Matches any value.
///
/// Rarely useful on its own; shines inside container matchers and
/// combinators where one position is "don't care".
///
/// # Example
///
/// ```
/// use akin::{ANYTHING, Value};
///
/// assert!(Value::from(1) == ANYTHING);
/// assert!(Value::from("foobar") == ANYTHING);
/// assert!(Value::list([1, 2, 3]) == ANYTHING);
/// ```
pub struct Anything;

impl Match for Anything {
    fn matches(&self, _value: &Value) -> Result<bool, MatchFailure> {
        Ok(true)
    }

    fn signature(&self) -> CallRepr {
        CallRepr::new("Anything")
    }
}

/// Type-level handle for [`Anything`].
pub const ANYTHING: Descriptor = Descriptor::new("Anything", || Ok(Pattern::new(Anything)));

/// Exact equality against one literal value.
///
/// This is the leaf [`IntoMatcherRef`](crate::IntoMatcherRef) wraps plain
/// values in, so `AnyOf::new(matcher, 3)` means "matcher, or exactly 3".
/// It renders as the bare literal — in a pattern expression a literal
/// should look like a literal, not like a constructor call.
pub struct EqualTo {
    expected: Value,
}

impl EqualTo {
    /// Match exactly the given value.
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Match for EqualTo {
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
        Ok(*value == self.expected)
    }

    fn signature(&self) -> CallRepr {
        CallRepr::new("EqualTo").arg(&self.expected)
    }

    fn render_unmatched(&self) -> String {
        self.expected.lit()
    }
}

/// Matches when the value equals one of the expected values.
///
/// Most useful combined with the boolean operators.
///
/// # Example
///
/// ```
/// use akin::{IsOneOf, Pattern, Value};
///
/// let p = Pattern::new(IsOneOf::new([1, 2, 3]));
/// assert!(p == Value::from(1));
/// assert!(p != Value::from(4));
/// assert_eq!(p.to_string(), "IsOneOf(1, 2, 3)");
/// ```
pub struct IsOneOf {
    expected: Vec<Value>,
}

impl IsOneOf {
    /// Match any of the given values. At least one value is expected;
    /// an empty set matches nothing.
    pub fn new<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            expected: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl Match for IsOneOf {
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
        Ok(self.expected.iter().any(|e| e == value))
    }

    fn signature(&self) -> CallRepr {
        // Variadic positional parameters: every expected value renders.
        CallRepr::new("IsOneOf").args(self.expected.iter())
    }
}

/// Type-level handle for [`IsOneOf`].
///
/// `IsOneOf` has no zero-argument form, so a bare-descriptor comparison is
/// always "not equal" — kept for uniformity with the other leaves.
pub const IS_ONE_OF: Descriptor = Descriptor::new("IsOneOf", || {
    Err(ConstructError::MissingArguments { matcher: "IsOneOf" })
});
