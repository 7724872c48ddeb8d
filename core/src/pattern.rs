//! `Pattern` — A matcher instance with capture state
//!
//! `Pattern` wraps a [`Match`] implementor together with the two pieces of
//! per-comparison state the representation protocol needs: the last
//! compared value and the last recorded outcome. The equality operators on
//! `Pattern` are the single entry point test assertions use.
//!
//! # Sharing and threads
//!
//! Clones are cheap and share capture state — a combinator holding a child
//! pattern observes the same captures as the binding the test kept. The
//! shared state is `Rc`/`Cell` based, so a `Pattern` is `!Send + !Sync` by
//! construction: the "one matcher instance per comparison expression within
//! one test" usage rule is enforced by the compiler, and no locking exists
//! to slow down the common path.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::{Match, Value, ValueUnavailable};

/// A matcher instance, comparable against values with `==` and `!=`.
///
/// # Capture
///
/// Every equality invocation overwrites the captured input; the recorded
/// outcome is only written by `==` (see [`Pattern::value`] for why `!=`
/// leaves it alone).
///
/// # Example
///
/// ```
/// use akin::{IsOneOf, Pattern, Value};
///
/// let token = Pattern::new(IsOneOf::new(["alpha", "beta"]));
/// assert!(token == Value::from("beta"));
/// assert_eq!(token.value(), Ok(Value::from("beta")));
/// // After a successful match the pattern renders as the real value,
/// // so failure diffs elsewhere in the assertion read naturally.
/// assert_eq!(token.to_string(), "\"beta\"");
/// ```
///
/// `Pattern` is deliberately not `Send`:
///
/// ```compile_fail
/// fn require_send<T: Send>(_: T) {}
/// require_send(akin::Pattern::new(akin::Anything));
/// ```
pub struct Pattern {
    state: Rc<State>,
}

struct State {
    matcher: Box<dyn Match>,
    captured: RefCell<Option<Value>>,
    outcome: Cell<Option<bool>>,
}

impl Pattern {
    /// Wrap a matcher into a comparable instance.
    pub fn new(matcher: impl Match + 'static) -> Self {
        Self {
            state: Rc::new(State {
                matcher: Box::new(matcher),
                captured: RefCell::new(None),
                outcome: Cell::new(None),
            }),
        }
    }

    /// The equality invocation: capture, evaluate, record, report.
    ///
    /// The value is captured before the predicate runs, so even a matcher
    /// defect that panics leaves the input visible to a debugger. A
    /// recognized failure from the predicate is recorded as "not equal",
    /// never propagated.
    pub fn compare_eq(&self, value: &Value) -> bool {
        *self.state.captured.borrow_mut() = Some(value.clone());
        let was_equal = self.state.matcher.matches(value).unwrap_or(false);
        self.state.outcome.set(Some(was_equal));
        was_equal
    }

    /// The inequality invocation: capture and report, without recording.
    ///
    /// INV: `!=` does not touch the recorded outcome — only the captured
    /// input. A test that follows a successful `==` with a sanity-check
    /// `!=` must not flip the pattern's rendering back to the structural
    /// form and corrupt the diff a later failure would print.
    pub fn compare_ne(&self, value: &Value) -> bool {
        *self.state.captured.borrow_mut() = Some(value.clone());
        !self.state.matcher.matches(value).unwrap_or(false)
    }

    /// The value last successfully compared to this pattern.
    ///
    /// # Errors
    ///
    /// [`ValueUnavailable`] if no comparison has happened yet, or the last
    /// recorded outcome was not a match. This is a usage error and always
    /// surfaces — it is not a matching outcome.
    pub fn value(&self) -> Result<Value, ValueUnavailable> {
        if self.state.outcome.get() == Some(true) {
            if let Some(v) = self.state.captured.borrow().as_ref() {
                return Ok(v.clone());
            }
        }
        Err(ValueUnavailable)
    }

    /// The structural rendering, regardless of capture state.
    ///
    /// Combinators use this for their children: a combinator always shows
    /// its structure, even when a child happens to have matched before.
    #[must_use]
    pub fn render_unmatched(&self) -> String {
        self.state.matcher.render_unmatched()
    }
}

// Clones share capture state (reference semantics) — a child stored in a
// combinator and the original binding are the same instance.
impl Clone for Pattern {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<M: Match + 'static> From<M> for Pattern {
    fn from(matcher: M) -> Self {
        Self::new(matcher)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // If the last recorded outcome was a match, render the real value
        // to aid diffs; otherwise explain what was expected.
        if self.state.outcome.get() == Some(true) {
            if let Some(v) = self.state.captured.borrow().as_ref() {
                return write!(f, "{v}");
            }
        }
        write!(f, "{}", self.state.matcher.render_unmatched())
    }
}

// Test harnesses format the two sides of a failed assertion with `{:?}`.
// Delegating to `Display` keeps that output identical to direct printing —
// one representation path, never two.
impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Implements the comparison boundary for a matcher handle: `PartialEq`
/// against [`Value`] and the common primitive operand types, in both
/// operand orders, with `ne` routed through the inequality path.
macro_rules! impl_comparisons {
    ($matcher:ty) => {
        impl PartialEq<$crate::Value> for $matcher {
            fn eq(&self, other: &$crate::Value) -> bool {
                self.compare_eq(other)
            }

            fn ne(&self, other: &$crate::Value) -> bool {
                self.compare_ne(other)
            }
        }

        impl PartialEq<$matcher> for $crate::Value {
            fn eq(&self, other: &$matcher) -> bool {
                other.compare_eq(self)
            }

            fn ne(&self, other: &$matcher) -> bool {
                other.compare_ne(self)
            }
        }

        crate::pattern::impl_comparisons!(@operand $matcher, bool);
        crate::pattern::impl_comparisons!(@operand $matcher, i64);
        crate::pattern::impl_comparisons!(@operand $matcher, i32);
        crate::pattern::impl_comparisons!(@operand $matcher, f64);
        crate::pattern::impl_comparisons!(@operand $matcher, String);

        impl PartialEq<&str> for $matcher {
            fn eq(&self, other: &&str) -> bool {
                self.compare_eq(&$crate::Value::from(*other))
            }

            fn ne(&self, other: &&str) -> bool {
                self.compare_ne(&$crate::Value::from(*other))
            }
        }

        impl PartialEq<$matcher> for &str {
            fn eq(&self, other: &$matcher) -> bool {
                other.compare_eq(&$crate::Value::from(*self))
            }

            fn ne(&self, other: &$matcher) -> bool {
                other.compare_ne(&$crate::Value::from(*self))
            }
        }
    };
    (@operand $matcher:ty, $operand:ty) => {
        impl PartialEq<$operand> for $matcher {
            fn eq(&self, other: &$operand) -> bool {
                self.compare_eq(&$crate::Value::from(other.clone()))
            }

            fn ne(&self, other: &$operand) -> bool {
                self.compare_ne(&$crate::Value::from(other.clone()))
            }
        }

        impl PartialEq<$matcher> for $operand {
            fn eq(&self, other: &$matcher) -> bool {
                other.compare_eq(&$crate::Value::from(self.clone()))
            }

            fn ne(&self, other: &$matcher) -> bool {
                other.compare_ne(&$crate::Value::from(self.clone()))
            }
        }
    };
}

pub(crate) use impl_comparisons;

impl_comparisons!(Pattern);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CallRepr, MatchFailure};

    struct IsShout;

    impl Match for IsShout {
        fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
            let s = value.as_str().ok_or(MatchFailure::TypeMismatch)?;
            Ok(!s.is_empty() && s == s.to_uppercase())
        }

        fn signature(&self) -> CallRepr {
            CallRepr::new("IsShout")
        }
    }

    #[test]
    fn test_eq_captures_and_records() {
        let p = Pattern::new(IsShout);
        assert!(p == "HEY");
        assert_eq!(p.value(), Ok(Value::from("HEY")));
        assert_eq!(p.to_string(), "\"HEY\"");
    }

    #[test]
    fn test_eq_failure_renders_structure() {
        let p = Pattern::new(IsShout);
        assert!(!(p == "quiet"));
        assert_eq!(p.to_string(), "IsShout()");
        assert_eq!(p.value(), Err(ValueUnavailable));
    }

    #[test]
    fn test_recognized_failure_is_not_equal() {
        let p = Pattern::new(IsShout);
        // Int is a TypeMismatch inside the predicate — swallowed to false.
        assert!(!(p == 1));
        assert!(p != 1);
    }

    #[test]
    fn test_value_unavailable_before_any_comparison() {
        let p = Pattern::new(IsShout);
        assert_eq!(p.value(), Err(ValueUnavailable));
    }

    #[test]
    fn test_ne_does_not_record_outcome() {
        let p = Pattern::new(IsShout);
        assert!(p == "HEY");
        // The sanity-check inequality captures the new input...
        assert!(p != 1);
        // ...but the recorded outcome still says "matched", so rendering
        // follows the captured value. (INV: `!=` never records.)
        assert_eq!(p.state.outcome.get(), Some(true));
        assert_eq!(p.to_string(), "1");
        assert_eq!(p.value(), Ok(Value::from(1)));
    }

    #[test]
    fn test_reinvocation_overwrites_capture() {
        let p = Pattern::new(IsShout);
        assert!(p == "HEY");
        assert!(p == "HO");
        assert_eq!(p.value(), Ok(Value::from("HO")));
    }

    #[test]
    fn test_clones_share_state() {
        let p = Pattern::new(IsShout);
        let q = p.clone();
        assert!(p == "HEY");
        assert_eq!(q.value(), Ok(Value::from("HEY")));
    }

    #[test]
    fn test_symmetry() {
        let p = Pattern::new(IsShout);
        assert!("HEY" == p);
        assert!(p == "HEY");
        assert!(Value::from("HEY") == p);
        assert!(p == Value::from("HEY"));
    }

    #[test]
    fn test_debug_matches_display() {
        let p = Pattern::new(IsShout);
        assert_eq!(format!("{p:?}"), p.to_string());
        assert!(p == "HEY");
        assert_eq!(format!("{p:?}"), p.to_string());
    }
}
