//! `Match` — The matcher contract
//!
//! Every matcher implements one predicate over the erased [`Value`] type
//! plus the signature hook the rendering protocol needs. The contract is
//! intentionally non-generic: matchers operate on erased data, so the same
//! matcher composes with any other regardless of what value family it
//! understands.
//!
//! # Recognized failures are not errors
//!
//! `matches` returns `Result<bool, MatchFailure>`, and [`MatchFailure`] is
//! a closed enum: every variant means "this value does not match" and is
//! swallowed into `false` at the comparison boundary. A genuine defect in a
//! matcher implementation is a panic, which propagates — it must crash the
//! test loudly instead of hiding as a mismatch.

use crate::{CallRepr, MatchFailure, Value};

/// The capability every matcher implements.
///
/// # Example
///
/// ```
/// use akin::{CallRepr, Match, MatchFailure, Pattern, Value};
///
/// struct IsEven;
///
/// impl Match for IsEven {
///     fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
///         let n = value.as_int().ok_or(MatchFailure::TypeMismatch)?;
///         Ok(n % 2 == 0)
///     }
///
///     fn signature(&self) -> CallRepr {
///         CallRepr::new("IsEven")
///     }
/// }
///
/// let pattern = Pattern::new(IsEven);
/// assert!(pattern == Value::from(4));
/// assert!(pattern != Value::from(3));
/// // A non-int value is a recognized failure, reported as "not equal".
/// assert!(pattern != Value::from("four"));
/// ```
pub trait Match {
    /// The domain predicate: does `value` satisfy this matcher?
    ///
    /// Recognized failures ([`MatchFailure`]) signal "does not match" and
    /// are caught by the caller, never propagated.
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure>;

    /// The declared constructor-parameter record.
    ///
    /// Drives the generic rendering of the not-equal form; see
    /// [`CallRepr`].
    fn signature(&self) -> CallRepr;

    /// The structural (not-equal) rendering of this matcher.
    ///
    /// Defaults to the reconstructed constructor call. Combinators
    /// override this with their operator-joined form, and the literal
    /// leaf renders as the bare value.
    fn render_unmatched(&self) -> String {
        self.signature().to_string()
    }
}

// Blanket implementation for boxed matchers
impl Match for Box<dyn Match> {
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
        (**self).matches(value)
    }

    fn signature(&self) -> CallRepr {
        (**self).signature()
    }

    fn render_unmatched(&self) -> String {
        (**self).render_unmatched()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysTrue;

    impl Match for AlwaysTrue {
        fn matches(&self, _value: &Value) -> Result<bool, MatchFailure> {
            Ok(true)
        }

        fn signature(&self) -> CallRepr {
            CallRepr::new("AlwaysTrue")
        }
    }

    #[test]
    fn test_default_rendering_is_constructor_call() {
        assert_eq!(AlwaysTrue.render_unmatched(), "AlwaysTrue()");
    }

    #[test]
    fn test_boxed_matcher_delegates() {
        let boxed: Box<dyn Match> = Box::new(AlwaysTrue);
        assert_eq!(boxed.matches(&Value::Null), Ok(true));
        assert_eq!(boxed.render_unmatched(), "AlwaysTrue()");
    }
}
