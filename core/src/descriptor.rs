//! `Descriptor` — Dual-mode dispatch for type-level matcher handles
//!
//! Callers should be able to write either `value == IS_INT` (zero-argument
//! convenience) or `value == Pattern::from(IsInt::new().lt(5))`
//! (parameterized) and have both behave identically when no configuration
//! is needed. A `Descriptor` is the first mode: a named, stateless, `Copy`
//! handle that lazily constructs its matcher with default configuration at
//! comparison time and delegates to the instance contract.
//!
//! [`MatcherRef`] is the sum of the two reference modes. Combinators hold
//! `MatcherRef` children, so descriptors and instances mix freely in one
//! pattern expression.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::pattern::impl_comparisons;
use crate::{ConstructError, EqualTo, Lit, Pattern, Value};

/// A named, stateless handle for a matcher's zero-argument form.
///
/// # Dispatch
///
/// Comparing a descriptor runs its factory and delegates to the fresh
/// instance. A factory error — the matcher requires configuration — is
/// reported as "not equal" at this call site only, so a bare-descriptor
/// comparison against a parameterized matcher fails the assertion instead
/// of crashing the test run. Everywhere else ([`Descriptor::build`]) the
/// construction error propagates.
///
/// # Identity
///
/// Hashing and descriptor-to-descriptor equality go by declared name,
/// which is stable and independent of configuration — descriptors work as
/// set members and map keys.
///
/// # Example
///
/// ```
/// use akin::{Anything, Descriptor, Pattern, Value};
///
/// const ANY: Descriptor = Descriptor::new("Anything", || Ok(Pattern::new(Anything)));
///
/// assert!(Value::from(1) == ANY);
/// assert_eq!(ANY.to_string(), "Anything");
/// ```
#[derive(Clone, Copy)]
pub struct Descriptor {
    name: &'static str,
    factory: Option<fn() -> Result<Pattern, ConstructError>>,
}

impl Descriptor {
    /// Declare a descriptor with the given name and zero-argument factory.
    #[must_use]
    pub const fn new(name: &'static str, factory: fn() -> Result<Pattern, ConstructError>) -> Self {
        Self {
            name,
            factory: Some(factory),
        }
    }

    /// Declare a reserved marker descriptor.
    ///
    /// Reserved descriptors stand for abstract or plumbing supertypes —
    /// the bare contract itself, sentinels used by generic typing glue —
    /// that must never construct. Comparing one always yields "not equal"
    /// without raising, which keeps generic introspection that probes
    /// arbitrary handles for equality from blowing up a test run.
    #[must_use]
    pub const fn reserved(name: &'static str) -> Self {
        Self {
            name,
            factory: None,
        }
    }

    /// The declared name, e.g. `"IsInt"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if this is a reserved marker.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.factory.is_none()
    }

    /// Construct the zero-argument instance.
    ///
    /// # Errors
    ///
    /// [`ConstructError`] when the matcher requires configuration or the
    /// descriptor is reserved. Only the equality path swallows this;
    /// callers of `build` handle it.
    pub fn build(&self) -> Result<Pattern, ConstructError> {
        match self.factory {
            Some(factory) => factory(),
            None => Err(ConstructError::Reserved { name: self.name }),
        }
    }

    /// Descriptor-level equality invocation: construct and delegate.
    ///
    /// A construction failure is "not equal" here — see the type docs.
    pub fn compare_eq(&self, value: &Value) -> bool {
        match self.build() {
            Ok(pattern) => pattern.compare_eq(value),
            Err(_) => false,
        }
    }

    /// Descriptor-level inequality invocation.
    pub fn compare_ne(&self, value: &Value) -> bool {
        !self.compare_eq(value)
    }
}

impl PartialEq for Descriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Descriptor {}

impl Hash for Descriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// Same text through both formatting channels; see `Pattern`'s Debug impl.
impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl_comparisons!(Descriptor);

/// A reference to a matcher in either invocation mode.
///
/// Combinators store their children as `MatcherRef`, giving every child —
/// bare descriptor, configured instance, or plain literal — one uniform
/// interface for comparison and rendering.
#[derive(Clone)]
pub enum MatcherRef {
    /// The type-level handle; constructs lazily at each comparison.
    Descriptor(Descriptor),

    /// A constructed instance; shares capture state with the original.
    Instance(Pattern),
}

impl MatcherRef {
    /// Equality invocation through whichever mode this reference holds.
    pub fn compare_eq(&self, value: &Value) -> bool {
        match self {
            Self::Descriptor(d) => d.compare_eq(value),
            Self::Instance(p) => p.compare_eq(value),
        }
    }

    /// Inequality invocation through whichever mode this reference holds.
    pub fn compare_ne(&self, value: &Value) -> bool {
        match self {
            Self::Descriptor(d) => d.compare_ne(value),
            Self::Instance(p) => p.compare_ne(value),
        }
    }

    /// Structural rendering: a descriptor renders as its declared name, an
    /// instance as its not-equal form — regardless of capture state, so a
    /// combinator always shows its structure.
    #[must_use]
    pub fn render_unmatched(&self) -> String {
        match self {
            Self::Descriptor(d) => d.name().to_string(),
            Self::Instance(p) => p.render_unmatched(),
        }
    }
}

impl fmt::Debug for MatcherRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_unmatched())
    }
}

impl Lit for MatcherRef {
    fn lit(&self) -> String {
        self.render_unmatched()
    }
}

/// Conversion into [`MatcherRef`] — the seam every operand position
/// accepts.
///
/// Implemented for descriptors, patterns, raw [`Match`](crate::Match)
/// implementors, and plain values (which wrap into the literal-equality
/// leaf). This is what lets a combinator or a container matcher take
/// matchers and literals in the same position:
///
/// ```
/// use akin::{AnyOf, IsOneOf, Pattern, Value};
///
/// // A raw matcher and a bare literal, both as children.
/// let pattern = Pattern::new(AnyOf::new(IsOneOf::new([1, 2]), 9));
/// assert!(pattern == Value::from(9));
/// ```
pub trait IntoMatcherRef {
    /// Convert into a matcher reference.
    fn into_matcher_ref(self) -> MatcherRef;
}

impl IntoMatcherRef for MatcherRef {
    fn into_matcher_ref(self) -> MatcherRef {
        self
    }
}

impl IntoMatcherRef for Descriptor {
    fn into_matcher_ref(self) -> MatcherRef {
        MatcherRef::Descriptor(self)
    }
}

impl IntoMatcherRef for Pattern {
    fn into_matcher_ref(self) -> MatcherRef {
        MatcherRef::Instance(self)
    }
}

// Raw matchers wrap into a fresh instance. `Pattern`, `Descriptor`,
// `MatcherRef` and `Value` deliberately do not implement `Match`, which is
// what lets this blanket impl coexist with the ones above.
impl<M: crate::Match + 'static> IntoMatcherRef for M {
    fn into_matcher_ref(self) -> MatcherRef {
        MatcherRef::Instance(Pattern::new(self))
    }
}

impl IntoMatcherRef for Value {
    fn into_matcher_ref(self) -> MatcherRef {
        MatcherRef::Instance(Pattern::new(EqualTo::new(self)))
    }
}

macro_rules! impl_literal_operand {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoMatcherRef for $ty {
                fn into_matcher_ref(self) -> MatcherRef {
                    Value::from(self).into_matcher_ref()
                }
            }
        )+
    };
}

impl_literal_operand!(bool, i64, i32, f64, &str, String);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Anything, CallRepr, Match, MatchFailure};
    use std::collections::HashMap;

    struct NeedsConfig;

    impl Match for NeedsConfig {
        fn matches(&self, _value: &Value) -> Result<bool, MatchFailure> {
            Ok(true)
        }

        fn signature(&self) -> CallRepr {
            CallRepr::new("NeedsConfig")
        }
    }

    const ANY: Descriptor = Descriptor::new("Anything", || Ok(Pattern::new(Anything)));
    const STRICT: Descriptor = Descriptor::new("NeedsConfig", || {
        Err(ConstructError::MissingArguments {
            matcher: "NeedsConfig",
        })
    });

    #[test]
    fn test_descriptor_constructs_and_delegates() {
        assert!(ANY == Value::from(1));
        assert!(Value::from("x") == ANY);
        assert!(1 == ANY);
    }

    #[test]
    fn test_construction_failure_is_not_equal_only_at_dispatch() {
        // Swallowed by the equality path...
        assert!(!(STRICT == Value::from(1)));
        assert!(STRICT != Value::from(1));
        // ...but surfaced by explicit construction.
        assert_eq!(
            STRICT.build(),
            Err(ConstructError::MissingArguments {
                matcher: "NeedsConfig"
            })
        );
    }

    #[test]
    fn test_reserved_always_not_equal_without_raising() {
        let base = Descriptor::reserved("Match");
        assert!(base.is_reserved());
        assert!(!(base == Value::from(1)));
        assert!(!(base == Value::from("anything")));
        assert!(base != Value::Null);
        assert!(matches!(
            base.build(),
            Err(ConstructError::Reserved { name: "Match" })
        ));
    }

    #[test]
    fn test_identity_by_name() {
        let a = Descriptor::new("Anything", || Ok(Pattern::new(Anything)));
        assert_eq!(a, ANY);
        assert_ne!(ANY, STRICT);

        let mut table = HashMap::new();
        table.insert(ANY, "wildcard");
        assert_eq!(table.get(&a), Some(&"wildcard"));
    }

    #[test]
    fn test_display_is_declared_name() {
        assert_eq!(ANY.to_string(), "Anything");
        assert_eq!(format!("{ANY:?}"), "Anything");
    }

    #[test]
    fn test_matcher_ref_rendering() {
        assert_eq!(ANY.into_matcher_ref().render_unmatched(), "Anything");
        assert_eq!(
            Pattern::new(NeedsConfig).into_matcher_ref().render_unmatched(),
            "NeedsConfig()"
        );
        // Literals render as themselves.
        assert_eq!(Value::from(3).into_matcher_ref().render_unmatched(), "3");
        assert_eq!("x".into_matcher_ref().render_unmatched(), "\"x\"");
    }

    #[test]
    fn test_instance_ref_shares_capture_state() {
        let p = Pattern::new(Anything);
        let r = p.clone().into_matcher_ref();
        assert!(r.compare_eq(&Value::from(7)));
        assert_eq!(p.value(), Ok(Value::from(7)));
    }

    #[test]
    fn test_descriptor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Descriptor>();
    }
}
