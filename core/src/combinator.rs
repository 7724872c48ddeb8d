//! Boolean combinators — AND/OR/NOT over matcher references
//!
//! Combinators are matchers built from other matchers, implementing the
//! same contract recursively. They are normally spelled with the operators
//! `|`, `&` and `!` on patterns and descriptors; the structs are public for
//! the occasional explicit construction.
//!
//! # Rendering
//!
//! A combinator always renders its *structure* — children joined by the
//! operator — through [`MatcherRef::render_unmatched`]. Only the wrapping
//! [`Pattern`] switches to the matched value after an overall success; the
//! children inside never do.

use std::ops::{BitAnd, BitOr, Not};

use crate::{CallRepr, IntoMatcherRef, Match, MatchFailure, MatcherRef, Pattern, Value};
use crate::descriptor::Descriptor;

/// OR: matches when any child matches.
///
/// # Example
///
/// ```
/// use akin::{AnyOf, IsOneOf, Pattern, Value};
///
/// let small_or_null = Pattern::new(AnyOf::new(IsOneOf::new([0, 1]), Value::Null));
/// assert!(small_or_null == Value::from(1));
/// assert!(small_or_null == Value::Null);
/// assert!(small_or_null != Value::from(7));
/// ```
pub struct AnyOf {
    children: Vec<MatcherRef>,
}

impl AnyOf {
    /// Combine two matcher references; `or` appends more.
    pub fn new(a: impl IntoMatcherRef, b: impl IntoMatcherRef) -> Self {
        Self {
            children: vec![a.into_matcher_ref(), b.into_matcher_ref()],
        }
    }

    /// Append one more alternative.
    #[must_use]
    pub fn or(mut self, other: impl IntoMatcherRef) -> Self {
        self.children.push(other.into_matcher_ref());
        self
    }
}

impl Match for AnyOf {
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
        Ok(self.children.iter().any(|c| c.compare_eq(value)))
    }

    fn signature(&self) -> CallRepr {
        CallRepr::new("AnyOf").args(self.children.iter())
    }

    fn render_unmatched(&self) -> String {
        join(&self.children, " | ")
    }
}

/// AND: matches when all children match.
pub struct AllOf {
    children: Vec<MatcherRef>,
}

impl AllOf {
    /// Combine two matcher references; `and` appends more.
    pub fn new(a: impl IntoMatcherRef, b: impl IntoMatcherRef) -> Self {
        Self {
            children: vec![a.into_matcher_ref(), b.into_matcher_ref()],
        }
    }

    /// Append one more requirement.
    #[must_use]
    pub fn and(mut self, other: impl IntoMatcherRef) -> Self {
        self.children.push(other.into_matcher_ref());
        self
    }
}

impl Match for AllOf {
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
        Ok(self.children.iter().all(|c| c.compare_eq(value)))
    }

    fn signature(&self) -> CallRepr {
        CallRepr::new("AllOf").args(self.children.iter())
    }

    fn render_unmatched(&self) -> String {
        join(&self.children, " & ")
    }
}

/// NOT: matches when its single child does not match.
///
/// The predicate goes through the child's *inequality* path rather than
/// negating its equality path — the two are distinct at the contract level
/// (only `==` records the outcome) and negation must not re-derive one
/// from the other.
pub struct Negate {
    child: MatcherRef,
}

impl Negate {
    /// Invert one matcher reference.
    pub fn new(child: impl IntoMatcherRef) -> Self {
        Self {
            child: child.into_matcher_ref(),
        }
    }
}

impl Match for Negate {
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
        Ok(self.child.compare_ne(value))
    }

    fn signature(&self) -> CallRepr {
        CallRepr::new("Negate").arg(&self.child)
    }

    fn render_unmatched(&self) -> String {
        format!("~{}", self.child.render_unmatched())
    }
}

fn join(children: &[MatcherRef], separator: &str) -> String {
    children
        .iter()
        .map(MatcherRef::render_unmatched)
        .collect::<Vec<_>>()
        .join(separator)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Operator sugar
// ═══════════════════════════════════════════════════════════════════════════════

// `a | b | c` nests left — AnyOf(AnyOf(a, b), c) — but renders flat because
// the inner combinator's structural form joins with the same separator.

impl<R: IntoMatcherRef> BitOr<R> for Pattern {
    type Output = Pattern;

    fn bitor(self, rhs: R) -> Pattern {
        Pattern::new(AnyOf::new(self, rhs))
    }
}

impl<R: IntoMatcherRef> BitOr<R> for Descriptor {
    type Output = Pattern;

    fn bitor(self, rhs: R) -> Pattern {
        Pattern::new(AnyOf::new(self, rhs))
    }
}

impl<R: IntoMatcherRef> BitAnd<R> for Pattern {
    type Output = Pattern;

    fn bitand(self, rhs: R) -> Pattern {
        Pattern::new(AllOf::new(self, rhs))
    }
}

impl<R: IntoMatcherRef> BitAnd<R> for Descriptor {
    type Output = Pattern;

    fn bitand(self, rhs: R) -> Pattern {
        Pattern::new(AllOf::new(self, rhs))
    }
}

impl Not for Pattern {
    type Output = Pattern;

    fn not(self) -> Pattern {
        Pattern::new(Negate::new(self))
    }
}

impl Not for Descriptor {
    type Output = Pattern;

    fn not(self) -> Pattern {
        Pattern::new(Negate::new(self))
    }
}
