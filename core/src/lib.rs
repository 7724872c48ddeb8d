//! akin - flexible-equality matchers for test assertions
//!
//! A matcher engine that lets a test compare an actual value against a
//! declarative pattern instead of an exact literal: the assertion succeeds
//! if the value satisfies the pattern's predicate, and a failed assertion
//! renders the pattern as the constructor call that would rebuild it.
//!
//! # Architecture
//!
//! The type system uses erasure at the data level:
//!
//! - [`Value`] — Erased actual-value type (Null, Bool, Int, Float, Str,
//!   List, Map)
//! - [`Match`] — The matcher contract: one predicate over `Value`, plus
//!   the signature hook rendering needs (non-generic, composable!)
//! - [`Pattern`] — A matcher instance with capture state; the thing `==`
//!   and `!=` run against
//! - [`Descriptor`] — The type-level handle: compare without constructing
//!   first, via a lazy zero-argument factory
//! - [`AnyOf`] / [`AllOf`] / [`Negate`] — Boolean composition, spelled
//!   `|`, `&`, `!`
//! - [`CallRepr`] — Per-matcher parameter signature driving the generic
//!   "reconstructed constructor call" rendering
//!
//! # Key Design Points
//!
//! 1. **Recognized failures are not errors**: [`MatchFailure`] is a closed
//!    enum meaning "does not match"; the comparison boundary swallows it
//!    into `false`. Matcher defects are panics and crash loudly.
//!
//! 2. **Capture asymmetry**: `==` records the outcome for rendering;
//!    `!=` captures the input but never records. A sanity-check inequality
//!    must not corrupt the diff a later failure prints.
//!
//! 3. **One rendering path**: `Debug` delegates to `Display` everywhere,
//!    so the harness's failure diff and direct printing cannot diverge.
//!
//! # Example
//!
//! ```
//! use akin::prelude::*;
//!
//! // A matcher is anything implementing the `Match` contract.
//! struct IsEven;
//!
//! impl Match for IsEven {
//!     fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
//!         let n = value.as_int().ok_or(MatchFailure::TypeMismatch)?;
//!         Ok(n % 2 == 0)
//!     }
//!
//!     fn signature(&self) -> CallRepr {
//!         CallRepr::new("IsEven")
//!     }
//! }
//!
//! // Compose with the boolean operators and compare with `==`.
//! let pattern = Pattern::new(IsEven) | Pattern::new(IsOneOf::new([1, 3]));
//! assert!(pattern == Value::from(4));
//! assert!(pattern == Value::from(3));
//! assert!(pattern != Value::from(5));
//! ```
//!
//! # Extensions
//!
//! The concrete matcher library (string/number/sequence/mapping leaves)
//! lives in the companion `akin-matchers` crate; this crate is only the
//! engine plus the generic leaves it needs itself.

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod builtin;
mod combinator;
mod contract;
mod descriptor;
mod pattern;
mod repr;
mod value;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Core types
pub use contract::Match;
pub use descriptor::{Descriptor, IntoMatcherRef, MatcherRef};
pub use pattern::Pattern;
pub use repr::{CallRepr, Lit};
pub use value::Value;

// Combinators
pub use combinator::{AllOf, AnyOf, Negate};

// Generic leaves
pub use builtin::{Anything, EqualTo, IsOneOf, ANYTHING, IS_ONE_OF};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use akin::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Combinators
        AllOf,
        AnyOf,
        // Generic leaves
        Anything,
        // Representation
        CallRepr,
        // Errors
        ConstructError,
        // Core types
        Descriptor,
        EqualTo,
        IntoMatcherRef,
        IsOneOf,
        Lit,
        Match,
        MatchFailure,
        MatcherRef,
        Negate,
        Pattern,
        Value,
        ValueUnavailable,
        ANYTHING,
        IS_ONE_OF,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Recognized predicate failures — "this value does not match".
///
/// This enum is deliberately closed: both variants are expected outcomes
/// that the comparison boundary swallows into `false`, never propagates.
/// Anything else a matcher implementation does wrong is a panic, which is
/// a defect and must crash the test instead of hiding as a mismatch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchFailure {
    /// The value's type does not fit this matcher at all
    /// (e.g. a string matcher receiving an int).
    #[error("value type does not fit this matcher")]
    TypeMismatch,

    /// The value has a workable type but falls outside the domain the
    /// predicate can evaluate (e.g. a membership test against a value
    /// that has no elements).
    #[error("value is outside this matcher's domain: {reason}")]
    OutOfDomain {
        /// What made the value unevaluable.
        reason: String,
    },
}

/// Errors from constructing a matcher instance.
///
/// Recognized only by the descriptor equality path, which reports them as
/// "not equal" (a bare-descriptor comparison against a matcher that needs
/// arguments fails the assertion, it does not crash the run). Everywhere
/// else — [`Descriptor::build`], matcher builders — they propagate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructError {
    /// Zero-argument construction of a matcher that requires
    /// configuration.
    #[error("{matcher} requires arguments and has no zero-argument form")]
    MissingArguments {
        /// The matcher name.
        matcher: &'static str,
    },

    /// The supplied configuration is invalid (e.g. a malformed regex).
    #[error("invalid arguments for {matcher}: {reason}")]
    InvalidArguments {
        /// The matcher name.
        matcher: &'static str,
        /// Why construction failed.
        reason: String,
    },

    /// The descriptor is a reserved marker and never constructs.
    #[error("\"{name}\" is a reserved marker and cannot be constructed")]
    Reserved {
        /// The reserved name.
        name: &'static str,
    },
}

/// The captured value was requested before it exists.
///
/// Raised by [`Pattern::value`] when no comparison has happened yet, or
/// when the last recorded outcome was not a match. Always propagates —
/// this is a usage error in the test, not a matching outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("value is not available until an equality comparison has succeeded")]
pub struct ValueUnavailable;
