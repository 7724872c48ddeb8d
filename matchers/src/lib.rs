//! akin-matchers - the concrete matcher library for `akin`
//!
//! Leaf matchers over the erased [`Value`](akin::Value) model, one module
//! per value family. Every matcher implements the
//! [`Match`](akin::Match) contract from the core engine and declares its
//! constructor parameters for the generic rendering; matchers with a
//! meaningful zero-argument form also export a type-level
//! [`Descriptor`](akin::Descriptor) so tests can compare against the bare
//! handle.
//!
//! # Example
//!
//! ```
//! use akin::{Pattern, Value};
//! use akin_matchers::{IsInt, IS_INT, IS_POSITIVE, IS_STR};
//!
//! // Descriptors compose with the boolean operators directly.
//! assert!(1 == (IS_STR | IS_INT));
//! assert!("foo" == (IS_STR | IS_INT));
//! assert!(!(1.5 == (IS_STR | IS_INT)));
//!
//! // Parameterized instances mix in through `Pattern`.
//! let v = IS_POSITIVE & Pattern::from(IsInt::new().lt(5));
//! assert!(v == Value::from(4));
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod mapping;
mod number;
mod sequence;
mod string;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use mapping::{IsDict, IS_DICT};
pub use number::{
    IsApprox, IsFloat, IsInt, IsNegative, IsPositive, DEFAULT_DELTA, IS_APPROX, IS_FLOAT,
    IS_INT, IS_NEGATIVE, IS_POSITIVE,
};
pub use sequence::{Contains, IsList, CONTAINS, IS_LIST};
pub use string::{IsStr, IS_STR};

/// Prelude module for convenient imports.
///
/// ```
/// use akin_matchers::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Contains,
        IsApprox,
        IsDict,
        IsFloat,
        IsInt,
        IsList,
        IsNegative,
        IsPositive,
        IsStr,
        CONTAINS,
        IS_APPROX,
        IS_DICT,
        IS_FLOAT,
        IS_INT,
        IS_LIST,
        IS_NEGATIVE,
        IS_POSITIVE,
        IS_STR,
    };
}
