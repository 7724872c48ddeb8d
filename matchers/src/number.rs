//! Numeric matchers

use akin::{CallRepr, ConstructError, Descriptor, Match, MatchFailure, Pattern, Value};

/// Default tolerance for [`IsApprox`].
pub const DEFAULT_DELTA: f64 = 1e-6;

macro_rules! bound_check {
    ($n:expr, $self:ident) => {
        Ok($self.lt.is_none_or(|b| $n < b)
            && $self.le.is_none_or(|b| $n <= b)
            && $self.gt.is_none_or(|b| $n > b)
            && $self.ge.is_none_or(|b| $n >= b))
    };
}

/// Matches integer values, optionally bounded.
///
/// Strict about the value's shape: `Float(4.0)` is not an int. Bounds are
/// keyword parameters with `None` defaults, so only configured bounds
/// appear in the rendering.
///
/// # Example
///
/// ```
/// use akin::{Pattern, Value};
/// use akin_matchers::IsInt;
///
/// let small = Pattern::from(IsInt::new().lt(5));
/// assert!(small == Value::from(4));
/// assert!(small != Value::from(5));
/// assert!(small != Value::from(4.0));
/// assert_eq!(small.render_unmatched(), "IsInt(lt=5)");
/// ```
#[derive(Default)]
pub struct IsInt {
    lt: Option<i64>,
    le: Option<i64>,
    gt: Option<i64>,
    ge: Option<i64>,
}

impl IsInt {
    /// Match any integer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the value to be strictly less than `bound`.
    #[must_use]
    pub fn lt(mut self, bound: i64) -> Self {
        self.lt = Some(bound);
        self
    }

    /// Require the value to be at most `bound`.
    #[must_use]
    pub fn le(mut self, bound: i64) -> Self {
        self.le = Some(bound);
        self
    }

    /// Require the value to be strictly greater than `bound`.
    #[must_use]
    pub fn gt(mut self, bound: i64) -> Self {
        self.gt = Some(bound);
        self
    }

    /// Require the value to be at least `bound`.
    #[must_use]
    pub fn ge(mut self, bound: i64) -> Self {
        self.ge = Some(bound);
        self
    }
}

impl Match for IsInt {
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
        let n = value.as_int().ok_or(MatchFailure::TypeMismatch)?;
        bound_check!(n, self)
    }

    fn signature(&self) -> CallRepr {
        CallRepr::new("IsInt")
            .kwarg("lt", &self.lt, &None)
            .kwarg("le", &self.le, &None)
            .kwarg("gt", &self.gt, &None)
            .kwarg("ge", &self.ge, &None)
    }
}

/// Type-level handle for [`IsInt`].
pub const IS_INT: Descriptor = Descriptor::new("IsInt", || Ok(Pattern::new(IsInt::new())));

/// Matches float values, optionally bounded.
///
/// The float twin of [`IsInt`]; `Int(4)` is not a float.
#[derive(Default)]
pub struct IsFloat {
    lt: Option<f64>,
    le: Option<f64>,
    gt: Option<f64>,
    ge: Option<f64>,
}

impl IsFloat {
    /// Match any float.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the value to be strictly less than `bound`.
    #[must_use]
    pub fn lt(mut self, bound: f64) -> Self {
        self.lt = Some(bound);
        self
    }

    /// Require the value to be at most `bound`.
    #[must_use]
    pub fn le(mut self, bound: f64) -> Self {
        self.le = Some(bound);
        self
    }

    /// Require the value to be strictly greater than `bound`.
    #[must_use]
    pub fn gt(mut self, bound: f64) -> Self {
        self.gt = Some(bound);
        self
    }

    /// Require the value to be at least `bound`.
    #[must_use]
    pub fn ge(mut self, bound: f64) -> Self {
        self.ge = Some(bound);
        self
    }
}

impl Match for IsFloat {
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
        let n = value.as_float().ok_or(MatchFailure::TypeMismatch)?;
        bound_check!(n, self)
    }

    fn signature(&self) -> CallRepr {
        CallRepr::new("IsFloat")
            .kwarg("lt", &self.lt, &None)
            .kwarg("le", &self.le, &None)
            .kwarg("gt", &self.gt, &None)
            .kwarg("ge", &self.ge, &None)
    }
}

/// Type-level handle for [`IsFloat`].
pub const IS_FLOAT: Descriptor = Descriptor::new("IsFloat", || Ok(Pattern::new(IsFloat::new())));

/// Matches any numeric value greater than zero.
pub struct IsPositive;

impl Match for IsPositive {
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
        match value {
            Value::Int(n) => Ok(*n > 0),
            Value::Float(f) => Ok(*f > 0.0),
            _ => Err(MatchFailure::TypeMismatch),
        }
    }

    fn signature(&self) -> CallRepr {
        CallRepr::new("IsPositive")
    }
}

/// Type-level handle for [`IsPositive`].
pub const IS_POSITIVE: Descriptor =
    Descriptor::new("IsPositive", || Ok(Pattern::new(IsPositive)));

/// Matches any numeric value less than zero.
pub struct IsNegative;

impl Match for IsNegative {
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
        match value {
            Value::Int(n) => Ok(*n < 0),
            Value::Float(f) => Ok(*f < 0.0),
            _ => Err(MatchFailure::TypeMismatch),
        }
    }

    fn signature(&self) -> CallRepr {
        CallRepr::new("IsNegative")
    }
}

/// Type-level handle for [`IsNegative`].
pub const IS_NEGATIVE: Descriptor =
    Descriptor::new("IsNegative", || Ok(Pattern::new(IsNegative)));

/// Matches numeric values within `delta` of a target.
///
/// The one matcher in this crate with a required parameter: there is no
/// meaningful zero-argument form, so the [`IS_APPROX`] descriptor fails
/// construction and a bare-descriptor comparison is always "not equal".
///
/// # Example
///
/// ```
/// use akin::{Pattern, Value};
/// use akin_matchers::IsApprox;
///
/// let close = Pattern::from(IsApprox::new(1).unwrap());
/// assert!(close == Value::from(1.0000004));
/// assert!(close != Value::from(1.1));
/// ```
pub struct IsApprox {
    target: Value,
    delta: f64,
}

impl IsApprox {
    /// Match values within the default tolerance of `target`.
    ///
    /// # Errors
    ///
    /// [`ConstructError::InvalidArguments`] if `target` is not numeric.
    pub fn new(target: impl Into<Value>) -> Result<Self, ConstructError> {
        let target = target.into();
        if target_as_f64(&target).is_none() {
            return Err(ConstructError::InvalidArguments {
                matcher: "IsApprox",
                reason: format!("target must be numeric, got {}", target.type_name()),
            });
        }
        Ok(Self {
            target,
            delta: DEFAULT_DELTA,
        })
    }

    /// Override the tolerance.
    #[must_use]
    pub fn delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }
}

fn target_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Int(n) => Some(*n as f64),
        Value::Float(f) => Some(*f),
        _ => None,
    }
}

impl Match for IsApprox {
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
        let n = target_as_f64(value).ok_or(MatchFailure::TypeMismatch)?;
        // Construction validated the target; a non-numeric target here is
        // unreachable rather than a silent mismatch.
        let target = target_as_f64(&self.target).unwrap_or(f64::NAN);
        Ok((n - target).abs() <= self.delta)
    }

    fn signature(&self) -> CallRepr {
        CallRepr::new("IsApprox")
            .arg(&self.target)
            .kwarg("delta", &self.delta, &DEFAULT_DELTA)
    }
}

/// Type-level handle for [`IsApprox`] — always fails construction.
pub const IS_APPROX: Descriptor = Descriptor::new("IsApprox", || {
    Err(ConstructError::MissingArguments { matcher: "IsApprox" })
});
