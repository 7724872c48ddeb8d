//! String matchers

use akin::{CallRepr, ConstructError, Descriptor, Match, MatchFailure, Pattern, Value};
use regex::Regex;

/// Matches string values, optionally constrained by length bounds and a
/// regular expression.
///
/// Length bounds count characters, not bytes. The regex is compiled at
/// construction — an invalid pattern is a [`ConstructError`], caught when
/// the test builds the matcher rather than at comparison time.
///
/// # Example
///
/// ```
/// use akin::{Pattern, Value};
/// use akin_matchers::IsStr;
///
/// let token = Pattern::from(IsStr::new().regex(r"^t-\d+$").unwrap());
/// assert!(token == Value::from("t-123"));
/// assert!(token != Value::from("t-abc"));
/// assert!(token != Value::from(123));
/// ```
#[derive(Debug, Default)]
pub struct IsStr {
    min_length: Option<usize>,
    max_length: Option<usize>,
    regex: Option<Regex>,
}

impl IsStr {
    /// Match any string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `n` characters.
    #[must_use]
    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    /// Require at most `n` characters.
    #[must_use]
    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    /// Require the string to match the given regular expression.
    ///
    /// # Errors
    ///
    /// [`ConstructError::InvalidArguments`] if the pattern does not
    /// compile.
    pub fn regex(mut self, pattern: &str) -> Result<Self, ConstructError> {
        let compiled = Regex::new(pattern).map_err(|e| ConstructError::InvalidArguments {
            matcher: "IsStr",
            reason: e.to_string(),
        })?;
        self.regex = Some(compiled);
        Ok(self)
    }
}

impl Match for IsStr {
    fn matches(&self, value: &Value) -> Result<bool, MatchFailure> {
        let s = value.as_str().ok_or(MatchFailure::TypeMismatch)?;

        if self.min_length.is_some() || self.max_length.is_some() {
            let len = s.chars().count();
            if self.min_length.is_some_and(|min| len < min) {
                return Ok(false);
            }
            if self.max_length.is_some_and(|max| len > max) {
                return Ok(false);
            }
        }

        if let Some(re) = &self.regex {
            if !re.is_match(s) {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn signature(&self) -> CallRepr {
        CallRepr::new("IsStr")
            .kwarg("min_length", &self.min_length, &None)
            .kwarg("max_length", &self.max_length, &None)
            .kwarg(
                "regex",
                &self.regex.as_ref().map(|re| re.as_str().to_string()),
                &None,
            )
    }
}

/// Type-level handle for [`IsStr`].
pub const IS_STR: Descriptor = Descriptor::new("IsStr", || Ok(Pattern::new(IsStr::new())));
