//! `CallRepr` — The parameter-signature record behind pattern rendering
//!
//! A matcher that did not match renders as the constructor call that would
//! rebuild it: `IsInt(lt=5)`, `IsOneOf(1, 2, 3)`. Matchers never hand-write
//! that string. Each one declares its parameters — positional, variadic, or
//! keyword-with-default — and the rendering logic lives here, once.
//!
//! Keyword arguments whose value equals the declared default are omitted,
//! so `IsInt::new()` renders as `IsInt()` and only overridden bounds show.

use std::fmt;

/// Literal rendering for parameter values.
///
/// This is the small per-type seam the renderer needs: how does a value
/// appear inside a reconstructed constructor call? Implementations exist
/// for the scalar types matchers actually take as parameters, plus
/// [`Value`](crate::Value) and [`MatcherRef`](crate::MatcherRef) for
/// container matchers whose parameters are themselves values or matchers.
pub trait Lit {
    /// Render this value as it would appear in a constructor call.
    fn lit(&self) -> String;
}

impl Lit for bool {
    fn lit(&self) -> String {
        self.to_string()
    }
}

impl Lit for i64 {
    fn lit(&self) -> String {
        self.to_string()
    }
}

impl Lit for usize {
    fn lit(&self) -> String {
        self.to_string()
    }
}

impl Lit for f64 {
    fn lit(&self) -> String {
        // Reuse the one float rendering so "1.0" stays "1.0" everywhere.
        crate::Value::Float(*self).to_string()
    }
}

impl Lit for &str {
    fn lit(&self) -> String {
        format!("{self:?}")
    }
}

impl Lit for String {
    fn lit(&self) -> String {
        format!("{self:?}")
    }
}

impl Lit for crate::Value {
    fn lit(&self) -> String {
        self.to_string()
    }
}

impl<T: Lit> Lit for Option<T> {
    fn lit(&self) -> String {
        match self {
            Some(v) => v.lit(),
            None => "None".to_string(),
        }
    }
}

/// A reconstructed constructor call: name, positional arguments, and the
/// keyword arguments that differ from their declared defaults.
///
/// # Example
///
/// ```
/// use akin::CallRepr;
///
/// let repr = CallRepr::new("IsInt")
///     .kwarg("lt", &Some(5i64), &None)
///     .kwarg("gt", &None::<i64>, &None);
/// assert_eq!(repr.to_string(), "IsInt(lt=5)");
/// ```
#[derive(Debug, Clone)]
pub struct CallRepr {
    name: &'static str,
    args: Vec<String>,
    kwargs: Vec<(String, String)>,
}

impl CallRepr {
    /// Start a signature record for the named matcher.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            args: Vec::new(),
            kwargs: Vec::new(),
        }
    }

    /// The matcher name this record renders under.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Append one positional argument.
    #[must_use]
    pub fn arg(mut self, value: &dyn Lit) -> Self {
        self.args.push(value.lit());
        self
    }

    /// Append a variadic run of positional arguments.
    #[must_use]
    pub fn args<'a, T: Lit + 'a>(mut self, values: impl IntoIterator<Item = &'a T>) -> Self {
        self.args.extend(values.into_iter().map(Lit::lit));
        self
    }

    /// Append a keyword argument with a declared default.
    ///
    /// Omitted from the rendering when `value == default` — an
    /// unconfigured parameter adds nothing to the reconstructed call.
    #[must_use]
    pub fn kwarg<T: Lit + PartialEq>(
        mut self,
        name: impl Into<String>,
        value: &T,
        default: &T,
    ) -> Self {
        if value != default {
            self.kwargs.push((name.into(), value.lit()));
        }
        self
    }

    /// Append a keyword argument that always renders.
    ///
    /// For variadic-keyword parameters (e.g. the entries of a mapping
    /// matcher) where every supplied entry is part of the signature.
    #[must_use]
    pub fn kwarg_entry(mut self, name: impl Into<String>, value: &dyn Lit) -> Self {
        self.kwargs.push((name.into(), value.lit()));
        self
    }
}

impl fmt::Display for CallRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        let mut first = true;
        for arg in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{arg}")?;
        }
        for (name, value) in &self.kwargs {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{name}={value}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_empty_call() {
        assert_eq!(CallRepr::new("IsStr").to_string(), "IsStr()");
    }

    #[test]
    fn test_positional_args() {
        let repr = CallRepr::new("IsOneOf").args([1i64, 2, 3].iter());
        assert_eq!(repr.to_string(), "IsOneOf(1, 2, 3)");
    }

    #[test]
    fn test_kwarg_omitted_when_default() {
        let repr = CallRepr::new("IsInt")
            .kwarg("lt", &None::<i64>, &None)
            .kwarg("gt", &None::<i64>, &None);
        assert_eq!(repr.to_string(), "IsInt()");
    }

    #[test]
    fn test_kwarg_rendered_when_set() {
        let repr = CallRepr::new("IsInt")
            .kwarg("lt", &Some(5i64), &None)
            .kwarg("gt", &Some(0i64), &None);
        assert_eq!(repr.to_string(), "IsInt(lt=5, gt=0)");
    }

    #[test]
    fn test_args_before_kwargs() {
        let repr = CallRepr::new("IsApprox")
            .arg(&Value::Int(1))
            .kwarg("delta", &0.5, &1e-6);
        assert_eq!(repr.to_string(), "IsApprox(1, delta=0.5)");
    }

    #[test]
    fn test_kwarg_entry_always_renders() {
        let repr = CallRepr::new("IsDict")
            .kwarg_entry("a", &Value::Int(1))
            .kwarg_entry("b", &Value::Str("x".into()));
        assert_eq!(repr.to_string(), "IsDict(a=1, b=\"x\")");
    }

    #[test]
    fn test_string_args_are_quoted() {
        let repr = CallRepr::new("Contains").arg(&"err");
        assert_eq!(repr.to_string(), "Contains(\"err\")");
    }
}
