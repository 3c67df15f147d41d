use std::fmt;

/// Raw value returned by a host API call.
///
/// Both runtime standards define boolean results as the strings `"true"`
/// and `"false"`, but deployed LMS implementations frequently hand back
/// real booleans instead. Both shapes are accepted here and collapsed by
/// [`ApiValue::is_success`], so adapter logic checks the duality exactly
/// once, right after the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiValue {
    /// String-typed result.
    Str(String),
    /// Boolean-typed result.
    Bool(bool),
}

impl ApiValue {
    /// True when the value is the success sentinel: `"true"` or `true`.
    ///
    /// Anything else, including `"TRUE"` and the empty string, counts as
    /// failure.
    pub fn is_success(&self) -> bool {
        match self {
            ApiValue::Bool(b) => *b,
            ApiValue::Str(s) => s == "true",
        }
    }
}

impl From<bool> for ApiValue {
    fn from(value: bool) -> Self {
        ApiValue::Bool(value)
    }
}

impl From<&str> for ApiValue {
    fn from(value: &str) -> Self {
        ApiValue::Str(value.to_string())
    }
}

impl From<String> for ApiValue {
    fn from(value: String) -> Self {
        ApiValue::Str(value)
    }
}

impl fmt::Display for ApiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiValue::Str(s) => f.write_str(s),
            ApiValue::Bool(b) => write!(f, "{}", b),
        }
    }
}
