use std::fmt;

/// The code a host reports when its last operation succeeded.
pub const NO_ERROR: &str = "0";

/// Error code reported by the host's last-error query.
///
/// The host updates this state after every data-model call, and it
/// reflects only the most recent operation, so it must be read
/// immediately after the call it belongs to. The adapter only ever
/// tests it against `"0"`; everything else is diagnostic output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCode(String);

impl ErrorCode {
    /// Wrap a raw code string as reported by the host.
    pub fn new(code: impl Into<String>) -> Self {
        ErrorCode(code.into())
    }

    /// A code representing success.
    pub fn clear() -> Self {
        ErrorCode(NO_ERROR.to_string())
    }

    /// True when the code is `"0"`, i.e. the last operation succeeded.
    pub fn is_clear(&self) -> bool {
        self.0 == NO_ERROR
    }

    /// The raw code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable name for codes the runtime standards define.
    ///
    /// Unknown or LMS-specific codes yield `None`; logs then fall back
    /// to the bare number.
    pub fn describe(&self) -> Option<&'static str> {
        let description = match self.0.as_str() {
            "0" => "no error",
            "101" => "general exception",
            "102" => "general initialization failure",
            "103" => "already initialized",
            "104" => "content instance terminated",
            "111" => "general termination failure",
            "112" => "termination before initialization",
            "113" => "termination after termination",
            "122" => "retrieve data before initialization",
            "123" => "retrieve data after termination",
            "132" => "store data before initialization",
            "133" => "store data after termination",
            "142" => "commit before initialization",
            "143" => "commit after termination",
            "201" => "invalid argument error",
            "202" => "element cannot have children",
            "203" => "element not an array",
            "301" => "not initialized",
            "351" => "general set failure",
            "391" => "general get failure",
            "401" => "undefined data model element",
            "402" => "invalid set value, element is a keyword",
            "403" => "element is read only",
            "404" => "element is write only",
            "405" => "incorrect data type",
            "406" => "data model element value out of range",
            "407" => "data model dependency not established",
            _ => return None,
        };
        Some(description)
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        ErrorCode::new(code)
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        ErrorCode(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.describe() {
            Some(description) => write!(f, "{} ({})", self.0, description),
            None => f.write_str(&self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_clear() {
        assert!(ErrorCode::clear().is_clear());
        assert!(ErrorCode::from("0").is_clear());
    }

    #[test]
    fn non_zero_is_not_clear() {
        assert!(!ErrorCode::from("101").is_clear());
        assert!(!ErrorCode::from("00").is_clear());
        assert!(!ErrorCode::from("").is_clear());
        assert_eq!(ErrorCode::from("101").as_str(), "101");
    }

    #[test]
    fn display_includes_known_description() {
        assert_eq!(
            ErrorCode::from("201").to_string(),
            "201 (invalid argument error)"
        );
    }

    #[test]
    fn display_falls_back_for_unknown_codes() {
        assert_eq!(ErrorCode::from("9999").to_string(), "9999");
    }
}
