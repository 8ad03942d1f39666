//! Error codes for all checker diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E3001`) with the first digit
//! indicating the checking phase.

use std::fmt;

/// Error codes for all checker diagnostics.
///
/// Format: E#### / N#### where the first digit indicates phase:
/// - E2xxx: Statement checking errors
/// - E3xxx: Pattern errors
/// - N1xxx: Informational notes
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Statement Errors (E2xxx)
    /// Incompatible types in assignment
    E2001,

    // Pattern Errors (E3xxx)
    /// Name in a pattern or expression does not resolve
    E3001,
    /// Class pattern target is not a type
    E3002,
    /// Too many positional patterns for class pattern
    E3003,
    /// Duplicate keyword pattern
    E3004,
    /// Keyword already matches a positional pattern
    E3005,
    /// Class doesn't define match fields
    E3006,
    /// Match fields are not declared final (note)
    E3007,
    /// Match fields are not all string literals (note)
    E3008,
    /// Capture type is incompatible with the declared type
    E3009,
    /// Multiple assignments to a name in one pattern
    E3010,
    /// Alternative patterns bind different names
    E3011,
    /// Class pattern refers to a type alias with type parameters
    E3012,

    // Notes (N1xxx)
    /// Revealed type
    N1001,
}

impl ErrorCode {
    /// All error code variants, for iteration and lookup.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E2001,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E3004,
        ErrorCode::E3005,
        ErrorCode::E3006,
        ErrorCode::E3007,
        ErrorCode::E3008,
        ErrorCode::E3009,
        ErrorCode::E3010,
        ErrorCode::E3011,
        ErrorCode::E3012,
        ErrorCode::N1001,
    ];

    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
            ErrorCode::E3007 => "E3007",
            ErrorCode::E3008 => "E3008",
            ErrorCode::E3009 => "E3009",
            ErrorCode::E3010 => "E3010",
            ErrorCode::E3011 => "E3011",
            ErrorCode::E3012 => "E3012",
            ErrorCode::N1001 => "N1001",
        }
    }

    /// Short kebab-case name used in logs and test expectations.
    pub fn slug(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "incompatible-assignment",
            ErrorCode::E3001 => "unresolved-name",
            ErrorCode::E3002 => "not-a-type",
            ErrorCode::E3003 => "too-many-positionals",
            ErrorCode::E3004 => "duplicate-keyword",
            ErrorCode::E3005 => "keyword-shadows-positional",
            ErrorCode::E3006 => "missing-match-fields",
            ErrorCode::E3007 => "non-final-match-fields",
            ErrorCode::E3008 => "non-literal-match-fields",
            ErrorCode::E3009 => "incompatible-capture-type",
            ErrorCode::E3010 => "duplicate-capture-name",
            ErrorCode::E3011 => "alternative-binds-different-names",
            ErrorCode::E3012 => "type-alias-with-parameters-in-class-pattern",
            ErrorCode::N1001 => "reveal-type",
        }
    }

    /// Check if this code belongs to the pattern phase.
    pub fn is_pattern_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E3003"` or `"e3003"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(())
    }
}
