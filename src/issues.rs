//! Issue types for i18n analysis results.
//!
//! Each issue is self-contained with everything the reporter needs to
//! display it. Issues only describe problems; fixing them is the job of
//! `core::repair`.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingKey,
    InconsistentKey,
    UnusedKey,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::InconsistentKey => write!(f, "inconsistent-key"),
            Rule::UnusedKey => write!(f, "unused-key"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Translation key used in source but defined in no locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    pub key: String,
    /// Source files referencing the key, sorted.
    pub files: Vec<String>,
    /// True if the key was generated from a dynamic key template.
    pub dynamic: bool,
}

impl MissingKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// Key defined in some locale files but not in others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InconsistentKeyIssue {
    pub key: String,
    /// First locale file that defines the key.
    pub file_path: String,
    /// Languages lacking the key.
    pub missing_in: Vec<String>,
    /// Languages defining the key.
    pub present_in: Vec<String>,
}

impl InconsistentKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::InconsistentKey
    }
}

/// Key defined in locale files but not referenced by any source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedKeyIssue {
    pub key: String,
    /// First locale file that defines the key.
    pub file_path: String,
    /// Languages defining the key.
    pub languages: Vec<String>,
}

impl UnusedKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedKey
    }
}

/// Type of file that failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorFileType {
    /// A source file that could not be read. Its keys are simply not seen.
    Source,
    /// A locale file that could not be read or parsed. It is analyzed as
    /// empty and never written back.
    Locale,
}

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
    pub file_type: ParseErrorFileType,
}

impl ParseErrorIssue {
    pub fn severity(&self) -> Severity {
        match self.file_type {
            ParseErrorFileType::Source => Severity::Warning,
            ParseErrorFileType::Locale => Severity::Error,
        }
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An i18n issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingKey(MissingKeyIssue),
    InconsistentKey(InconsistentKeyIssue),
    UnusedKey(UnusedKeyIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards calls on
/// `Issue` to the wrapped type.
#[enum_dispatch]
pub trait Report {
    /// File the issue points at.
    fn location(&self) -> &str;

    /// Primary message to display (key name or error).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingKeyIssue {
    fn location(&self) -> &str {
        self.files.first().map_or("<source>", String::as_str)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let origin = if self.dynamic {
            "generated from a dynamic key template"
        } else {
            "used in source"
        };
        let more = match self.files.len() {
            0 | 1 => String::new(),
            n => format!(" (and {} more file(s))", n - 1),
        };
        Some(format!("{}{}, but defined in no locale file", origin, more))
    }
}

impl Report for InconsistentKeyIssue {
    fn location(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "missing in: {} (present in: {})",
            self.missing_in.join(", "),
            self.present_in.join(", ")
        ))
    }
}

impl Report for UnusedKeyIssue {
    fn location(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("defined in: {}", self.languages.join(", ")))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        self.severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        match self.file_type {
            ParseErrorFileType::Source => None,
            ParseErrorFileType::Locale => {
                Some("analyzed as empty; this file will not be written".to_string())
            }
        }
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Parse errors first, then by rule, file and key.
        let not_parse = |i: &Issue| !matches!(i, Issue::ParseError(_));
        not_parse(self)
            .cmp(&not_parse(other))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.location().cmp(other.location()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
