//! Regular expressions used to find key candidates in source text.

use std::sync::LazyLock;

use regex::Regex;

/// `t("key")`, `t('key')` or `` t(`key`) `` with a single literal argument.
pub(crate) static LITERAL_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bt\s*\(\s*["'`]([^"'`]+)["'`]\s*\)"#).unwrap());

/// `getTranslation(translations, "key")` helper calls.
pub(crate) static HELPER_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bgetTranslation\s*\([^,]+,\s*["'`]([^"'`]+)["'`]\s*\)"#).unwrap()
});

/// Any quoted literal shaped like `identifier(.identifier)+`.
pub(crate) static DOTTED_LITERAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["'`]([a-zA-Z][a-zA-Z0-9_]*(?:\.[a-zA-Z][a-zA-Z0-9_]*)+?)["'`]"#).unwrap()
});

/// Literals that match the candidate patterns but are not translation keys.
static REJECT_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^https?://",
        r"^[A-Z_]{2,}$",
        r"^[0-9]+$",
        r"(?i)^[a-f0-9]{8,}$",
        r"\s",
        r"^\./",
        r"^/",
        r"(?i)\.(jpg|jpeg|png|gif|svg|mp3|mp4|pdf)$",
        r"\$\{",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

const MAX_KEY_LEN: usize = 99;

/// Returns true if a candidate literal should be treated as a translation key.
///
/// # Examples
///
/// ```
/// use i18n_sweep::core::extract::is_valid_key;
///
/// assert!(is_valid_key("about.title"));
/// assert!(is_valid_key("submit"));
/// assert!(!is_valid_key("https://example.com"));
/// assert!(!is_valid_key("API_KEY"));
/// assert!(!is_valid_key("./logo.png"));
/// assert!(!is_valid_key("about.genres.${genre}.title"));
/// ```
pub fn is_valid_key(candidate: &str) -> bool {
    (1..=MAX_KEY_LEN).contains(&candidate.len())
        && !REJECT_REGEXES.iter().any(|re| re.is_match(candidate))
}
