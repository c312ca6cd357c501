use crate::{
    core::{extract::ExtractedKeys, locale::LocaleSet},
    issues::{ParseErrorFileType, ParseErrorIssue},
};

/// Collect unreadable source files and locale files that failed to load.
pub fn check_parse_errors(extracted: &ExtractedKeys, locales: &LocaleSet) -> Vec<ParseErrorIssue> {
    let source = extracted.unreadable.iter().map(|f| ParseErrorIssue {
        file_path: f.file_path.clone(),
        error: f.error.clone(),
        file_type: ParseErrorFileType::Source,
    });

    let locale = locales.degraded_files().map(|f| ParseErrorIssue {
        file_path: f.path.to_string_lossy().into_owned(),
        error: f.load_error.clone().unwrap_or_default(),
        file_type: ParseErrorFileType::Locale,
    });

    source.chain(locale).collect()
}
