//! Placeholder values for keys that have no translation yet.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

use crate::core::locale::{LocaleSet, get_text};

/// Known translations, indexed by key segment and then by language.
pub type TranslationTable = BTreeMap<String, BTreeMap<String, String>>;

/// Keys that look like content rather than translatable text.
static SKIP_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\.(com|org|net|jp|info)$",
        r"@",
        r"^https?://",
        r"\$\{",
        r"(?i)\.[a-z]{2,4}$",
        r"^[A-Z_]{2,}$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Returns true if a missing key looks like an address, domain or file name
/// and should not get a placeholder.
pub fn should_skip_key(key: &str) -> bool {
    SKIP_REGEXES.iter().any(|re| re.is_match(key))
}

pub fn default_translations() -> TranslationTable {
    let rows: [(&str, [&str; 3]); 5] = [
        ("button", ["button", "ボタン", "按钮"]),
        ("submit", ["Submit", "送信", "提交"]),
        ("cancel", ["Cancel", "キャンセル", "取消"]),
        ("loading", ["Loading...", "読み込み中...", "加载中..."]),
        ("error", ["Error", "エラー", "错误"]),
    ];

    rows.iter()
        .map(|(segment, values)| {
            let per_language = ["en", "jp", "zh"]
                .iter()
                .zip(values.iter())
                .map(|(lang, value)| (lang.to_string(), value.to_string()))
                .collect();
            (segment.to_string(), per_language)
        })
        .collect()
}

/// Builds the value written for a key in a language that lacks it.
pub struct Placeholders<'a> {
    language_priority: &'a [String],
    table: &'a TranslationTable,
}

impl<'a> Placeholders<'a> {
    pub fn new(language_priority: &'a [String], table: &'a TranslationTable) -> Self {
        Self {
            language_priority,
            table,
        }
    }

    /// Languages to consult for a source value: the configured priority
    /// first, then every other loaded language in sorted order.
    fn source_order<'s>(&self, locales: &'s LocaleSet) -> Vec<&'s str> {
        let mut order: Vec<&str> = Vec::with_capacity(locales.len());
        for lang in self.language_priority {
            if let Some((code, _)) = locales.files.get_key_value(lang.as_str())
                && !order.contains(&code.as_str())
            {
                order.push(code.as_str());
            }
        }
        for lang in locales.languages() {
            if !order.contains(&lang) {
                order.push(lang);
            }
        }
        order
    }

    /// First non-empty string value of `key` in priority order.
    pub fn source_value(&self, key: &str, locales: &LocaleSet) -> Option<String> {
        self.source_order(locales).into_iter().find_map(|lang| {
            locales
                .get(lang)
                .and_then(|file| get_text(&file.tree, key))
                .map(str::to_string)
        })
    }

    /// Value for `key` in `language`: a known translation of the key's last
    /// segment, else the source value (or the key itself) tagged with the
    /// upper-cased language code.
    pub fn value_for(&self, key: &str, language: &str, source: Option<&str>) -> String {
        let segment = key.rsplit('.').next().unwrap_or(key);
        if let Some(known) = self.table.get(segment).and_then(|row| row.get(language)) {
            return known.clone();
        }
        format!("[{}] {}", language.to_uppercase(), source.unwrap_or(key))
    }
}
