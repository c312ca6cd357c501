//! Known dynamic-key templates.
//!
//! Keys built at runtime, such as `` t(`about.genres.${genre}.title`) ``, cannot
//! be recovered from the source text alone. Each template pairs the shape of
//! such a template literal with the closed list of values its interpolation
//! takes, and expands to every concrete key when the shape is found.

use std::{collections::BTreeMap, sync::LazyLock};

use anyhow::{Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches a `${...}` interpolation inside a template shape.
static INTERPOLATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[^}]*\}").unwrap());

/// Matches a `{name}` placeholder inside an expansion pattern.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

/// A dynamic key template as written in the config file.
///
/// ```json
/// {
///   "pattern": "about.genres.${}.title",
///   "expand": "about.genres.{genre}.title",
///   "values": { "genre": ["idol", "jrock"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicKeyTemplate {
    /// Template literal passed to `t()`, with `${...}` marking the interpolation.
    pub pattern: String,
    /// Match `pattern` against the start of the template literal only.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub prefix: bool,
    /// Key to generate, with a `{name}` placeholder per entry in `values`.
    pub expand: String,
    pub values: BTreeMap<String, Vec<String>>,
}

/// A template ready to be matched, with its keys expanded up front.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    pub pattern: String,
    regex: Regex,
    keys: Vec<String>,
}

impl CompiledTemplate {
    pub fn is_match(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl DynamicKeyTemplate {
    pub fn new(pattern: &str, expand: &str, values: &[(&str, &[&str])]) -> Self {
        Self {
            pattern: pattern.to_string(),
            prefix: false,
            expand: expand.to_string(),
            values: values
                .iter()
                .map(|(name, vals)| {
                    (
                        name.to_string(),
                        vals.iter().map(|v| v.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    pub fn with_prefix(mut self) -> Self {
        self.prefix = true;
        self
    }

    pub fn compile(&self) -> Result<CompiledTemplate> {
        Ok(CompiledTemplate {
            pattern: self.pattern.clone(),
            regex: self.build_regex()?,
            keys: self.expand_keys()?,
        })
    }

    fn build_regex(&self) -> Result<Regex> {
        if !INTERPOLATION_REGEX.is_match(&self.pattern) {
            bail!(
                "Dynamic key pattern \"{}\" has no ${{}} interpolation",
                self.pattern
            );
        }

        let body = INTERPOLATION_REGEX
            .split(&self.pattern)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"\$\{[^}]+\}");

        let mut source = format!(r"\bt\s*\(\s*`{}", body);
        if !self.prefix {
            source.push_str(r"`\s*\)");
        }

        Ok(Regex::new(&source)?)
    }

    /// Expand `expand` into every combination of placeholder values.
    ///
    /// Placeholders vary in the order they first appear, leftmost slowest.
    fn expand_keys(&self) -> Result<Vec<String>> {
        let mut names: Vec<&str> = Vec::new();
        for cap in PLACEHOLDER_REGEX.captures_iter(&self.expand) {
            let name = cap.get(1).map_or("", |m| m.as_str());
            if !names.contains(&name) {
                names.push(name);
            }
        }

        let mut keys = vec![self.expand.clone()];
        for name in names {
            let values = match self.values.get(name) {
                Some(values) if !values.is_empty() => values,
                Some(_) => bail!(
                    "Dynamic key pattern \"{}\": no values listed for {{{}}}",
                    self.pattern,
                    name
                ),
                None => bail!(
                    "Dynamic key pattern \"{}\": unknown placeholder {{{}}} in \"{}\"",
                    self.pattern,
                    name,
                    self.expand
                ),
            };

            let token = format!("{{{}}}", name);
            let mut next = Vec::with_capacity(keys.len() * values.len());
            for key in &keys {
                for value in values {
                    next.push(key.replace(&token, value));
                }
            }
            keys = next;
        }

        Ok(keys)
    }
}

pub fn compile_templates(templates: &[DynamicKeyTemplate]) -> Result<Vec<CompiledTemplate>> {
    templates.iter().map(DynamicKeyTemplate::compile).collect()
}

const GENRES: &[&str] = &["idol", "jrock", "jpop", "orchestra", "edm", "bgm"];
const FEATURES: &[&str] = &[
    "custom_music",
    "comprehensive_support",
    "diverse_vocals",
    "multilingual",
    "cross_media",
];
const SERVICES: &[&str] = &["vocal_mixing", "mixing_mastering", "music_production"];
const SERVICE_PROPS: &[&str] = &["title", "subtitle", "description", "price"];

/// The dynamic keys used by the studio site this tool was written for.
pub fn default_dynamic_keys() -> Vec<DynamicKeyTemplate> {
    let mut templates: Vec<DynamicKeyTemplate> = ["content", "title", "subtitle"]
        .iter()
        .map(|field| {
            DynamicKeyTemplate::new(
                &format!("about.genres.${{genre}}.{}", field),
                &format!("about.genres.{{genre}}.{}", field),
                &[("genre", GENRES)],
            )
        })
        .collect();

    templates.extend(["title", "description"].iter().map(|field| {
        DynamicKeyTemplate::new(
            &format!("about.why_choose_us.features.${{feature}}.{}", field),
            &format!("about.why_choose_us.features.{{feature}}.{}", field),
            &[("feature", FEATURES)],
        )
    }));

    templates.push(
        DynamicKeyTemplate::new(
            "music_production_section.services.${service}.",
            "music_production_section.services.{service}.{prop}",
            &[("service", SERVICES), ("prop", SERVICE_PROPS)],
        )
        .with_prefix(),
    );

    templates
}
