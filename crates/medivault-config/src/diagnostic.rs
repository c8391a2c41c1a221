// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy key suggestions.
//!
//! Converts figment extraction failures into miette diagnostics with
//! "did you mean?" hints. Every config field carries a serde default, so
//! extraction can only fail on unknown keys or wrong value types; the
//! bridge only has to handle those two shapes plus a catch-all. The
//! config is a flat set of four TOML sections, which keeps span lookup
//! to finding a `[section]` header and the offending key below it.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
/// 0.75 catches common typos like `base_ulr` -> `base_url` while
/// filtering noise.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with rich diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(medivault::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// Comma-separated valid keys for the section.
        valid_keys: String,
        /// Where the key appears in the source, when it could be located.
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        /// The TOML source the key came from.
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A configuration value has the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(medivault::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        /// The key with the wrong type, dotted (e.g. `records.max_file_bytes`).
        key: String,
        /// Description of the mismatch.
        detail: String,
        /// What type was expected.
        expected: String,
    },

    /// A validation error for a config value.
    #[error("validation error: {message}")]
    #[diagnostic(code(medivault::config::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(medivault::config::other))]
    Other(String),
}

fn unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {valid_keys}"),
        None => format!("valid keys: {valid_keys}"),
    }
}

/// Convert a `figment::Error` into a list of `ConfigError` diagnostics.
///
/// A figment error may aggregate several failures; each becomes one
/// diagnostic. Unknown-field errors get a fuzzy suggestion and, when the
/// offending source is available, a span pointing at the key.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| match &error.kind {
            Kind::UnknownField(field, expected) => {
                let valid_keys: Vec<&str> = expected.to_vec();
                let section = error.path.first().map(String::as_str);
                let (span, src) = locate_in_sources(toml_sources, &error, section, field);

                ConfigError::UnknownKey {
                    key: field.clone(),
                    suggestion: suggest_key(field, &valid_keys),
                    valid_keys: valid_keys.join(", "),
                    span,
                    src,
                }
            }
            Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                key: error.path.join("."),
                detail: format!("found {actual}"),
                expected: expected.to_string(),
            },
            _ => ConfigError::Other(error.to_string()),
        })
        .collect()
}

/// Pick the TOML source the error came from and locate the key in it.
///
/// Prefers the file named in the error's figment metadata; when the
/// error has no file (string-based extraction) and exactly one source
/// was supplied, that source is used.
fn locate_in_sources(
    sources: &[(String, String)],
    error: &figment::error::Error,
    section: Option<&str>,
    key: &str,
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let from_metadata = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .and_then(|s| match s {
            figment::Source::File(path) => {
                let path = path.display().to_string();
                sources.iter().find(|(name, _)| *name == path)
            }
            _ => None,
        });

    let source = match (from_metadata, sources) {
        (Some(found), _) => Some(found),
        (None, [only]) => Some(only),
        _ => None,
    };

    let Some((name, content)) = source else {
        return (None, None);
    };
    match key_span(content, section, key) {
        Some(span) => (
            Some(span),
            Some(NamedSource::new(name, content.clone())),
        ),
        None => (None, None),
    }
}

/// Find the span of `key = ...` in TOML content.
///
/// With a section name, the search starts after the `[section]` header;
/// without one, it covers the whole document. Only a key at the start of
/// a line followed by `=` matches, so values containing the key name are
/// skipped.
fn key_span(content: &str, section: Option<&str>, key: &str) -> Option<SourceSpan> {
    let start = match section {
        Some(name) => {
            let header = format!("[{name}]");
            content.find(&header)? + header.len()
        }
        None => 0,
    };

    let mut offset = start;
    for line in content[start..].lines() {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                let indent = line.len() - trimmed.len();
                return Some(SourceSpan::new((offset + indent).into(), key.len()));
            }
        }
        offset += line.len() + 1;
    }
    None
}

/// Suggest a similar key name using Jaro-Winkler string similarity.
///
/// Returns the best match above the similarity threshold, or `None` if
/// no valid key is close enough.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|&key| (key, strsim::jaro_winkler(unknown, key)))
        .filter(|&(_, score)| score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(key, _)| key.to_string())
}

/// Render a list of `ConfigError`s to stderr using miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = error;
        if handler.render_report(&mut buf, diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_base_ulr_for_base_url() {
        let valid = &["base_url", "request_timeout_secs", "location_timeout_secs"];
        assert_eq!(suggest_key("base_ulr", valid), Some("base_url".to_string()));
    }

    #[test]
    fn suggest_data_dri_for_data_dir() {
        let valid = &["data_dir"];
        assert_eq!(suggest_key("data_dri", valid), Some("data_dir".to_string()));
    }

    #[test]
    fn no_suggestion_for_distant_typo() {
        let valid = &["base_url", "request_timeout_secs", "fallback_latitude"];
        assert_eq!(suggest_key("zzzzzz", valid), None);
    }

    #[test]
    fn key_span_within_section() {
        let content = "[emergency]\nbase_ulr = \"http://localhost:5000\"\n";
        let span = key_span(content, Some("emergency"), "base_ulr").unwrap();
        assert_eq!(&content[span.offset()..span.offset() + span.len()], "base_ulr");
    }

    #[test]
    fn key_span_ignores_key_inside_value() {
        // `data_dir` appears in a value before the actual key line.
        let content = "[storage]\ncomment = \"data_dir placeholder\"\ndata_dir = \"/tmp\"\n";
        let span = key_span(content, Some("storage"), "data_dir").unwrap();
        assert_eq!(&content[span.offset()..span.offset() + span.len()], "data_dir");
        assert!(span.offset() > content.find("placeholder").unwrap());
    }

    #[test]
    fn key_span_absent_key_is_none() {
        let content = "[records]\nmax_file_bytes = 1024\n";
        assert!(key_span(content, Some("records"), "allowed_types").is_none());
        assert!(key_span(content, Some("portal"), "name").is_none());
    }
}
