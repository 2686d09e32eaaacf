use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::log::LogLevel;

pub const DEFAULT_TYPEWRITER_LINES: [&str; 2] = ["Web Developer💎", "inbox Me!💎"];
pub const DEFAULT_TYPEWRITER_INTERVAL_MS: u64 = 80;
pub const DEFAULT_REVEAL_MARGIN_PX: i32 = -50;
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

pub const TYPEWRITER_INTERVAL_MS_BOUNDS: (u64, u64) = (16, 1_000);
pub const REVEAL_MARGIN_PX_BOUNDS: (i32, i32) = (-400, 400);

pub const PAGE_CONFIG_ELEMENT_ID: &str = "page-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("page config is not a JSON object: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("no #page-config element in the document")]
    MissingConfigElement,
}

/// Runtime settings for the page, read from the inline JSON block in
/// `index.html`. Every field is optional there, and a field with the wrong
/// type falls back to its default without affecting the others.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub typewriter_lines: [String; 2],
    pub typewriter_interval_ms: u64,
    pub reveal_margin_px: i32,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            typewriter_lines: DEFAULT_TYPEWRITER_LINES.map(str::to_string),
            typewriter_interval_ms: DEFAULT_TYPEWRITER_INTERVAL_MS,
            reveal_margin_px: DEFAULT_REVEAL_MARGIN_PX,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let fields: Map<String, Value> = serde_json::from_str(trimmed)?;
        Ok(Self::from_fields(&fields))
    }

    fn from_fields(fields: &Map<String, Value>) -> Self {
        let typewriter_lines = field::<Vec<String>>(fields, "typewriterLines")
            .and_then(|lines| <[String; 2]>::try_from(lines).ok())
            .unwrap_or_else(|| DEFAULT_TYPEWRITER_LINES.map(str::to_string));
        let typewriter_interval_ms = value_with_bounds(
            field(fields, "typewriterIntervalMs"),
            DEFAULT_TYPEWRITER_INTERVAL_MS,
            TYPEWRITER_INTERVAL_MS_BOUNDS,
        );
        let reveal_margin_px = value_with_bounds(
            field(fields, "revealMarginPx"),
            DEFAULT_REVEAL_MARGIN_PX,
            REVEAL_MARGIN_PX_BOUNDS,
        );
        let log_level = parse_log_level(
            field::<String>(fields, "logLevel").as_deref(),
            DEFAULT_LOG_LEVEL,
        );

        Self {
            typewriter_lines,
            typewriter_interval_ms,
            reveal_margin_px,
            log_level,
        }
    }
}

/// `None` when `key` is absent or holds a value of another type.
fn field<T: DeserializeOwned>(fields: &Map<String, Value>, key: &str) -> Option<T> {
    fields
        .get(key)
        .and_then(|value| T::deserialize(value).ok())
}

fn value_with_bounds<T: PartialOrd + Copy>(value: Option<T>, default: T, bounds: (T, T)) -> T {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(value: Option<&str>, default: LogLevel) -> LogLevel {
    match value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("debug") => LogLevel::Debug,
        Some("info") => LogLevel::Info,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = PageConfig::from_json("{}").expect("empty object parses");
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn blank_input_yields_defaults() {
        let config = PageConfig::from_json("  \n").expect("blank input parses");
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn in_bounds_values_are_kept() {
        let config = PageConfig::from_json(
            r#"{
                "typewriterLines": ["Rustacean", "Say hi"],
                "typewriterIntervalMs": 120,
                "revealMarginPx": -80,
                "logLevel": "DEBUG"
            }"#,
        )
        .expect("valid config");

        assert_eq!(config.typewriter_lines, ["Rustacean".to_string(), "Say hi".to_string()]);
        assert_eq!(config.typewriter_interval_ms, 120);
        assert_eq!(config.reveal_margin_px, -80);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_bounds_interval_falls_back_to_default() {
        let config = PageConfig::from_json(r#"{"typewriterIntervalMs": 5}"#).expect("valid config");
        assert_eq!(config.typewriter_interval_ms, DEFAULT_TYPEWRITER_INTERVAL_MS);

        let config = PageConfig::from_json(r#"{"revealMarginPx": 9000}"#).expect("valid config");
        assert_eq!(config.reveal_margin_px, DEFAULT_REVEAL_MARGIN_PX);
    }

    #[test]
    fn wrong_line_count_falls_back_to_default_lines() {
        let config = PageConfig::from_json(r#"{"typewriterLines": ["only one"]}"#).expect("valid config");
        assert_eq!(config.typewriter_lines, DEFAULT_TYPEWRITER_LINES.map(str::to_string));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = PageConfig::from_json(r#"{"logLevel": "trace"}"#).expect("valid config");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn mistyped_field_only_resets_itself() {
        let config = PageConfig::from_json(
            r#"{
                "typewriterLines": ["Rustacean", 7],
                "typewriterIntervalMs": "80",
                "revealMarginPx": -80,
                "logLevel": "debug"
            }"#,
        )
        .expect("valid config");

        assert_eq!(config.typewriter_lines, DEFAULT_TYPEWRITER_LINES.map(str::to_string));
        assert_eq!(config.typewriter_interval_ms, DEFAULT_TYPEWRITER_INTERVAL_MS);
        assert_eq!(config.reveal_margin_px, -80);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn negative_or_fractional_interval_falls_back() {
        let documents = [
            r#"{"typewriterIntervalMs": -80, "revealMarginPx": 10}"#,
            r#"{"typewriterIntervalMs": 80.5, "revealMarginPx": 10}"#,
        ];
        for raw in documents {
            let config = PageConfig::from_json(raw).expect("valid config");
            assert_eq!(config.typewriter_interval_ms, DEFAULT_TYPEWRITER_INTERVAL_MS, "{raw}");
            assert_eq!(config.reveal_margin_px, 10, "{raw}");
        }
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = PageConfig::from_json("{ typewriterIntervalMs: ");
        assert!(matches!(result, Err(ConfigError::Malformed(_))));
    }

    #[test]
    fn non_object_document_is_rejected() {
        let result = PageConfig::from_json("[80, -50]");
        assert!(matches!(result, Err(ConfigError::Malformed(_))));
    }
}
