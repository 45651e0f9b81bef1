use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;

use crate::constants::defaults;
use crate::errors::ErrorCode;

/// Batch check file: a list of expected outcomes for duration values.
#[derive(Debug, Deserialize)]
pub struct CheckConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cases: Vec<CheckCase>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            ansi: default_ansi(),
        }
    }
}

fn default_level() -> String {
    defaults::LOG_LEVEL.to_string()
}

fn default_ansi() -> bool {
    true
}

/// One expectation. Values may be YAML `null` to exercise absent input.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckCase {
    Validate {
        #[serde(default)]
        name: Option<String>,
        value: Option<String>,
        expect: ErrorCode,
    },
    Compare {
        #[serde(default)]
        name: Option<String>,
        first: Option<String>,
        second: Option<String>,
        #[serde(default)]
        delimiters: Option<Vec<String>>,
        expect: bool,
    },
    Parse {
        #[serde(default)]
        name: Option<String>,
        value: String,
        expect: Option<f64>,
    },
}

impl CheckCase {
    pub fn kind(&self) -> &'static str {
        match self {
            CheckCase::Validate { .. } => "validate",
            CheckCase::Compare { .. } => "compare",
            CheckCase::Parse { .. } => "parse",
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            CheckCase::Validate { name, .. }
            | CheckCase::Compare { name, .. }
            | CheckCase::Parse { name, .. } => name.as_deref(),
        }
    }
}

impl CheckConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read check file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse check file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self, anyhow::Error> {
        let config: CheckConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
logging:
  level: debug
  ansi: false
cases:
  - kind: validate
    name: bare prefix
    value: "P"
    expect: TYPE_MISMATCH
  - kind: validate
    value: null
    expect: UNKNOWN_EXCEPTION
  - kind: compare
    first: "P1D"
    second: "PT24H"
    expect: true
  - kind: compare
    first: "P1D"
    second: "P1D"
    delimiters: ["x"]
    expect: false
  - kind: parse
    value: "PT1.567S"
    expect: 1.56
  - kind: parse
    value: "PXY"
    expect: null
"#;

    #[test]
    fn test_parse_sample_config() {
        let config = CheckConfig::from_yaml(SAMPLE).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.ansi);
        assert_eq!(config.cases.len(), 6);

        assert_eq!(
            config.cases[0],
            CheckCase::Validate {
                name: Some("bare prefix".to_string()),
                value: Some("P".to_string()),
                expect: ErrorCode::TypeMismatch,
            }
        );
        assert_eq!(config.cases[1].name(), None);
        assert_eq!(config.cases[3].kind(), "compare");
        assert_eq!(
            config.cases[5],
            CheckCase::Parse {
                name: None,
                value: "PXY".to_string(),
                expect: None,
            }
        );
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = CheckConfig::from_yaml("cases: []").unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.ansi);
        assert!(config.cases.is_empty());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = CheckConfig::from_yaml("cases:\n  - kind: format\n    value: P1D\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = CheckConfig::load(file.path()).unwrap();
        assert_eq!(config.cases.len(), 6);
    }

    #[test]
    fn test_load_missing_file() {
        let result = CheckConfig::load("/non/existent/durations.yaml");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read check file"));
    }
}
