//! Generator configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use protodoc_text::ReferencePolicy;
use serde::{Deserialize, Serialize};

use crate::ProtodocError;

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Configuration for hypertext generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtodocConfig {
    /// Specification file name used when the input path is a directory.
    #[serde(default = "default_input")]
    pub input: String,

    /// HTML file name used when the output path is a directory.
    #[serde(default = "default_output")]
    pub output: String,

    /// Prefix of section anchor ids (`s` gives `#s4.2`).
    #[serde(default = "default_anchor_prefix")]
    pub anchor_prefix: String,

    /// How references to unknown sections are rendered.
    #[serde(default)]
    pub references: ReferencePolicy,

    /// Whether to run the consistency check while rendering.
    #[serde(default = "default_check")]
    pub check: bool,

    /// Custom page template replacing the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    /// Base directory for resolving relative paths.
    /// This is usually the directory containing the configuration file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_input() -> String {
    "native_protocol_v5.spec".to_string()
}

fn default_output() -> String {
    "native_protocol_v5.html".to_string()
}

fn default_anchor_prefix() -> String {
    "s".to_string()
}

fn default_check() -> bool {
    true
}

impl ProtodocConfig {
    /// Configuration file names searched by [`ProtodocConfig::discover`], in order.
    pub const CONFIG_FILES: [&'static str; 2] = [".protodoc.jsonc", ".protodoc.json"];

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            anchor_prefix: default_anchor_prefix(),
            references: ReferencePolicy::default(),
            check: default_check(),
            template: None,
            base_dir: None,
        }
    }

    /// Finds a configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads configuration from a file.
    ///
    /// Supports `.protodoc.jsonc`, `.protodoc.json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProtodocError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ProtodocError::config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;

        if let Some(parent) = path.parent() {
            config.base_dir = Some(parent.to_path_buf());
        }

        Ok(config)
    }

    /// Parses configuration from a JSON (comments allowed) string with schema validation.
    pub fn from_json(json: &str) -> Result<Self, ProtodocError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| ProtodocError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(ProtodocError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| ProtodocError::config(format!("Invalid config: {}", e)))
    }

    /// Returns the custom template path, resolved against the config directory.
    pub fn template_path(&self) -> Option<PathBuf> {
        let template = self.template.as_ref()?;
        match &self.base_dir {
            Some(base) if template.is_relative() => Some(base.join(template)),
            _ => Some(template.clone()),
        }
    }

    /// Resolves the specification path: directories get the configured input file name.
    pub fn input_path(&self, path: &Path) -> PathBuf {
        if path.is_dir() {
            path.join(&self.input)
        } else {
            path.to_path_buf()
        }
    }

    /// Resolves the output path: directories get the configured output file name.
    pub fn output_path(&self, path: &Path) -> PathBuf {
        if path.is_dir() {
            path.join(&self.output)
        } else {
            path.to_path_buf()
        }
    }
}

impl Default for ProtodocConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_config_new() {
        let config = ProtodocConfig::new();
        assert_eq!(config.input, "native_protocol_v5.spec");
        assert_eq!(config.output, "native_protocol_v5.html");
        assert_eq!(config.anchor_prefix, "s");
        assert_eq!(config.references, ReferencePolicy::Lenient);
        assert!(config.check);
        assert!(config.template.is_none());
    }

    #[test]
    fn test_config_from_empty_json() {
        let config = ProtodocConfig::from_json("{}").unwrap();
        assert_eq!(config, ProtodocConfig::default());
    }

    #[test]
    fn test_config_from_blank_input() {
        let config = ProtodocConfig::from_json("").unwrap();
        assert_eq!(config, ProtodocConfig::default());
    }

    #[test]
    fn test_config_from_jsonc() {
        let json = r#"{
            // link only sections that exist
            "references": "strict",
            "anchor_prefix": "sec-",
            "check": false,
            "input": "v4.spec",
        }"#;

        let config = ProtodocConfig::from_json(json).unwrap();
        assert_eq!(config.references, ReferencePolicy::Strict);
        assert_eq!(config.anchor_prefix, "sec-");
        assert!(!config.check);
        assert_eq!(config.input, "v4.spec");
        assert_eq!(config.output, "native_protocol_v5.html");
    }

    #[rstest]
    #[case::unknown_property(r#"{ "inputs": "x" }"#, "Config validation failed")]
    #[case::type_mismatch(r#"{ "check": "yes" }"#, "Config validation failed")]
    #[case::invalid_enum_value(r#"{ "references": "loose" }"#, "Config validation failed")]
    #[case::not_json("{ not json", "Invalid JSON")]
    fn test_config_validation_errors(#[case] json: &str, #[case] expected_error_part: &str) {
        let result = ProtodocConfig::from_json(json);
        assert!(result.is_err(), "Expected error for JSON: {}", json);
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains(expected_error_part),
            "Error message '{}' should contain '{}'",
            err,
            expected_error_part
        );
    }

    #[test]
    fn test_config_from_file_sets_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".protodoc.json");
        fs::write(&path, r#"{ "template": "page.html" }"#).unwrap();

        let config = ProtodocConfig::from_file(&path).unwrap();
        assert_eq!(config.base_dir.as_deref(), Some(dir.path()));
        assert_eq!(config.template_path(), Some(dir.path().join("page.html")));
    }

    #[test]
    fn test_absolute_template_path_is_kept() {
        let config = ProtodocConfig {
            template: Some(PathBuf::from("/tmp/page.html")),
            base_dir: Some(PathBuf::from("/etc")),
            ..ProtodocConfig::default()
        };
        assert_eq!(config.template_path(), Some(PathBuf::from("/tmp/page.html")));
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(ProtodocConfig::discover(dir.path()), None);

        fs::write(dir.path().join(".protodoc.json"), "{}").unwrap();
        assert_eq!(
            ProtodocConfig::discover(dir.path()),
            Some(dir.path().join(".protodoc.json"))
        );

        fs::write(dir.path().join(".protodoc.jsonc"), "{}").unwrap();
        assert_eq!(
            ProtodocConfig::discover(dir.path()),
            Some(dir.path().join(".protodoc.jsonc"))
        );
    }

    #[test]
    fn test_input_and_output_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config = ProtodocConfig::new();

        assert_eq!(
            config.input_path(dir.path()),
            dir.path().join("native_protocol_v5.spec")
        );
        assert_eq!(
            config.output_path(dir.path()),
            dir.path().join("native_protocol_v5.html")
        );

        let file = dir.path().join("custom.spec");
        assert_eq!(config.input_path(&file), file);
    }
}
