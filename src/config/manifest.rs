use crate::domain::model::ManifestFormat;
use crate::utils::error::{BatchError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_FILENAME_BASE: &str = "fedex_shipments";

/// Deployment settings for the shipment tool, loaded from a TOML file by
/// the hosting application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    pub manifest: ManifestSection,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestSection {
    pub format: ManifestFormat,
    pub filename_base: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub dir: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            manifest: ManifestSection {
                format: ManifestFormat::Carrier,
                filename_base: None,
            },
            output: None,
        }
    }
}

impl ManifestConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BatchError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values; unset
    /// variables are left verbatim.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn format(&self) -> ManifestFormat {
        self.manifest.format
    }

    pub fn filename_base(&self) -> &str {
        self.manifest
            .filename_base
            .as_deref()
            .unwrap_or(DEFAULT_FILENAME_BASE)
    }

    pub fn output_dir(&self) -> Option<&str> {
        self.output.as_ref().map(|o| o.dir.as_str())
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string(
            "manifest.filename_base",
            self.filename_base(),
        )?;

        if let Some(dir) = self.output_dir() {
            crate::utils::validation::validate_path("output.dir", dir)?;
        }

        Ok(())
    }
}

impl Validate for ManifestConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
