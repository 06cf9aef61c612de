//! Pipeline configuration: the YAML resource defining validation parameters
//! and the default scrape target.
//!
//! The pipeline cannot define "valid" without this resource, so a missing
//! file or key is fatal; no defaults, no retry.

use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::ConfigError;

/// Raw YAML shape of the configuration resource. Key names mirror the
/// resource itself (`VERIFICATION.EMAIL_REGEX` etc.), not Rust conventions.
#[derive(Debug, Deserialize)]
struct PipelineConfigFile {
    #[serde(rename = "VERIFICATION")]
    verification: VerificationSection,
    #[serde(rename = "SCRAPING_CONFIG")]
    scraping: ScrapingSection,
}

#[derive(Debug, Deserialize)]
struct VerificationSection {
    #[serde(rename = "EMAIL_REGEX")]
    email_regex: String,
    #[serde(rename = "MIN_PHONE_LENGTH")]
    min_phone_length: usize,
    /// Explicit bypass switch for the email gate. Historically this gate was
    /// disabled by editing the verification code; the flag makes any bypass
    /// visible in configuration instead.
    #[serde(rename = "REQUIRE_EMAIL_VALIDATION", default = "default_true")]
    require_email_validation: bool,
}

#[derive(Debug, Deserialize)]
struct ScrapingSection {
    #[serde(rename = "PRIMARY_NICHE")]
    primary_niche: String,
    #[serde(rename = "PRIMARY_CITY")]
    primary_city: String,
    #[serde(rename = "MAX_LEADS_PER_RUN", default = "default_max_leads")]
    max_leads_per_run: u32,
}

fn default_true() -> bool {
    true
}

fn default_max_leads() -> u32 {
    25
}

/// Validated verification parameters with the email pattern pre-compiled.
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Compiled email pattern, anchored for full-string matching.
    pub email_regex: Regex,
    /// Minimum digit count a phone field must contain after stripping
    /// non-digit characters.
    pub min_phone_digits: usize,
    /// When `false`, the email gate passes every record through.
    pub require_email_validation: bool,
}

/// Validated scrape-target defaults.
#[derive(Debug, Clone)]
pub struct ScrapingConfig {
    pub primary_niche: String,
    pub primary_city: String,
    /// Max count for the synthesized maintenance target.
    pub max_leads_per_run: u32,
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub verification: VerificationConfig,
    pub scraping: ScrapingConfig,
}

/// Load and validate the pipeline configuration from a YAML file.
///
/// The configured `EMAIL_REGEX` is wrapped in `^(?:…)$` before compiling, so
/// the email gate is a full anchored match whether or not the operator's
/// pattern carries its own anchors.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed, a required
/// key is absent, the pattern does not compile, `MIN_PHONE_LENGTH` is zero,
/// or the primary niche/city is blank.
pub fn load_pipeline_config(path: &Path) -> Result<PipelineConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: PipelineConfigFile = serde_yaml::from_str(&content)?;
    validate(&file)?;

    let anchored = format!("^(?:{})$", file.verification.email_regex);
    let email_regex = Regex::new(&anchored).map_err(|e| ConfigError::EmailRegex {
        pattern: file.verification.email_regex.clone(),
        source: e,
    })?;

    Ok(PipelineConfig {
        verification: VerificationConfig {
            email_regex,
            min_phone_digits: file.verification.min_phone_length,
            require_email_validation: file.verification.require_email_validation,
        },
        scraping: ScrapingConfig {
            primary_niche: file.scraping.primary_niche,
            primary_city: file.scraping.primary_city,
            max_leads_per_run: file.scraping.max_leads_per_run,
        },
    })
}

fn validate(file: &PipelineConfigFile) -> Result<(), ConfigError> {
    if file.verification.min_phone_length == 0 {
        return Err(ConfigError::Validation(
            "MIN_PHONE_LENGTH must be at least 1".to_string(),
        ));
    }
    if file.scraping.primary_niche.trim().is_empty() {
        return Err(ConfigError::Validation(
            "PRIMARY_NICHE must be non-empty".to_string(),
        ));
    }
    if file.scraping.primary_city.trim().is_empty() {
        return Err(ConfigError::Validation(
            "PRIMARY_CITY must be non-empty".to_string(),
        ));
    }
    if file.scraping.max_leads_per_run == 0 {
        return Err(ConfigError::Validation(
            "MAX_LEADS_PER_RUN must be at least 1".to_string(),
        ));
    }
    Ok(())
}
