use std::path::PathBuf;

/// Process-level configuration: resource paths and log level.
///
/// Every field has a default, so loading never fails; the pipeline's fatal
/// configuration errors come from the YAML resource in
/// [`crate::pipeline_config`] instead.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the YAML pipeline configuration resource.
    pub config_path: PathBuf,
    /// Path of the raw batch CSV written by the scrape stage.
    pub raw_path: PathBuf,
    /// Path of the verified output CSV read by the dashboard.
    pub verified_path: PathBuf,
    /// Path of the order queue CSV.
    pub orders_path: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}
