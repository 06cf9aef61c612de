use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod pipeline_config;
pub mod records;
pub mod schema;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use pipeline_config::{
    load_pipeline_config, PipelineConfig, ScrapingConfig, VerificationConfig,
};
pub use records::{LeadOrder, OrderRef, OrderStatus, RawLead, ScrapeTarget, VerifiedLead};
pub use schema::{
    ORDER_HEADERS, RAW_HEADERS, SCHEMA_VERSION, TIMESTAMP_FORMAT, VERIFIED_HEADERS,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid EMAIL_REGEX pattern \"{pattern}\": {source}")]
    EmailRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid configuration: {0}")]
    Validation(String),
}
