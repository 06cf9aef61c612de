use crate::app_config::AppConfig;

/// Load process configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars. Every variable has a default, so this never fails.
#[must_use]
pub fn load_app_config() -> AppConfig {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load process configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
#[must_use]
pub fn load_app_config_from_env() -> AppConfig {
    build_app_config(|key| std::env::var(key))
}

/// Build process configuration using the provided env-var lookup function.
///
/// Decoupled from the actual environment so it can be tested with a pure
/// `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> AppConfig
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    AppConfig {
        config_path: or_default("LEADMART_CONFIG_PATH", "./config/config.yaml").into(),
        raw_path: or_default("LEADMART_RAW_PATH", "./data/raw/latest_raw_scrape.csv").into(),
        verified_path: or_default(
            "LEADMART_VERIFIED_PATH",
            "./data/verified/verified_leads.csv",
        )
        .into(),
        orders_path: or_default("LEADMART_ORDERS_PATH", "./data/orders/lead_orders.csv").into(),
        log_level: or_default("LEADMART_LOG_LEVEL", "info"),
    }
}
