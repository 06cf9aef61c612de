use std::path::Path;

use leadmart_core::{LeadOrder, OrderStatus, VERIFIED_HEADERS};

use super::*;

const CONFIG_YAML: &str = r#"
VERIFICATION:
  EMAIL_REGEX: "[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\\.[A-Za-z]{2,}"
  MIN_PHONE_LENGTH: 8
SCRAPING_CONFIG:
  PRIMARY_NICHE: "Marketing Services"
  PRIMARY_CITY: "New York, NY"
  MAX_LEADS_PER_RUN: 20
"#;

fn test_app_config(dir: &Path) -> AppConfig {
    AppConfig {
        config_path: dir.join("config.yaml"),
        raw_path: dir.join("data/raw/latest_raw_scrape.csv"),
        verified_path: dir.join("data/verified/verified_leads.csv"),
        orders_path: dir.join("data/orders/lead_orders.csv"),
        log_level: "info".to_string(),
    }
}

fn write_config(dir: &Path) {
    std::fs::write(dir.join("config.yaml"), CONFIG_YAML).unwrap();
}

fn make_order(niche: &str, city: &str, status: OrderStatus) -> LeadOrder {
    LeadOrder {
        submitted_at: "2026-08-05 18:30:00".to_string(),
        niche: niche.to_string(),
        location: city.to_string(),
        max_count: 10,
        requested_by: "john@example.com".to_string(),
        status,
    }
}

#[test]
fn run_full_publishes_verified_output_with_canonical_header() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_app_config(dir.path());
    write_config(dir.path());

    run_full(&config).unwrap();

    assert!(config.raw_path.exists());
    let content = std::fs::read_to_string(&config.verified_path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next().unwrap(), VERIFIED_HEADERS.join(","));
    // The maintenance target yields enough clean records to survive gates.
    assert!(lines.next().is_some(), "expected at least one verified row");
}

#[test]
fn run_full_completes_pending_orders_and_leaves_finished_ones_alone() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_app_config(dir.path());
    write_config(dir.path());

    let queue = OrderQueue::new(&config.orders_path);
    let finished = make_order("Plumbers", "Mumbai", OrderStatus::ScrapeComplete);
    queue.append(&finished).unwrap();
    queue
        .append(&make_order("Dentists", "Pune", OrderStatus::PendingScrape))
        .unwrap();

    run_full(&config).unwrap();

    let after = queue.list_all().unwrap();
    assert_eq!(after[0], finished, "completed order must be untouched");
    assert_eq!(after[1].status, OrderStatus::ScrapeComplete);
    assert_eq!(after[1].niche, "Dentists");
    assert!(queue.list_pending().is_empty());
}

#[test]
fn two_step_invocation_settles_orders_after_verify() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_app_config(dir.path());
    write_config(dir.path());

    let queue = OrderQueue::new(&config.orders_path);
    queue
        .append(&make_order("Dentists", "Pune", OrderStatus::PendingScrape))
        .unwrap();

    run_scrape(&config).unwrap();
    // Acquisition alone must not settle the order.
    assert_eq!(queue.list_pending().len(), 1);

    run_verify(&config).unwrap();
    assert!(queue.list_pending().is_empty());
}

#[test]
fn run_verify_without_raw_batch_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_app_config(dir.path());
    write_config(dir.path());

    let err = run_verify(&config).unwrap_err();
    assert!(
        matches!(
            err.downcast_ref::<leadmart_store::StoreError>(),
            Some(leadmart_store::StoreError::MissingInput { .. })
        ),
        "expected MissingInput, got: {err:?}"
    );
}

#[test]
fn run_full_without_pipeline_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_app_config(dir.path());

    let err = run_full(&config).unwrap_err();
    assert!(
        err.downcast_ref::<leadmart_core::ConfigError>().is_some(),
        "expected ConfigError, got: {err:?}"
    );
}

#[test]
fn impossible_phone_minimum_still_writes_header_only_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_app_config(dir.path());
    // No synthetic phone carries 15 digits; every record fails the gate.
    std::fs::write(
        dir.path().join("config.yaml"),
        CONFIG_YAML.replace("MIN_PHONE_LENGTH: 8", "MIN_PHONE_LENGTH: 15"),
    )
    .unwrap();

    run_full(&config).unwrap();

    let content = std::fs::read_to_string(&config.verified_path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next().unwrap(), VERIFIED_HEADERS.join(","));
    assert_eq!(lines.next(), None, "expected a zero-row output");
}

#[test]
fn manifest_records_maintenance_target_without_order_ref() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_app_config(dir.path());
    write_config(dir.path());

    run_scrape(&config).unwrap();

    let manifest = read_manifest(&config.raw_path).unwrap().expect("manifest");
    assert_eq!(manifest.targets.len(), 1);
    assert_eq!(manifest.targets[0].niche, "Marketing Services");
    assert!(manifest.targets[0].order_ref.is_none());
    assert!(manifest.contributing_orders().is_empty());
}

#[test]
fn reprocessing_a_stuck_order_converges() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_app_config(dir.path());
    write_config(dir.path());

    let queue = OrderQueue::new(&config.orders_path);
    queue
        .append(&make_order("Dentists", "Pune", OrderStatus::PendingScrape))
        .unwrap();

    // First run settles the order; a second full run regenerates an
    // equivalent batch and must not disturb the settled queue.
    run_full(&config).unwrap();
    let first = std::fs::read_to_string(&config.verified_path).unwrap();

    run_full(&config).unwrap();
    let after = queue.list_all().unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].status, OrderStatus::ScrapeComplete);

    // Second run covers only the maintenance target; output is still a
    // complete, well-formed file.
    let second = std::fs::read_to_string(&config.verified_path).unwrap();
    assert!(second.starts_with(&VERIFIED_HEADERS.join(",")));
    assert!(!first.is_empty());
}
