use leadmart_core::{OrderRef, ScrapeTarget};

use super::*;

fn make_target(niche: &str, city: &str, max_count: u32) -> ScrapeTarget {
    ScrapeTarget {
        niche: niche.to_string(),
        city: city.to_string(),
        max_count,
        order_ref: Some(OrderRef(0)),
    }
}

#[test]
fn acquire_yield_is_within_bounds() {
    let source = DirectorySource::new();
    let target = make_target("Marketing Services", "New York, NY", 20);
    let batch = source.acquire(&target, 0).expect("expected a batch");
    assert!(
        batch.len() >= 10 && batch.len() <= 20,
        "yield {} outside [10, 20]",
        batch.len()
    );
}

#[test]
fn acquire_yield_handles_max_count_one() {
    let source = DirectorySource::new();
    let target = make_target("Plumbers", "Pune", 1);
    let batch = source.acquire(&target, 0).unwrap();
    assert_eq!(batch.len(), 1);
}

#[test]
fn acquire_is_deterministic_for_same_target_and_offset() {
    let source = DirectorySource::new();
    let target = make_target("Dentists", "Austin, TX", 15);
    let a = source.acquire(&target, 40).unwrap();
    let b = source.acquire(&target, 40).unwrap();
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        // scraped_at is wall-clock; identity fields must match exactly.
        assert_eq!(x.business_name, y.business_name);
        assert_eq!(x.phone, y.phone);
        assert_eq!(x.email, y.email);
        assert_eq!(x.source_url, y.source_url);
    }
}

#[test]
fn acquire_records_carry_target_niche_and_city() {
    let source = DirectorySource::new();
    let target = make_target("Dentists", "Austin, TX", 8);
    let batch = source.acquire(&target, 0).unwrap();
    assert!(batch.iter().all(|r| r.niche == "Dentists"));
    assert!(batch.iter().all(|r| r.city == "Austin, TX"));
}

#[test]
fn acquire_identities_do_not_collide_across_targets() {
    let source = DirectorySource::new();
    let first = make_target("Marketing Services", "New York, NY", 12);
    let second = make_target("Marketing Services", "New York, NY", 12);

    let batch_a = source.acquire(&first, 0).unwrap();
    let batch_b = source.acquire(&second, batch_a.len()).unwrap();

    // Same niche/city twice in one run: the offset must keep source URLs
    // (the per-record identity) globally unique.
    let mut urls: Vec<&str> = batch_a
        .iter()
        .chain(&batch_b)
        .map(|r| r.source_url.as_str())
        .collect();
    let total = urls.len();
    urls.sort_unstable();
    urls.dedup();
    assert_eq!(urls.len(), total, "source URLs collided across targets");
}

#[test]
fn acquire_emits_invalid_email_sentinels() {
    let source = DirectorySource::new();
    let target = make_target("Marketing Services", "New York, NY", 20);
    let batch = source.acquire(&target, 0).unwrap();
    assert!(
        batch.iter().any(|r| r.email == "INVALID_EMAIL"),
        "expected sentinel emails in a batch of {}",
        batch.len()
    );
    assert!(
        batch.iter().any(|r| r.email.contains('@')),
        "expected some syntactically plausible emails"
    );
}

#[test]
fn acquire_emits_duplicate_dedup_keys() {
    let source = DirectorySource::new();
    let target = make_target("Marketing Services", "New York, NY", 30);
    let batch = source.acquire(&target, 0).unwrap();
    let mut keys: Vec<(&str, &str)> = batch
        .iter()
        .map(|r| (r.business_name.as_str(), r.city.as_str()))
        .collect();
    let total = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert!(
        keys.len() < total,
        "expected at least one repeated (name, city) pair in {total} records"
    );
}

#[test]
fn acquire_rejects_blank_niche() {
    let source = DirectorySource::new();
    let target = make_target("  ", "Pune", 5);
    let err = source.acquire(&target, 0).unwrap_err();
    assert!(matches!(err, SourceError::InvalidTarget { ref reason, .. } if reason.contains("niche")));
}

#[test]
fn acquire_rejects_zero_max_count() {
    let source = DirectorySource::new();
    let target = make_target("Plumbers", "Pune", 0);
    let err = source.acquire(&target, 0).unwrap_err();
    assert!(matches!(err, SourceError::InvalidTarget { ref reason, .. } if reason.contains("zero")));
}

#[test]
fn lead_scores_are_in_range() {
    let source = DirectorySource::new();
    let target = make_target("Marketing Services", "New York, NY", 20);
    let batch = source.acquire(&target, 0).unwrap();
    for lead in &batch {
        let score = lead.lead_score.expect("synthetic leads are always scored");
        assert!((60..=100).contains(&score), "score {score} out of range");
    }
}
