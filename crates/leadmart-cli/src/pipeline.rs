//! The pipeline driver.
//!
//! One linear pass, no back edges: load config → resolve targets → acquire
//! each target → combine → verify → persist → update queue. A missing
//! pipeline config or a missing raw batch (standalone verify on a cold
//! start) is fatal; everything on the order-queue side degrades. A stuck
//! `PENDING_SCRAPE` order is retried next run, a skipped maintenance scrape
//! is not recoverable.
//!
//! At most one run may be in flight at a time: the stages share the raw and
//! verified paths with no cross-process lock. Atomic renames in the store
//! layer keep external readers consistent regardless.

use chrono::Utc;
use uuid::Uuid;

use leadmart_core::{
    load_pipeline_config, AppConfig, PipelineConfig, RawLead, ScrapeTarget, TIMESTAMP_FORMAT,
};
use leadmart_scraper::{DirectorySource, LeadSource};
use leadmart_store::{
    read_manifest, read_raw_batch, write_manifest, write_raw_batch, write_verified,
    BatchManifest, ManifestTarget, OrderQueue, RunMeta,
};

/// Acquisition only: persist the raw batch and its manifest. Orders are not
/// marked complete here; that happens after the verified output is
/// persisted.
pub(crate) fn run_scrape(config: &AppConfig) -> anyhow::Result<()> {
    let pipeline = load_pipeline_config(&config.config_path)?;
    scrape_stage(config, &pipeline, Uuid::new_v4())
}

/// Verification only: read the raw batch, publish the verified output, then
/// settle order bookkeeping from the batch manifest.
pub(crate) fn run_verify(config: &AppConfig) -> anyhow::Result<()> {
    let pipeline = load_pipeline_config(&config.config_path)?;
    verify_stage(config, &pipeline)
}

/// Both stages back to back under one run id.
pub(crate) fn run_full(config: &AppConfig) -> anyhow::Result<()> {
    let pipeline = load_pipeline_config(&config.config_path)?;
    scrape_stage(config, &pipeline, Uuid::new_v4())?;
    verify_stage(config, &pipeline)
}

/// One acquisition target per pending order, plus the maintenance target.
///
/// The maintenance target always comes first: combine order is target order,
/// and keep-first dedup makes that order decide which duplicate survives.
fn resolve_targets(pipeline: &PipelineConfig, queue: &OrderQueue) -> Vec<ScrapeTarget> {
    let mut targets = vec![ScrapeTarget {
        niche: pipeline.scraping.primary_niche.clone(),
        city: pipeline.scraping.primary_city.clone(),
        max_count: pipeline.scraping.max_leads_per_run,
        order_ref: None,
    }];
    for pending in queue.list_pending() {
        targets.push(ScrapeTarget {
            niche: pending.order.niche,
            city: pending.order.location,
            max_count: pending.order.max_count,
            order_ref: Some(pending.order_ref),
        });
    }
    targets
}

fn scrape_stage(
    config: &AppConfig,
    pipeline: &PipelineConfig,
    run_id: Uuid,
) -> anyhow::Result<()> {
    let queue = OrderQueue::new(&config.orders_path);
    let targets = resolve_targets(pipeline, &queue);
    let target_count = targets.len();
    let source = DirectorySource::new();

    let mut combined: Vec<RawLead> = Vec::new();
    let mut manifest_targets: Vec<ManifestTarget> = Vec::new();
    let mut failed_targets: usize = 0;

    for target in &targets {
        // The running offset keeps record identities unique across targets.
        match source.acquire(target, combined.len()) {
            Ok(batch) => {
                tracing::info!(
                    niche = %target.niche,
                    city = %target.city,
                    records = batch.len(),
                    "acquired target batch"
                );
                manifest_targets.push(ManifestTarget {
                    niche: target.niche.clone(),
                    city: target.city.clone(),
                    records: batch.len(),
                    order_ref: target.order_ref,
                });
                combined.extend(batch);
            }
            Err(e) => {
                tracing::error!(
                    niche = %target.niche,
                    city = %target.city,
                    error = %e,
                    "target failed acquisition; its order stays pending"
                );
                failed_targets += 1;
            }
        }
    }

    if failed_targets == target_count {
        anyhow::bail!("all {failed_targets} scrape targets failed acquisition");
    }
    if failed_targets > 0 {
        tracing::warn!(
            failed_targets,
            total_targets = target_count,
            "some targets failed during acquisition"
        );
    }

    write_raw_batch(&config.raw_path, &combined)?;
    let manifest = BatchManifest {
        run_id,
        generated_at: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        record_count: combined.len(),
        targets: manifest_targets,
    };
    write_manifest(&config.raw_path, &manifest)?;

    println!(
        "scraped {} raw leads across {} targets",
        combined.len(),
        target_count - failed_targets
    );
    Ok(())
}

fn verify_stage(config: &AppConfig, pipeline: &PipelineConfig) -> anyhow::Result<()> {
    let raw = read_raw_batch(&config.raw_path)?;
    tracing::info!(records = raw.len(), "starting verification");

    let outcome = leadmart_verify::verify(raw, &pipeline.verification);
    let stats = outcome.stats;
    tracing::info!(
        input = stats.input,
        after_dedup = stats.after_dedup,
        after_email = stats.after_email,
        after_phone = stats.after_phone,
        "verification gates applied"
    );

    // A raw batch placed by hand has no manifest; that only means there is
    // no order bookkeeping to settle.
    let manifest = match read_manifest(&config.raw_path) {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::warn!(error = %e, "batch manifest unreadable; skipping order bookkeeping");
            None
        }
    };
    let run_id = manifest.as_ref().map_or_else(Uuid::new_v4, |m| m.run_id);

    let meta = RunMeta::new(
        run_id,
        Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        outcome.leads.len(),
    );
    write_verified(&config.verified_path, &outcome.leads, &meta)?;
    tracing::info!(
        rows = outcome.leads.len(),
        path = %config.verified_path.display(),
        "verified output persisted"
    );

    // Orders settle only after the verified output is durably on disk, and
    // only for targets that actually contributed to this batch.
    if let Some(manifest) = manifest {
        let refs = manifest.contributing_orders();
        if !refs.is_empty() {
            let queue = OrderQueue::new(&config.orders_path);
            match queue.mark_complete(&refs) {
                Ok(updated) => tracing::info!(updated, "orders marked complete"),
                Err(e) => tracing::warn!(
                    error = %e,
                    "order status update failed; affected orders stay pending for retry"
                ),
            }
        }
    }

    println!(
        "verified {} of {} raw leads; output at {}",
        stats.after_phone,
        stats.input,
        config.verified_path.display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
