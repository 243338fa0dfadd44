use std::time::Instant;

use crate::app::{AppContext, Result};
use crate::domain::FetchOutcome;
use crate::manifest::VersionManifest;
use crate::store::CacheStore;

/// Run one fetch cycle and report it on stdout.
///
/// The timing line is printed even when the cycle fails; the error is
/// returned afterwards.
pub async fn fetch_dependencies(ctx: &AppContext) -> Result<FetchOutcome> {
    let start = Instant::now();
    println!("Downloading deps...");

    let result = ctx.dependencies.fetch().await;

    if let Ok(outcome) = &result {
        if let Some(message) = outcome_message(outcome) {
            println!("{}", message);
        }
    }

    println!("Took {:.3}s", start.elapsed().as_secs_f64());

    if let Ok(FetchOutcome::UpToDate | FetchOutcome::Updated { .. }) = &result {
        log_manifest_summary(ctx);
    }

    result
}

fn outcome_message(outcome: &FetchOutcome) -> Option<&'static str> {
    match outcome {
        FetchOutcome::UpToDate => Some("Dependencies are already up to date!"),
        FetchOutcome::Updated { .. } => None,
        FetchOutcome::Failed { .. } => Some("A problem occurred while fetching data."),
    }
}

fn log_manifest_summary(ctx: &AppContext) {
    let body_path = &ctx.dependencies.store().layout().body_path;
    match VersionManifest::load(body_path) {
        Ok(manifest) => {
            match manifest.latest() {
                Some((id, data_version)) => tracing::info!(
                    versions = manifest.len(),
                    latest = id,
                    data_version,
                    "Cached version summary"
                ),
                None => tracing::info!("Cached version summary is empty"),
            }
        }
        Err(e) => {
            tracing::warn!("Could not read cached version summary: {}", e);
        }
    }
}
