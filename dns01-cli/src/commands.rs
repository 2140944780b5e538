//! Subcommand implementations

use std::time::Duration;

use anyhow::{Context, Result};
use dns01_core::{ChallengeService, CoreError};

use crate::cli::{HookArgs, PerformArgs, ResolveArgs};

const CHALLENGE_LABEL: &str = "_acme-challenge";

/// The hostname an ACME server queries when validating `domain`.
///
/// Wildcard certificates are validated on the base name, so a leading `*.` is dropped.
pub fn challenge_hostname(domain: &str) -> String {
    let domain = domain.trim_end_matches('.');
    let domain = domain.strip_prefix("*.").unwrap_or(domain);
    format!("{CHALLENGE_LABEL}.{domain}")
}

pub async fn perform(service: &ChallengeService, args: PerformArgs) -> Result<()> {
    let hostname = challenge_hostname(&args.hook.domain);
    tracing::info!("Publishing validation record for {hostname}");

    service
        .fulfill(&hostname, &args.hook.validation, args.ttl)
        .await
        .with_context(|| format!("Failed to create TXT record for {hostname}"))?;

    if args.propagation_seconds > 0 {
        tracing::info!(
            "Waiting {} seconds for DNS changes to propagate",
            args.propagation_seconds
        );
        tokio::time::sleep(Duration::from_secs(args.propagation_seconds)).await;
    }
    Ok(())
}

pub async fn cleanup(service: &ChallengeService, args: HookArgs) -> Result<()> {
    let hostname = challenge_hostname(&args.domain);

    match service.cleanup(&hostname, &args.validation).await {
        Ok(()) => {
            tracing::info!("Removed validation record for {hostname}");
            Ok(())
        }
        // certbot runs cleanup even when perform failed; a missing record is not fatal
        Err(e @ CoreError::RecordNotFound { .. }) => {
            tracing::warn!("{e}");
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to delete TXT record for {hostname}")),
    }
}

pub async fn zones(service: &ChallengeService) -> Result<()> {
    for zone in service.zones().await? {
        println!("{zone}");
    }
    Ok(())
}

pub async fn resolve(service: &ChallengeService, args: ResolveArgs) -> Result<()> {
    let split = service.resolve_hostname(&args.hostname).await?;
    println!(
        "zone={} record={}",
        split.zone,
        split.record_name.as_deref().unwrap_or("@")
    );
    Ok(())
}
