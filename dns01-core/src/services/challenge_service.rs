//! dns-01 challenge record lifecycle

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use dns01_provider::{CreateRecordRequest, ZoneDirectory};

use crate::error::{CoreError, CoreResult};
use crate::zone_matcher::{self, HostnameSplit};

/// Places and removes the TXT records an ACME server checks during dns-01 validation.
///
/// Every operation reads the zone list from the directory again; nothing is cached between
/// calls, so zones added or removed on the account are picked up immediately.
pub struct ChallengeService {
    directory: Arc<dyn ZoneDirectory>,
}

impl ChallengeService {
    #[must_use]
    pub fn new(directory: Arc<dyn ZoneDirectory>) -> Self {
        Self { directory }
    }

    /// Names of all zones the directory currently reports, sorted.
    pub async fn zones(&self) -> CoreResult<Vec<String>> {
        let mut names: Vec<String> = self
            .directory
            .list_zones()
            .await?
            .into_iter()
            .map(|zone| zone.name)
            .collect();
        names.sort();
        Ok(names)
    }

    /// Resolve `hostname` against the zones the directory currently reports.
    pub async fn resolve_hostname(&self, hostname: &str) -> CoreResult<HostnameSplit> {
        let managed: HashSet<String> = self.zones().await?.into_iter().collect();

        log::debug!(
            "Resolving '{hostname}' against {} zone(s) from {}",
            managed.len(),
            self.directory.id()
        );
        zone_matcher::resolve(hostname, &managed)
    }

    /// Create a TXT record holding `value` at `hostname`.
    ///
    /// Existing records at the same name are left alone, so two concurrent validations for
    /// the same hostname (a wildcard and its base name) can coexist.
    pub async fn fulfill(&self, hostname: &str, value: &str, ttl: u32) -> CoreResult<()> {
        let split = self.resolve_hostname(hostname).await?;
        log::debug!(
            "Creating TXT record for '{hostname}' in zone '{}' (ttl {ttl})",
            split.zone
        );

        let request = CreateRecordRequest::txt(split.zone, split.record_name, value, Some(ttl));
        self.directory.create_record(&request).await?;
        Ok(())
    }

    /// Delete the TXT record at `hostname` whose content equals `value`.
    ///
    /// Records of other types, or TXT records with other content, are never touched. When
    /// several records match, only one of them is removed.
    pub async fn cleanup(&self, hostname: &str, value: &str) -> CoreResult<()> {
        let split = self.resolve_hostname(hostname).await?;
        let records = self.directory.list_records(&split.zone).await?;

        // record name -> id; a later duplicate replaces an earlier one
        let matching: HashMap<Option<String>, String> = records
            .into_iter()
            .filter(|record| record.is_txt() && record.value == value)
            .map(|record| (record.record_name, record.id))
            .collect();

        let Some(record_id) = matching.get(&split.record_name) else {
            return Err(CoreError::RecordNotFound {
                hostname: hostname.to_string(),
                zone: split.zone,
                record_name: split.record_name,
            });
        };

        log::debug!(
            "Deleting TXT record {record_id} for '{hostname}' from zone '{}'",
            split.zone
        );
        self.directory.delete_record(&split.zone, record_id).await?;
        Ok(())
    }
}
