//! Zone resolution
//!
//! Given a hostname and the set of zones an account manages, find the zone the hostname
//! lives in and the record name relative to that zone. The zone list is authoritative but
//! unordered, and may hold overlapping suffixes (`b.com` and `a.b.com`) or names that look
//! like public suffixes (`co.uk`). Candidates are tried from the longest suffix down, so the
//! most specific managed zone always wins.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// A hostname split into a zone and a record name relative to it.
///
/// `record_name` is `None` when the hostname is the zone apex. Joining
/// `record_name`, `"."` and `zone` always yields the original hostname.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostnameSplit {
    pub zone: String,
    pub record_name: Option<String>,
}

impl HostnameSplit {
    /// The hostname this split was made from.
    pub fn fqdn(&self) -> String {
        match &self.record_name {
            Some(name) => format!("{name}.{}", self.zone),
            None => self.zone.clone(),
        }
    }
}

impl fmt::Display for HostnameSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fqdn())
    }
}

/// Every way of splitting `hostname`, most specific zone first.
///
/// For `*.runfalk.se` this yields the whole name as zone, then `runfalk.se` with record
/// `*`, then `se` with record `*.runfalk`. An empty hostname yields nothing.
pub fn candidates(hostname: &str) -> impl Iterator<Item = HostnameSplit> + '_ {
    let labels: Vec<&str> = if hostname.is_empty() {
        Vec::new()
    } else {
        hostname.split('.').collect()
    };

    (0..labels.len()).map(move |i| HostnameSplit {
        zone: labels[i..].join("."),
        record_name: (i > 0).then(|| labels[..i].join(".")),
    })
}

/// Find the split of `hostname` whose zone is in `managed_zones`.
///
/// # Errors
/// [`CoreError::ZoneNotFound`] when no suffix of `hostname` is a managed zone, including
/// when `managed_zones` is empty.
pub fn resolve(hostname: &str, managed_zones: &HashSet<String>) -> CoreResult<HostnameSplit> {
    candidates(hostname)
        .find(|split| managed_zones.contains(&split.zone))
        .ok_or_else(|| CoreError::ZoneNotFound {
            hostname: hostname.to_string(),
        })
}
