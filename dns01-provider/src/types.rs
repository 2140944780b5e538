use serde::{Deserialize, Serialize};

// ============ Zones ============

/// A zone the current credentials are allowed to manage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderZone {
    /// Zone name as reported by the directory (e.g. `example.org`).
    pub name: String,
}

impl ProviderZone {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ============ Records ============

/// Record type used for dns-01 validation records.
pub const TXT_RECORD_TYPE: &str = "TXT";

/// A DNS record as owned by the zone directory.
///
/// The record type is kept as the raw string reported by the API. Cleanup lists every
/// record in a zone and must not fail on types this crate has no opinion about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Opaque record identifier, used for deletion.
    pub id: String,
    /// Zone the record lives in.
    pub zone: String,
    /// Name relative to the zone, `None` at the zone apex.
    pub record_name: Option<String>,
    /// Record type, upper case (e.g. `TXT`).
    pub record_type: String,
    /// Record data.
    pub value: String,
    /// TTL in seconds.
    pub ttl: u32,
}

impl DnsRecord {
    /// Whether this is a TXT record. Providers store the type uppercased.
    pub fn is_txt(&self) -> bool {
        self.record_type == TXT_RECORD_TYPE
    }
}

/// Arguments of [`ZoneDirectory::create_record`](crate::ZoneDirectory::create_record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    /// Zone to create the record in.
    pub zone: String,
    /// Name relative to the zone, `None` for the apex.
    pub record_name: Option<String>,
    /// Record type.
    pub record_type: String,
    /// Record data.
    pub value: String,
    /// TTL in seconds, `None` leaves the provider default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl CreateRecordRequest {
    /// Build a TXT record request.
    pub fn txt(
        zone: impl Into<String>,
        record_name: Option<String>,
        value: impl Into<String>,
        ttl: Option<u32>,
    ) -> Self {
        Self {
            zone: zone.into(),
            record_name,
            record_type: TXT_RECORD_TYPE.to_string(),
            value: value.into(),
            ttl,
        }
    }
}

// ============ Credentials ============

/// Provider credentials, one variant per supported directory.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// GleSYS API user (e.g. `CL12345`) and API key.
    #[serde(rename = "glesys")]
    Glesys { user: String, password: String },
}

impl ProviderCredentials {
    /// Provider identifier matching [`ZoneDirectory::id`](crate::ZoneDirectory::id).
    pub fn provider_id(&self) -> &'static str {
        match self {
            Self::Glesys { .. } => "glesys",
        }
    }
}

// Secrets never end up in debug output.
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Glesys { user, .. } => f
                .debug_struct("Glesys")
                .field("user", user)
                .field("password", &"***")
                .finish(),
        }
    }
}
