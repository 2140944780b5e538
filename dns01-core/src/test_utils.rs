//! Test helpers
//!
//! Mock zone directory and record factories.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dns01_provider::{
    CreateRecordRequest, DnsRecord, ProviderError, ProviderZone, Result, ZoneDirectory,
    TXT_RECORD_TYPE,
};
use tokio::sync::RwLock;

// ===== MockZoneDirectory =====

/// In-memory zone directory that records every mutating call.
pub struct MockZoneDirectory {
    zones: Vec<String>,
    records: RwLock<Vec<DnsRecord>>,
    created: RwLock<Vec<CreateRecordRequest>>,
    deleted: RwLock<Vec<(String, String)>>,
    list_zone_calls: AtomicUsize,
    next_id: AtomicUsize,
    /// When `Some`, `list_zones` fails with this error
    list_zones_error: RwLock<Option<ProviderError>>,
    /// When `Some`, `create_record` fails with this error
    create_error: RwLock<Option<ProviderError>>,
}

impl MockZoneDirectory {
    pub fn with_zones(zones: &[&str]) -> Self {
        Self {
            zones: zones.iter().map(|z| (*z).to_string()).collect(),
            records: RwLock::new(Vec::new()),
            created: RwLock::new(Vec::new()),
            deleted: RwLock::new(Vec::new()),
            list_zone_calls: AtomicUsize::new(0),
            next_id: AtomicUsize::new(1000),
            list_zones_error: RwLock::new(None),
            create_error: RwLock::new(None),
        }
    }

    pub async fn add_record(&self, record: DnsRecord) {
        self.records.write().await.push(record);
    }

    pub async fn set_list_zones_error(&self, err: Option<ProviderError>) {
        *self.list_zones_error.write().await = err;
    }

    pub async fn set_create_error(&self, err: Option<ProviderError>) {
        *self.create_error.write().await = err;
    }

    pub async fn created(&self) -> Vec<CreateRecordRequest> {
        self.created.read().await.clone()
    }

    /// `(zone, record_id)` pairs in call order
    pub async fn deleted(&self) -> Vec<(String, String)> {
        self.deleted.read().await.clone()
    }

    pub async fn list_zone_calls(&self) -> usize {
        self.list_zone_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ZoneDirectory for MockZoneDirectory {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_zones(&self) -> Result<Vec<ProviderZone>> {
        self.list_zone_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref err) = *self.list_zones_error.read().await {
            return Err(err.clone());
        }
        Ok(self.zones.iter().map(ProviderZone::new).collect())
    }

    async fn list_records(&self, zone: &str) -> Result<Vec<DnsRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.zone == zone)
            .cloned()
            .collect())
    }

    async fn create_record(&self, req: &CreateRecordRequest) -> Result<()> {
        if let Some(ref err) = *self.create_error.read().await {
            return Err(err.clone());
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.records.write().await.push(DnsRecord {
            id: id.to_string(),
            zone: req.zone.clone(),
            record_name: req.record_name.clone(),
            record_type: req.record_type.clone(),
            value: req.value.clone(),
            ttl: req.ttl.unwrap_or(3600),
        });
        self.created.write().await.push(req.clone());
        Ok(())
    }

    async fn delete_record(&self, zone: &str, record_id: &str) -> Result<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| !(r.zone == zone && r.id == record_id));
        if records.len() == before {
            return Err(ProviderError::RecordNotFound {
                provider: "mock".to_string(),
                record_id: record_id.to_string(),
                raw_message: None,
            });
        }
        self.deleted
            .write()
            .await
            .push((zone.to_string(), record_id.to_string()));
        Ok(())
    }
}

// ===== Factories =====

pub fn txt_record(id: &str, zone: &str, record_name: Option<&str>, value: &str) -> DnsRecord {
    DnsRecord {
        id: id.to_string(),
        zone: zone.to_string(),
        record_name: record_name.map(str::to_string),
        record_type: TXT_RECORD_TYPE.to_string(),
        value: value.to_string(),
        ttl: 60,
    }
}
