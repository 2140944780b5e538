//! Shared helpers for live tests

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use dns01_provider::{
    CreateRecordRequest, DnsRecord, ProviderCredentials, ZoneDirectory, create_directory,
};

/// Return early when a required environment variable is missing
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping: {} is not set", $var);
                return;
            }
        )+
    };
}

/// Unique `_test-` record name
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// Directory plus the zone tests run against
pub struct TestContext {
    pub directory: Arc<dyn ZoneDirectory>,
    pub zone: String,
}

impl TestContext {
    pub fn glesys() -> Option<Self> {
        let user = env::var("GLESYS_USER").ok()?;
        let password = env::var("GLESYS_PASSWORD").ok()?;
        let zone = env::var("TEST_DOMAIN").ok()?;

        let directory = create_directory(ProviderCredentials::Glesys { user, password }).ok()?;

        Some(Self { directory, zone })
    }

    /// Create a TXT record with ttl 60
    pub async fn create_test_record(&self, record_name: &str, value: &str) -> bool {
        let request = CreateRecordRequest::txt(
            self.zone.clone(),
            Some(record_name.to_string()),
            value,
            Some(60),
        );
        self.directory.create_record(&request).await.is_ok()
    }

    /// Find a TXT record by name and value
    pub async fn find_record(&self, record_name: &str, value: &str) -> Option<DnsRecord> {
        self.directory
            .list_records(&self.zone)
            .await
            .ok()?
            .into_iter()
            .find(|r| r.is_txt() && r.record_name.as_deref() == Some(record_name) && r.value == value)
    }

    /// Delete every record whose name starts with `_test-`
    pub async fn cleanup_all_test_records(&self) {
        if let Ok(records) = self.directory.list_records(&self.zone).await {
            for record in records {
                if record
                    .record_name
                    .as_deref()
                    .is_some_and(|name| name.starts_with("_test-"))
                {
                    let _ = self.directory.delete_record(&self.zone, &record.id).await;
                }
            }
        }
    }
}
