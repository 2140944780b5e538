//! `ZoneDirectory` for GleSYS

use async_trait::async_trait;
use serde::de::IgnoredAny;

use crate::error::Result;
use crate::providers::common::{host_to_record_name, normalize_domain_name, record_name_to_host};
use crate::traits::{ErrorContext, ZoneDirectory};
use crate::types::{CreateRecordRequest, DnsRecord, ProviderZone};

use super::{
    AddRecordParams, DeleteRecordParams, DomainListPayload, GlesysProvider, GlesysRecord,
    ListRecordsParams, PROVIDER_NAME, RecordListPayload,
};

const MODULE: &str = "domain";

impl GlesysProvider {
    pub(crate) fn glesys_record_to_dns_record(record: GlesysRecord) -> DnsRecord {
        DnsRecord {
            id: record.recordid,
            zone: normalize_domain_name(&record.domainname),
            record_name: host_to_record_name(&record.host),
            record_type: record.record_type.to_uppercase(),
            value: record.data,
            ttl: record.ttl,
        }
    }
}

#[async_trait]
impl ZoneDirectory for GlesysProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn list_zones(&self) -> Result<Vec<ProviderZone>> {
        let payload: DomainListPayload = self
            .request::<_, ()>(MODULE, "list", None, ErrorContext::default())
            .await?;

        Ok(payload
            .domains
            .into_iter()
            .map(|d| ProviderZone::new(normalize_domain_name(&d.domainname)))
            .collect())
    }

    async fn list_records(&self, zone: &str) -> Result<Vec<DnsRecord>> {
        let params = ListRecordsParams { domainname: zone };
        let payload: RecordListPayload = self
            .request(MODULE, "listrecords", Some(&params), ErrorContext::domain(zone))
            .await?;

        Ok(payload
            .records
            .into_iter()
            .map(Self::glesys_record_to_dns_record)
            .collect())
    }

    async fn create_record(&self, req: &CreateRecordRequest) -> Result<()> {
        let params = AddRecordParams {
            domainname: &req.zone,
            host: record_name_to_host(req.record_name.as_deref()),
            record_type: &req.record_type,
            data: &req.value,
            ttl: req.ttl,
        };

        let _: IgnoredAny = self
            .request_once(MODULE, "addrecord", Some(&params), ErrorContext::domain(&req.zone))
            .await?;
        Ok(())
    }

    async fn delete_record(&self, zone: &str, record_id: &str) -> Result<()> {
        let params = DeleteRecordParams {
            recordid: record_id,
        };

        let _: IgnoredAny = self
            .request(
                MODULE,
                "deleterecord",
                Some(&params),
                ErrorContext::record(zone, record_id),
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(host: &str, record_type: &str) -> GlesysRecord {
        GlesysRecord {
            recordid: "20200411".to_string(),
            domainname: "runfalk.se".to_string(),
            host: host.to_string(),
            record_type: record_type.to_string(),
            data: "token".to_string(),
            ttl: 60,
        }
    }

    #[test]
    fn converts_subdomain_record() {
        let r = GlesysProvider::glesys_record_to_dns_record(record("_acme-challenge", "TXT"));
        assert_eq!(r.id, "20200411");
        assert_eq!(r.zone, "runfalk.se");
        assert_eq!(r.record_name.as_deref(), Some("_acme-challenge"));
        assert!(r.is_txt());
    }

    #[test]
    fn converts_apex_record() {
        let r = GlesysProvider::glesys_record_to_dns_record(record("@", "txt"));
        assert_eq!(r.record_name, None);
        assert_eq!(r.record_type, "TXT");
    }
}
