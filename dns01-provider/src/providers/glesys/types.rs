//! GleSYS API payloads

use serde::{Deserialize, Deserializer, Serialize};

/// `{"response": {...}}` wrapper around every GleSYS reply.
#[derive(Debug, Deserialize)]
pub struct GlesysEnvelope {
    pub response: serde_json::Value,
}

/// `response.status`
#[derive(Debug, Deserialize)]
pub struct GlesysStatus {
    #[serde(deserialize_with = "string_or_number")]
    pub code: String,
    #[serde(default)]
    pub text: String,
}

// ============ domain/list ============

#[derive(Debug, Deserialize)]
pub struct DomainListPayload {
    #[serde(default)]
    pub domains: Vec<GlesysDomain>,
}

#[derive(Debug, Deserialize)]
pub struct GlesysDomain {
    pub domainname: String,
}

// ============ domain/listrecords ============

#[derive(Debug, Serialize)]
pub struct ListRecordsParams<'a> {
    pub domainname: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct RecordListPayload {
    #[serde(default)]
    pub records: Vec<GlesysRecord>,
}

/// Record as returned by `domain/listrecords`.
#[derive(Debug, Deserialize)]
pub struct GlesysRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub recordid: String,
    pub domainname: String,
    pub host: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: String,
    #[serde(deserialize_with = "u32_from_string_or_number")]
    pub ttl: u32,
}

// ============ domain/addrecord ============

#[derive(Debug, Serialize)]
pub struct AddRecordParams<'a> {
    pub domainname: &'a str,
    pub host: &'a str,
    #[serde(rename = "type")]
    pub record_type: &'a str,
    pub data: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

// ============ domain/deleterecord ============

#[derive(Debug, Serialize)]
pub struct DeleteRecordParams<'a> {
    pub recordid: &'a str,
}

// ============ Deserialization helpers ============

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
}

/// GleSYS returns some numeric fields as strings
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::U64(n) => n.to_string(),
        StringOrNumber::I64(n) => n.to_string(),
    })
}

fn u32_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = string_or_number(deserializer)?;
    raw.trim()
        .parse::<u32>()
        .map_err(|e| Error::custom(format!("Invalid TTL '{raw}': {e}")))
}
