use bolt_core::UrlRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

/// Wire shape of a record: the creation timestamp is internal and is not
/// exposed here.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub original_url: String,
    pub short_url: u64,
}

impl From<UrlRecord> for UrlResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            original_url: record.original_url,
            short_url: record.short_code.value(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListUrlsResponse {
    pub count: u64,
    pub urls: Vec<UrlResponse>,
}
