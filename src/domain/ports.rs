use crate::domain::model::DoctorRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the doctor list comes from.
#[async_trait]
pub trait DoctorSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<DoctorRecord>>;
}

/// The page URL the query state is mirrored into.
pub trait Location {
    fn query(&self) -> String;
    /// Replace the query string in place, keeping the path and without adding a history entry.
    fn replace_query(&mut self, query: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn placeholder_image(&self) -> &str;
}
