use crate::domain::model::{DirectorySearchResponse, MotorVehicleSearchResponse, Person};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Upstream directory lookups. Inputs are expected to be sanitized already.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    async fn search_person(&self, mobile_number: &str) -> Result<DirectorySearchResponse>;
    async fn search_organization(&self, org_no: &str) -> Result<DirectorySearchResponse>;
}

/// License numbers and VINs share one upstream lookup.
#[async_trait]
pub trait MotorVehicleApi: Send + Sync {
    async fn search_vehicle(&self, search_term: &str) -> Result<MotorVehicleSearchResponse>;
}

#[async_trait]
pub trait PersonApi: Send + Sync {
    async fn search_person(&self, mobile_number: &str) -> Result<Person>;
}
