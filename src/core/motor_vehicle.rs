use crate::domain::model::{MotorVehicleSearchRequest, MotorVehicleSearchResponse};
use crate::core::sanitize::is_dot_segment;
use crate::domain::ports::MotorVehicleApi;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;

/// Which identifier a vehicle lookup is keyed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleQuery {
    LicenseNumber(String),
    Vin(String),
}

impl VehicleQuery {
    /// A license number wins over a VIN; `None` when neither is given.
    pub fn from_request(request: &MotorVehicleSearchRequest) -> Option<Self> {
        if !request.license_number.is_empty() {
            Some(Self::LicenseNumber(request.license_number.clone()))
        } else if !request.vin.is_empty() {
            Some(Self::Vin(request.vin.clone()))
        } else {
            None
        }
    }

    pub fn search_term(&self) -> &str {
        match self {
            Self::LicenseNumber(term) | Self::Vin(term) => term,
        }
    }
}

#[derive(Clone)]
pub struct MotorVehicleService {
    client: Arc<dyn MotorVehicleApi>,
}

impl MotorVehicleService {
    pub fn new(client: Arc<dyn MotorVehicleApi>) -> Self {
        Self { client }
    }

    pub async fn search(
        &self,
        request: &MotorVehicleSearchRequest,
    ) -> Result<MotorVehicleSearchResponse> {
        match VehicleQuery::from_request(request) {
            Some(VehicleQuery::LicenseNumber(license_number)) => {
                self.search_by_license_number(&license_number).await
            }
            Some(VehicleQuery::Vin(vin)) => self.search_by_vin(&vin).await,
            None => Err(GatewayError::validation(
                "Either licenseNumber or VIN must be provided",
            )),
        }
    }

    pub async fn search_by_license_number(
        &self,
        license_number: &str,
    ) -> Result<MotorVehicleSearchResponse> {
        tracing::info!("searching motor vehicle by license number {}", license_number);
        self.lookup(license_number).await
    }

    /// The upstream resolves VINs through the license number endpoint.
    pub async fn search_by_vin(&self, vin: &str) -> Result<MotorVehicleSearchResponse> {
        tracing::info!("searching motor vehicle by VIN {}", vin);
        self.lookup(vin).await
    }

    async fn lookup(&self, search_term: &str) -> Result<MotorVehicleSearchResponse> {
        if search_term.is_empty() {
            return Err(GatewayError::validation("search term cannot be empty"));
        }
        if is_dot_segment(search_term) {
            return Err(GatewayError::validation(format!(
                "invalid search term: {}",
                search_term
            )));
        }

        self.client
            .search_vehicle(search_term)
            .await
            .map_err(|e| GatewayError::search("motor vehicle", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::MotorVehicle;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingRegistry {
        terms: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MotorVehicleApi for RecordingRegistry {
        async fn search_vehicle(&self, search_term: &str) -> Result<MotorVehicleSearchResponse> {
            self.terms.lock().await.push(search_term.to_string());
            Ok(MotorVehicleSearchResponse {
                result: vec![MotorVehicle {
                    reg_no: search_term.to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            })
        }
    }

    fn request(license_number: &str, vin: &str) -> MotorVehicleSearchRequest {
        MotorVehicleSearchRequest {
            license_number: license_number.to_string(),
            vin: vin.to_string(),
        }
    }

    #[test]
    fn test_query_precedence() {
        assert_eq!(
            VehicleQuery::from_request(&request("AB12345", "WVWZZZ1JZXW000001")),
            Some(VehicleQuery::LicenseNumber("AB12345".to_string()))
        );
        assert_eq!(
            VehicleQuery::from_request(&request("", "WVWZZZ1JZXW000001")),
            Some(VehicleQuery::Vin("WVWZZZ1JZXW000001".to_string()))
        );
        assert_eq!(VehicleQuery::from_request(&request("", "")), None);
    }

    #[tokio::test]
    async fn test_license_number_takes_precedence_over_vin() {
        let registry = Arc::new(RecordingRegistry::default());
        let service = MotorVehicleService::new(registry.clone());

        let response = service
            .search(&request("AB12345", "WVWZZZ1JZXW000001"))
            .await
            .unwrap();

        assert_eq!(response.result[0].reg_no, "AB12345");
        assert_eq!(*registry.terms.lock().await, vec!["AB12345".to_string()]);
    }

    #[tokio::test]
    async fn test_vin_used_when_license_number_absent() {
        let registry = Arc::new(RecordingRegistry::default());
        let service = MotorVehicleService::new(registry.clone());

        service
            .search(&request("", "WVWZZZ1JZXW000001"))
            .await
            .unwrap();

        assert_eq!(
            *registry.terms.lock().await,
            vec!["WVWZZZ1JZXW000001".to_string()]
        );
    }

    #[tokio::test]
    async fn test_missing_identifiers_are_rejected_without_upstream_call() {
        let registry = Arc::new(RecordingRegistry::default());
        let service = MotorVehicleService::new(registry.clone());

        let err = service.search(&request("", "")).await.unwrap_err();

        assert!(matches!(err, GatewayError::Validation { .. }));
        assert!(registry.terms.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_direct_lookup_rejects_empty_term() {
        let registry = Arc::new(RecordingRegistry::default());
        let service = MotorVehicleService::new(registry.clone());

        let err = service.search_by_vin("").await.unwrap_err();

        assert_eq!(err.to_string(), "search term cannot be empty");
        assert!(registry.terms.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_dot_segment_terms_are_rejected() {
        let registry = Arc::new(RecordingRegistry::default());
        let service = MotorVehicleService::new(registry.clone());

        let err = service.search(&request("..", "")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Validation { .. }));
        assert_eq!(err.to_string(), "invalid search term: ..");

        let err = service.search_by_vin(".").await.unwrap_err();
        assert!(matches!(err, GatewayError::Validation { .. }));
        assert!(registry.terms.lock().await.is_empty());
    }
}
