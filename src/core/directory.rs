use crate::core::sanitize::{clean_organization_number, clean_phone_number};
use crate::domain::model::DirectorySearchResponse;
use crate::domain::ports::DirectoryApi;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;

/// Person and organization lookups against the upstream directory.
#[derive(Clone)]
pub struct DirectoryService {
    client: Arc<dyn DirectoryApi>,
}

impl DirectoryService {
    pub fn new(client: Arc<dyn DirectoryApi>) -> Self {
        Self { client }
    }

    pub async fn search_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<DirectorySearchResponse> {
        if mobile_number.is_empty() {
            return Err(GatewayError::validation("mobile number cannot be empty"));
        }

        let clean_number = clean_phone_number(mobile_number);
        tracing::debug!("searching directory for mobile number {}", clean_number);

        self.client
            .search_person(&clean_number)
            .await
            .map_err(|e| GatewayError::search("directory", e))
    }

    pub async fn search_by_organization_number(
        &self,
        org_no: &str,
    ) -> Result<DirectorySearchResponse> {
        if org_no.is_empty() {
            return Err(GatewayError::validation(
                "organization number cannot be empty",
            ));
        }

        let clean_org_no = clean_organization_number(org_no);
        tracing::debug!("searching directory for organization {}", clean_org_no);

        self.client
            .search_organization(&clean_org_no)
            .await
            .map_err(|e| GatewayError::search("directory", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DirectoryResult;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingDirectory {
        calls: Mutex<Vec<(&'static str, String)>>,
        fail_with: Option<String>,
    }

    impl RecordingDirectory {
        fn failing(body: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: Some(body.to_string()),
            }
        }

        fn respond(&self, name: &str) -> Result<DirectorySearchResponse> {
            match &self.fail_with {
                Some(body) => Err(GatewayError::UpstreamStatus {
                    status: 404,
                    body: body.clone(),
                }),
                None => Ok(DirectorySearchResponse {
                    result: vec![DirectoryResult {
                        first_name: name.to_string(),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            }
        }
    }

    #[async_trait]
    impl DirectoryApi for RecordingDirectory {
        async fn search_person(&self, mobile_number: &str) -> Result<DirectorySearchResponse> {
            self.calls
                .lock()
                .await
                .push(("person", mobile_number.to_string()));
            self.respond("Kari")
        }

        async fn search_organization(&self, org_no: &str) -> Result<DirectorySearchResponse> {
            self.calls
                .lock()
                .await
                .push(("organization", org_no.to_string()));
            self.respond("Acme AS")
        }
    }

    #[tokio::test]
    async fn test_mobile_number_is_sanitized_before_lookup() {
        let upstream = Arc::new(RecordingDirectory::default());
        let service = DirectoryService::new(upstream.clone());

        let response = service
            .search_by_mobile_number("+47 123-45 678")
            .await
            .unwrap();

        assert_eq!(response.result[0].first_name, "Kari");
        let calls = upstream.calls.lock().await;
        assert_eq!(*calls, vec![("person", "4712345678".to_string())]);
    }

    #[tokio::test]
    async fn test_empty_mobile_number_makes_no_upstream_call() {
        let upstream = Arc::new(RecordingDirectory::default());
        let service = DirectoryService::new(upstream.clone());

        let err = service.search_by_mobile_number("").await.unwrap_err();

        assert!(matches!(err, GatewayError::Validation { .. }));
        assert_eq!(err.to_string(), "mobile number cannot be empty");
        assert!(upstream.calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_organization_number_is_sanitized_before_lookup() {
        let upstream = Arc::new(RecordingDirectory::default());
        let service = DirectoryService::new(upstream.clone());

        service
            .search_by_organization_number("987 654.321")
            .await
            .unwrap();

        let calls = upstream.calls.lock().await;
        assert_eq!(*calls, vec![("organization", "987654321".to_string())]);
    }

    #[tokio::test]
    async fn test_empty_organization_number_is_rejected() {
        let upstream = Arc::new(RecordingDirectory::default());
        let service = DirectoryService::new(upstream.clone());

        let err = service.search_by_organization_number("").await.unwrap_err();

        assert_eq!(err.to_string(), "organization number cannot be empty");
        assert!(upstream.calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_errors_carry_directory_context() {
        let service = DirectoryService::new(Arc::new(RecordingDirectory::failing("boom")));

        let err = service
            .search_by_mobile_number("12345678")
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "error searching directory: API request failed with status 404: boom"
        );
        assert!(!err.is_no_results());
    }

    #[tokio::test]
    async fn test_symbol_only_input_still_reaches_upstream() {
        // Only an empty string is rejected; sanitizing may leave nothing behind.
        let upstream = Arc::new(RecordingDirectory::default());
        let service = DirectoryService::new(upstream.clone());

        service.search_by_mobile_number("+ -").await.unwrap();

        let calls = upstream.calls.lock().await;
        assert_eq!(*calls, vec![("person", String::new())]);
    }
}
