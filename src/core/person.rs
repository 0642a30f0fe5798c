use crate::domain::model::Person;
use crate::domain::ports::PersonApi;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;

/// Single-record person lookup on the older `/persons/search` endpoint.
///
/// Unlike [`crate::core::directory::DirectoryService`] the number is forwarded as given
/// and there is no result envelope, so "no results" failures are not downgraded.
#[derive(Clone)]
pub struct PersonService {
    client: Arc<dyn PersonApi>,
}

impl PersonService {
    pub fn new(client: Arc<dyn PersonApi>) -> Self {
        Self { client }
    }

    pub async fn search_by_mobile_number(&self, mobile_number: &str) -> Result<Person> {
        if mobile_number.is_empty() {
            return Err(GatewayError::validation("mobile number cannot be empty"));
        }

        self.client
            .search_person(mobile_number)
            .await
            .map_err(|e| GatewayError::search("person", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingPersons {
        numbers: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PersonApi for RecordingPersons {
        async fn search_person(&self, mobile_number: &str) -> Result<Person> {
            self.numbers.lock().await.push(mobile_number.to_string());
            Ok(Person {
                mobile_number: mobile_number.to_string(),
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_number_is_forwarded_unchanged() {
        let upstream = Arc::new(RecordingPersons::default());
        let service = PersonService::new(upstream.clone());

        let person = service.search_by_mobile_number("+47 12345678").await.unwrap();

        assert_eq!(person.mobile_number, "+47 12345678");
        assert_eq!(
            *upstream.numbers.lock().await,
            vec!["+47 12345678".to_string()]
        );
    }

    #[tokio::test]
    async fn test_empty_number_is_rejected() {
        let upstream = Arc::new(RecordingPersons::default());
        let service = PersonService::new(upstream.clone());

        let err = service.search_by_mobile_number("").await.unwrap_err();

        assert_eq!(err.to_string(), "mobile number cannot be empty");
        assert!(upstream.numbers.lock().await.is_empty());
    }
}
