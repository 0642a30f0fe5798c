use crate::config::BisnodeConfig;
use crate::core::sanitize::is_dot_segment;
use crate::domain::model::{
    DirectorySearchRequest, DirectorySearchResponse, MotorVehicleSearchResponse, Person,
    PersonSearchRequest,
};
use crate::domain::ports::{DirectoryApi, MotorVehicleApi, PersonApi};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

const DIRECTORY_PATH: [&str; 3] = ["search", "norway", "directory"];
const MOTOR_VEHICLE_PATH: [&str; 4] = ["search", "norway", "motorvehicle", "v2"];
const PERSON_PATH: [&str; 2] = ["persons", "search"];

/// Client for the Bisnode REST API, authenticated with HTTP Basic.
#[derive(Clone)]
pub struct BisnodeClient {
    client: Client,
    base_url: Url,
    auth_header: HeaderValue,
}

impl BisnodeClient {
    pub fn new(config: &BisnodeConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        let base_url =
            Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
                GatewayError::InvalidConfigValue {
                    field: "bisnode.base_url".to_string(),
                    value: config.base_url.clone(),
                    reason: format!("Invalid URL format: {}", e),
                }
            })?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidConfigValue {
                field: "bisnode.base_url".to_string(),
                value: config.base_url.clone(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url,
            auth_header: basic_auth_header(&config.client_id, &config.client_secret)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    ///
    /// `.` and `..` would be resolved against the preceding segments, so they are refused.
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
        let segments: Vec<&str> = segments.into_iter().collect();
        if let Some(segment) = segments.iter().find(|s| is_dot_segment(s)) {
            return Err(GatewayError::validation(format!(
                "invalid path segment: {}",
                segment
            )));
        }

        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .header(AUTHORIZATION, self.auth_header.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Bisnode response status: {}", status);

        let body = response.text().await?;

        if status.is_client_error() || status.is_server_error() {
            tracing::warn!("Bisnode request failed with status {}", status.as_u16());
            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| GatewayError::Decode { source, body })
    }
}

/// `Basic base64(client_id:client_secret)`, marked sensitive so it is never logged.
fn basic_auth_header(client_id: &str, client_secret: &str) -> Result<HeaderValue> {
    let token = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    let mut value =
        HeaderValue::from_str(&format!("Basic {}", token)).map_err(|e| GatewayError::Config {
            message: format!("Invalid Basic auth header: {}", e),
        })?;
    value.set_sensitive(true);
    Ok(value)
}

#[async_trait]
impl DirectoryApi for BisnodeClient {
    async fn search_person(&self, mobile_number: &str) -> Result<DirectorySearchResponse> {
        let url = self.endpoint(DIRECTORY_PATH)?;
        tracing::debug!("Making directory person search to: {}", url);

        let body = DirectorySearchRequest::person_by_phone(mobile_number);
        self.execute(self.client.post(url).json(&body)).await
    }

    async fn search_organization(&self, org_no: &str) -> Result<DirectorySearchResponse> {
        let url = self.endpoint(DIRECTORY_PATH.into_iter().chain([org_no]))?;
        tracing::debug!("Making directory organization search to: {}", url);

        self.execute(self.client.get(url)).await
    }
}

#[async_trait]
impl MotorVehicleApi for BisnodeClient {
    async fn search_vehicle(&self, search_term: &str) -> Result<MotorVehicleSearchResponse> {
        if search_term.is_empty() {
            return Err(GatewayError::validation("search term cannot be empty"));
        }

        let url = self.endpoint(MOTOR_VEHICLE_PATH.into_iter().chain([search_term]))?;
        tracing::debug!("Making motor vehicle search to: {}", url);

        self.execute(self.client.get(url)).await
    }
}

#[async_trait]
impl PersonApi for BisnodeClient {
    async fn search_person(&self, mobile_number: &str) -> Result<Person> {
        let url = self.endpoint(PERSON_PATH)?;
        tracing::debug!("Making person search to: {}", url);

        let body = PersonSearchRequest {
            mobile_number: mobile_number.to_string(),
        };
        self.execute(self.client.post(url).json(&body)).await
    }
}
