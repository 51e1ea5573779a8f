use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use tracing::{error, info, instrument};

use super::errors::{StoreError, StoreResult};
use super::traits::RegistrationStore;
use crate::registration::RegistrationRecord;
use crate::services::config::StoreConfig;

/// Client for the Supabase REST (PostgREST) interface
#[derive(Clone)]
pub struct SupabaseClient {
    pub(crate) http_client: Client,
    pub(crate) endpoint: String,
}

impl SupabaseClient {
    /// Create a client for the configured table
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("apikey", header_value(&config.anon_key)?);
        headers.insert(
            AUTHORIZATION,
            header_value(&format!("Bearer {}", config.anon_key))?,
        );

        let http_client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            endpoint: config.rest_endpoint(),
        })
    }

    async fn into_error(response: Response) -> StoreError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        StoreError::Rejected {
            status,
            message: error_message_from_body(status, &body),
        }
    }
}

#[async_trait(?Send)]
impl RegistrationStore for SupabaseClient {
    #[instrument(skip(self), err)]
    async fn select_matching(
        &self,
        column: &str,
        value: &str,
    ) -> StoreResult<Vec<serde_json::Value>> {
        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&filter_query(column, value))
            .send()
            .await
            .map_err(|e| StoreError::Network {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let err = Self::into_error(response).await;
            error!("Lookup on {} failed: {}", column, err);
            return Err(err);
        }

        response
            .json::<Vec<serde_json::Value>>()
            .await
            .map_err(|e| StoreError::Decode {
                message: e.to_string(),
            })
    }

    #[instrument(skip(self, record), fields(email = %record.email), err)]
    async fn insert(&self, record: &RegistrationRecord) -> StoreResult<()> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await
            .map_err(|e| StoreError::Network {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(Self::into_error(response).await);
        }

        info!("Inserted registration row");
        Ok(())
    }

    fn store_name(&self) -> &'static str {
        "supabase"
    }
}

fn header_value(value: &str) -> StoreResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| StoreError::Configuration {
        message: format!("Invalid header value: {}", e),
    })
}

/// PostgREST query pairs for an equality lookup
pub(crate) fn filter_query(column: &str, value: &str) -> Vec<(String, String)> {
    vec![
        ("select".to_string(), "*".to_string()),
        (column.to_string(), format!("eq.{}", value)),
    ]
}

/// PostgREST error bodies look like `{"code": "...", "message": "..."}`
pub(crate) fn error_message_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .or_else(|| json.get("msg"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("Request failed with status {}", status)
            } else {
                body.trim().to_string()
            }
        })
}
