use std::time::Duration;

use anyhow::{bail, Context};
use cc_core::config::CatalogConfig;
use cc_core::ports::{CatalogError, CatalogPort};
use cc_core::{EntityId, EntityRecord};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use tracing::{debug, warn};

use super::wire::EntityDto;

/// Resource segment used when the configuration leaves it empty.
pub const DEFAULT_RESOURCE: &str = "entity";
/// Request timeout used when the configuration leaves it at zero.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5_000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCatalogConfig {
    pub base_url: String,
    pub resource: String,
    pub timeout: Duration,
}

impl HttpCatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            resource: DEFAULT_RESOURCE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Apply adapter defaults to the raw configuration values.
    /// 将适配器默认值应用到原始配置上。
    pub fn from_catalog_config(config: &CatalogConfig) -> Self {
        let resource = config.resource.trim().trim_matches('/');
        Self {
            base_url: config.base_url.trim().to_string(),
            resource: if resource.is_empty() {
                DEFAULT_RESOURCE.to_string()
            } else {
                resource.to_string()
            },
            timeout: if config.timeout_ms == 0 {
                DEFAULT_TIMEOUT
            } else {
                Duration::from_millis(config.timeout_ms)
            },
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Catalog lookups over HTTP(S): `GET {base_url}/{resource}/{id}`.
///
/// One request per call, no retries. The whole call (connect, headers and
/// body) is bounded by the configured timeout.
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
    resource: String,
    timeout: Duration,
}

impl HttpCatalogClient {
    pub fn new(config: HttpCatalogConfig) -> anyhow::Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            bail!("catalog base_url is empty");
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("creator-cards/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build catalog HTTP client")?;

        Ok(Self {
            client,
            base_url,
            resource: config.resource,
            timeout: config.timeout,
        })
    }

    pub fn entity_url(&self, id: EntityId) -> String {
        format!("{}/{}/{}", self.base_url, self.resource, id)
    }

    fn transport_error(&self, err: reqwest::Error) -> CatalogError {
        if err.is_timeout() {
            CatalogError::Unavailable(format!(
                "request timed out after {} ms",
                self.timeout.as_millis()
            ))
        } else {
            CatalogError::Unavailable(err.to_string())
        }
    }
}

#[async_trait::async_trait]
impl CatalogPort for HttpCatalogClient {
    #[tracing::instrument(name = "catalog.http.fetch", skip(self, id), fields(entity_id = %id))]
    async fn fetch(&self, id: EntityId) -> Result<EntityRecord, CatalogError> {
        let url = self.entity_url(id);
        debug!(%url, "requesting catalog entity");

        let result = async {
            let response = self
                .client
                .get(&url)
                .header(ACCEPT, "application/json")
                .send()
                .await
                .map_err(|err| self.transport_error(err))?;

            match response.status() {
                StatusCode::NOT_FOUND => return Err(CatalogError::NotFound(id)),
                status if !status.is_success() => {
                    return Err(CatalogError::Unavailable(format!(
                        "unexpected status {status}"
                    )))
                }
                _ => {}
            }

            let body = response
                .bytes()
                .await
                .map_err(|err| self.transport_error(err))?;

            EntityDto::parse(&body)?.into_record(id)
        }
        .await;

        match &result {
            Ok(record) => debug!(name = %record.name, "catalog entity received"),
            Err(err) => warn!(kind = %err.kind(), error = %err, "catalog request failed"),
        }
        result
    }
}
