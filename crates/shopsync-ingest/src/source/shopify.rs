use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use shopsync_common::{Result, SyncError};
use std::time::Duration;
use tracing::{debug, instrument};

use super::{queries, FetchParams, SourceClient};
use crate::config::SourceConfig;
use crate::resource::Resource;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Admin GraphQL API client
pub struct ShopifyClient {
    client: Client,
    endpoint: String,
    access_token: String,
}

impl ShopifyClient {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SyncError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: graphql_url(&config.shop, &config.api_version),
            access_token: config.access_token.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// `shop` may be a bare domain or a full base URL
fn graphql_url(shop: &str, api_version: &str) -> String {
    let base = if shop.starts_with("http://") || shop.starts_with("https://") {
        shop.trim_end_matches('/').to_string()
    } else {
        format!("https://{}", shop.trim_end_matches('/'))
    };

    format!("{}/admin/api/{}/graphql.json", base, api_version)
}

fn document(resource: Resource) -> &'static str {
    match resource {
        Resource::Inventory => queries::INVENTORY,
        Resource::Orders => queries::ORDERS,
        Resource::Customers => queries::CUSTOMERS,
    }
}

/// Messages from a top-level GraphQL `errors` array, if any
fn graphql_errors(body: &Value) -> Option<String> {
    let errors = body["errors"].as_array().filter(|e| !e.is_empty())?;
    let messages: Vec<String> = errors
        .iter()
        .map(|e| e["message"].as_str().map(str::to_string).unwrap_or_else(|| e.to_string()))
        .collect();
    Some(messages.join("; "))
}

#[async_trait]
impl SourceClient for ShopifyClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self, resource: Resource, params: &FetchParams) -> Result<Value> {
        let request = json!({
            "query": document(resource),
            "variables": { "first": params.limit, "query": params.query },
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| SyncError::source(format!("request for {} failed: {}", resource, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::source(format!(
                "{} request returned {}",
                resource, status
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| SyncError::source(format!("reading {} response failed: {}", resource, e)))?;
        let body: Value = serde_json::from_str(&text)?;

        if let Some(message) = graphql_errors(&body) {
            return Err(SyncError::source(format!("{} query rejected: {}", resource, message)));
        }

        debug!(%resource, "Fetched raw payload");
        Ok(body)
    }
}
