//! Commerce platform source client
//!
//! The pipeline only depends on [`SourceClient`]; [`ShopifyClient`] is the
//! production implementation over the Admin GraphQL API.

mod queries;
mod shopify;

pub use shopify::ShopifyClient;

use async_trait::async_trait;
use serde_json::Value;
use shopsync_common::Result;

use crate::resource::Resource;

/// Parameters for one fetch call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchParams {
    /// Maximum number of top-level nodes to return
    pub limit: u32,
    /// Platform search filter, e.g. `status:any`
    pub query: Option<String>,
}

impl FetchParams {
    /// Params with the resource's default filter
    pub fn for_resource(resource: Resource, limit: u32) -> Self {
        Self {
            limit,
            query: resource.default_query().map(str::to_string),
        }
    }
}

/// Anything that can return the raw payload for a resource.
///
/// Errors from `fetch` are fatal to the run.
#[async_trait]
pub trait SourceClient: Send + Sync {
    async fn fetch(&self, resource: Resource, params: &FetchParams) -> Result<Value>;
}
