//! Resource kinds the pipeline can sync

use serde::{Deserialize, Serialize};
use shopsync_common::{CustomerRecord, FlatRecord, InventoryRecord, OrderRecord};

/// A resource fetched from the commerce platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Inventory,
    Orders,
    Customers,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Inventory => "inventory",
            Resource::Orders => "orders",
            Resource::Customers => "customers",
        }
    }

    /// Sink model used when no override is given
    pub fn default_model(&self) -> &'static str {
        match self {
            Resource::Inventory => InventoryRecord::MODEL,
            Resource::Orders => OrderRecord::MODEL,
            Resource::Customers => CustomerRecord::MODEL,
        }
    }

    /// Search filter applied when the caller gives none
    pub fn default_query(&self) -> Option<&'static str> {
        match self {
            Resource::Orders => Some("status:any"),
            Resource::Inventory | Resource::Customers => None,
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
