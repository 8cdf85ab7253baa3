//! Endpoint and explorer-link configuration.
//!
//! Defaults target the Walrus testnet. Endpoints can be overridden through
//! environment variables; explorer link bases are derived from the Sui
//! network name and are not user-editable.

use std::env;

pub const DEFAULT_PUBLISHER_URL: &str = "https://publisher.walrus-testnet.walrus.space";
pub const DEFAULT_AGGREGATOR_URL: &str = "https://aggregator.walrus-testnet.walrus.space";
pub const DEFAULT_SUI_NETWORK: &str = "testnet";

const EXPLORER_HOST: &str = "suiscan.xyz";

/// Walrus service endpoints plus the Sui network used for explorer links.
#[derive(Clone, Debug)]
pub struct EndpointConfig {
    /// Write endpoint: accepts blob store requests.
    pub publisher_url: String,
    /// Read endpoint: serves stored blobs.
    pub aggregator_url: String,
    pub network: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            publisher_url: DEFAULT_PUBLISHER_URL.to_string(),
            aggregator_url: DEFAULT_AGGREGATOR_URL.to_string(),
            network: DEFAULT_SUI_NETWORK.to_string(),
        }
    }
}

impl EndpointConfig {
    /// Read endpoints from WALRUS_PUBLISHER_URL, WALRUS_AGGREGATOR_URL, and
    /// SUI_NETWORK, falling back to the testnet defaults.
    pub fn from_env() -> Self {
        Self {
            publisher_url: env::var("WALRUS_PUBLISHER_URL")
                .unwrap_or_else(|_| DEFAULT_PUBLISHER_URL.to_string()),
            aggregator_url: env::var("WALRUS_AGGREGATOR_URL")
                .unwrap_or_else(|_| DEFAULT_AGGREGATOR_URL.to_string()),
            network: env::var("SUI_NETWORK").unwrap_or_else(|_| DEFAULT_SUI_NETWORK.to_string()),
        }
    }

    pub fn explorer_links(&self) -> ExplorerLinks {
        ExplorerLinks::for_network(&self.network)
    }
}

/// Base URLs for the Sui explorer: one for transactions, one for objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerLinks {
    pub view_tx_url: String,
    pub view_object_url: String,
}

impl ExplorerLinks {
    pub fn for_network(network: &str) -> Self {
        Self {
            view_tx_url: format!("https://{}/{}/tx", EXPLORER_HOST, network),
            view_object_url: format!("https://{}/{}/object", EXPLORER_HOST, network),
        }
    }
}
