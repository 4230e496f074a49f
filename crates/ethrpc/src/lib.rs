pub mod errors;
pub mod multicall;

use {
    alloy::{
        primitives::Address,
        providers::{DynProvider, Provider as _, ProviderBuilder},
        rpc::client::ClientBuilder,
        transports::http::{Http, reqwest},
    },
    std::{collections::HashMap, fmt, time::Duration},
    url::Url,
};

pub type Provider = DynProvider;

#[derive(Debug, Clone)]
pub struct Config {
    /// Timeout for a single RPC request. A request that does not complete in
    /// time fails like any other transport error.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Creates a provider talking to the node at `url` over HTTP.
pub fn provider(url: &Url, config: &Config) -> anyhow::Result<Provider> {
    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;
    let rpc = ClientBuilder::default().transport(Http::with_client(http, url.clone()), false);
    Ok(ProviderBuilder::new().connect_client(rpc).erased())
}

/// Everything needed to read state from one network.
#[derive(Clone)]
pub struct Node {
    pub provider: Provider,
    /// Address of the Multicall3 deployment used to batch reads.
    pub multicall: Address,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("multicall", &self.multicall)
            .finish_non_exhaustive()
    }
}

/// Nodes indexed by network identifier (the chain ID as a string, e.g. `"1"`).
#[derive(Clone, Debug, Default)]
pub struct Nodes(HashMap<String, Node>);

impl Nodes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, network: impl Into<String>, node: Node) {
        self.0.insert(network.into(), node);
    }

    pub fn get(&self, network: &str) -> Option<&Node> {
        self.0.get(network)
    }
}

impl FromIterator<(String, Node)> for Nodes {
    fn from_iter<T: IntoIterator<Item = (String, Node)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A node whose provider answers every request with an error. Useful for tests
/// that mock out the actual calls.
#[cfg(any(test, feature = "test-util"))]
pub fn dummy_node() -> Node {
    let asserter = alloy::providers::mock::Asserter::new();
    Node {
        provider: ProviderBuilder::new()
            .connect_mocked_client(asserter)
            .erased(),
        multicall: multicall::MULTICALL3,
    }
}

/// Like [`dummy_node`] but as a single entry registry for `network`.
#[cfg(any(test, feature = "test-util"))]
pub fn dummy_nodes(network: &str) -> Nodes {
    let mut nodes = Nodes::new();
    nodes.insert(network, dummy_node());
    nodes
}
