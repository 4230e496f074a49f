use {
    alloy::primitives::Address,
    anyhow::{Context, Result},
    ethrpc::Nodes,
    std::fmt::Debug,
    url::Url,
};

pub mod file;

/// Node configuration of the binary.
#[derive(Clone, Debug)]
pub struct Config {
    pub rpc: ethrpc::Config,
    pub nodes: Vec<Endpoint>,
}

/// A node serving one network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub network: String,
    pub url: Url,
    pub multicall: Address,
}

impl Config {
    /// Creates a provider for every configured node.
    pub fn connect(&self) -> Result<Nodes> {
        self.nodes
            .iter()
            .map(|endpoint| {
                let provider = ethrpc::provider(&endpoint.url, &self.rpc)
                    .with_context(|| format!("provider for network {}", endpoint.network))?;
                let node = ethrpc::Node {
                    provider,
                    multicall: endpoint.multicall,
                };
                Ok((endpoint.network.clone(), node))
            })
            .collect()
    }
}

/// Unwraps result or logs a `TOML` parsing error.
fn unwrap_or_log<T, E, P>(result: Result<T, E>, path: &P) -> T
where
    E: Debug,
    P: Debug,
{
    result.unwrap_or_else(|err| {
        if std::env::var("TOML_TRACE_ERROR").is_ok_and(|v| v == "1") {
            panic!("failed to parse TOML config at {path:?}: {err:#?}")
        } else {
            panic!(
                "failed to parse TOML config at: {path:?}. Set TOML_TRACE_ERROR=1 to print \
                 parsing error but this may leak secrets."
            )
        }
    })
}
