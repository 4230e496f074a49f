use {
    crate::infra::config::{self, unwrap_or_log},
    alloy::primitives::Address,
    serde::Deserialize,
    std::{path::Path, time::Duration},
    tokio::fs,
    url::Url,
};

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Config {
    /// Timeout for a single request to a node.
    #[serde(with = "humantime_serde", default = "default_request_timeout")]
    request_timeout: Duration,

    /// The nodes to read chain state from, one per network.
    #[serde(default)]
    node: Vec<Node>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Node {
    /// The network (chain ID) served by the node.
    network: String,

    /// JSON RPC endpoint of the node.
    url: Url,

    /// Multicall3 deployment to batch reads with. Defaults to the canonical
    /// deployment address.
    multicall: Option<Address>,
}

fn default_request_timeout() -> Duration {
    ethrpc::Config::default().request_timeout
}

/// Load the node configuration from a TOML file.
///
/// # Panics
///
/// This method panics if the config is invalid or on I/O errors.
pub async fn load(path: &Path) -> config::Config {
    let data = fs::read_to_string(path)
        .await
        .unwrap_or_else(|e| panic!("I/O error while reading {path:?}: {e:?}"));
    // Not printing detailed error because it could potentially leak secrets.
    parse(unwrap_or_log(toml::de::from_str::<Config>(&data), &path))
}

fn parse(config: Config) -> config::Config {
    let mut nodes = Vec::<config::Endpoint>::with_capacity(config.node.len());
    for node in config.node {
        if nodes.iter().any(|existing| existing.network == node.network) {
            panic!(
                "invalid configuration: multiple nodes for network {}",
                node.network
            );
        }
        nodes.push(config::Endpoint {
            network: node.network,
            url: node.url,
            multicall: node.multicall.unwrap_or(ethrpc::multicall::MULTICALL3),
        });
    }

    config::Config {
        rpc: ethrpc::Config {
            request_timeout: config.request_timeout,
        },
        nodes,
    }
}
