//! CLI arguments for the `staked-balance` binary.

use {
    crate::domain::eth::Snapshot,
    clap::Parser,
    std::path::PathBuf,
};

/// Compute the staked DeFi balance score of a set of accounts
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// The log filter.
    #[arg(long, env, default_value = "warn,staked_balance=debug,ethrpc=debug")]
    pub log: String,

    /// Emit logs as JSON.
    #[arg(long, env)]
    pub use_json_logs: bool,

    /// Path to the node configuration file. This file should be in TOML
    /// format.
    #[arg(long, env)]
    pub config: PathBuf,

    /// The network (chain ID) to read the pools from.
    #[arg(long, env)]
    pub network: String,

    /// Block to read balances at: a block number or "latest".
    #[arg(long, env, default_value = "latest")]
    pub snapshot: Snapshot,

    /// Path to the strategy options: a JSON array of pool configurations.
    #[arg(long, env)]
    pub options: PathBuf,

    /// Comma separated list of accounts to score.
    #[arg(long, env, required = true, value_delimiter = ',')]
    pub addresses: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_arguments() {
        let args = Args::try_parse_from([
            "staked-balance",
            "--config",
            "nodes.toml",
            "--network",
            "1",
            "--snapshot",
            "17000000",
            "--options",
            "options.json",
            "--addresses",
            "0x1111111111111111111111111111111111111111,0x2222222222222222222222222222222222222222",
        ])
        .unwrap();

        assert_eq!(args.snapshot, Snapshot::Block(17_000_000));
        assert_eq!(args.network, "1");
        assert_eq!(args.addresses.len(), 2);
        assert!(!args.use_json_logs);
    }

    #[test]
    fn defaults_to_latest_snapshot() {
        let args = Args::try_parse_from([
            "staked-balance",
            "--config",
            "nodes.toml",
            "--network",
            "100",
            "--options",
            "options.json",
            "--addresses",
            "0x1111111111111111111111111111111111111111",
        ])
        .unwrap();
        assert_eq!(args.snapshot, Snapshot::Latest);
    }

    #[test]
    fn rejects_invalid_snapshots() {
        assert!(
            Args::try_parse_from([
                "staked-balance",
                "--config",
                "nodes.toml",
                "--network",
                "1",
                "--snapshot",
                "yesterday",
                "--options",
                "options.json",
                "--addresses",
                "0x1111111111111111111111111111111111111111",
            ])
            .is_err()
        );
    }
}
