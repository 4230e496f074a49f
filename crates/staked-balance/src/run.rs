use {
    crate::{
        domain::{
            PoolConfig,
            Strategy,
            eth::{self, Network},
            strategy::Input,
        },
        infra::{cli, config, observe},
    },
    anyhow::{Context, Result},
    clap::Parser,
    ethrpc::multicall::Multicall,
    std::{path::Path, sync::Arc},
    tokio::fs,
};

/// Entry point of the binary. Exits the process with a non-zero code when no
/// scores could be computed.
pub async fn start(args: impl Iterator<Item = String>) {
    let args = cli::Args::parse_from(args);
    ::observe::tracing::initialize(&::observe::Config::new(&args.log, args.use_json_logs));
    observe::metrics::init();
    tracing::info!("running staked balance strategy with {args:#?}");

    if let Err(err) = run(args).await {
        tracing::error!(?err, "failed to compute scores");
        std::process::exit(1);
    }
}

/// Computes the scores described by the arguments and prints them to stdout
/// as JSON.
pub async fn run(args: cli::Args) -> Result<()> {
    let config = config::file::load(&args.config).await;
    let nodes = config.connect()?;
    let options = load_options(&args.options).await?;
    let addresses = args
        .addresses
        .iter()
        .map(|address| eth::parse_address(address.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    let strategy = Strategy::new(nodes, Arc::new(Multicall));
    let scores = strategy
        .score(&Input {
            network: Network(args.network),
            addresses,
            options,
            snapshot: args.snapshot,
        })
        .await?;

    println!("{}", serde_json::to_string_pretty(&scores)?);
    observe::metrics::dump();
    Ok(())
}

async fn load_options(path: &Path) -> Result<Vec<PoolConfig>> {
    let data = fs::read_to_string(path)
        .await
        .with_context(|| format!("reading strategy options from {path:?}"))?;
    serde_json::from_str(&data).with_context(|| format!("parsing strategy options in {path:?}"))
}
