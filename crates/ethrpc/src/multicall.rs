//! Batched contract reads.
//!
//! All calls of a batch are bundled into a single `aggregate` call on the
//! Multicall3 contract and executed with `eth_call` at one block. `aggregate`
//! reverts as soon as any inner call reverts, so a batch either succeeds as a
//! whole or fails as a whole.

use {
    crate::{Node, errors},
    alloy::{
        dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt},
        eips::BlockId,
        json_abi::Function,
        primitives::{Address, Bytes, address},
    },
    thiserror::Error,
};

alloy::sol! {
    #[sol(rpc, all_derives)]
    interface IMulticall3 {
        struct Call {
            address target;
            bytes callData;
        }

        function aggregate(Call[] calldata calls)
            external
            payable
            returns (uint256 blockNumber, bytes[] memory returnData);
    }
}

/// The canonical Multicall3 deployment. It lives at the same address on
/// virtually every EVM chain.
pub const MULTICALL3: Address = address!("0xcA11bde05977b3631167028862bE2a173976CA11");

/// A single read call in a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    /// The contract to call.
    pub target: Address,
    /// Name of the called function. It must be part of the interfaces the
    /// batch gets executed with.
    pub function: String,
    /// Arguments in the order of the function's parameters. `None` marks an
    /// argument that was never bound to a value.
    pub args: Vec<Option<DynSolValue>>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("function {0:?} is not part of the batch interfaces")]
    UnknownFunction(String),
    #[error("argument {argument} of {function:?} is unresolved")]
    UnresolvedArgument { function: String, argument: String },
    #[error("failed to encode call to {function:?}: {source}")]
    Encoding {
        function: String,
        source: alloy::dyn_abi::Error,
    },
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
    #[error("failed to decode result {index}: {source}")]
    Decoding {
        index: usize,
        source: alloy::dyn_abi::Error,
    },
    #[error("batch of {expected} calls returned {actual} results")]
    LengthMismatch { expected: usize, actual: usize },
}

impl Error {
    /// Coarse classification used as a log field and metric label.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownFunction(_) | Self::UnresolvedArgument { .. } | Self::Encoding { .. } => {
                "encoding"
            }
            Self::Contract(err) if errors::is_node_error(err) => "node",
            Self::Contract(_) => "revert",
            Self::Decoding { .. } | Self::LengthMismatch { .. } => "decoding",
        }
    }
}

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait BatchCallExecuting: Send + Sync {
    /// Executes all `calls` at `block` on the node of `network`.
    ///
    /// Each call's function is looked up by name in `interfaces`. On success
    /// the decoded outputs are returned in the same order as `calls`.
    async fn execute(
        &self,
        network: &str,
        node: &Node,
        interfaces: &[Function],
        calls: &[Call],
        block: BlockId,
    ) -> Result<Vec<Vec<DynSolValue>>, Error>;
}

/// [`BatchCallExecuting`] implementation backed by the Multicall3 contract.
#[derive(Clone, Copy, Debug, Default)]
pub struct Multicall;

#[async_trait::async_trait]
impl BatchCallExecuting for Multicall {
    async fn execute(
        &self,
        network: &str,
        node: &Node,
        interfaces: &[Function],
        calls: &[Call],
        block: BlockId,
    ) -> Result<Vec<Vec<DynSolValue>>, Error> {
        let encoded = encode(interfaces, calls)?;
        tracing::trace!(%network, calls = encoded.len(), ?block, "executing multicall");
        let IMulticall3::aggregateReturn {
            returnData: return_data,
            ..
        } = IMulticall3::new(node.multicall, node.provider.clone())
            .aggregate(encoded)
            .block(block)
            .call()
            .await?;
        decode(interfaces, calls, return_data)
    }
}

fn function<'a>(interfaces: &'a [Function], name: &str) -> Result<&'a Function, Error> {
    interfaces
        .iter()
        .find(|function| function.name == name)
        .ok_or_else(|| Error::UnknownFunction(name.to_owned()))
}

fn encode(interfaces: &[Function], calls: &[Call]) -> Result<Vec<IMulticall3::Call>, Error> {
    calls
        .iter()
        .map(|call| {
            let function = function(interfaces, &call.function)?;
            let args = call
                .args
                .iter()
                .zip(&function.inputs)
                .map(|(arg, param)| {
                    arg.clone().ok_or_else(|| Error::UnresolvedArgument {
                        function: function.name.clone(),
                        argument: param.name.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let data = function
                .abi_encode_input(&args)
                .map_err(|source| Error::Encoding {
                    function: function.name.clone(),
                    source,
                })?;
            Ok(IMulticall3::Call {
                target: call.target,
                callData: data.into(),
            })
        })
        .collect()
}

fn decode(
    interfaces: &[Function],
    calls: &[Call],
    return_data: Vec<Bytes>,
) -> Result<Vec<Vec<DynSolValue>>, Error> {
    if return_data.len() != calls.len() {
        return Err(Error::LengthMismatch {
            expected: calls.len(),
            actual: return_data.len(),
        });
    }

    calls
        .iter()
        .zip(return_data)
        .enumerate()
        .map(|(index, (call, data))| {
            function(interfaces, &call.function)?
                .abi_decode_output(&data)
                .map_err(|source| Error::Decoding { index, source })
        })
        .collect()
}
