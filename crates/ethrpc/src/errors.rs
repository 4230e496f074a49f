use alloy::{contract::Error, transports::RpcError};

/// Whether `err` means the node could not serve a call, as opposed to the
/// call being executed and reverting.
///
/// Reverts of `eth_call` come back as JSON RPC error responses carrying revert
/// data, possibly empty. Error responses without any revert data and all other
/// transport failures are blamed on the node.
pub fn is_node_error(err: &Error) -> bool {
    match err {
        Error::TransportError(RpcError::ErrorResp(payload)) => payload.as_revert_data().is_none(),
        Error::TransportError(_) => true,
        _ => false,
    }
}
