pub use alloy::primitives::{Address, U256};
use {
    alloy::eips::BlockId,
    std::{
        fmt::{self, Display, Formatter},
        str::FromStr,
    },
    thiserror::Error,
};

/// Identifier of the network to read from: the chain ID as a string, e.g.
/// `"1"` for Ethereum mainnet.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Network(pub String);

impl Network {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for Network {
    fn from(chain_id: u64) -> Self {
        Self(chain_id.to_string())
    }
}

impl From<&str> for Network {
    fn from(network: &str) -> Self {
        Self(network.to_owned())
    }
}

/// The chain state all reads of an invocation are performed against.
///
/// With [`Snapshot::Latest`] every batched call reads whatever block is the
/// most recent one when it is executed. Consecutive calls may therefore see
/// different chain states.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Snapshot {
    #[default]
    Latest,
    Block(u64),
}

impl Snapshot {
    pub fn block_id(self) -> BlockId {
        match self {
            Self::Latest => BlockId::latest(),
            Self::Block(number) => BlockId::number(number),
        }
    }
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Block(number) => write!(f, "{number}"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("snapshot must be \"latest\" or a block number, got {0:?}")]
pub struct InvalidSnapshot(String);

impl FromStr for Snapshot {
    type Err = InvalidSnapshot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(Self::Latest),
            _ => s
                .parse()
                .map(Self::Block)
                .map_err(|_| InvalidSnapshot(s.to_owned())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid account address {0:?}")]
pub struct InvalidAddress(String);

/// Parses an account address given in any letter case.
///
/// All lower or all upper case hex is accepted as is. Mixed case hex is taken
/// to be EIP-55 checksummed and has to match its checksum.
pub fn parse_address(s: &str) -> Result<Address, InvalidAddress> {
    let invalid = || InvalidAddress(s.to_owned());
    let address = Address::from_str(s).map_err(|_| invalid())?;
    let hex = s.strip_prefix("0x").unwrap_or(s);
    let mixed_case = hex.chars().any(|c| c.is_ascii_lowercase())
        && hex.chars().any(|c| c.is_ascii_uppercase());
    if mixed_case && checksum(&address)[2..] != *hex {
        return Err(invalid());
    }
    Ok(address)
}

/// The canonical (EIP-55 checksummed) representation of an address.
pub fn checksum(address: &Address) -> String {
    address.to_checksum(None)
}
