use {
  crate::decode::null_as_default,
  alloc::string::String,
  core::{
    fmt::{Debug, Display, Formatter},
    ops::Deref,
    str::FromStr,
  },
  serde::{Deserialize, Serialize},
  thiserror::Error,
};

/// Contract address used by the simulation provider for the native
/// asset of an EVM chain (ETH on mainnet).
pub const NATIVE_ASSET_CONTRACT_ADDRESS: &str =
  "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  #[error("EVM address '{0}' must start with 0x")]
  MissingHexPrefix(String),

  #[error("EVM address '{0}' is not valid hex: {1}")]
  InvalidHex(String, hex::FromHexError),

  #[error("Solana address '{0}' is not valid base58: {1}")]
  InvalidBase58(String, bs58::decode::Error),

  #[error("Address '{0}' decodes to {1} bytes, expected {2}")]
  InvalidLength(String, usize, usize),
}

/// A reference to an on-chain entity as reported by the simulation
/// provider, e.g. the contract of a token, the owner or spender of
/// an allowance.
///
/// `kind` classifies the entity, in practice this is mostly "ACCOUNT",
/// but the provider leaves it empty in some payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressRef {
  #[serde(deserialize_with = "null_as_default")]
  pub address: String,
  #[serde(deserialize_with = "null_as_default")]
  pub kind: String,
}

impl AddressRef {
  pub fn account(address: impl Into<String>) -> Self {
    Self {
      address: address.into(),
      kind: "ACCOUNT".into(),
    }
  }

  /// True when this reference points at the chain's native asset
  /// rather than a token contract.
  pub fn is_native_asset(&self) -> bool {
    is_native_asset_address(&self.address)
  }
}

pub fn is_native_asset_address(address: &str) -> bool {
  address.is_empty()
    || address.eq_ignore_ascii_case(NATIVE_ASSET_CONTRACT_ADDRESS)
}

/// A 20-byte EVM account or contract address.
///
/// Parsing accepts both lower and mixed case hex, checksums
/// are not verified.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EvmAddress([u8; 20]);

impl AsRef<[u8]> for EvmAddress {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl Deref for EvmAddress {
  type Target = [u8];

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl Display for EvmAddress {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "0x{}", hex::encode(self.0))
  }
}

impl Debug for EvmAddress {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "evm({self})")
  }
}

impl FromStr for EvmAddress {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let digits = s
      .strip_prefix("0x")
      .or_else(|| s.strip_prefix("0X"))
      .ok_or_else(|| Error::MissingHexPrefix(s.into()))?;
    let bytes =
      hex::decode(digits).map_err(|e| Error::InvalidHex(s.into(), e))?;
    let len = bytes.len();
    Ok(Self(
      bytes
        .try_into()
        .map_err(|_| Error::InvalidLength(s.into(), len, 20))?,
    ))
  }
}

impl TryFrom<&str> for EvmAddress {
  type Error = Error;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    FromStr::from_str(value)
  }
}

/// A 32-byte Solana account address (ed25519 public key or
/// program derived address), base58 encoded on the wire.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolanaAddress([u8; 32]);

impl AsRef<[u8]> for SolanaAddress {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl Deref for SolanaAddress {
  type Target = [u8];

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl Display for SolanaAddress {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", bs58::encode(self.0).into_string())
  }
}

impl Debug for SolanaAddress {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "solana({self})")
  }
}

impl From<SolanaAddress> for String {
  fn from(addr: SolanaAddress) -> Self {
    bs58::encode(addr.0).into_string()
  }
}

impl FromStr for SolanaAddress {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let bytes = bs58::decode(s)
      .into_vec()
      .map_err(|e| Error::InvalidBase58(s.into(), e))?;
    let len = bytes.len();
    Ok(Self(
      bytes
        .try_into()
        .map_err(|_| Error::InvalidLength(s.into(), len, 32))?,
    ))
  }
}

impl TryFrom<&str> for SolanaAddress {
  type Error = Error;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    FromStr::from_str(value)
  }
}

#[cfg(test)]
mod tests {
  use super::{is_native_asset_address, Error, EvmAddress, SolanaAddress};

  #[test]
  fn evm_addresses() -> anyhow::Result<()> {
    let addr: EvmAddress =
      "0x6B175474E89094C44Da98b954EedeAC495271d0F".parse()?;
    assert_eq!(
      addr.to_string(),
      "0x6b175474e89094c44da98b954eedeac495271d0f"
    );

    assert!(matches!(
      "6b175474e89094c44da98b954eedeac495271d0f".parse::<EvmAddress>(),
      Err(Error::MissingHexPrefix(_))
    ));
    assert!(matches!(
      "0x6b17".parse::<EvmAddress>(),
      Err(Error::InvalidLength(_, 2, 20))
    ));
    assert!(matches!(
      "0xzz".parse::<EvmAddress>(),
      Err(Error::InvalidHex(..))
    ));
    Ok(())
  }

  #[test]
  fn solana_addresses() -> anyhow::Result<()> {
    let addr: SolanaAddress =
      "5sDWP4vCRgDrGsmS1RRuWGRWKo5mhP5wKw8RNqK6zRer".parse()?;
    assert_eq!(
      String::from(addr),
      "5sDWP4vCRgDrGsmS1RRuWGRWKo5mhP5wKw8RNqK6zRer"
    );
    assert_eq!(
      "11111111111111111111111111111111".parse::<SolanaAddress>()?,
      SolanaAddress::try_from("11111111111111111111111111111111")?
    );
    assert!("0OIl".parse::<SolanaAddress>().is_err());
    Ok(())
  }

  #[test]
  fn native_asset_detection() {
    assert!(is_native_asset_address(""));
    assert!(is_native_asset_address(
      "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE"
    ));
    assert!(!is_native_asset_address(
      "0x6b175474e89094c44da98b954eedeac495271d0f"
    ));
  }
}
