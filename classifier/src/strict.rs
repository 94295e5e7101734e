use {
  crate::{Categorize, GroupedChanges},
  thiserror::Error,
  txsim_primitives::{
    AddressError,
    AmountError,
    Decode,
    DecodeError,
    EvmAddress,
    EvmStateChange,
    SolanaAddress,
    SvmStateChange,
  },
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
  #[error(transparent)]
  Amount(#[from] AmountError),

  #[error(transparent)]
  Address(#[from] AddressError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  #[error("State change #{index} is malformed: {source}")]
  Decode { index: usize, source: DecodeError },

  #[error("State change #{index} is invalid: {source}")]
  Invalid { index: usize, source: Violation },

  #[error("State change #{0} has no recognized payload")]
  Unrecognized(usize),
}

/// Checks the payload of a decoded state change beyond its shape.
pub trait Validate {
  fn validate(&self) -> Result<(), Violation>;
}

/// Empty addresses are accepted, the provider leaves the contract of
/// native assets and of some NFT payloads blank.
impl Validate for EvmStateChange {
  fn validate(&self) -> Result<(), Violation> {
    if let Some(amount) = self.change.amount() {
      amount.validate()?;
    }
    for address in self.change.addresses() {
      if !address.is_empty() {
        EvmAddress::try_from(address)?;
      }
    }
    Ok(())
  }
}

impl Validate for SvmStateChange {
  fn validate(&self) -> Result<(), Violation> {
    for address in self.change.addresses() {
      if !address.is_empty() {
        SolanaAddress::try_from(address)?;
      }
    }
    Ok(())
  }
}

/// Like [`crate::classify`], but fails on the first record that is
/// ambiguous, carries no known payload, or holds a malformed amount
/// or address instead of silently skipping it.
pub fn classify_strict<R>(
  changes: impl IntoIterator<Item = R>,
) -> Result<GroupedChanges<R::Output>, Error>
where
  R: Decode,
  R::Output: Categorize + Validate,
{
  let mut grouped = GroupedChanges::default();
  for (index, raw) in changes.into_iter().enumerate() {
    let change = raw
      .decode_strict()
      .map_err(|source| Error::Decode { index, source })?;
    change
      .validate()
      .map_err(|source| Error::Invalid { index, source })?;
    let category = change.category().ok_or(Error::Unrecognized(index))?;
    grouped.push(category, change);
  }
  Ok(grouped)
}
