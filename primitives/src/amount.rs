use {
  crate::decode::null_as_default,
  alloc::string::{String, ToString},
  core::fmt::{Debug, Display, Formatter},
  num_bigint::{BigInt, BigUint},
  once_cell::sync::Lazy,
  serde::{Deserialize, Serialize},
  thiserror::Error,
};

/// Approval amounts greater or equal to this value are reported by
/// the simulation provider when a spender is allowed to move an
/// unbounded quantity of an asset.
pub const UNLIMITED_ALLOWANCE: &str =
  "1157920892373161954235709850086879078532699846656405640394";

static UNLIMITED_ALLOWANCE_VALUE: Lazy<BigUint> = Lazy::new(|| {
  BigUint::parse_bytes(UNLIMITED_ALLOWANCE.as_bytes(), 10).unwrap_or_default()
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Amount is empty")]
  Empty,

  #[error("Amount '{0}' is not a non-negative decimal integer")]
  NotAnInteger(String),
}

/// An arbitrary precision, non-negative integer amount expressed in
/// the smallest unit of an asset (no decimals applied), exactly as it
/// appears on the wire.
///
/// The string form is kept as-is so that records round-trip unmodified,
/// parsing happens lazily when a value is needed.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
  pub fn new(value: impl Into<String>) -> Self {
    Self(value.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn value(&self) -> Result<BigUint, Error> {
    let trimmed = self.0.trim();
    if trimmed.is_empty() {
      return Err(Error::Empty);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
      return Err(Error::NotAnInteger(self.0.clone()));
    }
    trimmed
      .parse()
      .map_err(|_| Error::NotAnInteger(self.0.clone()))
  }

  /// True when this amount is at or above the provider's
  /// unlimited allowance sentinel.
  pub fn is_unlimited(&self) -> Result<bool, Error> {
    Ok(self.value()? >= *UNLIMITED_ALLOWANCE_VALUE)
  }
}

impl Debug for Amount {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "amount({})", self.0)
  }
}

impl Display for Amount {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for Amount {
  fn from(value: &str) -> Self {
    Self(value.to_string())
  }
}

impl From<u64> for Amount {
  fn from(value: u64) -> Self {
    Self(value.to_string())
  }
}

/// Balance or allowance of an account before and after the simulated
/// transaction is executed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmountChange {
  #[serde(deserialize_with = "null_as_default")]
  pub before: Amount,
  #[serde(deserialize_with = "null_as_default")]
  pub after: Amount,
}

impl AmountChange {
  pub fn new(before: impl Into<Amount>, after: impl Into<Amount>) -> Self {
    Self {
      before: before.into(),
      after: after.into(),
    }
  }

  /// `after - before`, negative values mean that the account
  /// is losing funds.
  pub fn delta(&self) -> Result<BigInt, Error> {
    let before = BigInt::from(self.before.value()?);
    let after = BigInt::from(self.after.value()?);
    Ok(after - before)
  }

  pub fn validate(&self) -> Result<(), Error> {
    self.before.value()?;
    self.after.value()?;
    Ok(())
  }
}

/// Direction of a signed diff as reported for Solana ledgers.
///
/// Anything that does not spell "minus" (in any letter case) is
/// treated as an increase.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum DiffSign {
  #[default]
  Plus,
  Minus,
}

impl From<String> for DiffSign {
  fn from(value: String) -> Self {
    match value.to_lowercase().as_str() {
      "minus" => Self::Minus,
      _ => Self::Plus,
    }
  }
}

impl From<DiffSign> for String {
  fn from(sign: DiffSign) -> Self {
    match sign {
      DiffSign::Plus => "PLUS".into(),
      DiffSign::Minus => "MINUS".into(),
    }
  }
}

/// Magnitude and direction of a balance change in the smallest
/// unit of an asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignedDiff {
  #[serde(deserialize_with = "null_as_default")]
  pub sign: DiffSign,
  #[serde(deserialize_with = "null_as_default")]
  pub digits: u64,
}

impl SignedDiff {
  pub fn plus(digits: u64) -> Self {
    Self {
      sign: DiffSign::Plus,
      digits,
    }
  }

  pub fn minus(digits: u64) -> Self {
    Self {
      sign: DiffSign::Minus,
      digits,
    }
  }

  pub fn is_decrease(&self) -> bool {
    self.sign == DiffSign::Minus
  }

  pub fn value(&self) -> BigInt {
    match self.sign {
      DiffSign::Plus => BigInt::from(self.digits),
      DiffSign::Minus => -BigInt::from(self.digits),
    }
  }
}
