//! Derivations that turn classified state changes into the labels
//! shown on a transaction confirmation screen.

use {
  core::fmt::{Display, Formatter},
  num_bigint::{BigInt, BigUint},
  num_traits::{Num, Signed, Zero},
  serde::Serialize,
  txsim_primitives::{
    is_native_asset_address,
    Amount,
    AmountChange,
    AmountError,
    Asset,
    EvmChange,
    EvmStateChange,
    SignedDiff,
    SolStakeAuthorityChangeData,
    SvmChange,
    SvmStateChange,
  },
};

/// Fractional digits kept when formatting amounts.
pub const DISPLAY_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransferDirection {
  Send,
  Receive,
}

impl TransferDirection {
  /// Positive deltas are incoming funds, everything else
  /// (including zero) is shown as outgoing.
  pub fn from_delta(delta: &BigInt) -> Self {
    if delta.is_positive() {
      Self::Receive
    } else {
      Self::Send
    }
  }

  pub fn from_diff(diff: &SignedDiff) -> Self {
    if diff.is_decrease() {
      Self::Send
    } else {
      Self::Receive
    }
  }

  pub fn sign(&self) -> char {
    match self {
      Self::Send => '-',
      Self::Receive => '+',
    }
  }
}

impl Display for TransferDirection {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(match self {
      Self::Send => "Send",
      Self::Receive => "Receive",
    })
  }
}

/// Renders an integer amount in the smallest unit as a decimal
/// number with `decimals` applied.
///
/// At most [`DISPLAY_PRECISION`] fractional digits are kept
/// (truncated, not rounded), trailing zeros are trimmed and the
/// symbol is appended when not empty.
pub fn format_units(amount: &BigUint, decimals: u32, symbol: &str) -> String {
  let digits = amount.to_string();
  let decimals = decimals as usize;
  let split = digits.len().saturating_sub(decimals);

  // leading zeros are generated lazily, `decimals` comes from the
  // provider and is not bounded
  let fraction: String = core::iter::repeat('0')
    .take(decimals.saturating_sub(digits.len()))
    .chain(digits[split..].chars())
    .take(DISPLAY_PRECISION)
    .collect();
  let fraction = fraction.trim_end_matches('0');

  let mut output = match &digits[..split] {
    "" => String::from("0"),
    whole => whole.to_string(),
  };
  if !fraction.is_empty() {
    output.push('.');
    output.push_str(fraction);
  }
  if !symbol.is_empty() {
    output.push(' ');
    output.push_str(symbol);
  }
  output
}

/// Shortens an address to its first six and last four characters.
pub fn reduce_address(address: &str) -> String {
  let chars: Vec<char> = address.chars().collect();
  if chars.len() <= 10 {
    return address.to_string();
  }
  let head: String = chars[..6].iter().collect();
  let tail: String = chars[chars.len() - 4..].iter().collect();
  format!("{head}...{tail}")
}

pub fn verification_label(asset: &Asset) -> String {
  if !asset.verified {
    "This token is unverified".into()
  } else if !asset.lists.is_empty() {
    format!("This token is verified on {} lists", asset.lists.len())
  } else {
    "This token is verified".into()
  }
}

/// Token ids arrive either as decimal or as 0x prefixed hex,
/// they are always displayed in decimal.
fn token_id_number(token_id: &str) -> Option<BigUint> {
  match token_id.strip_prefix("0x") {
    Some(hex) => BigUint::from_str_radix(hex, 16).ok(),
    None => token_id.parse().ok(),
  }
}

/// Collection name followed by the token id, unless the name
/// already mentions it.
pub fn nft_label(name: &str, token_id: &str) -> String {
  let id = match token_id_number(token_id) {
    Some(id) => id.to_string(),
    None if token_id.is_empty() => return name.to_string(),
    None => token_id.to_string(),
  };

  if name.contains(&id) {
    name.to_string()
  } else {
    format!("{name} #{id}")
  }
}

/// Formats one side of an allowance change.
///
/// Amounts at or above the provider's unlimited sentinel, and any
/// non-zero amount of an approval-for-all, display as unlimited.
pub fn allowance_label(
  amount: &Amount,
  decimals: u32,
  symbol: &str,
  approval_for_all: bool,
) -> Result<String, AmountError> {
  let value = amount.value()?;
  if amount.is_unlimited()? || (approval_for_all && !value.is_zero()) {
    return Ok(format!("Unlimited {symbol}").trim_end().to_string());
  }
  Ok(format_units(&value, decimals, symbol))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StakeRole {
  Staker,
  Withdrawer,
}

impl Display for StakeRole {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{self:?}")
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleChange {
  pub role: StakeRole,
  pub from: String,
  pub to: String,
}

/// Authorities of a stake account that are reassigned.
pub fn stake_role_changes(
  data: &SolStakeAuthorityChangeData,
) -> Vec<RoleChange> {
  let (curr, future) = (&data.curr_authorities, &data.future_authorities);
  [
    (StakeRole::Staker, &curr.staker, &future.staker),
    (StakeRole::Withdrawer, &curr.withdrawer, &future.withdrawer),
  ]
  .into_iter()
  .filter(|(_, from, to)| from != to)
  .map(|(role, from, to)| RoleChange {
    role,
    from: from.clone(),
    to: to.clone(),
  })
  .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferView {
  pub direction: TransferDirection,

  /// Absolute amount with symbol, or the NFT label.
  pub amount: String,
  pub verification: Option<String>,

  /// Token contract or mint to link to, `None` for native assets.
  pub contract: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalView {
  pub spender: String,
  pub before: Option<String>,
  pub after: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeAuthorityView {
  pub stake_account: String,
  pub staked: String,
  pub changes: Vec<RoleChange>,
}

/// Display model of a single classified state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChangeView {
  Transfer(TransferView),
  Approval(ApprovalView),
  StakeAuthorityChange(StakeAuthorityView),
}

/// Produces the display model of a state change.
pub trait Describe {
  /// `Ok(None)` for unrecognized records, errors only when a
  /// payload amount is not a valid integer.
  fn describe(&self) -> Result<Option<ChangeView>, AmountError>;
}

fn fungible_transfer(
  amount: &AmountChange,
  asset: &Asset,
) -> Result<ChangeView, AmountError> {
  let delta = amount.delta()?;
  Ok(ChangeView::Transfer(TransferView {
    direction: TransferDirection::from_delta(&delta),
    amount: format_units(delta.magnitude(), asset.decimals, &asset.symbol),
    verification: Some(verification_label(asset)),
    contract: (!is_native_asset_address(&asset.address))
      .then(|| asset.address.clone()),
  }))
}

fn nft_transfer(
  amount: &AmountChange,
  contract: &str,
  name: &str,
  token_id: Option<&str>,
) -> Result<ChangeView, AmountError> {
  let (before, after) = (amount.before.value()?, amount.after.value()?);
  let direction = if after > before {
    TransferDirection::Receive
  } else {
    TransferDirection::Send
  };

  let name = if name.is_empty() { "???" } else { name };
  let label = match token_id.filter(|id| !id.is_empty()) {
    Some(id) => nft_label(name, id),
    None => format_units(amount.delta()?.magnitude(), 0, name),
  };

  Ok(ChangeView::Transfer(TransferView {
    direction,
    amount: label,
    verification: None,
    contract: (!contract.is_empty()).then(|| contract.to_string()),
  }))
}

fn allowance(
  amount: &AmountChange,
  spender: &str,
  decimals: u32,
  symbol: &str,
  approval_for_all: bool,
) -> Result<ChangeView, AmountError> {
  Ok(ChangeView::Approval(ApprovalView {
    spender: reduce_address(spender),
    before: Some(allowance_label(
      &amount.before,
      decimals,
      symbol,
      approval_for_all,
    )?),
    after: allowance_label(&amount.after, decimals, symbol, approval_for_all)?,
  }))
}

impl Describe for EvmStateChange {
  fn describe(&self) -> Result<Option<ChangeView>, AmountError> {
    Ok(Some(match &self.change {
      EvmChange::Erc20Transfer(d) => fungible_transfer(&d.amount, &d.asset)?,
      EvmChange::NativeAssetTransfer(d) => {
        fungible_transfer(&d.amount, &d.asset)?
      }
      EvmChange::Erc721Transfer(d) => nft_transfer(
        &d.amount,
        &d.contract.address,
        &d.name,
        d.token_id.as_deref(),
      )?,
      EvmChange::Erc1155Transfer(d) => nft_transfer(
        &d.amount,
        &d.contract.address,
        &d.name,
        d.token_id.as_deref(),
      )?,
      EvmChange::Erc20Approval(d) => allowance(
        &d.amount,
        &d.spender.address,
        d.asset.decimals,
        &d.asset.symbol,
        false,
      )?,
      EvmChange::Erc721Approval(d) => {
        allowance(&d.amount, &d.spender.address, 0, &d.symbol, false)?
      }
      EvmChange::Erc721ApprovalForAll(d) => {
        allowance(&d.amount, &d.spender.address, 0, &d.symbol, true)?
      }
      EvmChange::Erc1155ApprovalForAll(d) => {
        allowance(&d.amount, &d.spender.address, 0, "", true)?
      }
      EvmChange::Unrecognized => return Ok(None),
    }))
  }
}

impl Describe for SvmStateChange {
  fn describe(&self) -> Result<Option<ChangeView>, AmountError> {
    Ok(Some(match &self.change {
      SvmChange::SolTransfer(d) => ChangeView::Transfer(TransferView {
        direction: TransferDirection::from_diff(&d.diff),
        amount: format_units(&d.diff.digits.into(), d.decimals, &d.symbol),
        verification: Some("This token is verified".into()),
        contract: None,
      }),
      SvmChange::SplTransfer(d) => ChangeView::Transfer(TransferView {
        direction: TransferDirection::from_diff(&d.diff),
        amount: if d.is_nft() {
          d.name.clone()
        } else {
          format_units(&d.diff.digits.into(), d.decimals, &d.symbol)
        },
        // requires a token registry lookup
        verification: None,
        contract: Some(d.mint.clone()),
      }),
      SvmChange::SplApproval(d) => ChangeView::Approval(ApprovalView {
        spender: reduce_address(&d.delegate),
        before: None,
        after: format_units(&d.diff.digits.into(), d.decimals, &d.symbol),
      }),
      SvmChange::SolStakeAuthorityChange(d) => {
        ChangeView::StakeAuthorityChange(StakeAuthorityView {
          stake_account: d.stake_account.clone(),
          staked: format_units(&d.sol_staked.into(), d.decimals, &d.symbol),
          changes: stake_role_changes(d),
        })
      }
      SvmChange::Unrecognized => return Ok(None),
    }))
  }
}
