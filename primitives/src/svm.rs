use {
  crate::{
    decode::{null_as_default, Decode, RawInfo, RawStateChange},
    AssetPrice,
    ChangeKind,
    SignedDiff,
  },
  alloc::{string::String, vec::Vec},
  serde::{Deserialize, Serialize},
  tracing::warn,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolTransferData {
  #[serde(deserialize_with = "null_as_default")]
  pub symbol: String,
  #[serde(deserialize_with = "null_as_default")]
  pub name: String,
  #[serde(deserialize_with = "null_as_default")]
  pub decimals: u32,
  #[serde(deserialize_with = "null_as_default")]
  pub diff: SignedDiff,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SplTransferData {
  #[serde(deserialize_with = "null_as_default")]
  pub symbol: String,
  #[serde(deserialize_with = "null_as_default")]
  pub name: String,
  #[serde(deserialize_with = "null_as_default")]
  pub mint: String,
  #[serde(deserialize_with = "null_as_default")]
  pub decimals: u32,
  #[serde(deserialize_with = "null_as_default")]
  pub supply: u64,

  /// Metaplex token standard, "non_fungible" and
  /// "non_fungible_edition" denote NFTs.
  #[serde(deserialize_with = "null_as_default")]
  pub metaplex_token_standard: String,
  pub asset_price: Option<AssetPrice>,
  #[serde(deserialize_with = "null_as_default")]
  pub diff: SignedDiff,
}

impl SplTransferData {
  pub fn is_nft(&self) -> bool {
    is_non_fungible(&self.metaplex_token_standard)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SplApprovalData {
  #[serde(deserialize_with = "null_as_default")]
  pub delegate: String,
  #[serde(deserialize_with = "null_as_default")]
  pub mint: String,
  #[serde(deserialize_with = "null_as_default")]
  pub symbol: String,
  #[serde(deserialize_with = "null_as_default")]
  pub name: String,
  #[serde(deserialize_with = "null_as_default")]
  pub decimals: u32,
  #[serde(deserialize_with = "null_as_default")]
  pub supply: u64,
  #[serde(deserialize_with = "null_as_default")]
  pub metaplex_token_standard: String,
  pub asset_price: Option<AssetPrice>,
  #[serde(deserialize_with = "null_as_default")]
  pub diff: SignedDiff,
}

fn is_non_fungible(standard: &str) -> bool {
  matches!(standard, "non_fungible" | "non_fungible_edition")
}

/// Staking and withdrawal rights over a stake account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakeAuthorities {
  #[serde(deserialize_with = "null_as_default")]
  pub staker: String,
  #[serde(deserialize_with = "null_as_default")]
  pub withdrawer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolStakeAuthorityChangeData {
  #[serde(deserialize_with = "null_as_default")]
  pub stake_account: String,
  #[serde(deserialize_with = "null_as_default")]
  pub curr_authorities: StakeAuthorities,
  #[serde(deserialize_with = "null_as_default")]
  pub future_authorities: StakeAuthorities,
  #[serde(deserialize_with = "null_as_default")]
  pub symbol: String,
  #[serde(deserialize_with = "null_as_default")]
  pub name: String,
  #[serde(deserialize_with = "null_as_default")]
  pub decimals: u32,
  #[serde(deserialize_with = "null_as_default")]
  pub sol_staked: u64,
}

/// The effect of a simulated Solana transaction on the
/// signer's accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvmChange {
  SolTransfer(SolTransferData),
  SplTransfer(SplTransferData),
  SplApproval(SplApprovalData),
  SolStakeAuthorityChange(SolStakeAuthorityChangeData),

  /// None of the payload fields known to this version was populated,
  /// e.g. account owner changes.
  Unrecognized,
}

impl SvmChange {
  pub fn kind(&self) -> Option<ChangeKind> {
    Some(match self {
      Self::SolTransfer(_) => ChangeKind::SolTransfer,
      Self::SplTransfer(_) => ChangeKind::SplTransfer,
      Self::SplApproval(_) => ChangeKind::SplApproval,
      Self::SolStakeAuthorityChange(_) => ChangeKind::SolStakeAuthorityChange,
      Self::Unrecognized => return None,
    })
  }

  pub fn addresses(&self) -> Vec<&str> {
    match self {
      Self::SolTransfer(_) => vec![],
      Self::SplTransfer(d) => vec![d.mint.as_str()],
      Self::SplApproval(d) => vec![d.mint.as_str(), d.delegate.as_str()],
      Self::SolStakeAuthorityChange(d) => vec![
        d.stake_account.as_str(),
        d.curr_authorities.staker.as_str(),
        d.curr_authorities.withdrawer.as_str(),
        d.future_authorities.staker.as_str(),
        d.future_authorities.withdrawer.as_str(),
      ],
      Self::Unrecognized => vec![],
    }
  }
}

/// Wire shape of the `data` object of a Solana state change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SvmStateChangeData {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sol_transfer_data: Option<SolTransferData>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub spl_transfer_data: Option<SplTransferData>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub spl_approval_data: Option<SplApprovalData>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sol_stake_authority_change_data: Option<SolStakeAuthorityChangeData>,
}

impl From<SvmChange> for SvmStateChangeData {
  fn from(change: SvmChange) -> Self {
    let mut data = Self::default();
    match change {
      SvmChange::SolTransfer(d) => data.sol_transfer_data = Some(d),
      SvmChange::SplTransfer(d) => data.spl_transfer_data = Some(d),
      SvmChange::SplApproval(d) => data.spl_approval_data = Some(d),
      SvmChange::SolStakeAuthorityChange(d) => {
        data.sol_stake_authority_change_data = Some(d)
      }
      SvmChange::Unrecognized => {}
    }
    data
  }
}

pub type RawSvmStateChange = RawStateChange<SvmStateChangeData>;

impl Decode for RawSvmStateChange {
  type Output = SvmStateChange;

  fn tagged(&self) -> &ChangeKind {
    &self.raw_info.kind
  }

  fn populated(&self) -> Vec<ChangeKind> {
    let data = &self.raw_info.data;
    [
      (
        data.sol_stake_authority_change_data.is_some(),
        ChangeKind::SolStakeAuthorityChange,
      ),
      (data.spl_approval_data.is_some(), ChangeKind::SplApproval),
      (data.sol_transfer_data.is_some(), ChangeKind::SolTransfer),
      (data.spl_transfer_data.is_some(), ChangeKind::SplTransfer),
    ]
    .into_iter()
    .filter_map(|(present, kind)| present.then_some(kind))
    .collect()
  }

  fn decode(self) -> SvmStateChange {
    let populated = self.populated();
    if populated.len() > 1 {
      warn!(
        "state change '{}' carries {populated:?}, only the first is kept",
        self.human_readable_diff
      );
    }

    let RawInfo { kind, data } = self.raw_info;
    let change = if let Some(d) = data.sol_stake_authority_change_data {
      SvmChange::SolStakeAuthorityChange(d)
    } else if let Some(d) = data.spl_approval_data {
      SvmChange::SplApproval(d)
    } else if let Some(d) = data.sol_transfer_data {
      SvmChange::SolTransfer(d)
    } else if let Some(d) = data.spl_transfer_data {
      SvmChange::SplTransfer(d)
    } else {
      SvmChange::Unrecognized
    };

    SvmStateChange {
      human_readable_diff: self.human_readable_diff,
      kind,
      change,
    }
  }
}

/// A predicted change to the signer's Solana accounts.
///
/// Same leniency rules as [`crate::EvmStateChange`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSvmStateChange", into = "RawSvmStateChange")]
pub struct SvmStateChange {
  pub human_readable_diff: String,
  pub kind: ChangeKind,
  pub change: SvmChange,
}

impl SvmStateChange {
  pub fn new(
    human_readable_diff: impl Into<String>,
    change: SvmChange,
  ) -> Self {
    Self {
      human_readable_diff: human_readable_diff.into(),
      kind: change.kind().unwrap_or_default(),
      change,
    }
  }
}

impl From<RawSvmStateChange> for SvmStateChange {
  fn from(raw: RawSvmStateChange) -> Self {
    raw.decode()
  }
}

impl From<SvmStateChange> for RawSvmStateChange {
  fn from(change: SvmStateChange) -> Self {
    RawStateChange {
      human_readable_diff: change.human_readable_diff,
      raw_info: RawInfo {
        kind: change.kind,
        data: change.change.into(),
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use {
    super::{SvmChange, SvmStateChange},
    crate::{ChangeKind, DiffSign},
  };

  #[test]
  fn stake_authority_changes_need_no_tag() -> anyhow::Result<()> {
    let change: SvmStateChange = serde_json::from_str(
      r#"{
        "humanReadableDiff": "Transfer control over 1 SOL staking account",
        "rawInfo": {
          "kind": "",
          "data": {
            "solStakeAuthorityChangeData": {
              "stakeAccount": "CcYNb7WqpjaMrNr7B1mapaNfWctZRH7LyAjWRLBGt1Fk",
              "currAuthorities": {
                "staker": "J58MrVr9qJPzJJS8RPQUDfaFirN3PiVHXU48zr95FY48",
                "withdrawer": "J58MrVr9qJPzJJS8RPQUDfaFirN3PiVHXU48zr95FY48"
              },
              "futureAuthorities": {
                "staker": "EpochxXNkmM2akxBTuCEizW1oWyzgrPZ1CVZ3GpD7Egm",
                "withdrawer": "EpochxXNkmM2akxBTuCEizW1oWyzgrPZ1CVZ3GpD7Egm"
              },
              "symbol": "SOL",
              "name": "Solana Native Token",
              "decimals": 9,
              "solStaked": 228895995552
            }
          }
        }
      }"#,
    )?;

    assert_eq!(change.kind, ChangeKind::default());
    match change.change {
      SvmChange::SolStakeAuthorityChange(d) => {
        assert_eq!(d.decimals, 9);
        assert_ne!(d.curr_authorities, d.future_authorities);
      }
      other => panic!("unexpected {other:?}"),
    }
    Ok(())
  }

  #[test]
  fn spl_nft_transfers() -> anyhow::Result<()> {
    let change: SvmStateChange = serde_json::from_str(
      r#"{
        "humanReadableDiff": "Send Brave NFT",
        "rawInfo": {
          "kind": "SPL_TRANSFER",
          "data": {
            "splTransferData": {
              "symbol": "BNFT",
              "name": "Brave NFT",
              "mint": "2izbbrgnLBCi9KKuAPdCb1M5UPa5dh2zZFNrLMMnCVBV",
              "decimals": 0,
              "supply": 1,
              "metaplexTokenStandard": "non_fungible",
              "diff": { "sign": "MINUS", "digits": 1 }
            }
          }
        }
      }"#,
    )?;

    match change.change {
      SvmChange::SplTransfer(d) => {
        assert!(d.is_nft());
        assert_eq!(d.diff.sign, DiffSign::Minus);
      }
      other => panic!("unexpected {other:?}"),
    }
    Ok(())
  }
}
