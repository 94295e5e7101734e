use {
  crate::{
    decode::{null_as_default, Decode, RawInfo, RawStateChange},
    AddressRef,
    AmountChange,
    Asset,
    AssetPrice,
    ChangeKind,
    NftMetadata,
  },
  alloc::{string::String, vec::Vec},
  serde::{Deserialize, Serialize},
  tracing::warn,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc20TransferData {
  #[serde(deserialize_with = "null_as_default")]
  pub amount: AmountChange,
  #[serde(deserialize_with = "null_as_default")]
  pub contract: AddressRef,
  #[serde(deserialize_with = "null_as_default")]
  pub asset: Asset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NativeAssetTransferData {
  #[serde(deserialize_with = "null_as_default")]
  pub amount: AmountChange,
  #[serde(deserialize_with = "null_as_default")]
  pub contract: AddressRef,
  #[serde(deserialize_with = "null_as_default")]
  pub asset: Asset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc721TransferData {
  #[serde(deserialize_with = "null_as_default")]
  pub amount: AmountChange,
  #[serde(deserialize_with = "null_as_default")]
  pub contract: AddressRef,
  #[serde(deserialize_with = "null_as_default")]
  pub metadata: NftMetadata,
  #[serde(deserialize_with = "null_as_default")]
  pub name: String,
  #[serde(deserialize_with = "null_as_default")]
  pub symbol: String,
  pub token_id: Option<String>,
  pub asset_price: Option<AssetPrice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc1155TransferData {
  #[serde(deserialize_with = "null_as_default")]
  pub amount: AmountChange,
  #[serde(deserialize_with = "null_as_default")]
  pub contract: AddressRef,
  #[serde(deserialize_with = "null_as_default")]
  pub metadata: NftMetadata,
  #[serde(deserialize_with = "null_as_default")]
  pub name: String,
  pub token_id: Option<String>,
  pub asset_price: Option<AssetPrice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc20ApprovalData {
  #[serde(deserialize_with = "null_as_default")]
  pub amount: AmountChange,
  #[serde(deserialize_with = "null_as_default")]
  pub asset: Asset,
  #[serde(deserialize_with = "null_as_default")]
  pub contract: AddressRef,
  #[serde(deserialize_with = "null_as_default")]
  pub owner: AddressRef,
  #[serde(deserialize_with = "null_as_default")]
  pub spender: AddressRef,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc721ApprovalData {
  #[serde(deserialize_with = "null_as_default")]
  pub amount: AmountChange,
  #[serde(deserialize_with = "null_as_default")]
  pub contract: AddressRef,
  #[serde(deserialize_with = "null_as_default")]
  pub metadata: NftMetadata,
  #[serde(deserialize_with = "null_as_default")]
  pub name: String,
  #[serde(deserialize_with = "null_as_default")]
  pub owner: AddressRef,
  #[serde(deserialize_with = "null_as_default")]
  pub spender: AddressRef,
  #[serde(deserialize_with = "null_as_default")]
  pub symbol: String,
  pub token_id: Option<String>,
  pub asset_price: Option<AssetPrice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc721ApprovalForAllData {
  #[serde(deserialize_with = "null_as_default")]
  pub amount: AmountChange,
  #[serde(deserialize_with = "null_as_default")]
  pub contract: AddressRef,
  #[serde(deserialize_with = "null_as_default")]
  pub name: String,
  #[serde(deserialize_with = "null_as_default")]
  pub owner: AddressRef,
  #[serde(deserialize_with = "null_as_default")]
  pub spender: AddressRef,
  #[serde(deserialize_with = "null_as_default")]
  pub symbol: String,
  pub asset_price: Option<AssetPrice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc1155ApprovalForAllData {
  #[serde(deserialize_with = "null_as_default")]
  pub amount: AmountChange,
  #[serde(deserialize_with = "null_as_default")]
  pub contract: AddressRef,
  #[serde(deserialize_with = "null_as_default")]
  pub owner: AddressRef,
  #[serde(deserialize_with = "null_as_default")]
  pub spender: AddressRef,
  pub asset_price: Option<AssetPrice>,
}

/// The effect of a simulated EVM transaction on one asset
/// balance or allowance of the signing account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvmChange {
  Erc20Transfer(Erc20TransferData),
  Erc721Transfer(Erc721TransferData),
  Erc1155Transfer(Erc1155TransferData),
  NativeAssetTransfer(NativeAssetTransferData),
  Erc20Approval(Erc20ApprovalData),
  Erc721Approval(Erc721ApprovalData),
  Erc721ApprovalForAll(Erc721ApprovalForAllData),
  Erc1155ApprovalForAll(Erc1155ApprovalForAllData),

  /// None of the payload fields known to this version was populated.
  Unrecognized,
}

impl EvmChange {
  /// The kind implied by the populated payload, `None` for
  /// unrecognized records.
  pub fn kind(&self) -> Option<ChangeKind> {
    Some(match self {
      Self::Erc20Transfer(_) => ChangeKind::Erc20Transfer,
      Self::Erc721Transfer(_) => ChangeKind::Erc721Transfer,
      Self::Erc1155Transfer(_) => ChangeKind::Erc1155Transfer,
      Self::NativeAssetTransfer(_) => ChangeKind::NativeAssetTransfer,
      Self::Erc20Approval(_) => ChangeKind::Erc20Approval,
      Self::Erc721Approval(_) => ChangeKind::Erc721Approval,
      Self::Erc721ApprovalForAll(_) => ChangeKind::Erc721ApprovalForAll,
      Self::Erc1155ApprovalForAll(_) => ChangeKind::Erc1155ApprovalForAll,
      Self::Unrecognized => return None,
    })
  }

  pub fn amount(&self) -> Option<&AmountChange> {
    match self {
      Self::Erc20Transfer(d) => Some(&d.amount),
      Self::Erc721Transfer(d) => Some(&d.amount),
      Self::Erc1155Transfer(d) => Some(&d.amount),
      Self::NativeAssetTransfer(d) => Some(&d.amount),
      Self::Erc20Approval(d) => Some(&d.amount),
      Self::Erc721Approval(d) => Some(&d.amount),
      Self::Erc721ApprovalForAll(d) => Some(&d.amount),
      Self::Erc1155ApprovalForAll(d) => Some(&d.amount),
      Self::Unrecognized => None,
    }
  }

  /// Every address mentioned by the payload, used for validation.
  pub fn addresses(&self) -> Vec<&str> {
    match self {
      Self::Erc20Transfer(d) => vec![&d.contract.address, &d.asset.address],
      Self::NativeAssetTransfer(d) => {
        vec![&d.contract.address, &d.asset.address]
      }
      Self::Erc721Transfer(d) => vec![&d.contract.address],
      Self::Erc1155Transfer(d) => vec![&d.contract.address],
      Self::Erc20Approval(d) => vec![
        &d.contract.address,
        &d.asset.address,
        &d.owner.address,
        &d.spender.address,
      ],
      Self::Erc721Approval(d) => {
        vec![&d.contract.address, &d.owner.address, &d.spender.address]
      }
      Self::Erc721ApprovalForAll(d) => {
        vec![&d.contract.address, &d.owner.address, &d.spender.address]
      }
      Self::Erc1155ApprovalForAll(d) => {
        vec![&d.contract.address, &d.owner.address, &d.spender.address]
      }
      Self::Unrecognized => vec![],
    }
    .into_iter()
    .map(String::as_str)
    .collect()
  }
}

/// Wire shape of the `data` object of an EVM state change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvmStateChangeData {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub erc20_transfer_data: Option<Erc20TransferData>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub erc721_transfer_data: Option<Erc721TransferData>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub erc1155_transfer_data: Option<Erc1155TransferData>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub native_asset_transfer_data: Option<NativeAssetTransferData>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub erc20_approval_data: Option<Erc20ApprovalData>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub erc721_approval_data: Option<Erc721ApprovalData>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub erc721_approval_for_all_data: Option<Erc721ApprovalForAllData>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub erc1155_approval_for_all_data: Option<Erc1155ApprovalForAllData>,
}

impl From<EvmChange> for EvmStateChangeData {
  fn from(change: EvmChange) -> Self {
    let mut data = Self::default();
    match change {
      EvmChange::Erc20Transfer(d) => data.erc20_transfer_data = Some(d),
      EvmChange::Erc721Transfer(d) => data.erc721_transfer_data = Some(d),
      EvmChange::Erc1155Transfer(d) => data.erc1155_transfer_data = Some(d),
      EvmChange::NativeAssetTransfer(d) => {
        data.native_asset_transfer_data = Some(d)
      }
      EvmChange::Erc20Approval(d) => data.erc20_approval_data = Some(d),
      EvmChange::Erc721Approval(d) => data.erc721_approval_data = Some(d),
      EvmChange::Erc721ApprovalForAll(d) => {
        data.erc721_approval_for_all_data = Some(d)
      }
      EvmChange::Erc1155ApprovalForAll(d) => {
        data.erc1155_approval_for_all_data = Some(d)
      }
      EvmChange::Unrecognized => {}
    }
    data
  }
}

pub type RawEvmStateChange = RawStateChange<EvmStateChangeData>;

impl Decode for RawEvmStateChange {
  type Output = EvmStateChange;

  fn tagged(&self) -> &ChangeKind {
    &self.raw_info.kind
  }

  fn populated(&self) -> Vec<ChangeKind> {
    let data = &self.raw_info.data;
    [
      (data.erc20_approval_data.is_some(), ChangeKind::Erc20Approval),
      (data.erc721_approval_data.is_some(), ChangeKind::Erc721Approval),
      (
        data.erc721_approval_for_all_data.is_some(),
        ChangeKind::Erc721ApprovalForAll,
      ),
      (
        data.erc1155_approval_for_all_data.is_some(),
        ChangeKind::Erc1155ApprovalForAll,
      ),
      (data.erc20_transfer_data.is_some(), ChangeKind::Erc20Transfer),
      (data.erc721_transfer_data.is_some(), ChangeKind::Erc721Transfer),
      (data.erc1155_transfer_data.is_some(), ChangeKind::Erc1155Transfer),
      (
        data.native_asset_transfer_data.is_some(),
        ChangeKind::NativeAssetTransfer,
      ),
    ]
    .into_iter()
    .filter_map(|(present, kind)| present.then_some(kind))
    .collect()
  }

  fn decode(self) -> EvmStateChange {
    let populated = self.populated();
    if populated.len() > 1 {
      warn!(
        "state change '{}' carries {populated:?}, only the first is kept",
        self.human_readable_diff
      );
    }

    let RawInfo { kind, data } = self.raw_info;
    let change = if let Some(d) = data.erc20_approval_data {
      EvmChange::Erc20Approval(d)
    } else if let Some(d) = data.erc721_approval_data {
      EvmChange::Erc721Approval(d)
    } else if let Some(d) = data.erc721_approval_for_all_data {
      EvmChange::Erc721ApprovalForAll(d)
    } else if let Some(d) = data.erc1155_approval_for_all_data {
      EvmChange::Erc1155ApprovalForAll(d)
    } else if let Some(d) = data.erc20_transfer_data {
      EvmChange::Erc20Transfer(d)
    } else if let Some(d) = data.erc721_transfer_data {
      EvmChange::Erc721Transfer(d)
    } else if let Some(d) = data.erc1155_transfer_data {
      EvmChange::Erc1155Transfer(d)
    } else if let Some(d) = data.native_asset_transfer_data {
      EvmChange::NativeAssetTransfer(d)
    } else {
      EvmChange::Unrecognized
    };

    EvmStateChange {
      human_readable_diff: self.human_readable_diff,
      kind,
      change,
    }
  }
}

/// A predicted change to the signer's EVM account state.
///
/// Deserializes leniently from the provider's wire shape, a record
/// without a payload known to this version becomes
/// [`EvmChange::Unrecognized`] instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEvmStateChange", into = "RawEvmStateChange")]
pub struct EvmStateChange {
  /// Provider supplied summary, e.g. "Send 1 ETH".
  pub human_readable_diff: String,

  /// Advisory tag, may be empty or disagree with `change`.
  pub kind: ChangeKind,
  pub change: EvmChange,
}

impl EvmStateChange {
  pub fn new(
    human_readable_diff: impl Into<String>,
    change: EvmChange,
  ) -> Self {
    Self {
      human_readable_diff: human_readable_diff.into(),
      kind: change.kind().unwrap_or_default(),
      change,
    }
  }
}

impl From<RawEvmStateChange> for EvmStateChange {
  fn from(raw: RawEvmStateChange) -> Self {
    raw.decode()
  }
}

impl From<EvmStateChange> for RawEvmStateChange {
  fn from(change: EvmStateChange) -> Self {
    RawStateChange {
      human_readable_diff: change.human_readable_diff,
      raw_info: RawInfo {
        kind: change.kind,
        data: change.change.into(),
      },
    }
  }
}
