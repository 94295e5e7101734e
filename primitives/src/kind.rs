use {
  alloc::string::{String, ToString},
  core::{
    convert::Infallible,
    fmt::{Display, Formatter},
    str::FromStr,
  },
  serde::{Deserialize, Serialize},
};

/// The `kind` tag attached by the simulation provider to every
/// state change record.
///
/// The tag is advisory only. Providers have been observed sending
/// empty or stale tags, so the populated payload field is what
/// decides how a record is interpreted. Literals that are not part
/// of the known enumeration are preserved verbatim in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChangeKind {
  Erc20Transfer,
  Erc721Transfer,
  Erc1155Transfer,
  NativeAssetTransfer,
  Erc20Approval,
  Erc721Approval,
  Erc721ApprovalForAll,
  Erc1155ApprovalForAll,
  SolTransfer,
  SplTransfer,
  SplApproval,
  SolStakeAuthorityChange,
  Unknown(String),
}

impl ChangeKind {
  pub fn as_str(&self) -> &str {
    match self {
      Self::Erc20Transfer => "ERC20_TRANSFER",
      Self::Erc721Transfer => "ERC721_TRANSFER",
      Self::Erc1155Transfer => "ERC1155_TRANSFER",
      Self::NativeAssetTransfer => "NATIVE_ASSET_TRANSFER",
      Self::Erc20Approval => "ERC20_APPROVAL",
      Self::Erc721Approval => "ERC721_APPROVAL",
      Self::Erc721ApprovalForAll => "ERC721_APPROVAL_FOR_ALL",
      Self::Erc1155ApprovalForAll => "ERC1155_APPROVAL_FOR_ALL",
      Self::SolTransfer => "SOL_TRANSFER",
      Self::SplTransfer => "SPL_TRANSFER",
      Self::SplApproval => "SPL_APPROVAL",
      Self::SolStakeAuthorityChange => "SOL_STAKE_AUTHORITY_CHANGE",
      Self::Unknown(literal) => literal,
    }
  }

  pub fn is_known(&self) -> bool {
    !matches!(self, Self::Unknown(_))
  }
}

impl Default for ChangeKind {
  fn default() -> Self {
    Self::Unknown(String::new())
  }
}

impl FromStr for ChangeKind {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(match s {
      "ERC20_TRANSFER" => Self::Erc20Transfer,
      "ERC721_TRANSFER" => Self::Erc721Transfer,
      "ERC1155_TRANSFER" => Self::Erc1155Transfer,
      "NATIVE_ASSET_TRANSFER" => Self::NativeAssetTransfer,
      "ERC20_APPROVAL" => Self::Erc20Approval,
      "ERC721_APPROVAL" => Self::Erc721Approval,
      "ERC721_APPROVAL_FOR_ALL" => Self::Erc721ApprovalForAll,
      "ERC1155_APPROVAL_FOR_ALL" => Self::Erc1155ApprovalForAll,
      "SOL_TRANSFER" => Self::SolTransfer,
      "SPL_TRANSFER" => Self::SplTransfer,
      "SPL_APPROVAL" => Self::SplApproval,
      "SOL_STAKE_AUTHORITY_CHANGE" => Self::SolStakeAuthorityChange,
      other => Self::Unknown(other.to_string()),
    })
  }
}

impl From<String> for ChangeKind {
  fn from(value: String) -> Self {
    match value.parse() {
      Ok(kind) => kind,
      Err(never) => match never {},
    }
  }
}

impl From<ChangeKind> for String {
  fn from(kind: ChangeKind) -> Self {
    match kind {
      ChangeKind::Unknown(literal) => literal,
      known => known.as_str().to_string(),
    }
  }
}

impl Display for ChangeKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::ChangeKind;

  #[test]
  fn tags_are_case_sensitive() {
    assert_eq!(
      "ERC20_TRANSFER".parse::<ChangeKind>().unwrap(),
      ChangeKind::Erc20Transfer
    );
    assert_eq!(
      "erc20_transfer".parse::<ChangeKind>().unwrap(),
      ChangeKind::Unknown("erc20_transfer".into())
    );
  }

  #[test]
  fn unknown_literals_survive_serde() -> anyhow::Result<()> {
    let kind: ChangeKind =
      serde_json::from_str("\"SOL_ACCOUNT_OWNER_CHANGE\"")?;
    assert!(!kind.is_known());
    assert_eq!(serde_json::to_string(&kind)?, "\"SOL_ACCOUNT_OWNER_CHANGE\"");

    let empty: ChangeKind = serde_json::from_str("\"\"")?;
    assert_eq!(empty, ChangeKind::default());
    Ok(())
  }
}
