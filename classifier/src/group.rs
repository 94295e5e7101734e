use {
  serde::Serialize,
  tracing::debug,
  txsim_primitives::{EvmChange, EvmStateChange, SvmChange, SvmStateChange},
};

/// The bucket a state change is displayed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
  Transfer,
  Approval,
  StakeAuthorityChange,
}

/// Implemented by state change records that can be sorted into
/// display buckets.
///
/// The category is derived from the populated payload only, the
/// advisory `kind` tag of a record is never consulted.
pub trait Categorize {
  /// `None` for records whose payload is not recognized.
  fn category(&self) -> Option<Category>;

  /// Short description used in diagnostics.
  fn summary(&self) -> &str;
}

impl Categorize for EvmStateChange {
  fn category(&self) -> Option<Category> {
    match self.change {
      EvmChange::Erc20Transfer(_)
      | EvmChange::Erc721Transfer(_)
      | EvmChange::Erc1155Transfer(_)
      | EvmChange::NativeAssetTransfer(_) => Some(Category::Transfer),
      EvmChange::Erc20Approval(_)
      | EvmChange::Erc721Approval(_)
      | EvmChange::Erc721ApprovalForAll(_)
      | EvmChange::Erc1155ApprovalForAll(_) => Some(Category::Approval),
      EvmChange::Unrecognized => None,
    }
  }

  fn summary(&self) -> &str {
    &self.human_readable_diff
  }
}

impl Categorize for SvmStateChange {
  fn category(&self) -> Option<Category> {
    match self.change {
      SvmChange::SolTransfer(_) | SvmChange::SplTransfer(_) => {
        Some(Category::Transfer)
      }
      SvmChange::SplApproval(_) => Some(Category::Approval),
      SvmChange::SolStakeAuthorityChange(_) => {
        Some(Category::StakeAuthorityChange)
      }
      SvmChange::Unrecognized => None,
    }
  }

  fn summary(&self) -> &str {
    &self.human_readable_diff
  }
}

/// State changes of one simulation partitioned by category.
///
/// Every bucket keeps the relative order the records had in the
/// simulation response. EVM records never land in
/// `stake_authority_changes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedChanges<C> {
  pub transfers: Vec<C>,
  pub approvals: Vec<C>,
  pub stake_authority_changes: Vec<C>,
}

impl<C> Default for GroupedChanges<C> {
  fn default() -> Self {
    Self {
      transfers: vec![],
      approvals: vec![],
      stake_authority_changes: vec![],
    }
  }
}

impl<C> GroupedChanges<C> {
  pub fn push(&mut self, category: Category, change: C) {
    self.bucket_mut(category).push(change);
  }

  pub fn bucket(&self, category: Category) -> &[C] {
    match category {
      Category::Transfer => &self.transfers,
      Category::Approval => &self.approvals,
      Category::StakeAuthorityChange => &self.stake_authority_changes,
    }
  }

  fn bucket_mut(&mut self, category: Category) -> &mut Vec<C> {
    match category {
      Category::Transfer => &mut self.transfers,
      Category::Approval => &mut self.approvals,
      Category::StakeAuthorityChange => &mut self.stake_authority_changes,
    }
  }

  /// Total number of classified records across all buckets.
  pub fn len(&self) -> usize {
    self.transfers.len()
      + self.approvals.len()
      + self.stake_authority_changes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// True when more than one bucket is non-empty, in which case
  /// each bucket is rendered under its own heading.
  pub fn has_multiple_categories(&self) -> bool {
    self.categories().count() > 1
  }

  /// Non-empty buckets in display order.
  pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
    [
      Category::Transfer,
      Category::Approval,
      Category::StakeAuthorityChange,
    ]
    .into_iter()
    .filter(|c| !self.bucket(*c).is_empty())
  }

  /// Applies a function to every record while keeping the partition.
  pub fn map<O, F>(self, mut op: F) -> GroupedChanges<O>
  where
    F: FnMut(C) -> O,
  {
    GroupedChanges {
      transfers: self.transfers.into_iter().map(&mut op).collect(),
      approvals: self.approvals.into_iter().map(&mut op).collect(),
      stake_authority_changes: self
        .stake_authority_changes
        .into_iter()
        .map(&mut op)
        .collect(),
    }
  }
}

/// Partitions the expected state changes of a simulation into
/// transfers, approvals and stake authority changes.
///
/// Records with an unrecognized payload are dropped. The input is
/// not modified, every classified record is cloned into exactly one
/// bucket of a freshly allocated [`GroupedChanges`].
pub fn classify<C>(changes: &[C]) -> GroupedChanges<C>
where
  C: Categorize + Clone,
{
  let mut grouped = GroupedChanges::default();
  for change in changes {
    match change.category() {
      Some(category) => grouped.push(category, change.clone()),
      None => {
        debug!("dropping unrecognized state change: {:?}", change.summary())
      }
    }
  }
  grouped
}
