mod display;
mod group;
mod strict;
mod summary;
mod translate;

pub use {
  display::{
    allowance_label,
    format_units,
    nft_label,
    reduce_address,
    stake_role_changes,
    verification_label,
    ApprovalView,
    ChangeView,
    Describe,
    RoleChange,
    StakeAuthorityView,
    StakeRole,
    TransferDirection,
    TransferView,
    DISPLAY_PRECISION,
  },
  group::{classify, Categorize, Category, GroupedChanges},
  strict::{classify_strict, Error as StrictError, Validate, Violation},
  summary::{
    is_url_warning,
    summarize_response,
    SimulationSummary,
    WarningPresentation,
    URL_WARNING_KINDS,
  },
  translate::{translate_error, TRANSACTION_REVERTED},
};
