use {
  serde::Serialize,
  txsim_primitives::{Action, SimulationResponse, Warning},
};

/// Warning kinds that describe the requesting website rather than
/// the transaction itself.
pub const URL_WARNING_KINDS: [&str; 8] = [
  "BLOCKLISTED_DOMAIN_CROSS_ORIGIN",
  "COPY_CAT_DOMAIN",
  "COPY_CAT_IMPERSONATION_DOMAIN",
  "MULTI_COPY_CAT_DOMAIN",
  "NEW_DOMAIN",
  "NON_ASCII_URL",
  "SEMI_TRUSTED_BLOCKLIST_DOMAIN",
  "TRUSTED_BLOCKLIST_DOMAIN",
];

pub fn is_url_warning(warning: &Warning) -> bool {
  URL_WARNING_KINDS.contains(&warning.kind.as_str())
}

const CRITICAL_TITLE: &str = "Unsafe action with risk of loss";

/// How the list of warnings is laid out above the state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WarningPresentation<'a> {
  None,
  Inline(&'a Warning),
  Collapsible {
    count: usize,
    critical: bool,
    title: String,
  },
}

/// Everything the confirmation screen needs to decide how much
/// friction to put in front of the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
  pub action: Action,
  pub warnings: Vec<Warning>,
  pub has_critical_warnings: bool,
}

impl SimulationSummary {
  /// A full screen confirmation has to be passed before the
  /// transaction can be signed.
  pub fn requires_interstitial(&self) -> bool {
    self.action == Action::Block || self.has_critical_warnings
  }

  /// The requesting website itself is suspicious.
  pub fn is_flagged(&self) -> bool {
    self.warnings.iter().any(is_url_warning)
  }

  pub fn presentation(&self) -> WarningPresentation<'_> {
    match self.warnings.as_slice() {
      [] => WarningPresentation::None,
      [only] => WarningPresentation::Inline(only),
      many => WarningPresentation::Collapsible {
        count: many.len(),
        critical: self.has_critical_warnings,
        title: if self.has_critical_warnings {
          CRITICAL_TITLE.into()
        } else {
          format!("We found {} issue(s).", many.len())
        },
      },
    }
  }
}

pub fn summarize_response<C>(
  response: &SimulationResponse<C>,
) -> SimulationSummary {
  SimulationSummary {
    action: response.action,
    warnings: response.warnings.clone(),
    has_critical_warnings: response.warnings.iter().any(Warning::is_critical),
  }
}
