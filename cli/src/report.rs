use {
  serde::Serialize,
  std::fmt::{Display, Formatter},
  tracing::debug,
  txsim_classifier::{
    summarize_response,
    translate_error,
    Categorize,
    Category,
    ChangeView,
    Describe,
    GroupedChanges,
    SimulationSummary,
    WarningPresentation,
  },
  txsim_primitives::SimulationResponse,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
  pub human_readable_diff: String,
  pub view: ChangeView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
  pub category: Category,
  pub changes: Vec<Entry>,
}

/// Everything that is known about a simulated transaction,
/// ready to be printed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
  pub summary: SimulationSummary,
  pub requires_interstitial: bool,
  pub flagged: bool,
  pub error: String,
  pub multiple_categories: bool,
  pub sections: Vec<Section>,
}

impl Report {
  /// Records whose amounts cannot be read are left out of their
  /// section, the rest of the report is still produced.
  pub fn new<C>(
    response: &SimulationResponse<C>,
    grouped: &GroupedChanges<C>,
  ) -> Self
  where
    C: Categorize + Describe,
  {
    let summary = summarize_response(response);
    let mut sections = vec![];
    for category in grouped.categories() {
      let mut changes = vec![];
      for change in grouped.bucket(category) {
        match change.describe() {
          Ok(Some(view)) => changes.push(Entry {
            human_readable_diff: change.summary().to_string(),
            view,
          }),
          Ok(None) => {}
          Err(e) => {
            debug!("skipping state change {:?}: {e}", change.summary())
          }
        }
      }
      sections.push(Section { category, changes });
    }

    Self {
      requires_interstitial: summary.requires_interstitial(),
      flagged: summary.is_flagged(),
      error: translate_error(response.error()),
      multiple_categories: grouped.has_multiple_categories(),
      summary,
      sections,
    }
  }
}

fn heading(category: Category) -> &'static str {
  match category {
    Category::Transfer => "Transfers",
    Category::Approval => "Approvals",
    Category::StakeAuthorityChange => "Stake authority changes",
  }
}

fn write_view(f: &mut Formatter<'_>, view: &ChangeView) -> std::fmt::Result {
  match view {
    ChangeView::Transfer(t) => {
      write!(f, "  {} {} {}", t.direction, t.direction.sign(), t.amount)?;
      if let Some(verification) = &t.verification {
        write!(f, " ({verification})")?;
      }
      writeln!(f)
    }
    ChangeView::Approval(a) => {
      write!(f, "  Spender {}: ", a.spender)?;
      if let Some(before) = &a.before {
        write!(f, "{before} -> ")?;
      }
      writeln!(f, "{}", a.after)
    }
    ChangeView::StakeAuthorityChange(s) => {
      writeln!(f, "  Stake account {} ({})", s.stake_account, s.staked)?;
      for change in &s.changes {
        writeln!(f, "    {}: {} -> {}", change.role, change.from, change.to)?;
      }
      Ok(())
    }
  }
}

impl Display for Report {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "Action: {:?}", self.summary.action)?;

    match self.summary.presentation() {
      WarningPresentation::None => {}
      WarningPresentation::Inline(warning) => {
        writeln!(f, "Warning: {}", warning.message)?;
      }
      WarningPresentation::Collapsible { title, .. } => {
        writeln!(f, "{title}")?;
        for warning in &self.summary.warnings {
          writeln!(f, "  [{:?}] {}", warning.severity, warning.message)?;
        }
      }
    }

    if self.flagged {
      writeln!(f, "The requesting website has been flagged")?;
    }
    if self.requires_interstitial {
      writeln!(f, "This transaction requires explicit confirmation")?;
    }
    if !self.error.is_empty() {
      writeln!(f, "Simulation failed: {}", self.error)?;
    }

    for section in &self.sections {
      if self.multiple_categories {
        writeln!(f, "{}:", heading(section.category))?;
      }
      for entry in &section.changes {
        write_view(f, &entry.view)?;
      }
    }
    Ok(())
  }
}
