use {
  common::fixtures,
  txsim_classifier::{
    summarize_response,
    translate_error,
    WarningPresentation,
  },
  txsim_primitives::{Action, Severity, SimulationError},
};

mod common;

#[test]
fn clean_simulation() -> anyhow::Result<()> {
  let response = common::evm(fixtures::SWAP_ETH_FOR_DAI)?;
  let summary = summarize_response(&response);

  assert_eq!(summary.action, Action::None);
  assert!(summary.warnings.is_empty());
  assert!(!summary.has_critical_warnings);
  assert!(!summary.requires_interstitial());
  assert_eq!(summary.presentation(), WarningPresentation::None);
  assert_eq!(translate_error(response.error()), "");
  Ok(())
}

#[test]
fn single_non_critical_warning() -> anyhow::Result<()> {
  let response = common::evm(fixtures::ERC721_APPROVE_FOR_ALL)?;
  let summary = summarize_response(&response);

  assert_eq!(summary.action, Action::Warn);
  assert!(!summary.has_critical_warnings);
  assert!(!summary.is_flagged());
  match summary.presentation() {
    WarningPresentation::Inline(warning) => {
      assert_eq!(warning.kind, "UNLIMITED_ALLOWANCE_TO_NFTS");
      assert_eq!(warning.severity, Severity::Warning);
    }
    other => panic!("unexpected {other:?}"),
  }
  Ok(())
}

#[test]
fn blocked_and_reverted() -> anyhow::Result<()> {
  let response = common::evm(fixtures::REVERTED)?;
  let summary = summarize_response(&response);

  assert_eq!(summary.action, Action::Block);
  assert!(summary.has_critical_warnings);
  assert!(summary.requires_interstitial());
  assert!(summary.is_flagged());
  assert_eq!(summary.presentation(), WarningPresentation::Collapsible {
    count: 2,
    critical: true,
    title: "Unsafe action with risk of loss".into(),
  });

  // the provider message is replaced by the reverted literal
  assert_eq!(translate_error(response.error()), "TRANSACTION_REVERTED");
  Ok(())
}

#[test]
fn custom_error_messages() {
  let error = SimulationError {
    kind: "SIMULATION_TIMED_OUT".into(),
    human_readable_error: "Simulation timed out".into(),
  };
  assert_eq!(translate_error(Some(&error)), "Simulation timed out");
  assert_eq!(
    translate_error(Some(&SimulationError::default())),
    "UNKNOWN ERROR"
  );
}

#[test]
fn solana_warnings() -> anyhow::Result<()> {
  let summary = summarize_response(&common::svm(fixtures::SPL_NFT_SEND)?);
  assert_eq!(summary.action, Action::Warn);
  assert_eq!(summary.warnings.len(), 1);
  assert!(!summary.has_critical_warnings);
  Ok(())
}
