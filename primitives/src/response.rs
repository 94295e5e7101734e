use {
  crate::{EvmStateChange, SvmStateChange},
  alloc::{string::String, vec::Vec},
  serde::{Deserialize, Serialize},
};

/// Coarse recommendation of the simulation provider about
/// what the wallet should do with the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
  None,
  Warn,
  Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
  Warning,
  Critical,
}

/// A single risk finding reported alongside a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
  /// Open ended provider category, e.g. "KNOWN_MALICIOUS",
  /// "UNLIMITED_ALLOWANCE_TO_NFTS", "COPY_CAT_DOMAIN".
  pub kind: String,
  pub severity: Severity,
  pub message: String,
}

impl Warning {
  pub fn is_critical(&self) -> bool {
    self.severity == Severity::Critical
  }
}

/// Structured error reported when the provider could not produce
/// a simulation, e.g. because the transaction reverts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationError {
  pub kind: String,
  pub human_readable_error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult<C> {
  #[serde(default)]
  pub error: Option<SimulationError>,
  #[serde(default = "Vec::new")]
  pub expected_state_changes: Vec<C>,
}

/// The complete answer of the simulation provider for one
/// not-yet-signed transaction.
///
/// `C` is the ecosystem specific state change type, either the
/// decoded [`EvmStateChange`]/[`SvmStateChange`] or their raw wire
/// forms when strict decoding is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse<C> {
  pub action: Action,
  #[serde(default = "Vec::new")]
  pub warnings: Vec<Warning>,
  pub simulation_results: SimulationResult<C>,
}

impl<C> SimulationResponse<C> {
  pub fn expected_state_changes(&self) -> &[C] {
    &self.simulation_results.expected_state_changes
  }

  pub fn error(&self) -> Option<&SimulationError> {
    self.simulation_results.error.as_ref()
  }

  /// Applies a function to all state changes and returns a new
  /// response with the same action, warnings and error.
  pub fn map<O, F>(self, op: F) -> SimulationResponse<O>
  where
    F: FnMut(C) -> O,
  {
    SimulationResponse {
      action: self.action,
      warnings: self.warnings,
      simulation_results: SimulationResult {
        error: self.simulation_results.error,
        expected_state_changes: self
          .simulation_results
          .expected_state_changes
          .into_iter()
          .map(op)
          .collect(),
      },
    }
  }

  pub fn try_map<O, F, E>(self, op: F) -> Result<SimulationResponse<O>, E>
  where
    F: FnMut(C) -> Result<O, E>,
  {
    Ok(SimulationResponse {
      action: self.action,
      warnings: self.warnings,
      simulation_results: SimulationResult {
        error: self.simulation_results.error,
        expected_state_changes: self
          .simulation_results
          .expected_state_changes
          .into_iter()
          .map(op)
          .collect::<Result<_, _>>()?,
      },
    })
  }
}

pub type EvmSimulationResponse = SimulationResponse<EvmStateChange>;
pub type SvmSimulationResponse = SimulationResponse<SvmStateChange>;

#[cfg(test)]
mod tests {
  use {
    super::{Action, EvmSimulationResponse, Severity},
    crate::{decode::Error, Decode, EvmChange, RawEvmStateChange},
  };

  const RESPONSE: &str = r#"{
    "action": "WARN",
    "warnings": [{
      "kind": "UNLIMITED_ALLOWANCE_TO_NFTS",
      "message": "You are allowing this website to withdraw funds from your account in the future",
      "severity": "WARNING"
    }],
    "simulationResults": {
      "error": null,
      "expectedStateChanges": [{
        "humanReadableDiff": "Approve to transfer all your BoredApeYachtClub",
        "rawInfo": {
          "kind": "ERC721_APPROVAL_FOR_ALL",
          "data": {
            "erc721ApprovalForAllData": {
              "amount": {
                "after": "1157920892373161954235709850086879078532699846656405640394",
                "before": "0"
              },
              "contract": { "address": "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d", "kind": "ACCOUNT" },
              "name": "BoredApeYachtClub",
              "owner": { "address": "0x38191ca1307ebf67ca1a7caf5346dbd91d882ca6", "kind": "ACCOUNT" },
              "spender": { "address": "0x1e0049783f008a0085193e00003d00cd54003c71", "kind": "ACCOUNT" },
              "symbol": "BAYC"
            }
          }
        }
      }]
    }
  }"#;

  #[test]
  fn decodes_provider_response() -> anyhow::Result<()> {
    let response: EvmSimulationResponse = serde_json::from_str(RESPONSE)?;
    assert_eq!(response.action, Action::Warn);
    assert_eq!(response.warnings[0].severity, Severity::Warning);
    assert!(response.error().is_none());
    assert_eq!(response.expected_state_changes().len(), 1);
    assert!(matches!(
      response.expected_state_changes()[0].change,
      EvmChange::Erc721ApprovalForAll(_)
    ));
    Ok(())
  }

  #[test]
  fn map_and_try_map_keep_envelope() -> anyhow::Result<()> {
    let raw: super::SimulationResponse<RawEvmStateChange> =
      serde_json::from_str(RESPONSE)?;

    let lenient = raw.clone().map(RawEvmStateChange::decode);
    let strict = raw.try_map(RawEvmStateChange::decode_strict)?;
    assert_eq!(lenient, strict);
    assert_eq!(strict.warnings.len(), 1);

    let failing: Result<EvmSimulationResponse, Error> =
      serde_json::from_str::<super::SimulationResponse<RawEvmStateChange>>(
        r#"{ "action": "NONE", "simulationResults": {
              "expectedStateChanges": [{ "rawInfo": { "kind": "", "data": {} } }] } }"#,
      )?
      .try_map(RawEvmStateChange::decode_strict);
    assert!(failing.is_err());
    Ok(())
  }
}
