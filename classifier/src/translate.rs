use txsim_primitives::SimulationError;

pub const TRANSACTION_REVERTED: &str = "TRANSACTION_REVERTED";
const UNKNOWN_ERROR: &str = "UNKNOWN ERROR";

/// Turns a provider simulation error into the text shown to
/// the user. An absent error yields an empty string.
pub fn translate_error(error: Option<&SimulationError>) -> String {
  match error {
    None => String::new(),
    Some(e) if e.kind == TRANSACTION_REVERTED => TRANSACTION_REVERTED.into(),
    Some(e) if e.human_readable_error.is_empty() => UNKNOWN_ERROR.into(),
    Some(e) => e.human_readable_error.clone(),
  }
}

#[cfg(test)]
mod tests {
  use {super::translate_error, txsim_primitives::SimulationError};

  fn error(kind: &str, message: &str) -> SimulationError {
    SimulationError {
      kind: kind.into(),
      human_readable_error: message.into(),
    }
  }

  #[test]
  fn translations() {
    assert_eq!(translate_error(None), "");
    assert_eq!(
      translate_error(Some(&error("TRANSACTION_REVERTED", "ignored"))),
      "TRANSACTION_REVERTED"
    );
    assert_eq!(
      translate_error(Some(&error("SIMULATION_FAILED", "Out of gas"))),
      "Out of gas"
    );
    assert_eq!(
      translate_error(Some(&error("SIMULATION_FAILED", ""))),
      "UNKNOWN ERROR"
    );
    assert_eq!(translate_error(Some(&error("", ""))), "UNKNOWN ERROR");
  }
}
