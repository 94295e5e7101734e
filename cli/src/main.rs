use {
  crate::{
    cli::{Chain, CliOptions, Format},
    report::Report,
  },
  clap::Parser,
  serde::de::DeserializeOwned,
  tracing::{debug, info},
  tracing_subscriber::{EnvFilter, FmtSubscriber},
  txsim_classifier::{
    classify,
    classify_strict,
    Categorize,
    Describe,
    Validate,
  },
  txsim_primitives::{
    Decode,
    RawEvmStateChange,
    RawSvmStateChange,
    SimulationResponse,
  },
};

mod cli;
mod report;

/// Parses a simulation response and classifies its state changes.
///
/// In strict mode the first malformed record fails the whole run,
/// otherwise malformed records are left out of the report.
fn run<R>(input: &str, strict: bool) -> anyhow::Result<Report>
where
  R: Decode + DeserializeOwned + Clone,
  R::Output: Categorize + Describe + Validate + Clone,
{
  let raw: SimulationResponse<R> = serde_json::from_str(input)?;
  let total = raw.expected_state_changes().len();

  let grouped = if strict {
    Some(classify_strict(raw.expected_state_changes().to_vec())?)
  } else {
    None
  };

  let response = raw.map(R::decode);
  let grouped =
    grouped.unwrap_or_else(|| classify(response.expected_state_changes()));
  info!(
    "classified {} of {total} state changes ({} transfers, {} approvals, {} \
     stake authority changes)",
    grouped.len(),
    grouped.transfers.len(),
    grouped.approvals.len(),
    grouped.stake_authority_changes.len()
  );

  Ok(Report::new(&response, &grouped))
}

fn main() -> anyhow::Result<()> {
  tracing::subscriber::set_global_default(
    FmtSubscriber::builder()
      .with_env_filter(EnvFilter::from_default_env())
      .with_writer(std::io::stderr)
      .finish(),
  )?;

  let opts = CliOptions::parse();
  debug!("options: {opts:?}");

  let input = opts.read_input()?;
  let report = match opts.chain {
    Chain::Evm => run::<RawEvmStateChange>(&input, opts.strict)?,
    Chain::Svm => run::<RawSvmStateChange>(&input, opts.strict)?,
  };

  match opts.format {
    Format::Text => print!("{report}"),
    Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
  }
  Ok(())
}
