use {
  clap::{Parser, ValueEnum},
  std::{
    fs,
    io::{self, Read},
    path::PathBuf,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Chain {
  /// Ethereum and other EVM compatible networks
  Evm,

  /// Solana
  Svm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
  Text,
  Json,
}

#[derive(Debug, Parser)]
#[clap(about = "Classifies the state changes of a simulated transaction")]
pub struct CliOptions {
  #[clap(
    long,
    value_enum,
    default_value = "evm",
    help = "ecosystem the simulated transaction belongs to"
  )]
  pub chain: Chain,

  #[clap(
    long,
    help = "fail on ambiguous, unknown or malformed state changes instead \
            of skipping them"
  )]
  pub strict: bool,

  #[clap(long, value_enum, default_value = "text")]
  pub format: Format,

  #[clap(help = "simulation response JSON file, reads stdin when omitted")]
  pub input: Option<PathBuf>,
}

impl CliOptions {
  /// The raw simulation response document, either from the
  /// given file or from standard input.
  pub fn read_input(&self) -> io::Result<String> {
    match &self.input {
      Some(path) => fs::read_to_string(path),
      None => {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
      }
    }
  }
}
