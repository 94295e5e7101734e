#![allow(dead_code)]

use {
  serde::de::DeserializeOwned,
  txsim_primitives::{
    EvmSimulationResponse,
    RawEvmStateChange,
    SimulationResponse,
    SvmSimulationResponse,
  },
};

/// Simulation responses recorded from the provider, bundled
/// with the test binary so tests do not depend on the working
/// directory they run in.
pub mod fixtures {
  pub const SWAP_ETH_FOR_DAI: &str =
    include_str!("../fixtures/evm_swap_eth_for_dai.json");
  pub const ERC20_APPROVAL: &str =
    include_str!("../fixtures/evm_erc20_approval.json");
  pub const BUY_NFT_WITH_ETH: &str =
    include_str!("../fixtures/evm_buy_nft_with_eth.json");
  pub const ERC721_APPROVE_FOR_ALL: &str =
    include_str!("../fixtures/evm_erc721_approve_for_all.json");
  pub const ERC1155_APPROVE_FOR_ALL: &str =
    include_str!("../fixtures/evm_erc1155_approve_for_all.json");
  pub const MIXED_EVM: &str = include_str!("../fixtures/evm_mixed.json");
  pub const REVERTED: &str = include_str!("../fixtures/evm_reverted.json");
  pub const NULL_FIELDS: &str =
    include_str!("../fixtures/evm_null_fields.json");
  pub const SOL_RECEIVE: &str =
    include_str!("../fixtures/svm_sol_receive.json");
  pub const SPL_NFT_SEND: &str =
    include_str!("../fixtures/svm_spl_nft_send.json");
  pub const STAKE_AUTHORITY_CHANGE: &str =
    include_str!("../fixtures/svm_stake_authority_change.json");
}

fn parse<T: DeserializeOwned>(json: &str) -> anyhow::Result<T> {
  Ok(serde_json::from_str(json)?)
}

pub fn evm(json: &str) -> anyhow::Result<EvmSimulationResponse> {
  parse(json)
}

pub fn svm(json: &str) -> anyhow::Result<SvmSimulationResponse> {
  parse(json)
}

/// The wire form of an EVM response, for strict classification.
pub fn raw_evm(
  json: &str,
) -> anyhow::Result<SimulationResponse<RawEvmStateChange>> {
  parse(json)
}
