extern crate alloc;

mod address;
mod amount;
mod asset;
mod decode;
mod evm;
mod kind;
mod response;
mod svm;

pub use {
  address::{
    is_native_asset_address,
    AddressRef,
    Error as AddressError,
    EvmAddress,
    SolanaAddress,
    NATIVE_ASSET_CONTRACT_ADDRESS,
  },
  amount::{
    Amount,
    AmountChange,
    DiffSign,
    Error as AmountError,
    SignedDiff,
    UNLIMITED_ALLOWANCE,
  },
  asset::{Asset, AssetPrice, NftMetadata},
  decode::{Decode, Error as DecodeError, RawInfo, RawStateChange},
  evm::{
    Erc1155ApprovalForAllData,
    Erc1155TransferData,
    Erc20ApprovalData,
    Erc20TransferData,
    Erc721ApprovalData,
    Erc721ApprovalForAllData,
    Erc721TransferData,
    EvmChange,
    EvmStateChange,
    EvmStateChangeData,
    NativeAssetTransferData,
    RawEvmStateChange,
  },
  kind::ChangeKind,
  response::{
    Action,
    EvmSimulationResponse,
    Severity,
    SimulationError,
    SimulationResponse,
    SimulationResult,
    SvmSimulationResponse,
    Warning,
  },
  svm::{
    RawSvmStateChange,
    SolStakeAuthorityChangeData,
    SolTransferData,
    SplApprovalData,
    SplTransferData,
    StakeAuthorities,
    SvmChange,
    SvmStateChange,
    SvmStateChangeData,
  },
};
