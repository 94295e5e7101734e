use {
  crate::decode::null_as_default,
  alloc::{string::String, vec::Vec},
  serde::{Deserialize, Serialize},
};

/// Spot price of an asset as known to the simulation provider
/// at the time of simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetPrice {
  #[serde(deserialize_with = "null_as_default")]
  pub source: String,
  #[serde(deserialize_with = "null_as_default")]
  pub last_updated_at: String,
  #[serde(deserialize_with = "null_as_default")]
  pub dollar_value_per_token: String,
}

/// Fungible token description attached to ERC20 and native
/// asset transfers and approvals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Asset {
  #[serde(deserialize_with = "null_as_default")]
  pub address: String,
  #[serde(deserialize_with = "null_as_default")]
  pub symbol: String,
  #[serde(deserialize_with = "null_as_default")]
  pub name: String,
  #[serde(deserialize_with = "null_as_default")]
  pub decimals: u32,
  #[serde(deserialize_with = "null_as_default")]
  pub verified: bool,

  /// Token lists that include this asset, e.g. "COINGECKO", "UNISWAP".
  #[serde(deserialize_with = "null_as_default")]
  pub lists: Vec<String>,
  pub image_url: Option<String>,
  pub price: Option<AssetPrice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NftMetadata {
  #[serde(deserialize_with = "null_as_default")]
  pub raw_image_url: String,
}
