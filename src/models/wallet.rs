use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Wallet {
    pub id: String,
    pub version: String,
    pub created_on: u64,
    pub m: usize,
    pub n: usize,
    pub single_address: bool,
    pub status: String,
    pub pub_key: String,
    pub coin: String,
    pub network: String,
    pub derivation_strategy: String,
    pub address_type: String
}

/// Response to a wallet creation. The secret is filled in locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletCreate {
    pub wallet_id: String,
    #[serde(default)]
    pub secret: String
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletJoin {
    pub copayer_id: String,
    pub wallet: Option<Wallet>
}

/// A wallet address as the service reports it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub version: String,
    pub created_on: u64,
    pub address: String,
    pub wallet_id: String,
    pub is_change: bool,
    pub path: String,
    pub public_keys: Vec<String>,
    pub coin: String,
    pub network: String,
    #[serde(rename = "type")]
    pub address_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_activity: Option<bool>
}

impl Address {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            ..Default::default()
        }
    }
}

/// Error body of a failed API call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    pub code: String,
    pub message: String
}
