use serde::{Deserialize, Serialize};

use crate::models::Address;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TxInput {
    pub txid: String,
    pub vout: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub script_pub_key: String,
    pub satoshis: i64,
    pub confirmations: u64,
    pub locked: bool,
    pub path: String,
    pub public_keys: Vec<String>
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxOutput {
    pub amount: i64,
    /// Only set on received transactions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub to_address: String,
    #[serde(default)]
    pub message: Option<String>
}

impl TxOutput {
    pub fn new(amount: i64, to_address: &str) -> Self {
        Self {
            amount,
            to_address: to_address.to_string(),
            ..Default::default()
        }
    }
}

/**
    A transaction proposal as the wallet service hands it out.

    The service chooses the inputs and the fee, the copayers only ever
    rebuild the transaction it describes, sign it, or reject it.
*/
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TxProposal {
    pub id: String,
    pub tx_id: Option<String>,
    pub wallet_id: String,
    pub creator_id: String,
    pub version: i32,
    pub created_on: u64,
    pub broadcasted_on: Option<u64>,
    pub coin: String,
    pub network: String,
    pub message: Option<String>,
    pub wallet_m: usize,
    pub wallet_n: usize,
    pub required_signatures: usize,
    pub required_rejections: usize,
    pub status: String,
    pub fee_level: String,
    pub fee_per_kb: u64,
    pub amount: i64,
    pub fee: i64,
    pub creator_name: String,
    pub input_paths: Vec<String>,
    pub output_order: Vec<usize>,
    pub change_address: Option<Address>,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>
}
