/*
    Wallet state as the service reports it: balances, fees, history,
    notifications and copayer preferences.
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{TxInput, TxOutput, TxProposal, Wallet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Version {
    pub service_version: String
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Balance {
    pub total_amount: u64,
    pub locked_amount: u64,
    pub total_confirmed_amount: u64,
    pub locked_confirmed_amount: u64,
    pub available_amount: u64,
    pub available_confirmed_amount: u64
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub version: String,
    pub created_on: u64,
    pub wallet_id: String,
    pub copayer_id: String,
    pub email: String,
    pub language: String,
    pub unit: String
}

/// Wallet, balance and pending proposals in one call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletStatus {
    pub wallet: Option<Wallet>,
    pub balance: Balance,
    pub pending_txps: Vec<TxProposal>,
    pub preferences: Option<Preferences>
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeLevel {
    pub level: String,
    pub fee_per_kb: u64,
    #[serde(rename = "nbBlocks")]
    pub num_blocks: u32
}

/// What a send max transaction would spend and pay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaxInfo {
    pub amount: i64,
    pub fee: i64,
    pub fee_per_kb: u64,
    pub size: usize,
    pub inputs: Vec<TxInput>,
    pub utxos_below_fee: u64,
    pub amount_below_fee: i64,
    pub utxos_above_max_size: u64,
    pub amount_above_max_size: i64
}

/// A copayer action on a proposal in the history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Action {
    pub created_on: u64,
    #[serde(rename = "type")]
    pub action_type: String,
    pub copayer_id: String,
    pub copayer_name: String,
    pub comment: String
}

/// A transaction from the wallet history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    pub txid: String,
    #[serde(rename = "blockheight")]
    pub block_height: u64,
    pub proposal_id: String,
    pub created_on: u64,
    pub creator_name: String,
    /// "sent", "received" or "moved"
    pub action: String,
    pub actions: Vec<Action>,
    pub amount: i64,
    pub address_to: String,
    pub fees: i64,
    pub time: u64,
    pub confirmations: u64,
    pub fee_per_kb: u64,
    pub outputs: Vec<TxOutput>,
    pub has_unconfirmed_inputs: bool,
    pub low_fees: bool
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub version: String,
    pub data: Value,
    pub created_on: u64,
    pub creator_id: Option<String>,
    pub wallet_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FiatRate {
    #[serde(rename = "ts")]
    pub timestamp: Option<u64>,
    pub fetched_on: u64,
    pub rate: f64
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressScan {
    pub started: bool
}
