/*
    Request bodies, one record per API operation.

    GET operations send no body, their records are flattened into
    the query string instead.
*/

use serde::Serialize;

use crate::{
    config::{Coin, Network},
    models::TxOutput
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalletRequest {
    pub name: String,
    pub m: usize,
    pub n: usize,
    /// Hex of the creator's root public key
    pub pub_key: String,
    pub coin: Coin,
    pub network: Network,
    pub single_address: bool
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinWalletRequest {
    pub name: String,
    pub coin: Coin,
    #[serde(rename = "xPubKey")]
    pub xpub_key: String,
    pub request_pub_key: String,
    pub copayer_signature: String
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTxProposalRequest {
    pub outputs: Vec<TxOutput>,
    pub fee_level: String,
    pub dry_run: bool
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishTxProposalRequest {
    pub proposal_signature: String
}

/// Input signatures in input order, hex encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignTxProposalRequest {
    pub signatures: Vec<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectTxProposalRequest {
    pub reason: String
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddressRequest {
    pub ignore_max_gap: bool
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartScanRequest {
    pub include_copayer_branches: bool
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastRawTxRequest {
    pub raw_tx: String,
    pub network: Network
}

/// Preference fields left as `None` keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePreferencesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushSubscriptionRequest {
    /// Push platform, e.g. "ios" or "android"
    #[serde(rename = "type")]
    pub platform: String,
    pub token: String
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusQuery {
    pub include_extended_info: bool,
    pub two_step: bool
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceQuery {
    pub two_step: bool
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressesQuery {
    pub limit: usize,
    pub reverse: bool
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeLevelsQuery {
    pub coin: Coin,
    pub network: Network
}

/// Comma separated addresses, all wallet utxos when absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UtxosQuery {
    pub addresses: Option<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TxHistoryQuery {
    pub skip: u64,
    pub limit: u64,
    pub include_extended_info: bool
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxInfoQuery {
    pub fee_level: Option<String>,
    pub fee_per_kb: Option<u64>
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsQuery {
    pub include_own: bool,
    pub notification_id: Option<String>,
    /// Seconds
    pub time_span: Option<u64>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiatRateQuery {
    pub provider: String,
    /// Unix seconds
    pub ts: i64
}

/// Serializes as `{}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyRequest {}
