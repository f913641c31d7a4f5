/*
    Records exchanged with the wallet service, in its camelCase JSON shape.
*/

pub mod requests;
pub mod status;
pub mod tx_proposal;
pub mod wallet;

pub use self::{
    requests::*,
    status::{
        Action, AddressScan, Balance, FeeLevel, FiatRate, MaxInfo, Notification,
        Preferences, Transaction, Version, WalletStatus
    },
    tx_proposal::{TxInput, TxOutput, TxProposal},
    wallet::{Address, ApiError, Wallet, WalletCreate, WalletJoin}
};
