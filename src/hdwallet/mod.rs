/*
    This module implements hierarchical deterministic keys
    under the BIP 32 standard and the fixed key layout a
    wallet service copayer derives from its root key.

    Based on chapter 5 of the bitcoin book. (https://github.com/bitcoinbook/bitcoinbook/)
*/

pub mod ckd;
pub mod credentials;
pub mod extended_keys;
pub mod path;

/// Child indexes at or above this value are hardened
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

pub use self::{
    ckd::ChildOptions,
    credentials::Credentials,
    extended_keys::{ExtendedKey, Xprv, Xpub},
    path::Path
};
