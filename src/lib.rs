/*
    Client side key management for a hosted multisignature
    Bitcoin wallet service.

    Copayers derive their keys from a single root, authenticate
    every API call with a request key, invite each other with compact
    secrets and cooperatively sign the transaction proposals the
    service hands out.

    References:
        - The Bitcoin Book (https://github.com/bitcoinbook/bitcoinbook/)
            most of the general concepts come from here

        - BIP-32, BIP-39 and BIP-44 for the key hierarchy

        - learn me a bitcoin (https://learnmeabitcoin.com/)
            for the transaction and script layouts
*/

//Outward facing modules
pub mod address;
pub mod auth;
pub mod client;
pub mod config;
pub mod encoding;
pub mod error;
pub mod hdwallet;
pub mod key;
pub mod models;
pub mod prelude;
pub mod script;
pub mod secret;
pub mod transaction;

//Modules for internal use
mod hash;
mod proposal;
pub mod util;

pub use crate::error::{Error, ErrorKind, Result};
