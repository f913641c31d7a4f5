/*
    This module contains the default imports for the library.

    Import the library using:
        use bws_keys::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{
    address::Address,

    auth::{
        identity,
        sign_message,
        sign_request,
        verify_message,
        Headers,
        RequestAuthenticator
    },

    client::{
        Client,
        Method,
        Transport,
        TransportError
    },

    config::{
        Coin,
        Config,
        Network
    },

    error::{
        Error,
        ErrorKind,
        Result
    },

    hdwallet::{
        ChildOptions,
        Credentials,
        ExtendedKey,
        Path,
        Xprv, Xpub
    },

    key::{
        PrivKey,
        PubKey
    },

    models::{
        TxInput,
        TxOutput,
        TxProposal
    },

    secret::{
        build_secret,
        parse_secret,
        InvitationSecret
    },

    encoding::VersionPrefix,

    script::Script
};
