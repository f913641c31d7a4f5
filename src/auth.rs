/*
    Request authentication for the wallet service.

    Every API call is signed with the copayer's request key over the
    canonical line `lowercase(method)|path|body`, and carries the
    copayer identity derived from the account xpub.

    Message signing works on the "message hash", the double SHA256 of the
    message with its bytes reversed. The service reverses it back before
    handing it to ECDSA, so the signed digest is plain SHA256d.
*/

use std::collections::BTreeMap;

use tracing::trace;

use crate::{
    config::Coin,
    error::Result,
    hash,
    hdwallet::Credentials,
    key::{PrivKey, PubKey},
    util::encode_02x
};

pub const CLIENT_VERSION: &str = concat!("bws-keys v", env!("CARGO_PKG_VERSION"));

pub const HEADER_CLIENT_VERSION: &str = "x-client-version";
pub const HEADER_IDENTITY: &str = "x-identity";
pub const HEADER_SIGNATURE: &str = "x-signature";

/// Header name to value, sorted by name
pub type Headers = BTreeMap<&'static str, String>;

/// Restores signing order from the reversed message hash.
fn signing_digest(message: &[u8]) -> [u8; 32] {
    let mut digest = hash::message_hash(message);
    digest.reverse();
    digest
}

/**
    Signs an arbitrary message and returns the DER encoded signature.
*/
pub fn sign_message(message: &[u8], key: &PrivKey) -> Vec<u8> {
    key.sign_digest(&signing_digest(message))
}

/**
    Verifies a DER signature produced by `sign_message`.
    Malformed DER is an error, a signature from another key is `Ok(false)`.
*/
pub fn verify_message(message: &[u8], signature: &[u8], key: &PubKey) -> Result<bool> {
    key.verify_digest(&signing_digest(message), signature)
}

/// `lowercase(method)|path|body`
pub fn request_message(method: &str, path: &str, body: &str) -> String {
    [method.to_lowercase().as_str(), path, body].join("|")
}

pub fn sign_request(method: &str, path: &str, body: &str, key: &PrivKey) -> Vec<u8> {
    let message = request_message(method, path, body);
    trace!(%message, "signing request");
    sign_message(message.as_bytes(), key)
}

/**
    Copayer identity: SHA256 of the account xpub string, prefixed with the
    coin code for every coin but the base one.
*/
pub fn identity(account_xpub: &str, coin: Coin) -> [u8; 32] {
    if coin.is_base() {
        hash::sha256(account_xpub.as_bytes())
    } else {
        hash::sha256(format!("{}{}", coin.code(), account_xpub).as_bytes())
    }
}

/// `name|accountXpub|requestPubKeyHex`
pub fn copayer_hash(name: &str, account_xpub: &str, request_pub_key: &PubKey) -> String {
    [name, account_xpub, request_pub_key.hex().as_str()].join("|")
}

/**
    Signature proving that the joining copayer knows the wallet's
    invitation secret. Signed with the secret's private key.
*/
pub fn copayer_signature(name: &str, credentials: &Credentials, secret_key: &PrivKey) -> Vec<u8> {
    let hash = copayer_hash(name, &credentials.account_xpub_string(), &credentials.request_pub_key());
    sign_message(hash.as_bytes(), secret_key)
}

/**
    Signs requests on behalf of one copayer.
*/
#[derive(Debug, Clone)]
pub struct RequestAuthenticator {
    request_key: PrivKey,
    identity: String
}

impl RequestAuthenticator {
    pub fn new(credentials: &Credentials, coin: Coin) -> Self {
        Self {
            request_key: credentials.request_prv_key(),
            identity: encode_02x(&identity(&credentials.account_xpub_string(), coin))
        }
    }

    /// Hex encoded copayer identity
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn sign(&self, method: &str, path: &str, body: &str) -> Vec<u8> {
        sign_request(method, path, body, &self.request_key)
    }

    pub fn headers(&self, signature: &[u8]) -> Headers {
        let mut headers = Headers::new();
        headers.insert(HEADER_CLIENT_VERSION, CLIENT_VERSION.to_string());
        headers.insert(HEADER_IDENTITY, self.identity.clone());
        headers.insert(HEADER_SIGNATURE, encode_02x(signature));
        headers
    }

    /// Signs the request and returns the full header set for it
    pub fn stamp(&self, method: &str, path: &str, body: &str) -> Headers {
        self.headers(&self.sign(method, path, body))
    }
}
