/*
    Crate wide error type.

    Every fallible operation returns `Result<T, Error>`. Errors are grouped
    into broad kinds so callers can decide what to do with them without
    matching on every variant.
*/

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// base58, hex, WIF and extended key decoding failures
    Encoding,
    /// bad derivation paths and child derivation failures
    Derivation,
    /// proposal shape violations and bad configuration
    Validation,
    /// malformed keys, scripts or signatures
    Crypto,
    /// failures reported by the transport collaborator
    Transport
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidBase58 { character: char, index: usize },

    #[error("bad base58check checksum")]
    BadChecksum,

    #[error("unknown version prefix {0:02x?}")]
    BadPrefix(Vec<u8>),

    #[error("invalid WIF private key: {0}")]
    InvalidWif(String),

    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    #[error("invalid wallet id: {0}")]
    InvalidUuid(String),

    #[error("invalid entropy length: {0} bits")]
    InvalidEntropy(usize),

    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("invalid derivation path {path:?}: bad segment {segment:?}")]
    InvalidPath { path: String, segment: String },

    #[error("child derivation failed: {0}")]
    Derivation(String),

    #[error("invalid transaction proposal: {0}")]
    InvalidProposal(String),

    #[error("cannot decode address {address:?}: {reason}")]
    AddressDecode { address: String, reason: String },

    #[error("cannot build script: {0}")]
    ScriptBuild(String),

    #[error("cannot serialize transaction: {0}")]
    Serialization(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("secp256k1: {0}")]
    Secp256k1(#[from] secp256k1::Error),

    #[error("transport: {0}")]
    Transport(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error)
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidHex(_)
            | Error::InvalidBase58 { .. }
            | Error::BadChecksum
            | Error::BadPrefix(_)
            | Error::InvalidWif(_)
            | Error::InvalidKeyEncoding(_)
            | Error::InvalidUuid(_)
            | Error::InvalidMnemonic(_)
            | Error::Json(_) => ErrorKind::Encoding,

            Error::InvalidEntropy(_)
            | Error::InvalidPath { .. }
            | Error::Derivation(_) => ErrorKind::Derivation,

            Error::InvalidProposal(_)
            | Error::AddressDecode { .. }
            | Error::Serialization(_)
            | Error::InvalidConfig(_) => ErrorKind::Validation,

            Error::ScriptBuild(_) | Error::Secp256k1(_) => ErrorKind::Crypto,

            Error::Transport(_) => ErrorKind::Transport
        }
    }
}

impl From<bs58::decode::Error> for Error {
    fn from(e: bs58::decode::Error) -> Self {
        match e {
            bs58::decode::Error::InvalidCharacter { character, index } => {
                Error::InvalidBase58 { character, index }
            }
            bs58::decode::Error::NonAsciiCharacter { index } => {
                Error::InvalidBase58 { character: '?', index }
            }
            _ => Error::InvalidKeyEncoding(e.to_string())
        }
    }
}
