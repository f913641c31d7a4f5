use std::fmt;

use once_cell::sync::Lazy;
use secp256k1::{All, Message, PublicKey, Secp256k1, SecretKey, Signature};

use crate::{
    encoding::{Base58, VersionPrefix},
    error::{Error, Result},
    util::encode_02x
};

/// Shared signing and verification context.
pub(crate) static SECP: Lazy<Secp256k1<All>> = Lazy::new(Secp256k1::new);

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivKey(SecretKey);

impl PrivKey {

    /**
        Use a predefined byte array as a secret key.
        Fails if the bytes are not a valid secp256k1 scalar.
    */
    pub fn from_slice(byte_array: &[u8]) -> Result<Self> {
        Ok(Self(SecretKey::from_slice(byte_array)?))
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(hex)?)
    }

    /**
        Serializes the private key into a array of bytes.
    */
    pub fn as_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&self.0[..]);
        bytes
    }

    pub fn hex(&self) -> String {
        encode_02x(&self.as_bytes())
    }

    /*
        Export the private key a wallet-import-format (Base58Check Encoded with prefix)
        * Use the parameter to indicate if WIF should include the compression byte.
    */
    pub fn export_as_wif(&self, compressed: bool, prefix: VersionPrefix) -> String {
        let mut key: Vec<u8> = self.as_bytes().to_vec();
        if compressed {
            key.push(0x01);
        }

        Base58::new(Some(prefix), &key).check_encode()
    }

    /**
        Import a private key from WIF. Both the main and test network
        prefixes are accepted, compressed or not.
    */
    pub fn from_wif(wif: &str) -> Result<Self> {
        let bytes = Base58::check_decode(wif).map_err(|e| Error::InvalidWif(e.to_string()))?;

        match VersionPrefix::from_int(bytes.first().copied().unwrap_or(0xff) as u32) {
            Some(VersionPrefix::PrivateKeyWIF) | Some(VersionPrefix::TestNetPrivateKeyWIF) => { /* Continue */ },
            _ => return Err(Error::InvalidWif("unknown network prefix".to_string()))
        }

        let key = match bytes.len() {
            33 => &bytes[1..33],
            34 if bytes[33] == 0x01 => &bytes[1..33],
            _ => return Err(Error::InvalidWif(format!("unexpected payload length {}", bytes.len())))
        };

        Self::from_slice(key).map_err(|e| Error::InvalidWif(e.to_string()))
    }

    /// Adds a 32 byte tweak to the key modulo the curve order.
    pub(crate) fn tweak_add(&self, tweak: &[u8]) -> Result<Self> {
        let mut key = self.0;
        key.add_assign(tweak)?;
        Ok(Self(key))
    }

    pub fn public_key(&self) -> PubKey {
        PubKey::from_priv_key(self)
    }

    /**
        ECDSA sign a 32 byte digest (RFC6979 nonce, low S).
        Returns the DER encoded signature.
    */
    pub fn sign_digest(&self, digest: &[u8; 32]) -> Vec<u8> {
        let msg = Message::from_slice(digest).expect("digest is 32 bytes");
        SECP.sign(&msg, &self.0).serialize_der().to_vec()
    }
}

impl fmt::Debug for PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("PrivKey(..)")
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PubKey(PublicKey);

impl PubKey {

    /**
        Finds the compressed public key from a secret key.
    */
    pub fn from_priv_key(k: &PrivKey) -> Self {
        Self(PublicKey::from_secret_key(&SECP, &k.0))
    }

    /**
        Parse a compressed or uncompressed SEC1 public key.
    */
    pub fn from_slice(byte_array: &[u8]) -> Result<Self> {
        Ok(Self(PublicKey::from_slice(byte_array)?))
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(hex)?)
    }

    /**
        Returns the compressed public key as a byte array.
    */
    pub fn as_bytes(&self) -> [u8; 33] {
        self.0.serialize()
    }

    /**
       Return the compressed public key as a hex string.
    */
    pub fn hex(&self) -> String {
        encode_02x(&self.as_bytes())
    }

    /// Adds tweak*G to the point.
    pub(crate) fn tweak_add(&self, tweak: &[u8]) -> Result<Self> {
        let mut key = self.0;
        key.add_exp_assign(&SECP, tweak)?;
        Ok(Self(key))
    }

    /**
        Verify a DER signature over a 32 byte digest.
        High S signatures are normalized before verification.
    */
    pub fn verify_digest(&self, digest: &[u8; 32], der: &[u8]) -> Result<bool> {
        let mut sig = Signature::from_der(der)?;
        sig.normalize_s();
        let msg = Message::from_slice(digest)?;

        Ok(SECP.verify(&msg, &sig, &self.0).is_ok())
    }
}

impl fmt::Debug for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PubKey({})", self.hex())
    }
}

impl fmt::Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.hex())
    }
}
