/*
    This module implements extended keys that are
    used in BIP32 hierarchal deterministic wallets.

    An extended key is a key plus a 32 byte chaincode, together with
    the metadata needed to serialize it (depth, parent fingerprint, index).
*/

use std::{fmt, str::FromStr};

use crate::{
    config::Network,
    encoding::{Base58, VersionPrefix},
    error::{Error, Result},
    hash,
    hdwallet::{
        ckd::{derive_xprv, derive_xpub, ChildOptions},
        Path
    },
    key::{PrivKey, PubKey},
    util::{as_u32_be, try_into}
};

/// Serialized extended key length without checksum:
/// version(4) depth(1) fingerprint(4) index(4) chaincode(32) key(33)
const XKEY_LEN: usize = 78;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Xprv {
    key: PrivKey,
    chaincode: [u8; 32],
    depth: u8,
    parent_fingerprint: [u8; 4],
    index: u32
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Xpub {
    key: PubKey,
    chaincode: [u8; 32],
    depth: u8,
    parent_fingerprint: [u8; 4],
    index: u32
}

pub trait ExtendedKey: Sized + Clone {
    /**
        Returns the chaincode (right 32 bytes) of the extended key
    */
    fn chaincode(&self) -> [u8; 32];

    fn depth(&self) -> u8;

    /**
        Return the non extended public key of self.
    */
    fn get_pub(&self) -> PubKey;

    /**
        Derives the child key of self
    */
    fn get_xchild(&self, options: ChildOptions) -> Result<Self>;

    /**
        Serialize the extended key with the selected prefix
    */
    fn serialize(&self, v_prefix: VersionPrefix) -> String;

    /**
        Derive the key at the given path by walking it one child at a time.
    */
    fn derive_from_path(&self, path: &Path) -> Result<Self> {
        let mut current_key: Self = self.clone();
        for child in &path.children {
            current_key = current_key.get_xchild(*child)?;
        }

        Ok(current_key)
    }
}

/// Splits a decoded extended key into (version, depth, fingerprint, index, chaincode, key bytes)
fn decode_payload(key: &str) -> Result<(VersionPrefix, u8, [u8; 4], u32, [u8; 32], Vec<u8>)> {
    let bytes = Base58::check_decode(key).map_err(|e| Error::InvalidKeyEncoding(e.to_string()))?;
    if bytes.len() != XKEY_LEN {
        return Err(Error::InvalidKeyEncoding(format!("expected {} bytes, found {}", XKEY_LEN, bytes.len())))
    }

    let version: u32 = as_u32_be(&try_into(&bytes[0..4]).expect("4 bytes"));
    let prefix = VersionPrefix::from_int(version).ok_or_else(|| Error::BadPrefix(bytes[0..4].to_vec()))?;
    let depth: u8 = bytes[4];
    let fingerprint: [u8; 4] = try_into(&bytes[5..9]).expect("4 bytes");
    let index: u32 = as_u32_be(&try_into(&bytes[9..13]).expect("4 bytes"));
    let chaincode: [u8; 32] = try_into(&bytes[13..45]).expect("32 bytes");

    Ok((prefix, depth, fingerprint, index, chaincode, bytes[45..78].to_vec()))
}

fn encode_payload(
    v_prefix: VersionPrefix,
    depth: u8,
    fingerprint: &[u8; 4],
    index: u32,
    chaincode: &[u8; 32],
    key: &[u8]
) -> String {
    let mut payload: Vec<u8> = Vec::with_capacity(XKEY_LEN - 4);
    payload.push(depth);
    payload.extend_from_slice(fingerprint);
    payload.extend_from_slice(&index.to_be_bytes());
    payload.extend_from_slice(chaincode);
    payload.extend_from_slice(key);

    Base58::new(Some(v_prefix), &payload).check_encode()
}

impl Xprv {
    pub fn construct(key: PrivKey, chaincode: [u8; 32], depth: u8, pf: [u8; 4], index: u32) -> Self {
        Self {
            key,
            chaincode,
            depth,
            parent_fingerprint: pf,
            index
        }
    }

    /**
        Master key from a BIP-32 seed.
    */
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let bytes: [u8; 64] = hash::hmac_sha512(seed, b"Bitcoin seed");
        let key = PrivKey::from_slice(&bytes[0..32])
            .map_err(|e| Error::Derivation(format!("unusable master key: {}", e)))?;

        Ok(Self::construct(
            key,
            try_into(&bytes[32..64]).expect("32 bytes"),
            0x00,
            [0x00; 4],
            0
        ))
    }

    /**
        Return the private key part of self
    */
    pub fn get_prv(&self) -> PrivKey {
        self.key
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /**
        Strip the private key. There is no way back.
    */
    pub fn neuter(&self) -> Xpub {
        Xpub::construct(
            self.key.public_key(),
            self.chaincode,
            self.depth,
            self.parent_fingerprint,
            self.index
        )
    }

    pub fn to_string_for(&self, network: Network) -> String {
        self.serialize(network.params().xprv)
    }
}

impl ExtendedKey for Xprv {
    fn chaincode(&self) -> [u8; 32] {
        self.chaincode
    }

    fn depth(&self) -> u8 {
        self.depth
    }

    fn get_pub(&self) -> PubKey {
        self.key.public_key()
    }

    fn get_xchild(&self, options: ChildOptions) -> Result<Xprv> {
        derive_xprv(self, options)
    }

    fn serialize(&self, v_prefix: VersionPrefix) -> String {
        let mut key = vec![0x00]; //private key append 0x00
        key.extend_from_slice(&self.key.as_bytes());
        encode_payload(v_prefix, self.depth, &self.parent_fingerprint, self.index, &self.chaincode, &key)
    }
}

impl Xpub {
    pub fn construct(key: PubKey, chaincode: [u8; 32], depth: u8, pf: [u8; 4], index: u32) -> Self {
        Self {
            key,
            chaincode,
            depth,
            parent_fingerprint: pf,
            index
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Canonical string form of the key on the given network.
    pub fn to_string_for(&self, network: Network) -> String {
        self.serialize(network.params().xpub)
    }
}

impl ExtendedKey for Xpub {
    fn chaincode(&self) -> [u8; 32] {
        self.chaincode
    }

    fn depth(&self) -> u8 {
        self.depth
    }

    fn get_pub(&self) -> PubKey {
        self.key
    }

    fn get_xchild(&self, options: ChildOptions) -> Result<Xpub> {
        derive_xpub(self, options)
    }

    fn serialize(&self, v_prefix: VersionPrefix) -> String {
        encode_payload(v_prefix, self.depth, &self.parent_fingerprint, self.index, &self.chaincode, &self.key.as_bytes())
    }
}

impl FromStr for Xprv {
    type Err = Error;

    /**
        Import an extended private key from a string.
        "xprv[...]" or "tprv[...]"
    */
    fn from_str(key: &str) -> Result<Self> {
        let (prefix, depth, fingerprint, index, chaincode, key_bytes) = decode_payload(key)?;
        if !prefix.is_extended_private() {
            return Err(Error::InvalidKeyEncoding(format!("{:?} is not an extended private key", prefix)))
        }

        //Private keys are padded with a single zero byte
        if key_bytes[0] != 0x00 {
            return Err(Error::InvalidKeyEncoding("missing private key padding".to_string()))
        }
        let key = PrivKey::from_slice(&key_bytes[1..])
            .map_err(|e| Error::InvalidKeyEncoding(e.to_string()))?;

        Ok(Self::construct(key, chaincode, depth, fingerprint, index))
    }
}

impl FromStr for Xpub {
    type Err = Error;

    /**
        Import an extended public key from a string.
        "xpub[...]" or "tpub[...]"
    */
    fn from_str(key: &str) -> Result<Self> {
        let (prefix, depth, fingerprint, index, chaincode, key_bytes) = decode_payload(key)?;
        if !prefix.is_extended_public() {
            return Err(Error::InvalidKeyEncoding(format!("{:?} is not an extended public key", prefix)))
        }

        let key = PubKey::from_slice(&key_bytes)
            .map_err(|e| Error::InvalidKeyEncoding(e.to_string()))?;

        Ok(Self::construct(key, chaincode, depth, fingerprint, index))
    }
}

impl fmt::Debug for Xprv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Xprv")
            .field("depth", &self.depth)
            .field("index", &self.index)
            .finish()
    }
}

impl fmt::Debug for Xpub {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Xpub")
            .field("key", &self.key)
            .field("depth", &self.depth)
            .field("index", &self.index)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TPRV: &str = "tprv8ZgxMBicQKsPetcGAZY273DFjDSopBXJNEwFtK7nfCAnAficDoYmTGBRMLHxNoNdpxawo11wnfPoERHbqAcbbn7svZxunP55HPJeNSKoRUZ";

    #[test]
    fn import_round_trip() -> Result<()> {
        let xprv = Xprv::from_str(TPRV)?;
        assert_eq!(xprv.depth(), 0);
        assert_eq!(xprv.get_prv().hex(), "40a1b9b4645418203057571e8f41f4aa44a3eb435e7b026a45684386c29ac168");
        assert_eq!(xprv.to_string_for(Network::Testnet), TPRV);

        let xpub = xprv.neuter();
        let encoded = xpub.to_string_for(Network::Testnet);
        assert!(encoded.starts_with("tpub"));
        assert_eq!(Xpub::from_str(&encoded)?, xpub);
        Ok(())
    }

    #[test]
    fn bad_imports() {
        //Public key where a private key is expected and the other way around
        let xpub = Xprv::from_str(TPRV).unwrap().neuter().to_string_for(Network::Testnet);
        assert!(matches!(Xprv::from_str(&xpub), Err(Error::InvalidKeyEncoding(_))));
        assert!(matches!(Xpub::from_str(TPRV), Err(Error::InvalidKeyEncoding(_))));

        assert!(matches!(Xprv::from_str("this is definately not a extended private key"), Err(Error::InvalidKeyEncoding(_))));
        assert!(matches!(Xprv::from_str(""), Err(Error::InvalidKeyEncoding(_))));

        //Checksum broken by swapping the last character
        let mut broken = TPRV.to_string();
        broken.pop();
        broken.push('a');
        assert!(matches!(Xprv::from_str(&broken), Err(Error::InvalidKeyEncoding(_))));
    }
}
