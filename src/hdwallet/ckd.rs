/*
    This module implements child key deriveration
    from parent extended private and public keys
    under the BIP32 standard.

    Reference:
        https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
*/

use crate::{
    error::{Error, Result},
    hash::{
        hmac_sha512,
        hash160
    },
    hdwallet::{
        ExtendedKey, Xprv, Xpub, HARDENED_OFFSET
    }
};

/**
    Enum to pattern match child key deriveration options.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOptions {
    Normal(u32),
    Hardened(u32)
}

impl ChildOptions {
    /// The serialized child number, with the hardening offset applied.
    pub fn index(&self) -> Result<u32> {
        match *self {
            ChildOptions::Normal(x) if x < HARDENED_OFFSET => Ok(x),
            ChildOptions::Hardened(x) if x < HARDENED_OFFSET => Ok(x + HARDENED_OFFSET),
            _ => Err(Error::Derivation(format!("child index out of range: {:?}", self)))
        }
    }
}

/// Depth of a child, which must still fit the single serialized depth byte
fn child_depth(parent_depth: u8) -> Result<u8> {
    parent_depth.checked_add(1)
        .ok_or_else(|| Error::Derivation(format!("cannot derive below depth {}", parent_depth)))
}

fn fingerprint(parent: &[u8; 33]) -> [u8; 4] {
    let mut fp = [0u8; 4];
    fp.copy_from_slice(&hash160(parent)[0..4]);
    fp
}

/**
    Function to derive new child xprv keys from parent xprv keys.
*/
pub fn derive_xprv(parent: &Xprv, options: ChildOptions) -> Result<Xprv> {
    let index = options.index()?;
    let depth = child_depth(parent.depth())?;
    let parent_pub = parent.get_pub().as_bytes();

    let mut data: Vec<u8> = Vec::with_capacity(37);
    match options {
        //Normal private key child is [parent pub bytes || index bytes]
        ChildOptions::Normal(_) => data.extend_from_slice(&parent_pub),
        //Hardened private key child is [0x00 || parent priv bytes || index bytes]
        ChildOptions::Hardened(_) => {
            data.push(0x00);
            data.extend_from_slice(&parent.get_prv().as_bytes());
        }
    }
    data.extend_from_slice(&index.to_be_bytes());

    //Hash the data with the parent chaincode as the key
    let hash: [u8; 64] = hmac_sha512(&data, &parent.chaincode());
    let mut child_chaincode = [0u8; 32];
    child_chaincode.copy_from_slice(&hash[32..64]);

    //child key = parse256(IL) + parent key (mod n)
    let child_key = parent.get_prv().tweak_add(&hash[0..32])
        .map_err(|e| Error::Derivation(format!("invalid child at index {}: {}", index, e)))?;

    Ok(Xprv::construct(
        child_key,
        child_chaincode,
        depth,
        fingerprint(&parent_pub),
        index
    ))
}

/**
    Function to derive new child xpub keys from parent xpub keys.
    Hardened children can only be derived from private keys.
*/
pub fn derive_xpub(parent: &Xpub, options: ChildOptions) -> Result<Xpub> {
    let index = match options {
        ChildOptions::Normal(_) => options.index()?,
        ChildOptions::Hardened(_) => return Err(Error::Derivation(
            "cannot produce hardened child public key".to_string()
        ))
    };
    let depth = child_depth(parent.depth())?;
    let parent_pub = parent.get_pub().as_bytes();

    let mut data: Vec<u8> = parent_pub.to_vec();
    data.extend_from_slice(&index.to_be_bytes());

    let hash: [u8; 64] = hmac_sha512(&data, &parent.chaincode());
    let mut child_chaincode = [0u8; 32];
    child_chaincode.copy_from_slice(&hash[32..64]);

    //child point = parse256(IL)*G + parent point
    let child_key = parent.get_pub().tweak_add(&hash[0..32])
        .map_err(|e| Error::Derivation(format!("invalid child at index {}: {}", index, e)))?;

    Ok(Xpub::construct(
        child_key,
        child_chaincode,
        depth,
        fingerprint(&parent_pub),
        index
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hdwallet::Path;

    //BIP-32 test vector 1
    const SEED: &str = "000102030405060708090a0b0c0d0e0f";

    #[test]
    fn bip32_vector_one() -> Result<()> {
        let master = Xprv::from_seed(&hex::decode(SEED).unwrap())?;
        assert_eq!(
            master.serialize(crate::encoding::VersionPrefix::Xprv),
            "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi"
        );

        let child = master.derive_from_path(&"m/0'/1/2'".parse::<Path>()?)?;
        assert_eq!(
            child.serialize(crate::encoding::VersionPrefix::Xprv),
            "xprv9z4pot5VBttmtdRTWfWQmoH1taj2axGVzFqSb8C9xaxKymcFzXBDptWmT7FwuEzG3ryjH4ktypQSAewRiNMjANTtpgP4mLTj34bhnZX7UiM"
        );
        assert_eq!(
            child.neuter().serialize(crate::encoding::VersionPrefix::Xpub),
            "xpub6D4BDPcP2GT577Vvch3R8wDkScZWzQzMMUm3PWbmWvVJrZwQY4VUNgqFJPMM3No2dFDFGTsxxpG5uJh7n7epu4trkrX7x7DogT5Uv6fcLW5"
        );

        Ok(())
    }

    #[test]
    fn public_derivation_matches_private() -> Result<()> {
        let master = Xprv::from_seed(&hex::decode(SEED).unwrap())?;
        let account = master.derive_from_path(&"m/0'".parse::<Path>()?)?;

        let from_private = account.get_xchild(ChildOptions::Normal(7))?.neuter();
        let from_public = account.neuter().get_xchild(ChildOptions::Normal(7))?;
        assert_eq!(from_private, from_public);

        assert!(account.neuter().get_xchild(ChildOptions::Hardened(7)).is_err());
        Ok(())
    }

    #[test]
    fn maximum_depth() -> Result<()> {
        let master = Xprv::from_seed(&hex::decode(SEED).unwrap())?;
        let deepest = Xprv::construct(master.get_prv(), master.chaincode(), u8::MAX, [0u8; 4], 0);

        assert!(matches!(deepest.get_xchild(ChildOptions::Normal(0)), Err(Error::Derivation(_))));
        assert!(matches!(deepest.neuter().get_xchild(ChildOptions::Normal(0)), Err(Error::Derivation(_))));

        let below = Xprv::construct(master.get_prv(), master.chaincode(), u8::MAX - 1, [0u8; 4], 0);
        assert_eq!(below.get_xchild(ChildOptions::Normal(0))?.depth(), u8::MAX);
        Ok(())
    }

    #[test]
    fn out_of_range_index() {
        assert!(ChildOptions::Normal(HARDENED_OFFSET).index().is_err());
        assert!(ChildOptions::Hardened(HARDENED_OFFSET).index().is_err());
        assert_eq!(ChildOptions::Hardened(1).index().unwrap(), HARDENED_OFFSET + 1);
    }
}
