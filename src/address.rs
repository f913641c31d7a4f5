/*
    Addresses and the output scripts they stand for.

    Base58check P2PKH and P2SH addresses use the version bytes of the
    network, segwit v0 addresses use its bech32 human readable part.
*/

use bech32::{u5, FromBase32, ToBase32, Variant};

use crate::{
    config::Network,
    encoding::{Base58, VersionPrefix},
    error::{Error, Result},
    hash,
    key::PubKey,
    script::Script
};

pub struct Address;

impl Address {
    /**
        Creates a P2PKH address from a compressed public key.
        * Base58Check( Ripemd160( Sha256( Public Key ) ) )
    */
    pub fn p2pkh(pk: &PubKey, network: Network) -> String {
        let hash = hash::hash160(pk.as_bytes());
        Base58::new(Some(network.params().p2pkh), &hash).check_encode()
    }

    /**
        Creates a P2SH address from a redeem script
    */
    pub fn p2sh(script: &Script, network: Network) -> String {
        Base58::new(Some(network.params().p2sh), &script.hash()).check_encode()
    }

    /**
        Creates a P2WPKH address from a public key
    */
    pub fn p2wpkh(pk: &PubKey, network: Network) -> Result<String> {
        segwit_encode(&hash::hash160(pk.as_bytes()), network)
    }

    /**
        Creates a P2WSH address from a witness script
    */
    pub fn p2wsh(script: &Script, network: Network) -> Result<String> {
        segwit_encode(&hash::sha256(script.as_bytes()), network)
    }

    /**
        Decodes an address into the script pub key it pays to.
        Addresses that belong to another network are rejected.
    */
    pub fn to_script_pubkey(address: &str, network: Network) -> Result<Script> {
        let params = network.params();
        let lowered = address.to_lowercase();
        if lowered.starts_with(&format!("{}1", params.bech32_hrp)) {
            return segwit_decode(address, network)
        }

        let fail = |reason: String| Error::AddressDecode {
            address: address.to_string(),
            reason
        };

        let bytes = Base58::check_decode(address).map_err(|e| fail(e.to_string()))?;
        if bytes.len() != 21 {
            return Err(fail(format!("expected 21 bytes, found {}", bytes.len())))
        }

        let mut hash = [0u8; 20];
        hash.copy_from_slice(&bytes[1..]);

        match VersionPrefix::from_int(bytes[0] as u32) {
            Some(prefix) if prefix == params.p2pkh => Ok(Script::p2pkh(&hash)),
            Some(prefix) if prefix == params.p2sh => Ok(Script::p2sh(&hash)),
            _ => Err(fail(format!("version byte {:#04x} is not valid on {}", bytes[0], network)))
        }
    }
}

fn segwit_encode(program: &[u8], network: Network) -> Result<String> {
    let mut data = vec![u5::try_from_u8(0).map_err(|e| Error::ScriptBuild(e.to_string()))?];
    data.extend(program.to_base32());
    bech32::encode(network.params().bech32_hrp, data, Variant::Bech32)
        .map_err(|e| Error::ScriptBuild(e.to_string()))
}

fn segwit_decode(address: &str, network: Network) -> Result<Script> {
    let fail = |reason: String| Error::AddressDecode {
        address: address.to_string(),
        reason
    };

    let (hrp, data, variant) = bech32::decode(address).map_err(|e| fail(e.to_string()))?;
    if hrp != network.params().bech32_hrp {
        return Err(fail(format!("human readable part {:?} is not valid on {}", hrp, network)))
    }

    let (version, words) = data.split_first().ok_or_else(|| fail("empty data part".to_string()))?;
    if version.to_u8() != 0 || variant != Variant::Bech32 {
        return Err(fail(format!("unsupported witness version {}", version.to_u8())))
    }

    let program = Vec::<u8>::from_base32(words).map_err(|e| fail(e.to_string()))?;
    Script::witness_v0(&program).map_err(|e| fail(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base58_addresses() {
        let script = Address::to_script_pubkey("mj4exG7YrSTxvpvXyFapoVRjNn9hMvYG1C", Network::Testnet).unwrap();
        assert_eq!(script.hex(), "76a91426e7365e8b0a0bae05e7cfc320f8dc338dfdfa6b88ac");

        let script = Address::to_script_pubkey("mnv9rH2VfAUX9YZzFkoRysGFtggvz1wRnY", Network::Testnet).unwrap();
        assert_eq!(script.hex(), "76a914512c17fd86d596deb44c230ae4a98efae01f013c88ac");
    }

    #[test]
    fn round_trips() {
        let pk = PubKey::from_hex("0357449b15b27543d586856455ca8272e75b6e14fa9bf5e62c1b49cc25b416afe3").unwrap();
        for network in [Network::Livenet, Network::Testnet] {
            let p2pkh = Address::p2pkh(&pk, network);
            assert_eq!(Address::to_script_pubkey(&p2pkh, network).unwrap(), Script::p2pkh_for(&pk));

            let redeem = Script::multisig(1, &[pk.hex()]).unwrap();
            let p2sh = Address::p2sh(&redeem, network);
            assert_eq!(Address::to_script_pubkey(&p2sh, network).unwrap(), Script::p2sh_for(&redeem));

            let p2wpkh = Address::p2wpkh(&pk, network).unwrap();
            let script = Address::to_script_pubkey(&p2wpkh, network).unwrap();
            assert_eq!(&script.as_bytes()[..2], &[0x00, 0x14]);
        }
        assert!(Address::p2pkh(&pk, Network::Livenet).starts_with('1'));
        assert!(Address::p2sh(&Script::multisig(1, &[pk.hex()]).unwrap(), Network::Livenet).starts_with('3'));
    }

    #[test]
    fn segwit_vectors() {
        let script = Address::to_script_pubkey("BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4", Network::Livenet).unwrap();
        assert_eq!(script.hex(), "0014751e76e8199196d454941c45d1b3a323f1433bd6");

        let script = Address::to_script_pubkey(
            "tb1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3q0sl5k7",
            Network::Testnet
        ).unwrap();
        assert_eq!(script.hex(), "00201863143c14c5166804bd19203356da136c985678cd4d27a1b8c6329604903262");
    }

    #[test]
    fn wrong_network_or_garbage() {
        for (address, network) in [
            ("mj4exG7YrSTxvpvXyFapoVRjNn9hMvYG1C", Network::Livenet),
            ("BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4", Network::Testnet),
            ("mj4exG7YrSTxvpvXyFapoVRjNn9hMvYG1D", Network::Testnet),
            ("invalid address", Network::Testnet),
            ("", Network::Testnet)
        ] {
            assert!(
                matches!(Address::to_script_pubkey(address, network), Err(Error::AddressDecode { .. })),
                "{} should not decode on {}", address, network
            );
        }
    }
}
