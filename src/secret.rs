/*
    Wallet invitation secrets.

    A secret is handed to the copayers joining a shared wallet. It carries
    the wallet id and the private key the joiners sign their copayer
    signature with, laid out as

        pad(base58(wallet id bytes), '0', 22) | WIF(private key) | network char | coin code

    The WIF always uses the main network prefix, whatever the wallet network.
*/

use uuid::Uuid;

use crate::{
    config::{Coin, Network},
    encoding::{Base58, VersionPrefix},
    error::{Error, Result},
    key::PrivKey,
    util::split_at_offsets
};

const WALLET_ID_LEN: usize = 22;
const PADDING: char = '0';

/// Offsets of the wallet id, WIF, network and coin segments
const SEGMENTS: [usize; 3] = [22, 74, 75];

/// A decoded invitation secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationSecret {
    pub private_key: PrivKey,
    pub wallet_id: Uuid,
    pub coin: Coin,
    pub network: Network
}

/**
    Builds the invitation secret for a wallet.
    `wallet_id` may be given with or without hyphens.
*/
pub fn build_secret(private_key: &PrivKey, wallet_id: &str, coin: Coin, network: Network) -> Result<String> {
    let id = Uuid::parse_str(wallet_id).map_err(|e| Error::InvalidUuid(e.to_string()))?;

    let mut encoded_id = Base58::new(None, id.as_bytes()).encode();
    while encoded_id.len() < WALLET_ID_LEN {
        encoded_id.push(PADDING);
    }
    encoded_id.truncate(WALLET_ID_LEN);

    let wif = private_key.export_as_wif(true, VersionPrefix::PrivateKeyWIF);

    Ok(format!("{}{}{}{}", encoded_id, wif, network.short_code(), coin.code()))
}

/**
    Parses an invitation secret back into its parts.
    Any network character other than 'T' means livenet, a missing coin code
    means the base coin.
*/
pub fn parse_secret(secret: &str) -> Result<InvitationSecret> {
    if secret.len() < SEGMENTS[2] {
        return Err(Error::InvalidKeyEncoding(format!(
            "secret is {} characters long, expected at least {}", secret.len(), SEGMENTS[2]
        )))
    }

    let parts = split_at_offsets(secret, &SEGMENTS)?;

    //Base58 has no '0' so every zero is padding
    let id_bytes = Base58::decode(&parts[0].replace(PADDING, ""))?;
    let wallet_id = Uuid::from_slice(&id_bytes).map_err(|e| Error::InvalidUuid(e.to_string()))?;

    let private_key = PrivKey::from_wif(parts[1])?;
    let network = Network::from_short_code(parts[2]);
    let coin = match parts[3] {
        "" => Coin::BASE,
        code => code.parse().map_err(|_| Error::InvalidKeyEncoding(format!("unknown coin code {:?}", code)))?
    };

    Ok(InvitationSecret {
        private_key,
        wallet_id,
        coin,
        network
    })
}
