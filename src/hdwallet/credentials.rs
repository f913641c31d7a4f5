/*
    Copayer credentials.

    A copayer owns one root key. Everything else it needs to talk to the
    wallet service is derived from that root:
        - the request key at m/1'/0, used to authenticate API calls
        - the account key at m/44'/coin_type'/0', whose neutered form
          is the copayer's public identity in the wallet
    Address keys are derived on demand from the account key.
*/

use std::{fmt, str::FromStr};

use bip39::{Language, Mnemonic};
use rand::{rngs::OsRng, RngCore};
use tracing::debug;

use crate::{
    config::{Config, Network},
    error::{Error, Result},
    hdwallet::{ChildOptions, ExtendedKey, Path, Xprv, Xpub},
    key::{PrivKey, PubKey}
};

/// Entropy lengths BIP-39 allows, in bits
const ENTROPY_BITS: [usize; 5] = [128, 160, 192, 224, 256];

#[derive(Clone)]
pub struct Credentials {
    root: Xprv,
    request_key: PrivKey,
    account: Xprv,
    account_pub: Xpub,
    network: Network,
    mnemonic: Option<String>
}

impl Credentials {
    /**
        Creates credentials from fresh OS entropy.
        The mnemonic is kept so it can be shown to the user for backup.
    */
    pub fn generate(config: &Config, bits: usize) -> Result<Self> {
        if !ENTROPY_BITS.contains(&bits) {
            return Err(Error::InvalidEntropy(bits))
        }

        let mut entropy = vec![0u8; bits / 8];
        OsRng.fill_bytes(&mut entropy);
        Self::from_entropy(config, &entropy)
    }

    /**
        Creates credentials from raw entropy, through its BIP-39 mnemonic.
    */
    pub fn from_entropy(config: &Config, entropy: &[u8]) -> Result<Self> {
        let bits = entropy.len() * 8;
        if !ENTROPY_BITS.contains(&bits) {
            return Err(Error::InvalidEntropy(bits))
        }

        let mnemonic = Mnemonic::from_entropy_in(Language::English, entropy)
            .map_err(|_| Error::InvalidEntropy(bits))?;
        let mut credentials = Self::from_seed(config, &mnemonic.to_seed(""))?;
        credentials.mnemonic = Some(mnemonic.to_string());
        Ok(credentials)
    }

    pub fn from_mnemonic(config: &Config, phrase: &str) -> Result<Self> {
        Self::from_mnemonic_with_passphrase(config, phrase, "")
    }

    /**
        Creates credentials from an existing mnemonic phrase and passphrase.
        The checksum of the phrase is verified.
    */
    pub fn from_mnemonic_with_passphrase(config: &Config, phrase: &str, passphrase: &str) -> Result<Self> {
        let mnemonic = Mnemonic::parse_in(Language::English, phrase)
            .map_err(|e| Error::InvalidMnemonic(e.to_string()))?;

        Self::from_seed(config, &mnemonic.to_seed(passphrase))
    }

    /**
        Imports a serialized extended private key and uses it as the root.
        The key's own version bytes are ignored, the configured network wins.
    */
    pub fn from_private_key(config: &Config, key: &str) -> Result<Self> {
        let root = Xprv::from_str(key)?;
        Self::from_root(root, config.network, config.coin_type())
    }

    fn from_seed(config: &Config, seed: &[u8]) -> Result<Self> {
        let root = Xprv::from_seed(seed)?;
        Self::from_root(root, config.network, config.coin_type())
    }

    fn from_root(root: Xprv, network: Network, coin_type: u32) -> Result<Self> {
        let (request_key, account, account_pub) = derive_fixed_subkeys(&root, coin_type)?;
        debug!(%network, coin_type, "derived copayer credentials");

        Ok(Self {
            root,
            request_key,
            account,
            account_pub,
            network,
            mnemonic: None
        })
    }

    /**
        Derives the key pair at `path` below the account key.
        Paths look like "m/0/4" and may contain hardened segments.
    */
    pub fn derive_from_account(&self, path: &str) -> Result<(PrivKey, PubKey)> {
        let path: Path = path.parse()?;
        let child = self.account.derive_from_path(&path)?;
        Ok((child.get_prv(), child.get_pub()))
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_deref()
    }

    pub fn root(&self) -> &Xprv {
        &self.root
    }

    pub fn root_prv_key(&self) -> PrivKey {
        self.root.get_prv()
    }

    pub fn root_pub_key(&self) -> PubKey {
        self.root.get_pub()
    }

    pub fn request_prv_key(&self) -> PrivKey {
        self.request_key
    }

    pub fn request_pub_key(&self) -> PubKey {
        self.request_key.public_key()
    }

    pub fn account(&self) -> &Xprv {
        &self.account
    }

    pub fn account_pub(&self) -> &Xpub {
        &self.account_pub
    }

    /// The account xpub as the wallet service knows it
    pub fn account_xpub_string(&self) -> String {
        self.account_pub.to_string_for(self.network)
    }
}

/**
    Derives the request key (m/1'/0), the account key (m/44'/coin_type'/0')
    and the neutered account key from a root key.
*/
pub fn derive_fixed_subkeys(root: &Xprv, coin_type: u32) -> Result<(PrivKey, Xprv, Xpub)> {
    let request = root.derive_from_path(&Path::new(vec![
        ChildOptions::Hardened(1),
        ChildOptions::Normal(0)
    ]))?;

    let account = root.derive_from_path(&Path::new(vec![
        ChildOptions::Hardened(44),
        ChildOptions::Hardened(coin_type),
        ChildOptions::Hardened(0)
    ]))?;

    Ok((request.get_prv(), account, account.neuter()))
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("network", &self.network)
            .field("account_pub", &self.account_xpub_string())
            .finish()
    }
}
