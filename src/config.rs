/*
    Coin and network configuration.

    Everything that depends on which coin or network the wallet lives on
    takes one of these values explicitly instead of looking it up in a
    global table.
*/

use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    encoding::VersionPrefix,
    error::{Error, Result}
};

const PUBLIC_API: &str = "https://bws.bitpay.com/bws/api";
const LOCAL_API: &str = "http://localhost:3232/bws/api";

/// BIP-44 coin types
pub const COIN_TYPE_BTC: u32 = 0;
pub const COIN_TYPE_TEST: u32 = 1;
pub const COIN_TYPE_BCH: u32 = 145;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    Btc,
    Bch
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Livenet,
    Testnet
}

/// Version bytes used when encoding keys and addresses for a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParams {
    pub p2pkh: VersionPrefix,
    pub p2sh: VersionPrefix,
    pub wif: VersionPrefix,
    pub xprv: VersionPrefix,
    pub xpub: VersionPrefix,
    pub bech32_hrp: &'static str
}

impl Coin {
    /// The coin everything defaults to.
    pub const BASE: Coin = Coin::Btc;

    pub fn code(&self) -> &'static str {
        match self {
            Coin::Btc => "btc",
            Coin::Bch => "bch"
        }
    }

    pub fn is_base(&self) -> bool {
        *self == Coin::BASE
    }
}

impl Network {
    pub fn name(&self) -> &'static str {
        match self {
            Network::Livenet => "livenet",
            Network::Testnet => "testnet"
        }
    }

    /// One character network id used inside invitation secrets.
    pub fn short_code(&self) -> char {
        match self {
            Network::Livenet => 'L',
            Network::Testnet => 'T'
        }
    }

    pub fn from_short_code(code: &str) -> Self {
        if code == "T" {
            Network::Testnet
        } else {
            Network::Livenet
        }
    }

    pub fn params(&self) -> NetworkParams {
        match self {
            Network::Livenet => NetworkParams {
                p2pkh: VersionPrefix::BTCAddress,
                p2sh: VersionPrefix::P2ScriptAddress,
                wif: VersionPrefix::PrivateKeyWIF,
                xprv: VersionPrefix::Xprv,
                xpub: VersionPrefix::Xpub,
                bech32_hrp: "bc"
            },
            Network::Testnet => NetworkParams {
                p2pkh: VersionPrefix::BTCTestNetAddress,
                p2sh: VersionPrefix::TestnetP2SHAddress,
                wif: VersionPrefix::TestNetPrivateKeyWIF,
                xprv: VersionPrefix::Tprv,
                xpub: VersionPrefix::Tpub,
                bech32_hrp: "tb"
            }
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Coin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "btc" => Ok(Coin::Btc),
            "bch" => Ok(Coin::Bch),
            _ => Err(Error::InvalidConfig(format!("invalid coin name {:?}", s)))
        }
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "livenet" => Ok(Network::Livenet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(Error::InvalidConfig(format!("invalid network name {:?}", s)))
        }
    }
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Client configuration. The timeouts are only ever handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub coin: Coin,
    pub network: Network,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_timeout_ms")]
    pub deadline_ms: u64
}

impl Config {
    fn new(base_url: &str, coin: Coin, network: Network) -> Self {
        Self {
            base_url: base_url.to_string(),
            coin,
            network,
            timeout_ms: default_timeout_ms(),
            deadline_ms: default_timeout_ms()
        }
    }

    /// Public API, BTC, livenet
    pub fn public() -> Self {
        Self::new(PUBLIC_API, Coin::Btc, Network::Livenet)
    }

    /// Localhost API, BTC, livenet
    pub fn local() -> Self {
        Self::new(LOCAL_API, Coin::Btc, Network::Livenet)
    }

    pub fn public_testnet() -> Self {
        Self::new(PUBLIC_API, Coin::Btc, Network::Testnet)
    }

    pub fn local_testnet() -> Self {
        Self::new(LOCAL_API, Coin::Btc, Network::Testnet)
    }

    pub fn cash_public() -> Self {
        Self::new(PUBLIC_API, Coin::Bch, Network::Livenet)
    }

    pub fn cash_local() -> Self {
        Self::new(LOCAL_API, Coin::Bch, Network::Livenet)
    }

    pub fn cash_public_testnet() -> Self {
        Self::new(PUBLIC_API, Coin::Bch, Network::Testnet)
    }

    /// Validates the base url and the coin and network names.
    pub fn custom(base_url: &str, coin: &str, network: &str) -> Result<Self> {
        url::Url::parse(base_url)
            .map_err(|e| Error::InvalidConfig(format!("invalid base url {:?}: {}", base_url, e)))?;

        Ok(Self::new(base_url, coin.parse()?, network.parse()?))
    }

    /// Loads a config from TOML, e.g.
    ///
    /// ```toml
    /// base_url = "http://localhost:3232/bws/api"
    /// coin = "btc"
    /// network = "testnet"
    /// ```
    pub fn from_toml(s: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(s).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        url::Url::parse(&cfg.base_url)
            .map_err(|e| Error::InvalidConfig(format!("invalid base url {:?}: {}", cfg.base_url, e)))?;
        Ok(cfg)
    }

    /// BIP-44 coin type. Testnet always uses the shared test coin type.
    pub fn coin_type(&self) -> u32 {
        if self.network == Network::Testnet {
            return COIN_TYPE_TEST;
        }

        match self.coin {
            Coin::Bch => COIN_TYPE_BCH,
            Coin::Btc => COIN_TYPE_BTC
        }
    }

    pub fn params(&self) -> NetworkParams {
        self.network.params()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
