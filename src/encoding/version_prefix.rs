#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPrefix {
    //One byte version prefixes
        BTCAddress = 0x00,
        BTCTestNetAddress = 0x6F,
        P2ScriptAddress = 0x05,
        TestnetP2SHAddress = 0xC4,
        PrivateKeyWIF = 0x80,
        TestNetPrivateKeyWIF = 0xef,

    //Four byte version prefixes (BIP-32)
        Xprv = 0x0488ADE4,
        Xpub = 0x0488B21E,
        Tprv = 0x04358394,
        Tpub = 0x043587CF,
}

impl VersionPrefix {
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            //Special cases where version bytes is not 4 bytes long
            VersionPrefix::BTCAddress |
            VersionPrefix::BTCTestNetAddress |
            VersionPrefix::P2ScriptAddress |
            VersionPrefix::TestnetP2SHAddress |
            VersionPrefix::PrivateKeyWIF |
            VersionPrefix::TestNetPrivateKeyWIF => vec![*self as u8],

            //Cases where version bytes is 4 bytes long
            _ => (*self as u32).to_be_bytes().to_vec()
        }
    }

    /// Length of the prefix in bytes
    pub fn len(&self) -> usize {
        self.to_bytes().len()
    }

    pub fn from_int(int: u32) -> Option<Self> {
        Some(match int {
            0x00 => Self::BTCAddress,
            0x6F => Self::BTCTestNetAddress,
            0x05 => Self::P2ScriptAddress,
            0xC4 => Self::TestnetP2SHAddress,
            0x80 => Self::PrivateKeyWIF,
            0xEF => Self::TestNetPrivateKeyWIF,
            0x0488ADE4 => Self::Xprv,
            0x0488B21E => Self::Xpub,
            0x04358394 => Self::Tprv,
            0x043587CF => Self::Tpub,

            _ => return None
        })
    }

    pub fn is_extended_private(&self) -> bool {
        matches!(self, VersionPrefix::Xprv | VersionPrefix::Tprv)
    }

    pub fn is_extended_public(&self) -> bool {
        matches!(self, VersionPrefix::Xpub | VersionPrefix::Tpub)
    }
}
