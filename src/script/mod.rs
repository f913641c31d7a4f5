/*
    Minimal Bitcoin Script support.

    Only the shapes a wallet service proposal needs are built here:
    bare multisig redeem scripts and the standard output scripts
    addresses decode to.
*/

pub mod builder;
pub mod redeem_script;

use std::fmt;

use crate::{
    error::Result,
    hash,
    util::{decode_02x, encode_02x}
};

pub use self::builder::{opcodes, Builder as ScriptBuilder, Opcode};

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Script {
    code: Vec<u8>
}

impl Script {
    /**
        Create a new instance of self
    */
    pub fn new(code: Vec<u8>) -> Self {
        Self {
            code
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Self::new(decode_02x(hex)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn hex(&self) -> String {
        encode_02x(&self.code)
    }

    /**
        Hash the script with Hash160
    */
    pub fn hash(&self) -> [u8; 20] {
        hash::hash160(&self.code)
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Script({})", self.hex())
    }
}
