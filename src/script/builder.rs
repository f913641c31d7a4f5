/* 

    Script builder module.

*/

use crate::{
    error::{Error, Result},
    script::Script
};

#[derive(Debug, Clone, Default)]
pub struct Builder {
    code: Vec<u8>
}

impl Builder {
    /// Return a new instance of self
    pub fn new() -> Self  {
        Self { code: Vec::new() }
    }

    /// Push an opcode into self
    pub fn push_opcode(mut self, opcode: Opcode) -> Self {
        self.code.push(opcode.into_u8());
        self
    }

    /// Push a small integer (0 to 16) as its dedicated opcode
    pub fn push_int(self, n: usize) -> Result<Self> {
        Ok(self.push_opcode(opcodes::small_int(n)?))
    }

    /**
        Push data onto the stack using the shortest push operation.
    */
    pub fn push_data(mut self, data: &[u8]) -> Result<Self> {
        let len = data.len();
        match len {
            0..=0x4b => self.code.push(len as u8),
            0x4c..=0xff => {
                self.code.push(opcodes::OP_PUSHDATA1.into_u8());
                self.code.push(len as u8);
            },
            0x100..=0xffff => {
                self.code.push(opcodes::OP_PUSHDATA2.into_u8());
                self.code.extend_from_slice(&(len as u16).to_le_bytes());
            },
            _ => return Err(Error::ScriptBuild(format!("push of {} bytes is too large", len)))
        }
        self.code.extend_from_slice(data);
        Ok(self)
    }

    /// Convert self into a script
    pub fn into_script(self) -> Script {
        Script::new(self.code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    code: u8
}

impl Opcode {
    pub fn into_u8(self) -> u8 {
        self.code
    }
}

impl From<u8> for Opcode {
    fn from(code: u8) -> Self {
        Self { code }
    }
}

// Opcode constants
pub mod opcodes {
    use super::Opcode;
    use crate::error::{Error, Result};

    /// Push an empty array onto the stack
    pub const OP_0: Opcode = Opcode {code: 0x00};
    /// Read the next byte as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA1: Opcode = Opcode {code: 0x4c};
    /// Read the next 2 bytes as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA2: Opcode = Opcode {code: 0x4d};
    /// Push the number 1 onto the stack, OP_2 to OP_16 follow it
    pub const OP_1: Opcode = Opcode {code: 0x51};
    /// Duplicates the top stack item
    pub const OP_DUP: Opcode = Opcode {code: 0x76};
    /// Pushes 1 if the inputs are exactly equal, 0 otherwise
    pub const OP_EQUAL: Opcode = Opcode {code: 0x87};
    /// Returns success if the inputs are exactly equal, failure otherwise
    pub const OP_EQUALVERIFY: Opcode = Opcode {code: 0x88};
    /// RIPEMD160(SHA256) the top stack item
    pub const OP_HASH160: Opcode = Opcode {code: 0xa9};
    /// <https://en.bitcoin.it/wiki/OP_CHECKSIG> pushing 1/0 for success/failure
    pub const OP_CHECKSIG: Opcode = Opcode {code: 0xac};
    /// <https://en.bitcoin.it/wiki/OP_CHECKMULTISIG> pushing 1/0 for success/failure
    pub const OP_CHECKMULTISIG: Opcode = Opcode {code: 0xae};

    /// OP_0 to OP_16
    pub fn small_int(n: usize) -> Result<Opcode> {
        match n {
            0 => Ok(OP_0),
            1..=16 => Ok(Opcode::from(OP_1.into_u8() + n as u8 - 1)),
            _ => Err(Error::ScriptBuild(format!("{} does not fit a small integer opcode", n)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_ints() {
        assert_eq!(opcodes::small_int(0).unwrap(), opcodes::OP_0);
        assert_eq!(opcodes::small_int(2).unwrap().into_u8(), 0x52);
        assert_eq!(opcodes::small_int(16).unwrap().into_u8(), 0x60);
        assert!(opcodes::small_int(17).is_err());
    }

    #[test]
    fn push_sizes() {
        let s = Builder::new().push_data(&[0xab; 3]).unwrap().into_script();
        assert_eq!(s.as_bytes(), &[0x03, 0xab, 0xab, 0xab]);

        let s = Builder::new().push_data(&[0x01; 0x4c]).unwrap().into_script();
        assert_eq!(&s.as_bytes()[..2], &[0x4c, 0x4c]);
        assert_eq!(s.len(), 0x4c + 2);

        let s = Builder::new().push_data(&[0x01; 0x100]).unwrap().into_script();
        assert_eq!(&s.as_bytes()[..3], &[0x4d, 0x00, 0x01]);
    }
}
