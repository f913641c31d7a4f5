use crate::{
    error::{Error, Result},
    hash,
    key::PubKey,
    script::{opcodes, Script, ScriptBuilder}
};

/// Largest key count a bare multisig script can carry
pub const MAX_MULTISIG_KEYS: usize = 16;

impl Script {
    /**
        Creates the redeem script for a m-of-n multisig wallet.
        The keys are sorted by their hex encoding first, so any
        ordering of the same keys gives the same script.

        OP_M <pk_1> ... <pk_N> OP_N OP_CHECKMULTISIG
    */
    pub fn multisig<S: AsRef<str>>(m: usize, keys: &[S]) -> Result<Self> {
        let n = keys.len();
        if n == 0 || n > MAX_MULTISIG_KEYS {
            return Err(Error::ScriptBuild(format!("cannot build multisig script with {} keys", n)))
        }
        if m == 0 || m > n {
            return Err(Error::ScriptBuild(format!("{} of {} is not a valid multisig threshold", m, n)))
        }

        let mut sorted: Vec<&str> = keys.iter().map(|k| k.as_ref()).collect();
        sorted.sort_unstable();

        let mut builder = ScriptBuilder::new().push_int(m)?;
        for key in sorted {
            let key = PubKey::from_hex(key)
                .map_err(|e| Error::ScriptBuild(format!("bad public key {:?}: {}", key, e)))?;
            builder = builder.push_data(&key.as_bytes())?;
        }

        Ok(builder
            .push_int(n)?
            .push_opcode(opcodes::OP_CHECKMULTISIG)
            .into_script())
    }

    /// P2PKH script pub key
    /// OP_DUP OP_HASH160 <Pubkey Hash> OP_EQUALVERIFY OP_CHECKSIG
    pub fn p2pkh(pubkey_hash: &[u8; 20]) -> Self {
        let mut code = vec![opcodes::OP_DUP.into_u8(), opcodes::OP_HASH160.into_u8(), 0x14];
        code.extend_from_slice(pubkey_hash);
        code.push(opcodes::OP_EQUALVERIFY.into_u8());
        code.push(opcodes::OP_CHECKSIG.into_u8());
        Self::new(code)
    }

    /// P2SH script pub key
    /// OP_HASH160 <Hash160(redeemScript)> OP_EQUAL
    pub fn p2sh(script_hash: &[u8; 20]) -> Self {
        let mut code = vec![opcodes::OP_HASH160.into_u8(), 0x14];
        code.extend_from_slice(script_hash);
        code.push(opcodes::OP_EQUAL.into_u8());
        Self::new(code)
    }

    /// Witness v0 script pub key
    /// 0x00 <20 byte pubkey hash | 32 byte script hash>
    pub fn witness_v0(program: &[u8]) -> Result<Self> {
        match program.len() {
            20 | 32 => Ok(ScriptBuilder::new()
                .push_opcode(opcodes::OP_0)
                .push_data(program)?
                .into_script()),
            len => Err(Error::ScriptBuild(format!("witness v0 program of {} bytes", len)))
        }
    }

    /// P2PKH script paying to a public key
    pub fn p2pkh_for(pubkey: &PubKey) -> Self {
        Self::p2pkh(&hash::hash160(pubkey.as_bytes()))
    }

    /// P2SH script paying to a redeem script
    pub fn p2sh_for(redeem_script: &Script) -> Self {
        Self::p2sh(&redeem_script.hash())
    }
}
