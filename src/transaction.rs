/*
    Legacy (non witness) Bitcoin transactions.

    Just enough of the wire format to serialize the transactions a
    proposal describes and to compute their SIGHASH_ALL digests.
*/

use std::fmt;

use crate::{
    error::{Error, Result},
    hash,
    script::Script,
    util::{decode_02x, encode_02x}
};

pub const TX_VERSION: i32 = 1;
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;
pub const SIGHASH_ALL: u32 = 0x01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutPoint {
    /// Transaction hash in internal (little endian) byte order
    pub txid: [u8; 32],
    pub vout: u32
}

impl OutPoint {
    /**
        Builds an outpoint from a txid as it is displayed, which is the
        byte reversed form of the hash that goes on the wire.
    */
    pub fn from_display_hex(txid: &str, vout: u32) -> Result<Self> {
        let bytes = decode_02x(txid)
            .map_err(|e| Error::Serialization(format!("bad txid {:?}: {}", txid, e)))?;
        if bytes.len() != 32 {
            return Err(Error::Serialization(format!("txid {:?} is not 32 bytes", txid)))
        }

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&bytes);
        hash.reverse();
        Ok(Self { txid: hash, vout })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxIn {
    pub previous_output: OutPoint,
    pub script_sig: Script,
    pub sequence: u32
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOut {
    pub value: i64,
    pub script_pubkey: Script
}

#[derive(Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32
}

fn write_varint(buf: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => buf.push(n as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        },
        0x10000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        },
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
}

fn write_script(buf: &mut Vec<u8>, script: &Script) {
    write_varint(buf, script.len() as u64);
    buf.extend_from_slice(script.as_bytes());
}

impl TxIn {
    pub fn new(previous_output: OutPoint, script_sig: Script) -> Self {
        Self {
            previous_output,
            script_sig,
            sequence: SEQUENCE_FINAL
        }
    }

    fn write(&self, buf: &mut Vec<u8>, script_sig: &Script) {
        buf.extend_from_slice(&self.previous_output.txid);
        buf.extend_from_slice(&self.previous_output.vout.to_le_bytes());
        write_script(buf, script_sig);
        buf.extend_from_slice(&self.sequence.to_le_bytes());
    }
}

impl TxOut {
    fn write(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.value.to_le_bytes());
        write_script(buf, &self.script_pubkey);
    }
}

impl Transaction {
    pub fn new() -> Self {
        Self {
            version: TX_VERSION,
            inputs: vec![],
            outputs: vec![],
            lock_time: 0
        }
    }

    /// Writes the transaction with `script_for` choosing each input's script
    fn write_with<F>(&self, script_for: F) -> Vec<u8>
    where F: Fn(usize, &TxIn) -> Script
    {
        let mut buf = Vec::with_capacity(10 + self.inputs.len() * 150 + self.outputs.len() * 34);
        buf.extend_from_slice(&self.version.to_le_bytes());

        write_varint(&mut buf, self.inputs.len() as u64);
        for (i, input) in self.inputs.iter().enumerate() {
            input.write(&mut buf, &script_for(i, input));
        }

        write_varint(&mut buf, self.outputs.len() as u64);
        for output in &self.outputs {
            output.write(&mut buf);
        }

        buf.extend_from_slice(&self.lock_time.to_le_bytes());
        buf
    }

    /// Canonical wire bytes
    pub fn serialize(&self) -> Vec<u8> {
        self.write_with(|_, input| input.script_sig.clone())
    }

    pub fn hex(&self) -> String {
        encode_02x(&self.serialize())
    }

    /**
        Legacy SIGHASH_ALL digest for the input at `index`.
        Every other input gets an empty script, the signed input gets `script_code`.
    */
    pub fn signature_hash_all(&self, index: usize, script_code: &Script) -> Result<[u8; 32]> {
        if index >= self.inputs.len() {
            return Err(Error::InvalidProposal(format!(
                "input index {} out of range, transaction has {} inputs", index, self.inputs.len()
            )))
        }

        let mut preimage = self.write_with(|i, _| if i == index {
            script_code.clone()
        } else {
            Script::default()
        });
        preimage.extend_from_slice(&SIGHASH_ALL.to_le_bytes());

        Ok(hash::sha256d(&preimage))
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Transaction({})", self.hex())
    }
}
