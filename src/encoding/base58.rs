use crate::{
    encoding::version_prefix::VersionPrefix,
    error::{Error, Result},
    hash
};

#[derive(Debug)]
pub struct Base58 {
    prefix: Option<VersionPrefix>,
    payload: Vec<u8>
}

impl Base58 {
    pub fn new(prefix: Option<VersionPrefix>, payload: &[u8]) -> Base58 {
        Base58 {
            prefix,
            payload: payload.to_vec()
        }
    }

    /// Concatenate prefix and payload
    fn bytes(self) -> Vec<u8> {
        match self.prefix {
            Some(x) => {
                let mut d = x.to_bytes();
                d.extend_from_slice(&self.payload);
                d
            },
            None => self.payload
        }
    }

    /// Check encode data by appending the checksum and then encoding it.
    pub fn check_encode(self) -> String {
        //prefix | payload | checksum
        let mut bytes = self.bytes();
        let checksum = hash::sha256d(&bytes);
        bytes.extend_from_slice(&checksum[0..4]);

        bs58::encode(bytes).into_string()
    }

    /// Encode data in base58 format without a checksum.
    pub fn encode(self) -> String {
        bs58::encode(self.bytes()).into_string()
    }

    /// Decode a base58 string into bytes.
    pub fn decode(encoded: &str) -> Result<Vec<u8>> {
        Ok(bs58::decode(encoded).into_vec()?)
    }

    /// Decode a base58check string, verify the checksum and return the data
    /// without the checksum (the version prefix is left in place).
    pub fn check_decode(encoded: &str) -> Result<Vec<u8>> {
        let mut bytes = Self::decode(encoded)?;
        if bytes.len() < 4 { return Err(Error::BadChecksum) }

        let split = bytes.len() - 4;
        let derived = hash::sha256d(&bytes[..split]);
        if bytes[split..] != derived[0..4] { return Err(Error::BadChecksum) }

        bytes.truncate(split);
        Ok(bytes)
    }
}
