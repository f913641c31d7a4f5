use std::convert::TryInto;

use crate::error::{Error, Result};

/*
    Decodes hex strings into a byte vector
*/
pub fn decode_02x(hex: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(hex)?)
}

/*
    Encodes byte slices into hex string
*/
pub fn encode_02x(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/**
    Converts a slice into an array, failing if the length is wrong
*/
pub fn try_into<T: Copy, const N: usize>(v: &[T]) -> Option<[T; N]> {
    v.try_into().ok()
}

//Converts a byte array to int
pub fn as_u32_be(array: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*array)
}

/// Splits a string at the given byte offsets. Offsets past the end of the
/// string yield empty parts, the last part runs to the end of the input.
pub fn split_at_offsets<'a>(input: &'a str, offsets: &[usize]) -> Result<Vec<&'a str>> {
    let mut parts = Vec::with_capacity(offsets.len() + 1);
    let mut start = 0;
    for &end in offsets.iter().chain(std::iter::once(&input.len())) {
        let end = end.max(start).min(input.len());
        let part = input
            .get(start..end)
            .ok_or_else(|| Error::InvalidKeyEncoding(format!("cannot split at offset {}", end)))?;
        parts.push(part);
        start = end;
    }

    Ok(parts)
}
