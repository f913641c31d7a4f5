/*
    Hash functions used for keys, addresses, scripts and message signing.
*/

use std::convert::TryInto;

use hmac::{Hmac, Mac, NewMac};
use ripemd160::Ripemd160;
use sha2::{Digest, Sha256, Sha512};

/*
    Takes in an byte array and returns the ripemd160 hash of it
*/
pub fn ripemd160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    let mut r = Ripemd160::new();
    r.update(input);
    r.finalize().into()
}

/*
    Takes in a byte array and returns the sha256 hash of it
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut r = Sha256::new();
    r.update(input);
    r.finalize().into()
}

/// SHA256(SHA256(x))
pub fn sha256d<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    sha256(sha256(input))
}

/// RIPEMD160(SHA256(x)), same as OP_HASH160
pub fn hash160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    ripemd160(sha256(input))
}

pub fn hmac_sha512(data: &[u8], key: &[u8]) -> [u8; 64] {
    //HMAC accepts keys of any length
    let mut mac = Hmac::<Sha512>::new_from_slice(key).expect("hmac takes keys of any size");
    mac.update(data);
    let out = mac.finalize().into_bytes();
    out.as_slice().try_into().expect("sha512 output is 64 bytes")
}

/// Double SHA256 of a message with the byte order reversed.
/// This is the "message hash" the wallet service exchanges with clients.
pub fn message_hash<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut hash = sha256d(input);
    hash.reverse();
    hash
}
