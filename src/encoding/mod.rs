/*
    Module that bundles together the encoding schemes used for keys and addresses
*/

pub mod version_prefix;
pub mod base58;

pub use version_prefix::VersionPrefix;
pub use base58::Base58;
