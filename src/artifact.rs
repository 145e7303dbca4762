//! Embedded contract artifacts and deployed bytecode.

use crate::layout::{LayoutError, StorageLayout};
use alloy_primitives::{keccak256, Bytes, B256};
use std::fmt;
use thiserror::Error;

/// Errors produced while decoding embedded bytecode
#[derive(Debug, Error, PartialEq)]
pub enum BytecodeError {
    /// Bytecode text does not start with `0x`
    #[error("Bytecode is missing the 0x prefix")]
    MissingPrefix,

    /// Bytecode text is not valid hex
    #[error("Invalid bytecode hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A contract's compiled artifacts as embedded string constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedArtifact {
    /// Contract name used as the registry key
    pub name: &'static str,
    /// solc `storageLayout` JSON
    pub storage_layout_json: &'static str,
    /// Deployed (runtime) bytecode, `0x`-prefixed hex
    pub deployed_bin: &'static str,
}

impl EmbeddedArtifact {
    /// Parse and validate the embedded storage layout.
    pub fn storage_layout(&self) -> Result<StorageLayout, LayoutError> {
        StorageLayout::from_json(self.storage_layout_json)
    }

    /// The embedded deployed bytecode.
    pub const fn deployed_bytecode(&self) -> DeployedBytecode {
        DeployedBytecode(self.deployed_bin)
    }
}

/// Deployed bytecode exactly as embedded.
///
/// The text is kept as-is; decoding is a separate, fallible step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeployedBytecode(&'static str);

impl DeployedBytecode {
    /// Wrap a `0x`-prefixed hex constant.
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    /// The embedded text, byte-for-byte.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Decode into raw code bytes.
    pub fn decode(&self) -> Result<Bytes, BytecodeError> {
        let digits = self.0.strip_prefix("0x").ok_or(BytecodeError::MissingPrefix)?;
        Ok(Bytes::from(hex::decode(digits)?))
    }

    /// keccak256 of the decoded code, i.e. the account's code hash once deployed.
    pub fn code_hash(&self) -> Result<B256, BytecodeError> {
        Ok(keccak256(self.decode()?))
    }

    /// Code size in bytes, derived from the hex length.
    ///
    /// Assumes well-formed hex: a trailing odd digit is not counted. Use [`Self::decode`]
    /// to check the text.
    pub const fn len(&self) -> usize {
        self.0.len().saturating_sub(2) / 2
    }

    /// Whether the artifact carries no code.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for DeployedBytecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::optimism_mintable_erc721_factory as factory;

    #[test]
    fn test_decode_simple() {
        let code = DeployedBytecode::new("0x6080604052");
        assert_eq!(&code.decode().unwrap()[..], &[0x60, 0x80, 0x60, 0x40, 0x52]);
        assert_eq!(code.len(), 5);
        assert!(!code.is_empty());
    }

    #[test]
    fn test_decode_missing_prefix() {
        let code = DeployedBytecode::new("6080");
        assert_eq!(code.decode(), Err(BytecodeError::MissingPrefix));
    }

    #[test]
    fn test_decode_invalid_hex() {
        let code = DeployedBytecode::new("0x60zz");
        assert!(matches!(code.decode(), Err(BytecodeError::InvalidHex(_))));
    }

    #[test]
    fn test_len_ignores_trailing_odd_digit() {
        let code = DeployedBytecode::new("0x123");
        assert_eq!(code.len(), 1);
        assert!(matches!(code.decode(), Err(BytecodeError::InvalidHex(_))));
    }

    #[test]
    fn test_empty_code() {
        let code = DeployedBytecode::new("0x");
        assert!(code.is_empty());
        assert!(code.decode().unwrap().is_empty());
        assert_eq!(code.code_hash().unwrap(), alloy_primitives::KECCAK256_EMPTY);
    }

    #[test]
    fn test_factory_bytecode_decodes() {
        let code = factory::ARTIFACT.deployed_bytecode();
        let bytes = code.decode().unwrap();
        assert_eq!(bytes.len(), code.len());
        // Solidity runtime preamble: PUSH1 0x80 PUSH1 0x40 MSTORE
        assert_eq!(&bytes[..5], &[0x60, 0x80, 0x60, 0x40, 0x52]);
        assert_eq!(code.as_str(), factory::DEPLOYED_BIN);
        assert_eq!(code.to_string(), factory::DEPLOYED_BIN);
    }

    #[test]
    fn test_factory_code_hash_matches_keccak() {
        let code = factory::ARTIFACT.deployed_bytecode();
        let expected = keccak256(code.decode().unwrap());
        assert_eq!(code.code_hash().unwrap(), expected);
    }

    #[test]
    fn test_factory_storage_layout_parses() {
        let layout = factory::ARTIFACT.storage_layout().unwrap();
        assert_eq!(layout.storage.len(), 1);
    }
}
