//! Slot arithmetic for the storage a layout describes.

use alloy_primitives::{Address, Keccak256, B256, U256};

/// Compute the storage slot of `mapping[key]` for a mapping declared at `base_slot`.
///
/// `key` must already be the 32-byte ABI word of the key:
///   slot = keccak256(key ++ abi.encode(base_slot))
pub fn mapping_slot(key: B256, base_slot: U256) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(key.as_slice());
    hasher.update(B256::from(base_slot.to_be_bytes()).as_slice());
    hasher.finalize()
}

/// Compute the storage slot for a `mapping(address => _)` entry.
pub fn mapping_address_slot(key: Address, base_slot: U256) -> B256 {
    mapping_slot(encode_address(key), base_slot)
}

/// Encode an address into a B256 storage value (left-padded).
pub fn encode_address(addr: Address) -> B256 {
    let mut bytes = [0u8; 32];
    bytes[12..32].copy_from_slice(addr.as_slice());
    B256::from(bytes)
}
