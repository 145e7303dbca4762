//! Contract storage layouts as emitted by solc's `storageLayout` output.
//!
//! A layout lists every persistent state variable with its slot, byte offset inside the slot
//! and a type id; `types` describes those ids. Layouts are validated on load so that every
//! type reference resolves.

mod errors;
mod serde_helpers;
pub mod slots;

pub use errors::LayoutError;

use alloy_primitives::{B256, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storage slots are 32 bytes wide.
const SLOT_SIZE: u32 = 32;

/// The `encoding` value solc uses for mappings.
pub const MAPPING_ENCODING: &str = "mapping";

/// A contract's storage layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageLayout {
    /// State variables in declaration order
    pub storage: Vec<StorageLayoutEntry>,
    /// Type descriptors keyed by type id
    pub types: BTreeMap<String, StorageLayoutType>,
}

/// A single state variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLayoutEntry {
    /// AST node id of the declaration
    pub ast_id: u64,
    /// Fully qualified contract (`path:Name`) declaring the variable
    pub contract: String,
    /// Variable name
    pub label: String,
    /// Byte offset inside the slot
    pub offset: u32,
    /// Slot index
    #[serde(with = "serde_helpers::decimal_u256")]
    pub slot: U256,
    /// Type id, key into [`StorageLayout::types`]
    #[serde(rename = "type")]
    pub type_id: String,
}

/// Type descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLayoutType {
    /// `inplace`, `mapping`, `dynamic_array` or `bytes`
    pub encoding: String,
    /// Solidity type name
    pub label: String,
    /// Bytes occupied in place
    #[serde(with = "serde_helpers::decimal_u64")]
    pub number_of_bytes: u64,
    /// Mapping key type id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Mapping value type id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Array element type id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

impl StorageLayoutType {
    /// Whether this type is a mapping
    pub fn is_mapping(&self) -> bool {
        self.encoding == MAPPING_ENCODING
    }
}

impl StorageLayout {
    /// Parse a solc storage layout and check that it is self-consistent.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Serialize back to solc's JSON shape.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check offsets and that every type reference resolves.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for entry in &self.storage {
            if entry.offset >= SLOT_SIZE {
                return Err(LayoutError::OffsetOutOfRange {
                    label: entry.label.clone(),
                    offset: entry.offset,
                });
            }
            self.require_type(&entry.type_id, &entry.label)?;
        }

        for (type_id, ty) in &self.types {
            for referenced in [&ty.key, &ty.value, &ty.base].into_iter().flatten() {
                self.require_type(referenced, type_id)?;
            }
        }

        Ok(())
    }

    fn require_type(&self, type_id: &str, referrer: &str) -> Result<(), LayoutError> {
        if self.types.contains_key(type_id) {
            Ok(())
        } else {
            Err(LayoutError::UnknownType {
                type_id: type_id.to_string(),
                referrer: referrer.to_string(),
            })
        }
    }

    /// Look up a state variable by label.
    pub fn entry(&self, label: &str) -> Result<&StorageLayoutEntry, LayoutError> {
        self.storage
            .iter()
            .find(|entry| entry.label == label)
            .ok_or_else(|| LayoutError::EntryNotFound(label.to_string()))
    }

    /// Look up a type descriptor by id.
    pub fn type_of(&self, type_id: &str) -> Result<&StorageLayoutType, LayoutError> {
        self.types
            .get(type_id)
            .ok_or_else(|| LayoutError::TypeNotFound(type_id.to_string()))
    }

    /// Type descriptor of the state variable named `label`.
    pub fn entry_type(&self, label: &str) -> Result<&StorageLayoutType, LayoutError> {
        self.type_of(&self.entry(label)?.type_id)
    }

    /// Slot holding `label[key]` where `label` is a mapping and `key` its ABI-encoded word.
    pub fn mapping_slot_for(&self, label: &str, key: B256) -> Result<B256, LayoutError> {
        let entry = self.entry(label)?;
        let ty = self.type_of(&entry.type_id)?;
        if !ty.is_mapping() {
            return Err(LayoutError::NotAMapping {
                label: label.to_string(),
                encoding: ty.encoding.clone(),
            });
        }
        Ok(slots::mapping_slot(key, entry.slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::optimism_mintable_erc721_factory::STORAGE_LAYOUT_JSON;
    use alloy_primitives::address;

    const PACKED_LAYOUT: &str = r#"{
        "storage": [
            {"astId":1,"contract":"src/T.sol:T","label":"owner","offset":0,"slot":"0","type":"t_address"},
            {"astId":2,"contract":"src/T.sol:T","label":"paused","offset":20,"slot":"0","type":"t_bool"},
            {"astId":3,"contract":"src/T.sol:T","label":"items","offset":0,"slot":"1","type":"t_array(t_uint256)dyn_storage"}
        ],
        "types": {
            "t_address":{"encoding":"inplace","label":"address","numberOfBytes":"20"},
            "t_bool":{"encoding":"inplace","label":"bool","numberOfBytes":"1"},
            "t_uint256":{"encoding":"inplace","label":"uint256","numberOfBytes":"32"},
            "t_array(t_uint256)dyn_storage":{"encoding":"dynamic_array","label":"uint256[]","numberOfBytes":"32","base":"t_uint256"}
        }
    }"#;

    #[test]
    fn test_factory_layout_single_entry() {
        let layout = StorageLayout::from_json(STORAGE_LAYOUT_JSON).unwrap();
        assert_eq!(layout.storage.len(), 1);

        let entry = &layout.storage[0];
        assert_eq!(entry.label, "isOptimismMintableERC721");
        assert_eq!(entry.slot, U256::ZERO);
        assert_eq!(entry.offset, 0);
        assert_eq!(entry.ast_id, 27253);
        assert_eq!(entry.type_id, "t_mapping(t_address,t_bool)");
        assert_eq!(
            entry.contract,
            "contracts/universal/OptimismMintableERC721Factory.sol:OptimismMintableERC721Factory"
        );
    }

    #[test]
    fn test_factory_layout_types() {
        let layout = StorageLayout::from_json(STORAGE_LAYOUT_JSON).unwrap();
        assert_eq!(layout.types.len(), 3);

        let mapping = layout.entry_type("isOptimismMintableERC721").unwrap();
        assert!(mapping.is_mapping());
        assert_eq!(mapping.label, "mapping(address => bool)");
        assert_eq!(mapping.number_of_bytes, 32);
        assert_eq!(mapping.key.as_deref(), Some("t_address"));
        assert_eq!(mapping.value.as_deref(), Some("t_bool"));
        assert_eq!(mapping.base, None);

        let address = layout.type_of("t_address").unwrap();
        assert_eq!(address.encoding, "inplace");
        assert_eq!(address.number_of_bytes, 20);
        assert_eq!(layout.type_of("t_bool").unwrap().number_of_bytes, 1);
    }

    #[test]
    fn test_packed_layout() {
        let layout = StorageLayout::from_json(PACKED_LAYOUT).unwrap();
        let paused = layout.entry("paused").unwrap();
        assert_eq!(paused.slot, U256::ZERO);
        assert_eq!(paused.offset, 20);
        assert_eq!(layout.entry("items").unwrap().slot, U256::from(1));
        assert_eq!(
            layout.entry_type("items").unwrap().base.as_deref(),
            Some("t_uint256")
        );
    }

    #[test]
    fn test_json_roundtrip_preserves_decimal_strings() {
        let layout = StorageLayout::from_json(STORAGE_LAYOUT_JSON).unwrap();
        let json = layout.to_json().unwrap();
        assert!(json.contains(r#""slot":"0""#), "got {json}");
        assert!(json.contains(r#""numberOfBytes":"20""#), "got {json}");
        assert!(!json.contains(r#""base""#), "empty refs should be omitted: {json}");
        assert_eq!(StorageLayout::from_json(&json).unwrap(), layout);
    }

    #[test]
    fn test_large_slot_parses() {
        let json = PACKED_LAYOUT.replace(
            r#""slot":"1""#,
            r#""slot":"24440054405305269366569402256811496959409073762505157381672968839269610695612""#,
        );
        let layout = StorageLayout::from_json(&json).unwrap();
        assert!(layout.entry("items").unwrap().slot > U256::from(u64::MAX));
    }

    #[test]
    fn test_malformed_json() {
        let err = StorageLayout::from_json("{\"storage\":").unwrap_err();
        assert!(matches!(err, LayoutError::Malformed(_)));
    }

    #[test]
    fn test_non_decimal_slot_rejected() {
        let json = PACKED_LAYOUT.replace(r#""slot":"1""#, r#""slot":"one""#);
        assert!(matches!(
            StorageLayout::from_json(&json),
            Err(LayoutError::Malformed(_))
        ));
    }

    #[test]
    fn test_unknown_entry_type_rejected() {
        let json = PACKED_LAYOUT.replace(r#""type":"t_bool""#, r#""type":"t_bool_missing""#);
        match StorageLayout::from_json(&json) {
            Err(LayoutError::UnknownType { type_id, referrer }) => {
                assert_eq!(type_id, "t_bool_missing");
                assert_eq!(referrer, "paused");
            }
            other => panic!("expected UnknownType, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_base_type_rejected() {
        let json = PACKED_LAYOUT.replace(r#""base":"t_uint256""#, r#""base":"t_uint128""#);
        assert!(matches!(
            StorageLayout::from_json(&json),
            Err(LayoutError::UnknownType { .. })
        ));
    }

    #[test]
    fn test_offset_out_of_range_rejected() {
        let json = PACKED_LAYOUT.replace(r#""offset":20"#, r#""offset":32"#);
        assert!(matches!(
            StorageLayout::from_json(&json),
            Err(LayoutError::OffsetOutOfRange { offset: 32, .. })
        ));
    }

    #[test]
    fn test_missing_entry_and_type() {
        let layout = StorageLayout::from_json(STORAGE_LAYOUT_JSON).unwrap();
        assert!(matches!(layout.entry("owner"), Err(LayoutError::EntryNotFound(_))));
        assert!(matches!(layout.type_of("t_uint8"), Err(LayoutError::TypeNotFound(_))));
    }

    #[test]
    fn test_mapping_slot_for() {
        let layout = StorageLayout::from_json(STORAGE_LAYOUT_JSON).unwrap();
        let token = address!("4200000000000000000000000000000000000014");
        let slot = layout
            .mapping_slot_for("isOptimismMintableERC721", slots::encode_address(token))
            .unwrap();
        assert_eq!(slot, slots::mapping_address_slot(token, U256::ZERO));
    }

    #[test]
    fn test_mapping_slot_for_non_mapping() {
        let layout = StorageLayout::from_json(PACKED_LAYOUT).unwrap();
        let err = layout.mapping_slot_for("owner", B256::ZERO).unwrap_err();
        assert!(matches!(err, LayoutError::NotAMapping { ref encoding, .. } if encoding == "inplace"));
    }
}
