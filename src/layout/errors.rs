use thiserror::Error;

/// Errors raised while loading or querying a storage layout
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Layout JSON could not be deserialized
    #[error("Malformed storage layout: {0}")]
    Malformed(#[from] serde_json::Error),

    /// An entry or type references a type id missing from `types`
    #[error("Storage layout references unknown type {type_id} (from {referrer})")]
    UnknownType {
        /// The missing type id
        type_id: String,
        /// Label or type id holding the reference
        referrer: String,
    },

    /// An entry's byte offset does not fit inside a 32-byte slot
    #[error("Storage entry {label} has offset {offset}, must be below 32")]
    OffsetOutOfRange {
        /// Entry label
        label: String,
        /// Offending offset
        offset: u32,
    },

    /// No entry with the requested label
    #[error("Storage entry {0} not found")]
    EntryNotFound(String),

    /// No type with the requested id
    #[error("Storage type {0} not found")]
    TypeNotFound(String),

    /// A mapping slot was requested for a non-mapping entry
    #[error("Storage entry {label} has {encoding} encoding, expected mapping")]
    NotAMapping {
        /// Entry label
        label: String,
        /// Actual encoding of the entry's type
        encoding: String,
    },
}
