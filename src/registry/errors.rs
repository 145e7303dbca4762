use crate::{artifact::BytecodeError, layout::LayoutError};
use thiserror::Error;

/// Errors raised while building or querying the artifact registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An embedded storage layout failed to parse or validate
    #[error("{name}: invalid storage layout")]
    InvalidLayout {
        /// Contract name
        name: String,
        /// Underlying layout error
        #[source]
        source: LayoutError,
    },

    /// A name was registered twice with different artifacts
    #[error("{name}: already registered with different artifacts")]
    Conflict {
        /// Contract name
        name: String,
    },

    /// No storage layout registered under the name
    #[error("{0}: storage layout not found")]
    StorageLayoutNotFound(String),

    /// No deployed bytecode registered under the name
    #[error("{0}: deployed bytecode not found")]
    DeployedBytecodeNotFound(String),

    /// Registered bytecode could not be decoded
    #[error("{name}: invalid deployed bytecode")]
    InvalidBytecode {
        /// Contract name
        name: String,
        /// Underlying decode error
        #[source]
        source: BytecodeError,
    },
}
