//! Name-keyed registry of storage layouts and deployed bytecode.
//!
//! The registry is built once during bootstrap and is immutable afterwards, so it can be
//! shared by reference across threads without locking. Nothing is registered implicitly:
//! callers either build their own [`Registry`] or call [`init_global`] at startup.

mod errors;

pub use errors::RegistryError;

use crate::{
    artifact::{DeployedBytecode, EmbeddedArtifact},
    bindings,
    layout::StorageLayout,
};
use alloy_primitives::Bytes;
use std::{
    collections::BTreeMap,
    sync::{Arc, OnceLock},
};

/// Builder that accumulates artifacts before freezing them into a [`Registry`]
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    layouts: BTreeMap<String, Arc<StorageLayout>>,
    deployed_bytecodes: BTreeMap<String, DeployedBytecode>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the artifact's layout and add both entries under its name.
    ///
    /// Registering the same name again with identical data is a no-op. Registering it with
    /// a different layout or bytecode is rejected.
    pub fn register(&mut self, artifact: &EmbeddedArtifact) -> Result<&mut Self, RegistryError> {
        let layout = artifact.storage_layout().map_err(|source| RegistryError::InvalidLayout {
            name: artifact.name.to_string(),
            source,
        })?;
        let bytecode = artifact.deployed_bytecode();

        // Both maps are only ever written together, so a half-present name is a conflict too.
        let unchanged =
            match (self.layouts.get(artifact.name), self.deployed_bytecodes.get(artifact.name)) {
                (Some(existing_layout), Some(existing_code)) => {
                    Some(**existing_layout == layout && *existing_code == bytecode)
                }
                (None, None) => None,
                _ => Some(false),
            };

        match unchanged {
            Some(true) => {
                tracing::debug!(
                    target: "op_bindings::registry",
                    name = artifact.name,
                    "Artifact already registered, skipping"
                );
            }
            Some(false) => {
                return Err(RegistryError::Conflict { name: artifact.name.to_string() });
            }
            None => {
                tracing::debug!(
                    target: "op_bindings::registry",
                    name = artifact.name,
                    entries = layout.storage.len(),
                    code_size = bytecode.len(),
                    "Registered artifact"
                );
                self.layouts.insert(artifact.name.to_string(), Arc::new(layout));
                self.deployed_bytecodes.insert(artifact.name.to_string(), bytecode);
            }
        }

        Ok(self)
    }

    /// Register every artifact in `artifacts`, stopping at the first failure.
    pub fn register_all<'a>(
        &mut self,
        artifacts: impl IntoIterator<Item = &'a EmbeddedArtifact>,
    ) -> Result<&mut Self, RegistryError> {
        for artifact in artifacts {
            self.register(artifact)?;
        }
        Ok(self)
    }

    /// Freeze into an immutable registry
    pub fn build(self) -> Registry {
        Registry { layouts: self.layouts, deployed_bytecodes: self.deployed_bytecodes }
    }
}

/// Immutable lookup tables from contract name to storage layout and deployed bytecode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    layouts: BTreeMap<String, Arc<StorageLayout>>,
    deployed_bytecodes: BTreeMap<String, DeployedBytecode>,
}

impl Registry {
    /// Start an empty builder
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build a registry holding every embedded binding.
    ///
    /// Fails if any embedded layout is malformed; callers should treat that as fatal.
    pub fn bootstrap() -> Result<Self, RegistryError> {
        let mut builder = RegistryBuilder::new();
        builder.register_all(bindings::ALL)?;
        let registry = builder.build();
        tracing::info!(
            target: "op_bindings::registry",
            contracts = registry.len(),
            "Artifact registry initialized"
        );
        Ok(registry)
    }

    /// Storage layout registered under `name`
    pub fn storage_layout(&self, name: &str) -> Option<&Arc<StorageLayout>> {
        self.layouts.get(name)
    }

    /// Deployed bytecode registered under `name`, exactly as embedded
    pub fn deployed_bytecode(&self, name: &str) -> Option<&DeployedBytecode> {
        self.deployed_bytecodes.get(name)
    }

    /// Storage layout registered under `name`, or a not-found error.
    pub fn get_storage_layout(&self, name: &str) -> Result<Arc<StorageLayout>, RegistryError> {
        self.storage_layout(name)
            .cloned()
            .ok_or_else(|| RegistryError::StorageLayoutNotFound(name.to_string()))
    }

    /// Decoded deployed bytecode registered under `name`.
    pub fn get_deployed_bytecode(&self, name: &str) -> Result<Bytes, RegistryError> {
        let code = self
            .deployed_bytecode(name)
            .ok_or_else(|| RegistryError::DeployedBytecodeNotFound(name.to_string()))?;
        code.decode()
            .map_err(|source| RegistryError::InvalidBytecode { name: name.to_string(), source })
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.layouts.contains_key(name)
    }

    /// Registered contract names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.layouts.keys().map(String::as_str)
    }

    /// Number of registered contracts
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

/// Process-wide registry (initialized explicitly)
static GLOBAL_REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Bootstrap the process-wide registry.
///
/// Should be called once at startup. Later calls return the already initialized instance.
pub fn init_global() -> Result<&'static Registry, RegistryError> {
    if let Some(registry) = GLOBAL_REGISTRY.get() {
        return Ok(registry);
    }
    let registry = Registry::bootstrap()?;
    Ok(GLOBAL_REGISTRY.get_or_init(|| registry))
}

/// The process-wide registry, if [`init_global`] has run.
pub fn global() -> Option<&'static Registry> {
    GLOBAL_REGISTRY.get()
}
