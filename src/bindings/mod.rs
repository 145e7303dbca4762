//! Compiled contract artifacts embedded in the binary.
//!
//! Each submodule holds the deployed bytecode and solc storage layout of one contract.
//! Nothing here registers itself; [`crate::registry::Registry::bootstrap`] walks [`ALL`].

use crate::artifact::EmbeddedArtifact;

pub mod optimism_mintable_erc721_factory;

/// Every embedded artifact, in registration order.
pub const ALL: &[EmbeddedArtifact] = &[optimism_mintable_erc721_factory::ARTIFACT];
