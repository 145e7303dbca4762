//! Subcommand handlers for the `op-bindings` binary.

use crate::{
    cli::Command,
    layout::slots,
    output,
    registry::{Registry, RegistryError},
};
use alloy_primitives::{Address, B256};
use eyre::{bail, eyre, WrapErr};

/// Run one subcommand against an initialized registry.
pub fn run(registry: &Registry, command: &Command) -> eyre::Result<()> {
    match command {
        Command::List => list(registry),
        Command::Layout { name, json } => layout(registry, name, *json),
        Command::Bytecode { name, hash } => bytecode(registry, name, *hash),
        Command::Slot { name, label, key } => {
            let (slot, derived) = resolve_slot(registry, name, label, key.as_deref())?;
            output::print_slot(label, slot, derived);
            Ok(())
        }
        Command::Verify => verify(registry),
    }
}

fn list(registry: &Registry) -> eyre::Result<()> {
    output::print_registry_header(registry.len());
    for name in registry.names() {
        let layout = registry.get_storage_layout(name)?;
        let code = registry
            .deployed_bytecode(name)
            .ok_or_else(|| RegistryError::DeployedBytecodeNotFound(name.to_string()))?;
        output::print_contract_summary(name, &layout, code);
    }
    Ok(())
}

fn layout(registry: &Registry, name: &str, json: bool) -> eyre::Result<()> {
    let layout = registry.get_storage_layout(name)?;
    if json {
        println!("{}", layout.to_json()?);
    } else {
        output::print_layout(name, &layout)?;
    }
    Ok(())
}

fn bytecode(registry: &Registry, name: &str, hash: bool) -> eyre::Result<()> {
    let code = registry
        .deployed_bytecode(name)
        .ok_or_else(|| RegistryError::DeployedBytecodeNotFound(name.to_string()))?;
    if hash {
        let code_hash = code
            .code_hash()
            .wrap_err_with(|| format!("{name}: invalid deployed bytecode"))?;
        output::print_code_summary(name, code, code_hash);
    } else {
        println!("{code}");
    }
    Ok(())
}

fn verify(registry: &Registry) -> eyre::Result<()> {
    let mut ok = 0;
    for name in registry.names() {
        match registry.get_deployed_bytecode(name) {
            Ok(code) => {
                tracing::debug!(
                    target: "op_bindings::verify",
                    name,
                    code_size = code.len(),
                    "Bytecode decoded"
                );
                output::print_verified(name, code.len());
                ok += 1;
            }
            Err(err) => {
                tracing::warn!(
                    target: "op_bindings::verify",
                    name,
                    error = %err,
                    "Bytecode failed to decode"
                );
                output::print_verify_failed(name, &format!("{err:#}"));
            }
        }
    }
    output::print_verify_summary(ok, registry.len());
    if ok != registry.len() {
        bail!("{} artifacts failed verification", registry.len() - ok);
    }
    Ok(())
}

/// Resolve the slot of `label` in contract `name`.
///
/// Without a key the declared slot is returned. With a key the entry must be a mapping and
/// the derived element slot is returned; the boolean reports which case applied.
pub fn resolve_slot(
    registry: &Registry,
    name: &str,
    label: &str,
    key: Option<&str>,
) -> eyre::Result<(B256, bool)> {
    let layout = registry.get_storage_layout(name)?;
    match key {
        Some(key) => {
            let word = parse_mapping_key(key)?;
            Ok((layout.mapping_slot_for(label, word)?, true))
        }
        None => {
            let entry = layout.entry(label)?;
            Ok((B256::from(entry.slot.to_be_bytes()), false))
        }
    }
}

/// Parse a mapping key given as a hex address (left-padded) or a full 32-byte word.
pub fn parse_mapping_key(key: &str) -> eyre::Result<B256> {
    let digits = key.strip_prefix("0x").unwrap_or(key);
    match digits.len() {
        40 => {
            let addr = key
                .parse::<Address>()
                .map_err(|e| eyre!("invalid address key {key}: {e}"))?;
            Ok(slots::encode_address(addr))
        }
        64 => key.parse::<B256>().map_err(|e| eyre!("invalid 32-byte key {key}: {e}")),
        len => bail!("mapping key must be 20 or 32 bytes of hex, got {len} hex digits"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::optimism_mintable_erc721_factory::NAME;
    use alloy_primitives::{address, U256};

    const LABEL: &str = "isOptimismMintableERC721";

    #[test]
    fn test_parse_mapping_key_address() {
        let word = parse_mapping_key("0x4200000000000000000000000000000000000014").unwrap();
        assert_eq!(
            word,
            slots::encode_address(address!("4200000000000000000000000000000000000014"))
        );
        // prefix is optional
        assert_eq!(parse_mapping_key("4200000000000000000000000000000000000014").unwrap(), word);
    }

    #[test]
    fn test_parse_mapping_key_word() {
        let word = parse_mapping_key(
            "0x000000000000000000000000000000000000000000000000000000000000002a",
        )
        .unwrap();
        assert_eq!(word, B256::with_last_byte(42));
    }

    #[test]
    fn test_parse_mapping_key_bad_length() {
        assert!(parse_mapping_key("0x1234").is_err());
        assert!(parse_mapping_key("0xzz00000000000000000000000000000000000014").is_err());
    }

    #[test]
    fn test_resolve_declared_slot() {
        let registry = Registry::bootstrap().unwrap();
        let (slot, derived) = resolve_slot(&registry, NAME, LABEL, None).unwrap();
        assert_eq!(slot, B256::ZERO);
        assert!(!derived);
    }

    #[test]
    fn test_resolve_mapping_slot() {
        let registry = Registry::bootstrap().unwrap();
        let token = address!("4200000000000000000000000000000000000014");
        let (slot, derived) =
            resolve_slot(&registry, NAME, LABEL, Some(&token.to_string())).unwrap();
        assert!(derived);
        assert_eq!(slot, slots::mapping_address_slot(token, U256::ZERO));
    }

    #[test]
    fn test_resolve_unknown_contract_or_label() {
        let registry = Registry::bootstrap().unwrap();
        let err = resolve_slot(&registry, "Missing", LABEL, None).unwrap_err();
        assert!(err.to_string().contains("Missing: storage layout not found"));
        assert!(resolve_slot(&registry, NAME, "owner", None).is_err());
    }

    #[test]
    fn test_run_commands_succeed_for_registered_contract() {
        let registry = Registry::bootstrap().unwrap();
        run(&registry, &Command::List).unwrap();
        run(&registry, &Command::Layout { name: NAME.into(), json: true }).unwrap();
        run(&registry, &Command::Bytecode { name: NAME.into(), hash: true }).unwrap();
        run(&registry, &Command::Verify).unwrap();
    }

    #[test]
    fn test_run_unknown_contract_fails() {
        let registry = Registry::bootstrap().unwrap();
        let missing = "Missing".to_string();
        assert!(run(&registry, &Command::Bytecode { name: missing.clone(), hash: false }).is_err());
        assert!(run(&registry, &Command::Layout { name: missing, json: false }).is_err());
    }
}
