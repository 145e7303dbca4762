//! Colored console output for the `op-bindings` tool.
//!
//! Color scheme: blue+bold headers, cyan values, green success,
//! yellow warnings, dimmed secondary text.

use crate::{
    artifact::DeployedBytecode,
    layout::{LayoutError, StorageLayout, StorageLayoutEntry},
};
use alloy_primitives::B256;
use colored::Colorize;

// ── Helpers ────────────────────────────────────────────────────────

/// Format a code size as a human-readable string.
///
/// - Below 1 KiB → `"512 B"`
/// - Otherwise → `"14.7 KiB"`
pub fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    }
}

/// Shorten long hex for previews: first and last `keep` characters after `0x`.
pub fn abbreviate_hex(hex: &str, keep: usize) -> String {
    let digits = hex.strip_prefix("0x").unwrap_or(hex);
    if digits.len() <= keep * 2 {
        return format!("0x{digits}");
    }
    format!("0x{}…{}", &digits[..keep], &digits[digits.len() - keep..])
}

// ── Registry ───────────────────────────────────────────────────────

/// Print the header for a registry listing.
pub fn print_registry_header(count: usize) {
    println!("{}", "Registered contracts:".blue().bold());
    println!("  {} {}", "Count:".dimmed(), count.to_string().cyan());
}

/// Print one contract line in a registry listing.
pub fn print_contract_summary(name: &str, layout: &StorageLayout, code: &DeployedBytecode) {
    println!(
        "  {} {} {} storage entries, {} code",
        "-".dimmed(),
        name.cyan(),
        layout.storage.len().to_string().cyan(),
        format_size(code.len()).cyan(),
    );
}

// ── Layout ─────────────────────────────────────────────────────────

/// Print a storage layout as a table.
///
/// Fails if an entry's type id is missing from `types`.
pub fn print_layout(name: &str, layout: &StorageLayout) -> Result<(), LayoutError> {
    println!("{} {}", "Storage layout:".blue().bold(), name.cyan());
    if layout.storage.is_empty() {
        println!("  {}", "(no state variables)".dimmed());
        return Ok(());
    }
    for entry in &layout.storage {
        print_layout_entry(layout, entry)?;
    }
    Ok(())
}

fn print_layout_entry(
    layout: &StorageLayout,
    entry: &StorageLayoutEntry,
) -> Result<(), LayoutError> {
    let ty = layout.type_of(&entry.type_id)?;
    println!(
        "  {} {} {} {} {} {}",
        format!("slot {}", entry.slot).dimmed(),
        format!("+{}", entry.offset).dimmed(),
        entry.label.cyan(),
        ty.label,
        format!("({} bytes)", ty.number_of_bytes).dimmed(),
        format!("astId={}", entry.ast_id).dimmed(),
    );
    Ok(())
}

// ── Bytecode ───────────────────────────────────────────────────────

/// Print code size and hash for a deployed bytecode.
pub fn print_code_summary(name: &str, code: &DeployedBytecode, code_hash: B256) {
    println!("{} {}", "Deployed bytecode:".blue().bold(), name.cyan());
    println!("  {} {}", "Size:     ".dimmed(), format_size(code.len()).cyan());
    println!("  {} {}", "Code hash:".dimmed(), format!("{code_hash}").cyan());
    println!("  {} {}", "Preview:  ".dimmed(), abbreviate_hex(code.as_str(), 16).dimmed());
}

// ── Slots ──────────────────────────────────────────────────────────

/// Print a resolved slot.
pub fn print_slot(label: &str, slot: B256, derived: bool) {
    let kind = if derived { "mapping slot" } else { "slot" };
    println!("  {} {} {}: {}", "OK".green().bold(), label.cyan(), kind, format!("{slot}").cyan());
}

// ── Verification ───────────────────────────────────────────────────

/// Print that a contract's artifacts verified.
pub fn print_verified(name: &str, code_size: usize) {
    println!(
        "  {} {} ({})",
        "OK".green().bold(),
        name.cyan(),
        format_size(code_size).dimmed()
    );
}

/// Print a warning for an artifact that failed verification.
pub fn print_verify_failed(name: &str, reason: &str) {
    println!("  {} {}: {}", "FAILED:".yellow().bold(), name.cyan(), reason);
}

/// Print the verification summary.
pub fn print_verify_summary(ok: usize, total: usize) {
    println!();
    if ok == total {
        println!("{}", format!("All {total} artifacts verified").green().bold());
    } else {
        println!(
            "{}",
            format!("{} of {total} artifacts failed", total - ok).yellow().bold()
        );
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kib() {
        assert_eq!(format_size(1024), "1.0 KiB");
        assert_eq!(format_size(24_576), "24.0 KiB");
        let s = format_size(15_054);
        assert!(s.contains("14.7"), "expected 14.7 KiB, got {s}");
    }

    #[test]
    fn test_abbreviate_hex_short() {
        assert_eq!(abbreviate_hex("0x6080", 4), "0x6080");
        assert_eq!(abbreviate_hex("6080", 4), "0x6080");
    }

    #[test]
    fn test_print_layout_rejects_dangling_type() {
        use crate::bindings::optimism_mintable_erc721_factory::STORAGE_LAYOUT_JSON;

        let mut layout = StorageLayout::from_json(STORAGE_LAYOUT_JSON).unwrap();
        assert!(print_layout("Factory", &layout).is_ok());

        // fields are public, so a layout can be edited past validation
        layout.types.clear();
        assert!(matches!(
            print_layout("Factory", &layout),
            Err(LayoutError::TypeNotFound(ref id)) if id == "t_mapping(t_address,t_bool)"
        ));
    }

    #[test]
    fn test_abbreviate_hex_long() {
        assert_eq!(abbreviate_hex("0x608060405234801561001057", 4), "0x6080…1057");
    }
}
