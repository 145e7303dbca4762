use clap::{Parser, Subcommand};

/// CLI arguments for the artifact registry tool
#[derive(Parser, Debug)]
#[command(name = "op-bindings", about = "Inspect embedded contract artifacts")]
pub struct Cli {
    /// Emit logs as newline-delimited JSON instead of human-readable text.
    ///
    /// Logs go to stderr; the filter is taken from `RUST_LOG` (default `info`).
    #[arg(
        long,
        global = true,
        env = "OP_BINDINGS_LOG_JSON",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub log_json: bool,

    /// Disable colored console output.
    ///
    /// Any non-empty `NO_COLOR` value other than a falsey one (`0`, `false`, `no`, `off`)
    /// enables it.
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Registry commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every registered contract
    List,

    /// Show a contract's storage layout
    Layout {
        /// Contract name (exact match)
        name: String,

        /// Print the layout as solc JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print a contract's deployed bytecode
    Bytecode {
        /// Contract name (exact match)
        name: String,

        /// Print code size and keccak256 code hash instead of the hex
        #[arg(long)]
        hash: bool,
    },

    /// Resolve the storage slot of a state variable
    Slot {
        /// Contract name (exact match)
        name: String,

        /// State variable label
        label: String,

        /// Mapping key: a 20-byte address or a 32-byte word, hex.
        /// Required for mappings; the derived `keccak256(key ++ slot)` is printed.
        #[arg(long)]
        key: Option<String>,
    },

    /// Bootstrap the registry and decode every embedded bytecode
    Verify,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout_json() {
        let cli = Cli::try_parse_from([
            "op-bindings",
            "layout",
            "OptimismMintableERC721Factory",
            "--json",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Layout { name: "OptimismMintableERC721Factory".into(), json: true }
        );
        assert!(!cli.log_json);
    }

    #[test]
    fn test_parse_slot_with_key() {
        let cli = Cli::try_parse_from([
            "op-bindings",
            "slot",
            "OptimismMintableERC721Factory",
            "isOptimismMintableERC721",
            "--key",
            "0x4200000000000000000000000000000000000014",
        ])
        .unwrap();
        match cli.command {
            Command::Slot { label, key, .. } => {
                assert_eq!(label, "isOptimismMintableERC721");
                assert_eq!(key.as_deref(), Some("0x4200000000000000000000000000000000000014"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["op-bindings", "verify", "--log-json"]).unwrap();
        assert!(cli.log_json);
        assert_eq!(cli.command, Command::Verify);
    }

    #[test]
    fn test_no_color_env_accepts_conventional_values() {
        std::env::set_var("NO_COLOR", "1");
        let enabled = Cli::try_parse_from(["op-bindings", "list"]);
        std::env::set_var("NO_COLOR", "0");
        let disabled = Cli::try_parse_from(["op-bindings", "list"]);
        std::env::remove_var("NO_COLOR");

        assert!(enabled.unwrap().no_color);
        assert!(!disabled.unwrap().no_color);
    }

    #[test]
    fn test_no_color_flag_without_env() {
        let cli = Cli::try_parse_from(["op-bindings", "--no-color", "list"]).unwrap();
        assert!(cli.no_color);
    }

    #[test]
    fn test_missing_subcommand_rejected() {
        assert!(Cli::try_parse_from(["op-bindings"]).is_err());
    }
}
