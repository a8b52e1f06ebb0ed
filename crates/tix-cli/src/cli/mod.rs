use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tix` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tix",
    version,
    about = "tix - board ticket export and analytics fetch"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no progress)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of .tix/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["tix", "--format", "table", "--verbose", "boards"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Boards));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["tix", "cards", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Cards(ref args) if args.board.is_none()));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["tix", "--format", "xml", "boards"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn export_takes_board_and_output() {
        let cli = Cli::try_parse_from([
            "tix",
            "export",
            "--board",
            "62b9a0c0",
            "-o",
            "out/tickets.csv",
        ])
        .expect("cli should parse");

        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.board.as_deref(), Some("62b9a0c0"));
        assert_eq!(args.output.as_deref(), Some("out/tickets.csv"));
    }

    #[test]
    fn fetch_requires_api_and_version() {
        assert!(Cli::try_parse_from(["tix", "fetch", "weekly_supplier_otif"]).is_err());

        let cli = Cli::try_parse_from([
            "tix",
            "fetch",
            "mybi_others_rf.weekly_supplier_otif",
            "v3",
            "--backoff-secs",
            "60",
        ])
        .expect("cli should parse");

        let Commands::Fetch(args) = cli.command else {
            panic!("expected fetch");
        };
        assert_eq!(args.api_abbr, "mybi_others_rf.weekly_supplier_otif");
        assert_eq!(args.version, "v3");
        assert_eq!(args.backoff_secs, Some(60));
        assert_eq!(args.deadline_secs, None);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["tix", "--config", "/tmp/tix.toml", "boards"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some("/tmp/tix.toml"));
    }
}
