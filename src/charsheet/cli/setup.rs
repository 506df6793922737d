use charsheet::format::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "charsheet", version)]
#[command(about = "Fill in, export and re-import a character profile", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Markdown,
    Template,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ExportFormat::Text,
            FormatArg::Markdown => ExportFormat::Markdown,
            FormatArg::Template => ExportFormat::Template,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set a field (an empty value clears it)
    Set {
        /// Field key, e.g. characterName (see `charsheet fields`)
        key: String,

        /// New value
        value: String,
    },

    /// Print a field's value
    Get { key: String },

    /// Show the filled-in profile
    #[command(alias = "view")]
    Show,

    /// List every field with its key and label
    Fields {
        /// Only sections whose title contains this text
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Export the profile
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,

        /// Directory to write into (defaults to the configured export dir)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Merge a filled-in template into the profile
    Import {
        /// File to read
        file: PathBuf,

        /// Read a Markdown export instead of a fillable template
        #[arg(long)]
        markdown: bool,
    },

    /// Erase every field
    Clear {
        /// Confirm without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, export-dir, skip-empty-headings)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set() {
        let cli = Cli::try_parse_from(["charsheet", "set", "age", "30"]).unwrap();
        match cli.command {
            Some(Commands::Set { key, value }) => {
                assert_eq!(key, "age");
                assert_eq!(value, "30");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_export_defaults_to_text() {
        let cli = Cli::try_parse_from(["charsheet", "export"]).unwrap();
        match cli.command {
            Some(Commands::Export {
                format,
                output,
                stdout,
            }) => {
                assert_eq!(format, FormatArg::Text);
                assert!(output.is_none());
                assert!(!stdout);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_export_output_conflicts_with_stdout() {
        let res = Cli::try_parse_from(["charsheet", "export", "--stdout", "-o", "out"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_no_command_and_global_verbose() {
        let cli = Cli::try_parse_from(["charsheet", "-v"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["charsheet", "show", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_format_arg_maps_to_export_format() {
        assert_eq!(ExportFormat::from(FormatArg::Markdown), ExportFormat::Markdown);
        assert_eq!(ExportFormat::from(FormatArg::Template), ExportFormat::Template);
    }
}
