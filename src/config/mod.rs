pub mod env;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use settings::SettingsLayer;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "word-ingest")]
#[command(about = "Insert a dictionary word list into a Convex deployment", version)]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(long, global = true, help = "Word list to read [default: /usr/share/dict/words]")]
    pub words_file: Option<String>,

    #[arg(long, global = true, help = "Deployment URL [default: $VITE_CONVEX_URL]")]
    pub convex_url: Option<String>,

    #[arg(long, global = true, help = "Mutation to call per word [default: words:insert]")]
    pub mutation: Option<String>,

    #[arg(long, global = true, help = "Argument name holding the word [default: word]")]
    pub field: Option<String>,

    #[arg(long, global = true, help = "Per-request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, default_value = env::DEFAULT_LOCAL_ENV_FILE)]
    pub env_file: PathBuf,

    #[arg(long, global = true, help = "Optional TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log CPU and memory after each phase")]
    pub monitor: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Insert every line of the word list (default)
    Ingest,
    /// Print the number of computed word pages
    Pages,
    /// Print the words on one page
    Page {
        #[arg(value_name = "INDEX")]
        index: u64,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Ingest)
    }

    pub fn overrides(&self) -> SettingsLayer {
        SettingsLayer {
            words_file: self.words_file.clone(),
            convex_url: self.convex_url.clone(),
            mutation: self.mutation.clone(),
            field: self.field.clone(),
            timeout_seconds: self.timeout_seconds,
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_ingest() {
        let config = CliConfig::parse_from(["word-ingest"]);
        assert_eq!(config.selected_command(), Command::Ingest);
        assert_eq!(config.env_file, PathBuf::from(".env.local"));
        assert!(config.overrides().convex_url.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config = CliConfig::parse_from([
            "word-ingest",
            "page",
            "4",
            "--convex-url",
            "https://happy-otter-123.convex.cloud",
        ]);
        assert_eq!(config.selected_command(), Command::Page { index: 4 });
        assert_eq!(
            config.overrides().convex_url.as_deref(),
            Some("https://happy-otter-123.convex.cloud")
        );
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        <CliConfig as CommandFactory>::command().debug_assert();
    }
}
