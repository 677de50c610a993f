//! CLI module for Gemini Fallback
//!
//! Provides subcommands for managing the fallback chain:
//! - `menu` / `configure`: interactive chain editor (default)
//! - `list`: print the persisted configuration
//! - `reset`: overwrite the persisted configuration with defaults
//! - `next`: show the fallback decision for a model

pub mod list;
pub mod menu;
pub mod next;
pub mod reset;

use std::path::PathBuf;
use std::sync::Arc;

use clap::error::{ContextKind, ErrorKind};
use clap::{CommandFactory, Parser, Subcommand};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::domain::{FallbackChain, FallbackConfig, ModelCatalog};
use crate::infrastructure::logging;
use crate::infrastructure::services::FallbackService;
use crate::infrastructure::store::JsonFileConfigStore;

/// Gemini Fallback - Configure the model fallback chain used by the proxy
#[derive(Parser)]
#[command(name = "gemini-fallback")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fallback configuration file (overrides store.path)
    #[arg(long, global = true, value_name = "PATH")]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Edit the fallback chain interactively (default)
    #[command(visible_alias = "configure")]
    Menu,

    /// Print the persisted fallback configuration
    List,

    /// Overwrite the persisted configuration with the defaults
    Reset,

    /// Show which model to try after a model fails
    Next(next::NextArgs),
}

/// Everything a subcommand needs once configuration is resolved
pub struct CliContext {
    pub service: FallbackService,
    pub store_path: PathBuf,
    pub catalog: &'static ModelCatalog,
}

impl CliContext {
    pub fn bootstrap(config_path: Option<PathBuf>) -> Self {
        dotenvy::dotenv().ok();

        let config = AppConfig::load().unwrap_or_default();
        init_logging(&config);

        let default_chain = config.default_chain().unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring configured default chain");
            FallbackChain::builtin_default()
        });

        let store_path = config_path.unwrap_or_else(|| config.store.path.clone());
        debug!(path = %store_path.display(), "Using fallback configuration file");

        let store = Arc::new(JsonFileConfigStore::new(&store_path));

        Self {
            service: FallbackService::new(store).with_default_chain(default_chain),
            store_path,
            catalog: ModelCatalog::builtin(),
        }
    }

    /// One line per chain entry: position, display name and raw id
    pub fn format_chain(&self, chain: &FallbackChain) -> Vec<String> {
        chain
            .iter()
            .enumerate()
            .map(|(index, id)| match self.catalog.get(id) {
                Some(model) => format!(
                    "  {}. {} [{}] ({})",
                    index + 1,
                    model.name(),
                    model.tier(),
                    id
                ),
                None => format!("  {}. {}", index + 1, id),
            })
            .collect()
    }

    pub fn print_config(&self, config: &FallbackConfig) {
        println!(
            "Fallback: {}",
            if config.is_enabled() {
                "enabled"
            } else {
                "disabled"
            }
        );
        println!("Chain:");
        for line in self.format_chain(config.chain()) {
            println!("{}", line);
        }
    }
}

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let context = CliContext::bootstrap(cli.config_path);

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => menu::run(&context).await,
        Command::List => list::run(&context).await,
        Command::Reset => reset::run(&context).await,
        Command::Next(args) => next::run(&context, args).await,
    }
}

/// Report a command line that failed to parse.
///
/// Operator mistakes are not fatal, so this never produces an error exit.
pub fn report_parse_error(error: clap::Error) -> anyhow::Result<()> {
    match error.kind() {
        ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument => {
            eprintln!("{}", describe_parse_error(&error));
            if error.kind() == ErrorKind::InvalidSubcommand {
                eprintln!("Valid commands: {}", valid_commands().join(", "));
            }
        }
        _ => {
            let _ = error.print();
        }
    }

    Ok(())
}

fn describe_parse_error(error: &clap::Error) -> String {
    let value = |kind| {
        error
            .get(kind)
            .map(|value| value.to_string())
            .unwrap_or_default()
    };

    match error.kind() {
        ErrorKind::UnknownArgument => {
            format!("Unknown option '{}'.", value(ContextKind::InvalidArg))
        }
        _ => format!("Unknown command '{}'.", value(ContextKind::InvalidSubcommand)),
    }
}

/// Subcommand names with their visible aliases, including `help`
pub fn valid_commands() -> Vec<String> {
    let mut command = Cli::command();
    command.build();

    command
        .get_subcommands()
        .map(|sub| {
            let aliases: Vec<&str> = sub.get_visible_aliases().collect();
            if aliases.is_empty() {
                sub.get_name().to_string()
            } else {
                format!("{} ({})", sub.get_name(), aliases.join(", "))
            }
        })
        .collect()
}

fn init_logging(config: &AppConfig) {
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_menu() {
        let cli = Cli::try_parse_from(["gemini-fallback"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_configure_alias() {
        let cli = Cli::try_parse_from(["gemini-fallback", "configure"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Menu)));
    }

    #[test]
    fn test_global_config_path() {
        let cli =
            Cli::try_parse_from(["gemini-fallback", "list", "--config-path", "/tmp/f.json"])
                .unwrap();

        assert!(matches!(cli.command, Some(Command::List)));
        assert_eq!(cli.config_path, Some(PathBuf::from("/tmp/f.json")));
    }

    #[test]
    fn test_next_requires_model() {
        assert!(Cli::try_parse_from(["gemini-fallback", "next"]).is_err());

        let cli = Cli::try_parse_from(["gemini-fallback", "next", "gemini-2.5-pro"]).unwrap();
        match cli.command {
            Some(Command::Next(args)) => assert_eq!(args.model, "gemini-2.5-pro"),
            _ => panic!("expected next command"),
        }
    }

    #[test]
    fn test_unknown_subcommand_is_reported_without_failing() {
        let error = match Cli::try_parse_from(["gemini-fallback", "frobnicate"]) {
            Err(e) => e,
            Ok(_) => panic!("expected parse error"),
        };

        assert!(matches!(
            error.kind(),
            ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument
        ));
        assert!(report_parse_error(error).is_ok());
    }

    #[test]
    fn test_unknown_option_is_not_called_a_command() {
        let error = match Cli::try_parse_from(["gemini-fallback", "list", "--bogus"]) {
            Err(e) => e,
            Ok(_) => panic!("expected parse error"),
        };

        assert_eq!(error.kind(), ErrorKind::UnknownArgument);
        assert_eq!(describe_parse_error(&error), "Unknown option '--bogus'.");
        assert!(report_parse_error(error).is_ok());
    }

    #[test]
    fn test_valid_commands_listing() {
        let commands = valid_commands();

        assert!(commands.contains(&"menu (configure)".to_string()));
        assert!(commands.contains(&"list".to_string()));
        assert!(commands.contains(&"reset".to_string()));
        assert!(commands.contains(&"next".to_string()));
        assert!(commands.contains(&"help".to_string()));
    }

    #[test]
    fn test_format_chain_marks_unknown_models() {
        let context = CliContext {
            service: FallbackService::new(Arc::new(
                crate::infrastructure::store::InMemoryConfigStore::new(),
            )),
            store_path: PathBuf::from("unused.json"),
            catalog: ModelCatalog::builtin(),
        };
        let chain: FallbackChain = ["gemini-2.5-pro", "local-model"].into_iter().collect();

        assert_eq!(
            context.format_chain(&chain),
            vec![
                "  1. Gemini 2.5 Pro [pro] (gemini-2.5-pro)".to_string(),
                "  2. local-model".to_string(),
            ]
        );
    }
}
