use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fivegc")]
#[command(about = "5G Core SBI toolkit: validate 3GPP payloads and host NF services")]
#[command(version)]
pub struct Cli {
    /// TOML 配置檔路徑
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Host the NLMF services with a placeholder implementation.
    Serve {
        /// Overrides `server.address`.
        #[arg(long)]
        address: Option<String>,

        /// Overrides `server.api_root`.
        #[arg(long)]
        api_root: Option<String>,

        /// Skip request validation before dispatch.
        #[arg(long)]
        no_validate: bool,
    },

    /// Decode and validate a JSON document as the named model.
    Validate {
        /// Model name, e.g. `InputData`; see the `models` command.
        #[arg(long, short)]
        model: String,

        /// JSON file to check; `-` reads standard input.
        file: PathBuf,
    },

    /// List the model names accepted by `validate`.
    Models,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate_command() {
        let cli = Cli::parse_from(["fivegc", "-v", "validate", "--model", "InputData", "input.json"]);
        assert!(cli.verbose);
        match cli.command {
            Command::Validate { model, file } => {
                assert_eq!(model, "InputData");
                assert_eq!(file, PathBuf::from("input.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::parse_from([
            "fivegc",
            "serve",
            "--address",
            "0.0.0.0:8080",
            "--no-validate",
            "--config",
            "sdk.toml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("sdk.toml")));
        assert!(matches!(
            cli.command,
            Command::Serve { address: Some(_), api_root: None, no_validate: true }
        ));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
