pub mod commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "depfetch", version)]
#[command(about = "Download the version summary if it changed since the last run", long_about = None)]
pub struct Cli {
    /// Path to a config file (default: ~/.config/depfetch/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["depfetch"]).unwrap();
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::try_parse_from(["depfetch", "--config", "deps.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("deps.toml")));
    }

    #[test]
    fn test_rejects_subcommands() {
        assert!(Cli::try_parse_from(["depfetch", "update"]).is_err());
    }
}
