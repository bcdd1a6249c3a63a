use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "trivia-api")]
#[command(about = "HTTP backend for a trivia question bank and quiz game")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Override server.port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// JSON file with the categories and questions to start with
    #[arg(long)]
    pub seed_file: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads the TOML file when one is given, then applies command line
    /// overrides on top. The result is validated.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(seed_file) = &self.seed_file {
            config.store.seed_file = Some(seed_file.clone());
        }
        if self.verbose {
            config.logging.level = "debug".to_string();
        }
        if self.json_logs {
            config.logging.format = "json".to_string();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_file() {
        let config = CliConfig::parse_from(["trivia-api"]).resolve().unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
        assert_eq!(config.seed_file(), None);
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nhost = \"0.0.0.0\"\nport = 7000\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "trivia-api",
            "--config",
            path.as_str(),
            "--port",
            "7100",
            "--seed-file",
            "seed.json",
            "--json-logs",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:7100");
        assert_eq!(config.seed_file(), Some("seed.json"));
        assert!(config.json_logs());
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let cli = CliConfig {
            config: Some("/nonexistent/trivia.toml".to_string()),
            ..CliConfig::default()
        };
        assert!(matches!(
            cli.resolve(),
            Err(crate::utils::error::TriviaError::IoError(_))
        ));
    }

    #[test]
    fn test_zero_port_fails_validation() {
        let cli = CliConfig {
            port: Some(0),
            ..CliConfig::default()
        };
        assert!(cli.resolve().is_err());
    }
}
