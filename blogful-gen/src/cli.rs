use std::path::PathBuf;
use clap::{Parser, Subcommand};
use blogful::bin_constants::DEFAULT_CONFIG_FILE;

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
pub enum Command {
    /// Create the database tables if they don't exist yet
    Init,

    /// Add a user, prompting for the password
    AddUser {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, short = 'y', default_value_t = false)]
        no_repeat: bool,
    },

    /// Print a password hash without touching the database
    Hash {
        #[arg(long, short = 'y', default_value_t = false)]
        no_repeat: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use super::*;

    #[test]
    fn verify_cli() {
        CliConfig::command().debug_assert();
    }

    #[test]
    fn add_user() {
        let config = CliConfig::parse_from([
            "blogful-gen",
            "--config-file=blog.toml",
            "add-user",
            "--name=Alice",
            "--email=alice@example.com",
            "-y",
        ]);
        assert_eq!(config.config_file, PathBuf::from("blog.toml"));
        assert_eq!(
            config.command,
            Command::AddUser {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                no_repeat: true,
            },
        );
    }

    #[test]
    fn add_user_requires_email() {
        assert!(
            CliConfig::try_parse_from(["blogful-gen", "add-user", "--name=Alice"])
                .is_err()
        );
    }
}
