mod cli;

use blogful::config::app_config::AppConfig;
use blogful::config::figment::FigmentExt;
use blogful::config::read::{read_app_config, ReadConfig};
use blogful::error_exit;
use blogful::hasher::{Hasher, ProductionHasher, ProductionHasherConfig};
use blogful::logging::init_tool_logging;
use blogful::storage::connect;
use blogful::storage::errors::StorageError;
use blogful::storage::schema::apply_schema;
use blogful::user_db::{ProductionUserDb, UserDb, UserDbError};
use clap::Parser;
use figment::Figment;
use log::{info, warn};
use rpassword::prompt_password;
use crate::cli::{CliConfig, Command};

#[tokio::main]
async fn main() {
    init_tool_logging();

    let cli_config = CliConfig::parse();
    if !cli_config.config_file.exists() {
        error_exit!(
            "configuration file at {} does not exist",
            cli_config.config_file.display()
        )
    }

    match cli_config.command.clone() {
        Command::Init => init(&cli_config).await,
        Command::AddUser { name, email, no_repeat } =>
            add_user(&cli_config, &name, &email, no_repeat).await,
        Command::Hash { no_repeat } => generate_hash(&cli_config, no_repeat),
    }
}

async fn init(cli_config: &CliConfig) {
    let ReadConfig { database_config, .. } = read_config(cli_config);
    let mut conn = connect(&database_config)
        .await
        .unwrap_or_else(|e| error_exit!("could not open the database: {e}"));
    apply_schema(&mut conn)
        .await
        .unwrap_or_else(|e| error_exit!("could not create the tables: {e}"));
    info!("database at {} is ready", database_config.url);
}

async fn add_user(
    cli_config: &CliConfig,
    name: &str,
    email: &str,
    no_repeat: bool,
) {
    let ReadConfig { app_config, database_config } = read_config(cli_config);
    let user_db = ProductionUserDb::new(make_hasher(&app_config));
    let password = read_password(no_repeat);

    let mut conn = connect(&database_config)
        .await
        .unwrap_or_else(|e| error_exit!("could not open the database: {e}"));
    apply_schema(&mut conn)
        .await
        .unwrap_or_else(|e| error_exit!("could not create the tables: {e}"));
    match user_db.add_user(&mut conn, name, email, &password).await {
        Ok(id) => info!("added user {id} <{email}>"),
        Err(UserDbError::Storage(StorageError::EmailTaken)) =>
            error_exit!("a user with email {email} already exists"),
        Err(e) => error_exit!("could not add the user: {e}"),
    }
}

fn generate_hash(cli_config: &CliConfig, no_repeat: bool) {
    let app_config: AppConfig = Figment::new()
        .setup_app_config(&cli_config.config_file)
        .extract()
        .unwrap_or_else(|e|
            error_exit!("finishing due to a configuration error: {e}")
        );
    let hasher = make_hasher(&app_config);
    let password = read_password(no_repeat);
    let hash = hasher.generate_hash(&password)
        .unwrap_or_else(|e| error_exit!("could not generate hash: {}", e));
    println!("{}", hash);
}

fn read_config(cli_config: &CliConfig) -> ReadConfig {
    read_app_config(&cli_config.config_file, Figment::new())
        .unwrap_or_else(|e| {
            error_exit!("finishing due to a configuration error: {e}");
        })
}

fn make_hasher(app_config: &AppConfig) -> ProductionHasher {
    let params = app_config.hasher_config.make_params()
        .unwrap_or_else(|e| error_exit!("hasher config is invalid: {}", e));
    ProductionHasher::new(ProductionHasherConfig::new(params))
}

fn read_password(no_repeat: bool) -> String {
    let read_value = prompt_password("Enter the password: ")
        .unwrap_or_else(|e| error_exit!("could not read password: {}", e));
    if read_value.is_empty() {
        error_exit!("entered password is empty")
    }

    if !no_repeat {
        let confirmation_value = prompt_password("Repeat the password: ")
            .unwrap_or_else(|e| error_exit!("could not read password: {}", e));
        if confirmation_value != read_value {
            error_exit!("the passwords do not match")
        }
    }

    if read_value.trim() != read_value {
        warn!("the password has leading or trailing whitespace characters");
    }
    read_value
}
