mod cli;

use clap::{crate_name, Parser};
use blogful::config::figment::FigmentExt;
use blogful::error_exit;
use blogful::logging::init_daemon_logging;
use blogfuld::build_rocket;
use figment::Figment;
use log::info;
use crate::cli::CliConfig;

fn main() {
    let cli_config = CliConfig::parse();
    init_daemon_logging(cli_config.syslog.into());

    info!("{} starting up", crate_name!());

    if !cli_config.config_file.exists() {
        error_exit!(
            "configuration file at {} does not exist",
            cli_config.config_file.display()
        )
    }
    let figment = Figment::from(rocket::Config::default())
        .setup_app_config(&cli_config.config_file);

    let result = rocket::execute(build_rocket(figment).launch());
    if let Err(e) = result {
        error_exit!("failed to launch rocket: {}", e);
    }
}
