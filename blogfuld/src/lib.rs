pub mod app_constants;
mod app_setup;
pub mod db;
mod routes;
pub mod templates;

use figment::Figment;
use rocket::{Build, Rocket};
use crate::app_setup::AppSetupFairing;

/// The daemon with everything attached. State and routes are installed
/// at ignition, once the configuration has been read.
pub fn build_rocket(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment).attach(AppSetupFairing::new())
}
