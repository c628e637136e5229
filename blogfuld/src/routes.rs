mod authentication_guard;
mod catchers;
mod entries;
mod errors;
mod login;
mod views;

use rocket::{catchers, routes, Build, Rocket};

pub trait WebRocketBuildExt {
    fn install_blogful_web(self) -> Self;
}

impl WebRocketBuildExt for Rocket<Build> {
    fn install_blogful_web(self) -> Self {
        self
            .mount(
                "/",
                routes![
                    entries::index,
                    entries::page,
                    entries::add_entry_page,
                    entries::add_entry,
                    entries::view_entry,
                    entries::edit_entry_page,
                    entries::edit_entry,
                    entries::delete_entry,
                    login::login_page,
                    login::login,
                    login::logout,
                ]
            )
            .register(
                "/",
                catchers![
                    catchers::unauthorized,
                    catchers::default_catcher,
                ]
            )
    }
}
