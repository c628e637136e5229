use async_trait::async_trait;
use blogful::config::read::{extract_app_config, ReadConfig};
use blogful::hasher::{ProductionHasher, ProductionHasherConfig};
use blogful::storage::create_pool;
use blogful::storage::errors::StorageError;
use blogful::storage::schema::apply_schema;
use blogful::user_db::{ProductionUserDb, UserDb};
use log::{error, info};
use rocket::fairing::{Fairing, Info};
use rocket::{Build, Rocket};
use sqlx::SqlitePool;
use crate::routes::WebRocketBuildExt;
use crate::templates::Templates;

pub struct AppSetupFairing;

impl AppSetupFairing {
    pub fn new() -> Self {
        AppSetupFairing
    }
}

macro_rules! ok_or_bail {
    ($rocket:ident, $expr:expr, |$e:ident| $error_logger:expr) => ({
        match $expr {
            std::result::Result::Ok(ok) => ok,
            std::result::Result::Err(e) => {
                let $e = e;
                $error_logger;
                return std::result::Result::Err($rocket);
            },
        }
    });
}

#[async_trait]
impl Fairing for AppSetupFairing {
    fn info(&self) -> Info {
        use rocket::fairing::Kind;
        Info {
            name: "app setup",
            kind: Kind::Ignite | Kind::Shutdown,
        }
    }

    async fn on_ignite(
        &self,
        rocket: Rocket<Build>,
    ) -> rocket::fairing::Result {
        let ReadConfig { app_config, database_config } = ok_or_bail!(
            rocket,
            extract_app_config(rocket.figment()),
            |e| error!("invalid configuration: {e}")
        );

        let hasher_params = ok_or_bail!(
            rocket,
            app_config.hasher_config.make_params(),
            |e| error!("invalid hasher configuration: {e}")
        );

        let pool = ok_or_bail!(
            rocket,
            open_database(&database_config).await,
            |e| error!("database initialization failed: {e}")
        );

        let templates = ok_or_bail!(
            rocket,
            Templates::new(),
            |e| error!("template initialization failed: {e}")
        );

        let user_db: Box<dyn UserDb> = Box::new(
            ProductionUserDb::new(
                ProductionHasher::new(
                    ProductionHasherConfig::new(hasher_params),
                ),
            )
        );

        info!(
            "serving pages of {} entries, at most {}",
            app_config.page_size,
            app_config.max_page_size,
        );
        Ok(
            rocket
                .manage(pool)
                .manage(app_config)
                .manage(user_db)
                .manage(templates)
                .install_blogful_web()
        )
    }

    async fn on_shutdown(&self, rocket: &Rocket<rocket::Orbit>) {
        if let Some(pool) = rocket.state::<SqlitePool>() {
            info!("closing the database");
            pool.close().await;
        }
    }
}

async fn open_database(
    config: &blogful::config::app_config::DatabaseConfig,
) -> Result<SqlitePool, StorageError> {
    let pool = create_pool(config).await?;
    let mut conn = pool.acquire().await?;
    apply_schema(&mut conn).await?;
    Ok(pool)
}
