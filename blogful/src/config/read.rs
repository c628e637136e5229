use std::path::Path;
use figment::Figment;
use crate::bin_constants::DATABASE_NAME;
use crate::config::app_config::{AppConfig, DatabaseConfig};
use crate::config::figment::FigmentExt;

pub struct ReadConfig {
    pub app_config: AppConfig,
    pub database_config: DatabaseConfig,
}

pub fn read_app_config(
    config_file: impl AsRef<Path>,
    figment: Figment,
) -> Result<ReadConfig, figment::Error> {
    extract_app_config(&figment.setup_app_config(config_file))
}

pub fn extract_app_config(
    figment: &Figment,
) -> Result<ReadConfig, figment::Error> {
    let app_config: AppConfig = figment.extract()?;
    app_config.check_page_sizes()?;
    Ok(
        ReadConfig {
            app_config,
            database_config: figment
                .focus(&format!("databases.{DATABASE_NAME}"))
                .extract()?,
        }
    )
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use super::*;

    #[test]
    fn reads_file_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "blogful.toml",
                r#"
                    page_size = 5

                    [databases.blog]
                    url = "sqlite://blog.db"
                "#,
            )?;
            jail.set_env("BLOGFUL_MAX_PAGE_SIZE", "20");

            let config = read_app_config("blogful.toml", Figment::new())?;
            assert_eq!(config.app_config.page_size, 5);
            assert_eq!(config.app_config.max_page_size, 20);
            assert_eq!(config.database_config.url, "sqlite://blog.db");
            Ok(())
        });
    }

    #[test]
    fn missing_database_url_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("blogful.toml", "page_size = 5")?;
            assert!(read_app_config("blogful.toml", Figment::new()).is_err());
            Ok(())
        });
    }

    #[test]
    fn page_size_has_to_fit_the_maximum() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "blogful.toml",
                r#"
                    page_size = 200

                    [databases.blog]
                    url = "sqlite://blog.db"
                "#,
            )?;
            assert!(read_app_config("blogful.toml", Figment::new()).is_err());

            jail.set_env("BLOGFUL_PAGE_SIZE", "0");
            assert!(read_app_config("blogful.toml", Figment::new()).is_err());

            jail.set_env("BLOGFUL_PAGE_SIZE", "100");
            let config = read_app_config("blogful.toml", Figment::new())?;
            assert_eq!(config.app_config.page_size, 100);
            assert_eq!(config.app_config.max_page_size, 100);
            Ok(())
        });
    }
}
