use serde::{Deserialize, Serialize};
use crate::config::hasher_config::HashingCosts;
use crate::lib_constants::{DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AppConfig {
    #[serde(default = "app_config_default_page_size")]
    pub page_size: u64,

    #[serde(default = "app_config_default_max_page_size")]
    pub max_page_size: u64,

    #[serde(default)]
    pub hasher_config: HashingCosts,
}

pub fn app_config_default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

pub fn app_config_default_max_page_size() -> u64 {
    DEFAULT_MAX_PAGE_SIZE
}

impl AppConfig {
    /// The default page size has to be one a client could ask for.
    pub fn check_page_sizes(&self) -> Result<(), figment::Error> {
        if self.page_size == 0 || self.page_size > self.max_page_size {
            return Err(
                format!(
                    "page_size must be between 1 and max_page_size ({}), got {}",
                    self.max_page_size,
                    self.page_size,
                ).into()
            );
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            hasher_config: HashingCosts::default(),
        }
    }
}

/// Lives under `databases.blog`, next to the rocket settings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DatabaseConfig {
    pub url: String,

    #[serde(default = "database_config_default_max_connections")]
    pub max_connections: u32,
}

pub fn database_config_default_max_connections() -> u32 {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_defaults_match() {
        assert_eq!(
            AppConfig::default(),
            serde_json::de::from_str("{}").unwrap(),
        )
    }

    #[test]
    fn database_config_requires_url() {
        assert!(serde_json::de::from_str::<DatabaseConfig>("{}").is_err());
        let config: DatabaseConfig = serde_json::de::from_str(
            r#"{"url": "sqlite://blog.db"}"#,
        ).unwrap();
        assert_eq!(config.max_connections, 8);
    }
}
