pub const DEFAULT_CONFIG_FILE: &str = "/etc/blogful/blogful.toml";
pub const APP_CONFIG_ENV_PREFIX: &str = "BLOGFUL_";

// rocket-style `databases.<name>` key the connection string lives under
pub const DATABASE_NAME: &str = "blog";
