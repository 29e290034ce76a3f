use core_config::{AppInfo, FromEnv, app_info, env_is_set, server::ServerConfig};

// Import MongoDB config from the database library
use database::mongodb::{DATABASE_NAME_ENV, DATABASE_URL_ENV, MongoConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when `DATABASE_URL` or `DATABASE_NAME` is missing; the service
    /// still starts and reports the store as unavailable.
    pub mongodb: Option<MongoConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
    pub database_url_set: bool,
    pub database_name_set: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let database_url_set = env_is_set(DATABASE_URL_ENV);
        let database_name_set = env_is_set(DATABASE_NAME_ENV);
        let mongodb = if database_url_set && database_name_set {
            Some(MongoConfig::from_env()?)
        } else {
            None
        };

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            database_url_set,
            database_name_set,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_without_store_variables() {
        temp_env::with_vars(
            [
                (DATABASE_URL_ENV, None::<&str>),
                (DATABASE_NAME_ENV, None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.mongodb.is_none());
                assert!(!config.database_url_set);
                assert!(!config.database_name_set);
                assert_eq!(config.server.port, 8000);
                assert_eq!(config.app.name, "books_api");
            },
        );
    }

    #[test]
    fn test_config_with_only_url_has_no_store() {
        temp_env::with_vars(
            [
                (DATABASE_URL_ENV, Some("mongodb://localhost:27017")),
                (DATABASE_NAME_ENV, None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.mongodb.is_none());
                assert!(config.database_url_set);
            },
        );
    }

    #[test]
    fn test_config_with_store_variables() {
        temp_env::with_vars(
            [
                (DATABASE_URL_ENV, Some("mongodb://localhost:27017")),
                (DATABASE_NAME_ENV, Some("library")),
                ("PORT", Some("9100")),
            ],
            || {
                let config = Config::from_env().unwrap();
                let mongodb = config.mongodb.unwrap();
                assert_eq!(mongodb.database(), "library");
                assert_eq!(config.server.port, 9100);
            },
        );
    }

    #[test]
    fn test_config_rejects_bad_port() {
        temp_env::with_var("PORT", Some("eighty"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
