//! Configuration for the taskboard frontend

use core_config::{env_or_default, ConfigError, Environment, FromEnv};
use domain_tasks::DEFAULT_BASE_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    /// Base URL of the remote task store
    pub api_base_url: String,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            environment: Environment::from_env(),
            api_base_url: env_or_default("TASKBOARD_API_URL", DEFAULT_BASE_URL),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_the_hosted_store() {
        temp_env::with_vars(
            [("TASKBOARD_API_URL", None::<&str>), ("APP_ENV", None)],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn test_api_url_override() {
        temp_env::with_var("TASKBOARD_API_URL", Some("http://localhost:3001"), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.api_base_url, "http://localhost:3001");
        });
    }

    #[test]
    fn test_production_environment() {
        temp_env::with_var("APP_ENV", Some("production"), || {
            let config = Config::from_env().unwrap();
            assert!(config.environment.is_production());
        });
    }
}
