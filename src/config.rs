use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host_address: String,
    pub host_port: u16,
    pub data_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host_address = env::var("HOST_ADDRESS")
            .unwrap_or_else(|_| "127.0.0.1".to_string());

        let host_port = env::var("HOST_PORT")
            .unwrap_or_else(|_| "80".to_string())
            .parse::<u16>()
            .context("HOST_PORT must be a valid port number (0-65535)")?;

        let data_file = env::var("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/proverbs.json"));

        Ok(Config {
            host_address,
            host_port,
            data_file,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Data file: {}", self.data_file.display());
        tracing::info!("  Service listening on: {}:{}", self.host_address, self.host_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // These tests mutate process-wide environment variables and must not
    // run concurrently with each other.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env_vars() {
        unsafe {
            env::remove_var("HOST_ADDRESS");
            env::remove_var("HOST_PORT");
            env::remove_var("DATA_FILE");
        }
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("HOST_ADDRESS", "0.0.0.0");
            env::set_var("HOST_PORT", "8080");
            env::set_var("DATA_FILE", "/tmp/proverbs-test.json");
        }

        let config = Config::from_env().unwrap();
        clear_env_vars();

        assert_eq!(config.host_address, "0.0.0.0");
        assert_eq!(config.host_port, 8080);
        assert_eq!(config.data_file, PathBuf::from("/tmp/proverbs-test.json"));
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.host_address, "127.0.0.1");
        assert_eq!(config.host_port, 80);
        assert_eq!(config.data_file, PathBuf::from("data/proverbs.json"));
    }

    #[test]
    fn test_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("HOST_PORT", "not-a-number");
        }

        let result = Config::from_env();
        clear_env_vars();

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("HOST_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("HOST_PORT", "99999");
        }

        let result = Config::from_env();
        clear_env_vars();

        assert!(result.is_err());
    }
}
