use std::fs::File;
use std::io::Write;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::configuration::Configuration;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            cache: CacheConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    /// Loads `path`, optionally writing a default file when it is missing or
    /// unreadable. The cache section is normalized before being returned.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        match Configuration::load_file(path) {
            Ok(mut config) => {
                config.cache = config.cache.normalized();
                Ok(config)
            }
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);
                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(error);
                }
                eprintln!("Creating config file..");
                let config = Configuration::init();
                let config_toml = toml::to_string(&config).map_err(ConfigurationError::SerializeError)?;
                Configuration::save_file(path, config_toml)?;
                Ok(config)
            }
        }
    }
}
