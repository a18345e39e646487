use serde::{Deserialize, Serialize};
use crate::config::structs::cache_config::CacheConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub cache: CacheConfig,
}
