use std::marker::PhantomData;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::cache::errors::CacheError;
use crate::cache::structs::json_serializer::JsonSerializer;
use crate::cache::traits::serializer::Serializer;

impl<V> JsonSerializer<V> {
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<V> Default for JsonSerializer<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize + DeserializeOwned> Serializer<V> for JsonSerializer<V> {
    fn serialize(&self, value: &V) -> Result<Vec<u8>, CacheError> {
        serde_json::to_vec(value)
            .map_err(|e| CacheError::SerializationError(e.to_string()))
    }

    fn deserialize(&self, data: &[u8]) -> Result<V, CacheError> {
        serde_json::from_slice(data)
            .map_err(|e| CacheError::SerializationError(e.to_string()))
    }

    fn is_binary(&self) -> bool {
        false
    }
}
