use std::marker::PhantomData;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::cache::errors::CacheError;
use crate::cache::structs::message_pack_serializer::MessagePackSerializer;
use crate::cache::traits::serializer::Serializer;

impl<V> MessagePackSerializer<V> {
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<V> Default for MessagePackSerializer<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize + DeserializeOwned> Serializer<V> for MessagePackSerializer<V> {
    fn serialize(&self, value: &V) -> Result<Vec<u8>, CacheError> {
        rmp_serde::to_vec(value)
            .map_err(|e| CacheError::SerializationError(e.to_string()))
    }

    fn deserialize(&self, data: &[u8]) -> Result<V, CacheError> {
        rmp_serde::from_slice(data)
            .map_err(|e| CacheError::SerializationError(e.to_string()))
    }

    fn is_binary(&self) -> bool {
        true
    }
}
