use crate::cache::errors::CacheError;

/// Converts values to and from the bytes stored in the backing store.
pub trait Serializer<V>: Send + Sync {
    fn serialize(&self, value: &V) -> Result<Vec<u8>, CacheError>;

    fn deserialize(&self, data: &[u8]) -> Result<V, CacheError>;

    /// Binary encodings force reads to request raw bytes instead of text.
    fn is_binary(&self) -> bool;
}
